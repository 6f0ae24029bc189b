// Default endpoints
pub static SANDBOX_API_CERT_URL: &str = "https://api.sandbox.paypal.com/nvp";
pub static SANDBOX_API_SIG_URL: &str = "https://api-3t.sandbox.paypal.com/nvp";
pub static SANDBOX_SITE_URL: &str = "https://www.sandbox.paypal.com/cgi-bin/webscr";
pub static PRODUCTION_API_CERT_URL: &str = "https://api.paypal.com/nvp";
pub static PRODUCTION_API_SIG_URL: &str = "https://api-3t.paypal.com/nvp";
pub static PRODUCTION_SITE_URL: &str = "https://www.paypal.com/cgi-bin/webscr";

/// NVP API version every request is issued against.
pub static API_VERSION: &str = "72.0";

// Prefix for configuration taken from the process environment, e.g. `PAYPAL_SIGNATURE`
pub static ENV_PREFIX: &str = "PAYPAL";
pub static SANDBOX_ENV_VAR: &str = "PAYPAL_SANDBOX";

// Express Checkout redirect command
pub static EXPRESS_CHECKOUT_CMD: &str = "_express-checkout";
