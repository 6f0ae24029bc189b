use paypal_recurring::{Configuration, EndpointTable, Endpoints, Environment};
use url::Url;

pub static MOCK_USERNAME: &str = "seller_api1.example.com";
pub static MOCK_PASSWORD: &str = "mock-password";
pub static MOCK_SIGNATURE: &str = "mock-signature";

/// Seller credentials using 3-token signature authentication.
pub fn signature_credentials(sandbox: bool) -> Configuration {
    let mut config = Configuration::default();
    config.configure(|config| {
        config.sandbox = sandbox;
        config.username = Some(MOCK_USERNAME.to_string());
        config.password = Some(MOCK_PASSWORD.into());
        config.signature = Some(MOCK_SIGNATURE.into());
    });
    config
}

/// Seller credentials using client certificate authentication.
pub fn certificate_credentials(sandbox: bool) -> Configuration {
    let mut config = Configuration::default();
    config.configure(|config| {
        config.sandbox = sandbox;
        config.username = Some(MOCK_USERNAME.to_string());
        config.password = Some(MOCK_PASSWORD.into());
        config.ssl_cert = Some("-----BEGIN CERTIFICATE-----".into());
    });
    config
}

/// Endpoint table where both environments point to distinct local mock URLs.
pub fn local_mock_table() -> (EndpointTable, Url, Url) {
    let sandbox = Url::parse("http://127.0.0.1:9001/nvp").unwrap();
    let production = Url::parse("http://127.0.0.1:9002/nvp").unwrap();

    let table = EndpointTable::empty()
        .with(Environment::Sandbox, Endpoints::from_single_url(&sandbox))
        .with(Environment::Production, Endpoints::from_single_url(&production));

    (table, sandbox, production)
}
