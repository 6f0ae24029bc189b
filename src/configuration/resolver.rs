use crate::{
    common::{API_VERSION, EXPRESS_CHECKOUT_CMD},
    configuration::{AuthMode, Configuration},
    environment::{Endpoints, Environment},
    Error,
};
use url::Url;
use urlencoding::encode;

impl Configuration {
    /// Sets several options at once.
    ///
    /// The callback is invoked exactly once and its return value is passed through.
    /// Changes are applied as they are made: if the callback panics halfway, earlier
    /// writes are kept. Use [`try_configure`](Self::try_configure) for all-or-nothing updates.
    ///
    /// ```rust
    /// # use paypal_recurring::Configuration;
    /// let mut config = Configuration::default();
    /// config.configure(|config| {
    ///     config.sandbox = true;
    ///     config.username = Some("seller_api1.example.com".to_string());
    /// });
    /// assert!(config.is_sandbox());
    /// ```
    pub fn configure<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Configuration) -> R,
    {
        let res = f(self);
        tracing::debug!(
            environment = %self.environment(),
            auth_mode = %self.auth_mode(),
            "Configuration updated"
        );
        res
    }

    /// Like [`configure`](Self::configure), but rolls back every change made by the
    /// callback when it returns an error.
    pub fn try_configure<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut Configuration) -> Result<(), E>,
    {
        let mut staged = self.clone();
        match f(&mut staged) {
            Ok(()) => {
                *self = staged;
                tracing::debug!(
                    environment = %self.environment(),
                    auth_mode = %self.auth_mode(),
                    "Configuration updated"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Configuration update failed, changes discarded");
                Err(e)
            }
        }
    }

    /// Returns `true` if requests should be sent to the sandbox.
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Current environment mode.
    pub fn environment(&self) -> Environment {
        if self.is_sandbox() {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Endpoints of the current environment.
    pub fn endpoints(&self) -> Result<&Endpoints, Error> {
        self.endpoint_table.get(self.environment())
    }

    /// Authentication scheme requests are made with.
    ///
    /// An explicit `auth_mode` field wins. Otherwise a non-empty
    /// [`signature`](Self::signature) selects [`AuthMode::Signature`], and its absence
    /// selects [`AuthMode::Certificate`].
    pub fn auth_mode(&self) -> AuthMode {
        if let Some(auth_mode) = self.auth_mode {
            return auth_mode;
        }

        match &self.signature {
            Some(signature) if !signature.is_empty() => AuthMode::Signature,
            _ => AuthMode::Certificate,
        }
    }

    /// NVP API endpoint for the current environment and authentication scheme.
    pub fn api_endpoint(&self) -> Result<&Url, Error> {
        let endpoints = self.endpoints()?;
        let endpoint = match self.auth_mode() {
            AuthMode::Signature => &endpoints.api_sig,
            AuthMode::Certificate => &endpoints.api_cert,
        };

        tracing::debug!(
            environment = %self.environment(),
            auth_mode = %self.auth_mode(),
            %endpoint,
            "Resolved API endpoint"
        );

        Ok(endpoint)
    }

    /// NVP API version. Never derived from configuration.
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Website endpoint for the current environment, used to build buyer-facing redirects.
    pub fn site_endpoint(&self) -> Result<&Url, Error> {
        Ok(&self.endpoints()?.site)
    }

    /// Builds the link buyers are redirected to in order to approve an Express Checkout.
    ///
    /// `token` is the token returned by `SetExpressCheckout`.
    ///
    /// ```rust
    /// # use paypal_recurring::Configuration;
    /// let config = Configuration::default();
    /// assert_eq!(
    ///     config.checkout_url("EC-123").unwrap().as_str(),
    ///     "https://www.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-123"
    /// );
    /// ```
    pub fn checkout_url(&self, token: &str) -> Result<Url, Error> {
        let mut url = self.site_endpoint()?.clone();
        url.set_query(Some(&format!(
            "cmd={}&token={}",
            EXPRESS_CHECKOUT_CMD,
            encode(token)
        )));

        Ok(url)
    }
}
