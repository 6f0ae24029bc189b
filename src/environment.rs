//! PayPal environments and the endpoints each one exposes.

use crate::{
    common::{
        PRODUCTION_API_CERT_URL, PRODUCTION_API_SIG_URL, PRODUCTION_SITE_URL,
        SANDBOX_API_CERT_URL, SANDBOX_API_SIG_URL, SANDBOX_SITE_URL,
    },
    Error,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};
use url::Url;

/// PayPal environment requests are sent to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Isolated test environment. No real money is moved.
    Sandbox,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of URLs exposed by a single environment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Endpoints {
    /// NVP API endpoint for certificate-based authentication.
    pub api_cert: Url,
    /// NVP API endpoint for 3-token signature authentication.
    pub api_sig: Url,
    /// Website endpoint buyers are redirected to.
    pub site: Url,
}

impl Endpoints {
    /// Endpoints of the PayPal sandbox.
    pub fn sandbox() -> Self {
        Self {
            api_cert: Url::parse(SANDBOX_API_CERT_URL).unwrap(),
            api_sig: Url::parse(SANDBOX_API_SIG_URL).unwrap(),
            site: Url::parse(SANDBOX_SITE_URL).unwrap(),
        }
    }

    /// Endpoints of the PayPal live environment.
    pub fn production() -> Self {
        Self {
            api_cert: Url::parse(PRODUCTION_API_CERT_URL).unwrap(),
            api_sig: Url::parse(PRODUCTION_API_SIG_URL).unwrap(),
            site: Url::parse(PRODUCTION_SITE_URL).unwrap(),
        }
    }

    /// Parses a custom set of endpoints.
    pub fn parse(api_cert: &str, api_sig: &str, site: &str) -> Result<Self, Error> {
        Ok(Self {
            api_cert: Url::parse(api_cert)?,
            api_sig: Url::parse(api_sig)?,
            site: Url::parse(site)?,
        })
    }

    /// Uses the same URL for every endpoint.
    ///
    /// Useful to point the resolver at a local mock server.
    pub fn from_single_url(url: &Url) -> Self {
        Self {
            api_cert: url.clone(),
            api_sig: url.clone(),
            site: url.clone(),
        }
    }
}

/// Mapping from each [`Environment`] to its [`Endpoints`].
///
/// The [`Default`] table is the built-in one and contains both environments.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EndpointTable {
    entries: HashMap<Environment, Endpoints>,
}

impl EndpointTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in PayPal endpoint table.
    pub fn builtin() -> Self {
        Self::empty()
            .with(Environment::Sandbox, Endpoints::sandbox())
            .with(Environment::Production, Endpoints::production())
    }

    /// Sets the endpoints for `environment`, replacing any existing entry.
    pub fn with(mut self, environment: Environment, endpoints: Endpoints) -> Self {
        self.insert(environment, endpoints);
        self
    }

    /// Sets the endpoints for `environment`, returning the previous entry if any.
    pub fn insert(&mut self, environment: Environment, endpoints: Endpoints) -> Option<Endpoints> {
        self.entries.insert(environment, endpoints)
    }

    /// Removes the entry for `environment`.
    pub fn remove(&mut self, environment: Environment) -> Option<Endpoints> {
        self.entries.remove(&environment)
    }

    /// Looks up the endpoints for `environment`.
    ///
    /// Fails with [`Error::ConfigurationError`] when the table has no entry for it,
    /// so that callers never end up with an empty address.
    pub fn get(&self, environment: Environment) -> Result<&Endpoints, Error> {
        self.entries
            .get(&environment)
            .ok_or(Error::ConfigurationError(environment))
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self::builtin()
    }
}
