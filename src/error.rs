//! Standard errors used by all functions in the crate.

use crate::environment::Environment;

/// Error collecting all possible failures of the configuration resolver.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The endpoint table has no entry for the selected environment.
    ///
    /// This cannot happen with the built-in table, only with a custom one
    /// installed through [`Configuration::set_endpoint_table`](crate::Configuration::set_endpoint_table).
    #[error("Configuration error: missing endpoint entry for environment `{0}`")]
    ConfigurationError(Environment),
    /// Configuration could not be assembled from a file or the process environment.
    #[error("Error loading configuration: {0}")]
    LoadError(#[from] config::ConfigError),
    /// A custom endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    UrlError(#[from] url::ParseError),
}
