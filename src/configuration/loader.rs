use crate::{
    common::{ENV_PREFIX, SANDBOX_ENV_VAR},
    configuration::Configuration,
    Error,
};
use config::{builder::DefaultState, ConfigBuilder};
use std::{collections::HashMap, path::Path};

impl Configuration {
    /// Reads the configuration from `PAYPAL_*` environment variables,
    /// e.g. `PAYPAL_SANDBOX=true` or `PAYPAL_SIGNATURE=...`.
    #[tracing::instrument(name = "Load Configuration From Env")]
    pub fn from_env() -> Result<Self, Error> {
        Self::from_builder(with_env(config::Config::builder(), None)?)
    }

    /// Reads the configuration from a file, then applies any `PAYPAL_*` environment
    /// variable on top of it.
    ///
    /// The format is inferred from the file extension (`.toml`, `.json`, `.yaml`...).
    #[tracing::instrument(name = "Load Configuration", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_builder(with_env(
            config::Config::builder().add_source(config::File::from(path.as_ref())),
            None,
        )?)
    }

    pub(crate) fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, Error> {
        let config: Configuration = builder.build()?.try_deserialize()?;

        tracing::info!(
            environment = %config.environment(),
            auth_mode = %config.auth_mode(),
            "Loaded PayPal configuration"
        );

        Ok(config)
    }
}

/// Adds the `PAYPAL_*` variables on top of `builder`. Reads the process environment
/// unless `vars` is given.
///
/// Values are kept as raw strings so credentials reach their fields byte for byte.
/// `PAYPAL_SANDBOX` enables the sandbox only when it is exactly `true`.
pub(crate) fn with_env(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<HashMap<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, Error> {
    let sandbox = match &vars {
        Some(vars) => vars.get(SANDBOX_ENV_VAR).cloned(),
        None => std::env::var(SANDBOX_ENV_VAR).ok(),
    };

    let builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .source(vars),
    );

    match sandbox {
        Some(sandbox) => Ok(builder.set_override("sandbox", sandbox == "true")?),
        None => Ok(builder),
    }
}
