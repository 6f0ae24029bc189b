//! Configuration and endpoint resolution for the PayPal NVP recurring payments API.
//!
//! This crate holds the credentials and settings used to talk to PayPal and works out,
//! from those settings alone, which URL and API version a request should target.
//! Building NVP requests, sending them over HTTP and verifying IPN messages are left to
//! the components consuming a [`Configuration`].
//!
//! # Usage
//!
//! ## Configure the client
//!
//! Build a [`Configuration`] once at startup and hand it to whoever needs it.
//!
//! ```rust
//! # use paypal_recurring::Configuration;
//! let mut config = Configuration::default();
//! config.configure(|config| {
//!     config.sandbox = true;
//!     config.username = Some("seller_api1.example.com".to_string());
//!     config.password = Some("password".into());
//!     config.signature = Some("signature".into());
//! });
//! ```
//!
//! Or read it from `PAYPAL_*` environment variables and an optional file:
//!
//! ```rust,no_run
//! # use paypal_recurring::{Configuration, Error};
//! # fn main() -> Result<(), Error> {
//! let from_env = Configuration::from_env()?;
//! let from_file = Configuration::load("paypal.toml")?;
//! # Ok(())
//! # }
//! ```
//!
//! By default, a `Configuration` targets the Production environment.
//! Only a boolean `true` in [`sandbox`](Configuration::sandbox) switches it to the Sandbox.
//!
//! ## Resolve endpoints
//!
//! Signature-based or certificate-based authentication is picked from the presence
//! of a signature, unless [`AuthMode`] is set explicitly.
//!
//! ```rust
//! # use paypal_recurring::{Configuration, Environment, Error};
//! # fn main() -> Result<(), Error> {
//! let config = Configuration::builder()
//!     .sandbox(true)
//!     .signature("signature")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment(), Environment::Sandbox);
//! assert_eq!(config.api_endpoint()?.as_str(), "https://api-3t.sandbox.paypal.com/nvp");
//! assert_eq!(config.site_endpoint()?.as_str(), "https://www.sandbox.paypal.com/cgi-bin/webscr");
//! assert_eq!(config.api_version(), "72.0");
//! # Ok(())
//! # }
//! ```
//!
//! ## Share between threads
//!
//! [`SharedConfiguration`] wraps a `Configuration` in a lock so that it can be updated
//! and read from many threads.
//!
//! ```rust
//! # use paypal_recurring::SharedConfiguration;
//! let shared = SharedConfiguration::default();
//! let handle = shared.clone();
//!
//! shared.configure(|config| config.sandbox = true);
//! assert!(handle.is_sandbox());
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

mod common;
pub mod configuration;
pub mod environment;
pub mod error;

pub use common::API_VERSION;
pub use configuration::{AuthMode, Configuration, ConfigurationBuilder, SharedConfiguration, Token};
pub use environment::{EndpointTable, Endpoints, Environment};
pub use error::Error;
