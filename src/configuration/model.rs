use crate::environment::EndpointTable;
use derive_builder::Builder;
use secrecy::{ExposeSecret, Secret};
use serde::{
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

/// Settings consumed by the request builder, the HTTP transport and the IPN verifier.
///
/// A `Configuration` is built once at startup and handed to whichever component needs it.
/// Fields can be written in any order, any number of times; nothing is validated on write.
/// A missing credential only surfaces when a collaborator tries to use it.
///
/// ```rust
/// # use paypal_recurring::{Configuration, ConfigurationBuilder};
/// let config = ConfigurationBuilder::default()
///     .sandbox(true)
///     .username("seller_api1.example.com")
///     .password("secret")
///     .signature("signature")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     config.api_endpoint().unwrap().as_str(),
///     "https://api-3t.sandbox.paypal.com/nvp"
/// );
/// ```
#[derive(Deserialize, Debug, Clone, Default, Builder)]
#[serde(default)]
#[builder(default, derive(Debug))]
pub struct Configuration {
    /// Send requests to PayPal's sandbox. Specially useful in development and test mode.
    ///
    /// When loaded from a file or the environment, only a real boolean `true` enables it.
    #[serde(deserialize_with = "deserialize_strict_bool")]
    pub sandbox: bool,
    /// API username.
    #[builder(setter(into, strip_option))]
    pub username: Option<String>,
    /// API password.
    #[builder(setter(into, strip_option))]
    pub password: Option<Token>,
    /// API signature. Its presence selects signature-based authentication.
    #[builder(setter(into, strip_option))]
    pub signature: Option<Token>,
    /// API certificate.
    #[builder(setter(into, strip_option))]
    pub ssl_cert: Option<Token>,
    /// Third party authorization signature.
    #[builder(setter(into, strip_option))]
    pub authorization: Option<Token>,
    /// Third party email.
    #[builder(setter(into, strip_option))]
    pub subject: Option<String>,
    #[builder(setter(into, strip_option))]
    pub application_id: Option<String>,
    /// Seller id, used to verify IPN.
    #[builder(setter(into, strip_option))]
    pub seller_id: Option<String>,
    /// Seller e-mail, used to verify IPN.
    #[builder(setter(into, strip_option))]
    pub email: Option<String>,
    /// Explicit authentication scheme.
    ///
    /// When `None`, the scheme is derived from the presence of [`signature`](Self::signature).
    #[builder(setter(into, strip_option))]
    pub auth_mode: Option<AuthMode>,
    #[serde(skip)]
    pub(crate) endpoint_table: EndpointTable,
}

impl Configuration {
    /// Returns a new builder to configure a [`Configuration`].
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Endpoint table used to resolve URLs. Defaults to the built-in PayPal table.
    pub fn endpoint_table(&self) -> &EndpointTable {
        &self.endpoint_table
    }

    /// Replaces the endpoint table, e.g. to point every request at a mock server.
    pub fn set_endpoint_table(&mut self, endpoint_table: EndpointTable) {
        self.endpoint_table = endpoint_table;
    }
}

/// The two mutually exclusive credential schemes of the NVP API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// 3-token authentication: username, password and signature.
    Signature,
    /// Client certificate authentication.
    Certificate,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Signature => f.write_str("signature"),
            AuthMode::Certificate => f.write_str("certificate"),
        }
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use paypal_recurring::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`
/// assert_eq!(token.expose_secret(), "supersecret");
/// ```
#[derive(Deserialize, Clone, Debug)]
pub struct Token(Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Returns `true` if the secret is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

/// Only a boolean `true` counts as enabled. Strings such as `"yes"` or `"1"`,
/// numbers and any other value are read as `false`.
fn deserialize_strict_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StrictBoolVisitor)
}

struct StrictBoolVisitor;

impl<'de> Visitor<'de> for StrictBoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value, where only boolean `true` means enabled")
    }

    fn visit_bool<E>(self, v: bool) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, _: i64) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_u64<E>(self, _: u64) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_f64<E>(self, _: f64) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_str<E>(self, _: &str) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_bytes<E>(self, _: &[u8]) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_unit<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_none<E>(self) -> Result<bool, E>
    where
        E: de::Error,
    {
        Ok(false)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<bool, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(false)
    }

    fn visit_map<A>(self, mut map: A) -> Result<bool, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(false)
    }
}
