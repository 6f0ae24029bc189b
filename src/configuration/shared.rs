use crate::{
    configuration::{AuthMode, Configuration},
    environment::Environment,
    Error,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use url::Url;

/// Cheaply cloneable handle to a [`Configuration`] shared between threads.
///
/// Every clone points to the same record, so a write through one handle is visible
/// through all the others. Meant for the "set once at startup, read on every request"
/// pattern: reads take a shared lock, [`configure`](Self::configure) takes an exclusive one.
#[derive(Debug, Clone, Default)]
pub struct SharedConfiguration {
    inner: Arc<RwLock<Configuration>>,
}

impl SharedConfiguration {
    /// Wraps `configuration` in a new shared handle.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(configuration)),
        }
    }

    /// Sets several options at once under the write lock.
    ///
    /// See [`Configuration::configure`].
    pub fn configure<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Configuration) -> R,
    {
        self.write().configure(f)
    }

    /// Sets several options at once, discarding every change if the callback fails.
    ///
    /// Readers never observe a partially applied update.
    pub fn try_configure<F, E>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut Configuration) -> Result<(), E>,
    {
        self.write().try_configure(f)
    }

    /// Runs `f` with a shared reference to the current configuration.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Configuration) -> R,
    {
        f(&*self.read_lock())
    }

    /// Returns a copy of the current configuration.
    pub fn snapshot(&self) -> Configuration {
        self.read_lock().clone()
    }

    /// See [`Configuration::is_sandbox`].
    pub fn is_sandbox(&self) -> bool {
        self.read_lock().is_sandbox()
    }

    /// See [`Configuration::environment`].
    pub fn environment(&self) -> Environment {
        self.read_lock().environment()
    }

    /// See [`Configuration::auth_mode`].
    pub fn auth_mode(&self) -> AuthMode {
        self.read_lock().auth_mode()
    }

    /// See [`Configuration::api_endpoint`].
    pub fn api_endpoint(&self) -> Result<Url, Error> {
        self.read_lock().api_endpoint().cloned()
    }

    /// See [`Configuration::api_version`].
    pub fn api_version(&self) -> &'static str {
        self.read_lock().api_version()
    }

    /// See [`Configuration::site_endpoint`].
    pub fn site_endpoint(&self) -> Result<Url, Error> {
        self.read_lock().site_endpoint().cloned()
    }

    /// See [`Configuration::checkout_url`].
    pub fn checkout_url(&self, token: &str) -> Result<Url, Error> {
        self.read_lock().checkout_url(token)
    }

    // A panic inside a `configure` callback poisons the lock, but leaves a valid record behind.
    fn read_lock(&self) -> RwLockReadGuard<'_, Configuration> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Configuration> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Configuration> for SharedConfiguration {
    fn from(configuration: Configuration) -> Self {
        Self::new(configuration)
    }
}
