//! Service registry for dependency lookup
//!
//! Services are registered by name into one of two tiers. The public tier is
//! the normal lookup surface; the private tier holds instances that are not
//! part of the public surface but can still be reached through
//! [`ServiceRegistry::resolve`] when a name misses the public tier.

use crate::locks::{lock_rwlock_read, lock_rwlock_write};
use backoffice_domain::error::{Error, Result};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Opaque service instance stored in the registry
pub type Service = Arc<dyn Any + Send + Sync>;

/// Thread-safe two-tier service registry
#[derive(Clone, Default)]
pub struct ServiceRegistry {
    public: Arc<RwLock<HashMap<String, Service>>>,
    private: Arc<RwLock<HashMap<String, Service>>>,
}

impl ServiceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            public: Arc::new(RwLock::new(HashMap::new())),
            private: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a public service
    pub fn register<T>(&self, name: impl Into<String>, service: Arc<T>) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        let name = name.into();
        let mut services = lock_rwlock_write(&self.public, "ServiceRegistry::register")?;

        if services.contains_key(&name) {
            return Err(Error::registry(format!(
                "Service '{}' already registered",
                name
            )));
        }

        services.insert(name, service);
        Ok(())
    }

    /// Register a private service
    ///
    /// Private services are invisible to [`list`](Self::list) but are found
    /// by [`resolve`](Self::resolve) when the public tier misses.
    pub fn register_private<T>(&self, name: impl Into<String>, service: Arc<T>) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        let name = name.into();
        let mut services = lock_rwlock_write(&self.private, "ServiceRegistry::register_private")?;

        if services.contains_key(&name) {
            return Err(Error::registry(format!(
                "Private service '{}' already registered",
                name
            )));
        }

        services.insert(name, service);
        Ok(())
    }

    /// Resolve a service by name
    ///
    /// Tries the public tier first, then falls back to the private tier.
    /// Fails with [`Error::NotFound`] when the name resolves nowhere.
    pub fn resolve(&self, name: &str) -> Result<Service> {
        let public = lock_rwlock_read(&self.public, "ServiceRegistry::resolve")?;
        if let Some(service) = public.get(name) {
            return Ok(Arc::clone(service));
        }
        drop(public);

        let private = lock_rwlock_read(&self.private, "ServiceRegistry::resolve")?;
        private
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }

    /// Resolve a service by name and downcast it to a concrete type
    pub fn resolve_as<T>(&self, name: &str) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let service = self.resolve(name)?;
        service.downcast::<T>().map_err(|_| {
            Error::registry(format!(
                "Service '{}' is not of the requested type",
                name
            ))
        })
    }

    /// List the names of all public services
    pub fn list(&self) -> Result<Vec<String>> {
        let services = lock_rwlock_read(&self.public, "ServiceRegistry::list")?;
        Ok(services.keys().cloned().collect())
    }
}
