//! The process-wide resolver.
//!
//! Three entry points with distinct intent:
//! - `Resolver::instance()` returns the instance, constructing an unconfigured one
//!   on first use.
//! - `Resolver::init(options)` performs explicit first-time construction and fails
//!   with `ConfigError::AlreadyConstructed` if an instance exists.
//! - `Resolver::reset(options)` replaces the configuration in place (mainly for
//!   test isolation), constructing the instance if needed.
//!
//! All three are serialized by one reentrant lifecycle lock, so a loader running
//! inside `init` or `reset` may still call `Resolver::instance()` on the same
//! thread. It then sees the unconfigured instance (during `init`) or the
//! previous configuration (during `reset`).
//!
//! A failed `init` installs no configuration; a failed `reset` leaves the
//! installed configuration untouched.

use parking_lot::{ReentrantMutex, const_reentrant_mutex};
use std::sync::OnceLock;

use super::{Resolver, ResolverOptions};
use crate::error::ConfigError;

static INSTANCE: OnceLock<Resolver> = OnceLock::new();
static LIFECYCLE: ReentrantMutex<()> = const_reentrant_mutex(());

impl Resolver {
    /// The process-wide resolver, constructed with defaults on first use.
    pub fn instance() -> &'static Resolver {
        if let Some(resolver) = INSTANCE.get() {
            return resolver;
        }
        let _guard = LIFECYCLE.lock();
        INSTANCE.get_or_init(|| {
            tracing::debug!("Constructing unconfigured process-wide resolver");
            Resolver::unconfigured()
        })
    }

    /// The process-wide resolver if it has been constructed.
    pub fn try_instance() -> Option<&'static Resolver> {
        INSTANCE.get()
    }

    /// Construct the process-wide resolver.
    ///
    /// # Errors
    ///
    /// - `ConfigError::AlreadyConstructed` if the instance already exists.
    /// - `ConfigError::Naming` / `ConfigError::Loader` if resolution fails; no
    ///   configuration is installed in that case.
    pub fn init(options: ResolverOptions) -> Result<&'static Resolver, ConfigError> {
        let _guard = LIFECYCLE.lock();
        if INSTANCE.get().is_some() {
            return Err(ConfigError::AlreadyConstructed);
        }
        let resolver = Resolver::new(options)?;
        Ok(install(resolver))
    }

    /// Replace the process-wide configuration, constructing the instance if needed.
    ///
    /// # Errors
    ///
    /// `ConfigError::Naming` / `ConfigError::Loader`; the previous configuration,
    /// if any, remains installed.
    pub fn reset(options: ResolverOptions) -> Result<&'static Resolver, ConfigError> {
        let _guard = LIFECYCLE.lock();
        match INSTANCE.get() {
            Some(resolver) => {
                resolver.reload(options)?;
                Ok(resolver)
            }
            None => {
                let resolver = Resolver::new(options)?;
                Ok(install(resolver))
            }
        }
    }
}

/// Install a freshly built resolver as the instance.
///
/// A loader may have created the unconfigured instance while `resolver` was
/// being built; its configuration is then moved into that instance.
fn install(resolver: Resolver) -> &'static Resolver {
    if let Err(resolver) = INSTANCE.set(resolver) {
        tracing::debug!("Process-wide resolver was created while loading; adopting configuration");
        if let Some(existing) = INSTANCE.get() {
            existing.adopt(resolver);
        }
    }
    INSTANCE.get_or_init(Resolver::unconfigured)
}
