//! Layered configuration resolution.
//!
//! This crate discovers a fixed set of configuration points declared by an
//! application, validates that their canonical names are unique, loads values
//! from an ordered list of loaders, and exposes a merged view in which the
//! first source defining a point wins.
//!
//! Precedence, highest first: forced values, then each loader in the order given.
//!
//! ```
//! use layerconf_core::{CmdLineLoader, ConfigPoint, PointGroup, Resolver, ResolverOptions};
//!
//! let port = ConfigPoint::new("port");
//! let options = ResolverOptions::new()
//!     .with_group(PointGroup::new("server").with_point(port.clone()))
//!     .with_args(["server.port=8080"])
//!     .with_loader(CmdLineLoader::new());
//!
//! let resolver = Resolver::new(options).unwrap();
//! assert_eq!(resolver.get_value(&port).as_deref(), Some("8080"));
//! ```

pub mod diagnostics;
mod error;
mod layer;
pub mod loader;
mod naming;
mod point;
mod registry;
mod resolver;

pub use diagnostics::{DiagnosticSink, MemorySink, StderrSink};
pub use error::ConfigError;
pub use layer::{FORCED_SOURCE, ValueLayer};
pub use loader::{
    CmdLineLoader, EnvLoader, FixedLoader, JsonFileLoader, Loader, LoaderContext, LoaderError,
    PropertiesFileLoader, env_var_name, env_var_or_none,
};
pub use naming::{
    BasicNamingStrategy, CanonicalName, NamingError, NamingStrategy, PointOnlyNamingStrategy,
};
pub use point::{ConfigPoint, PointGroup};
pub use registry::Registry;
pub use resolver::{Resolution, Resolver, ResolverOptions};
