//! Integration tests for loaders that read the process-wide resolver while it
//! is being constructed.
//!
//! Lives in its own test binary so the instance starts out unconstructed.

use layerconf_core::{
    ConfigPoint, FixedLoader, Loader, LoaderContext, LoaderError, PointGroup, Resolver,
    ResolverOptions, ValueLayer,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Records the generation of the process-wide instance seen while loading.
struct InstanceReader {
    seen: Arc<Mutex<Vec<u64>>>,
}

impl Loader for InstanceReader {
    fn name(&self) -> &str {
        "instance-reader"
    }

    fn load(&self, _ctx: &LoaderContext<'_>) -> Result<ValueLayer, LoaderError> {
        self.seen.lock().push(Resolver::instance().generation());
        Ok(ValueLayer::new(self.name()))
    }
}

#[test]
fn test_loader_can_read_instance_during_init() {
    let a = ConfigPoint::new("a");
    let seen = Arc::new(Mutex::new(Vec::new()));

    let options = ResolverOptions::new()
        .with_group(PointGroup::new("app").with_point(a.clone()))
        .with_loader(FixedLoader::new("fixed").with_value("app.a", "1"))
        .with_loader(InstanceReader {
            seen: Arc::clone(&seen),
        });

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let generation = Resolver::init(options).map(|resolver| resolver.generation());
        let _ = tx.send(generation);
    });

    let generation = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("init returned instead of waiting on its own lock");
    assert_eq!(generation.unwrap(), 1);
    assert_eq!(*seen.lock(), vec![0], "loader saw the unconfigured instance");

    let resolver = Resolver::instance();
    assert_eq!(resolver.get_value(&a).as_deref(), Some("1"));
    assert_eq!(resolver.resolution().loader_names(), vec!["fixed", "instance-reader"]);

    // During a reset the loader sees the configuration being replaced.
    Resolver::reset(
        ResolverOptions::new()
            .with_group(PointGroup::new("app").with_point(a.clone()))
            .with_forced(a.clone(), "2")
            .with_loader(InstanceReader {
                seen: Arc::clone(&seen),
            }),
    )
    .unwrap();
    assert_eq!(*seen.lock(), vec![0, 1]);
    assert_eq!(resolver.get_value(&a).as_deref(), Some("2"));
    assert_eq!(resolver.generation(), 2);
}
