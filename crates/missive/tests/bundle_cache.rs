//! Tests for bundle providers and the shared bundle cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use missive::{
    Bundle, BundleCache, BundleProvider, CachedProvider, Message, Resolver, SharedSource,
    StaticBundles, vars,
};

/// Counts underlying lookups so caching behavior is observable.
struct CountingProvider {
    inner: StaticBundles,
    lookups: Arc<AtomicUsize>,
}

impl CountingProvider {
    fn new(inner: StaticBundles) -> (Self, Arc<AtomicUsize>) {
        let lookups = Arc::new(AtomicUsize::new(0));
        (
            CountingProvider {
                inner,
                lookups: lookups.clone(),
            },
            lookups,
        )
    }
}

impl BundleProvider for CountingProvider {
    fn lookup(&self, bundle_path: &str) -> Option<SharedSource> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(bundle_path)
    }
}

fn bundles() -> StaticBundles {
    let mut bundles = StaticBundles::new();
    bundles.insert(
        "example.app.messages",
        Bundle::from_pairs([("greet", "name~Hello, %s.")]),
    );
    bundles
}

fn greet() -> Message {
    Message::new(
        "example.app.Widget",
        "messages",
        "greet",
        vars! { "name" => "Alice" },
    )
}

#[test]
fn cache_get_put_remove() {
    let cache = BundleCache::new();
    assert!(cache.get("example.app.messages").is_none());

    let source: SharedSource = Arc::new(Bundle::from_pairs([("k", "v")]));
    cache.put("example.app.messages", source);
    assert!(cache.get("example.app.messages").is_some());

    cache.remove("example.app.messages");
    assert!(cache.get("example.app.messages").is_none());
}

#[test]
fn cache_clear() {
    let cache = BundleCache::new();
    cache.put("a.x", Arc::new(Bundle::new()) as SharedSource);
    cache.put("b.y", Arc::new(Bundle::new()) as SharedSource);
    cache.clear();
    assert!(cache.get("a.x").is_none());
    assert!(cache.get("b.y").is_none());
}

#[test]
fn cached_provider_loads_once() {
    let cache = Arc::new(BundleCache::new());
    let (counting, lookups) = CountingProvider::new(bundles());
    let resolver = Resolver::new(CachedProvider::new(counting, cache));

    assert_eq!(resolver.render(&greet()), "Hello, Alice.");
    assert_eq!(resolver.render(&greet()), "Hello, Alice.");
    assert_eq!(resolver.render(&greet()), "Hello, Alice.");
    // One cold miss, then cache hits.
    assert_eq!(lookups.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_bundles_are_not_cached() {
    let cache = Arc::new(BundleCache::new());
    let (counting, lookups) = CountingProvider::new(StaticBundles::new());
    let resolver = Resolver::new(CachedProvider::new(counting, cache.clone()));
    let message = Message::new("example.app.Widget", "messages", "greet", vars! {});

    resolver.render(&message);
    resolver.render(&message);
    // A missing bundle is retried on every render; nothing was cached.
    assert_eq!(lookups.load(Ordering::SeqCst), 2);
    assert!(cache.get("example.app.messages").is_none());
}

#[test]
fn clearing_the_cache_forces_a_reload() {
    let cache = Arc::new(BundleCache::new());
    let (counting, lookups) = CountingProvider::new(bundles());
    let resolver = Resolver::new(CachedProvider::new(counting, cache.clone()));

    resolver.render(&greet());
    cache.clear();
    resolver.render(&greet());
    assert_eq!(lookups.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_renders_share_one_cache() {
    let cache = Arc::new(BundleCache::new());
    let resolver = Resolver::new(CachedProvider::new(bundles(), cache));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    assert_eq!(resolver.render(&greet()), "Hello, Alice.");
                }
            });
        }
    });
}
