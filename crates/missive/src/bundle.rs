//! Template bundles: lookup traits, an in-memory provider, and a shared
//! cache.
//!
//! The core consumes bundles through two narrow traits so that storage is
//! entirely the caller's concern: a [`BundleProvider`] resolves a bundle
//! path to a [`TemplateSource`], and a source maps message keys to raw
//! template text. Loaded sources are immutable, which is what makes the
//! cache's relaxed concurrency contract safe.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A loaded bundle: message key to raw template text.
pub trait TemplateSource {
    /// The raw template text for `key`, if present.
    fn entry(&self, key: &str) -> Option<&str>;
}

/// A shareable, immutable template source.
pub type SharedSource = Arc<dyn TemplateSource + Send + Sync>;

/// Resolves a bundle path to a template source.
pub trait BundleProvider {
    /// Look up the bundle at `bundle_path`, or `None` when unavailable.
    fn lookup(&self, bundle_path: &str) -> Option<SharedSource>;
}

/// A plain in-memory bundle.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    entries: HashMap<String, String>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Bundle {
        Bundle::default()
    }

    /// Build a bundle from key/template pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Bundle
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut bundle = Bundle::new();
        for (key, template) in pairs {
            bundle.insert(key, template);
        }
        bundle
    }

    /// Insert a template under `key`, replacing any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemplateSource for Bundle {
    fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// An in-memory provider over a fixed set of bundles, keyed by bundle path.
#[derive(Clone, Default)]
pub struct StaticBundles {
    bundles: HashMap<String, SharedSource>,
}

impl StaticBundles {
    /// Create an empty provider.
    pub fn new() -> StaticBundles {
        StaticBundles::default()
    }

    /// Register `bundle` under `bundle_path`.
    pub fn insert(&mut self, bundle_path: impl Into<String>, bundle: Bundle) {
        self.bundles.insert(bundle_path.into(), Arc::new(bundle));
    }
}

impl BundleProvider for StaticBundles {
    fn lookup(&self, bundle_path: &str) -> Option<SharedSource> {
        self.bundles.get(bundle_path).cloned()
    }
}

/// A cache of loaded template sources, keyed by bundle path.
///
/// Safe for concurrent use: lookups never race-corrupt, and a miss followed
/// by concurrent loads may insert the same bundle twice. Last write wins;
/// duplicate loads are harmless because sources are immutable.
#[derive(Default)]
pub struct BundleCache {
    loaded: RwLock<HashMap<String, SharedSource>>,
}

impl BundleCache {
    /// Create an empty cache.
    pub fn new() -> BundleCache {
        BundleCache::default()
    }

    /// The cached source for `bundle_path`, if any.
    pub fn get(&self, bundle_path: &str) -> Option<SharedSource> {
        self.loaded
            .read()
            .expect("bundle cache lock poisoned")
            .get(bundle_path)
            .cloned()
    }

    /// Cache `source` under `bundle_path`, replacing any existing entry.
    pub fn put(&self, bundle_path: impl Into<String>, source: SharedSource) {
        self.loaded
            .write()
            .expect("bundle cache lock poisoned")
            .insert(bundle_path.into(), source);
    }

    /// Drop the cached source for `bundle_path`, forcing a reload on the
    /// next lookup.
    pub fn remove(&self, bundle_path: &str) {
        self.loaded
            .write()
            .expect("bundle cache lock poisoned")
            .remove(bundle_path);
    }

    /// Drop all cached sources.
    pub fn clear(&self) {
        self.loaded
            .write()
            .expect("bundle cache lock poisoned")
            .clear();
    }
}

/// Wraps a provider with a caller-owned [`BundleCache`].
///
/// The cache is held behind an `Arc` so the caller keeps a handle for
/// independent lifecycle control (e.g. clearing it to pick up reloaded
/// bundles). Negative lookups are not cached; a missing bundle is retried
/// on every render.
pub struct CachedProvider<P> {
    provider: P,
    cache: Arc<BundleCache>,
}

impl<P: BundleProvider> CachedProvider<P> {
    /// Wrap `provider` with `cache`.
    pub fn new(provider: P, cache: Arc<BundleCache>) -> CachedProvider<P> {
        CachedProvider { provider, cache }
    }
}

impl<P: BundleProvider> BundleProvider for CachedProvider<P> {
    fn lookup(&self, bundle_path: &str) -> Option<SharedSource> {
        if let Some(hit) = self.cache.get(bundle_path) {
            return Some(hit);
        }
        let loaded = self.provider.lookup(bundle_path)?;
        self.cache.put(bundle_path, loaded.clone());
        Some(loaded)
    }
}
