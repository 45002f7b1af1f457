//! Offline asset caching policy.
//!
//! The service worker (`sw.js`) owns the browser Cache Storage; this module
//! is the single source of truth for the cache name, the precache manifest
//! and the fetch policy, so worker and app cannot drift apart. A lint test
//! cross-checks `sw.js` against these constants.
//!
//! ## Versioning
//!
//! - `CACHE_VERSION`: bumped whenever any precached asset changes shape.
//!   The versioned cache name makes activation of a new worker atomic:
//!   install fills the new cache, activate drops every other one, so at
//!   most one cache is live at any time.

use serde::{Deserialize, Serialize};

/// Current asset-cache version. Part of [`cache_name`].
pub const CACHE_VERSION: u32 = 2;

const CACHE_PREFIX: &str = "familyfin-assets-v";

/// App-shell assets the service worker precaches on install.
///
/// Trunk emits hashed bundle filenames, so only the stable entry points are
/// precached; hashed artifacts are picked up by the runtime cache on first
/// fetch.
pub const ASSET_MANIFEST: [&str; 3] = ["/", "/index.html", "/sw.js"];

/// The one cache name this build reads and writes.
pub fn cache_name() -> String {
    format!("{}{}", CACHE_PREFIX, CACHE_VERSION)
}

/// Given all cache names present in the browser, the ones the activating
/// worker must delete. Everything except the current cache goes, including
/// caches from other prefixes left behind by old deployments.
pub fn stale_caches<'a>(existing: &'a [String]) -> Vec<&'a str> {
    let live = cache_name();
    existing
        .iter()
        .map(String::as_str)
        .filter(|name| *name != live)
        .collect()
}

/// Where a fetch should be served from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchSource {
    /// Cache hit; respond without touching the network.
    Cache,
    /// Cache miss; go to the network. The response is not written back,
    /// the cache only changes on install.
    Network,
}

/// Cache-first fetch policy: a cached response always wins.
pub fn plan_fetch(cache_hit: bool) -> FetchSource {
    if cache_hit {
        FetchSource::Cache
    } else {
        FetchSource::Network
    }
}

/// Serialized form of the precache manifest, logged as a diagnostic when
/// the service worker is registered.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CacheManifest {
    pub version: u32,
    pub assets: Vec<String>,
}

impl CacheManifest {
    pub fn current() -> Self {
        Self {
            version: CACHE_VERSION,
            assets: ASSET_MANIFEST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// False for manifests written by an older worker; the caller should
    /// treat the cache as stale.
    pub fn is_current(&self) -> bool {
        self.version == CACHE_VERSION
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Register `sw.js` with the browser, if service workers are available.
/// Registration is fire-and-forget; the app works online without it.
#[cfg(target_arch = "wasm32")]
pub fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    let _ = container.register("sw.js");

    // Outcome is unknown until the promise settles; log the attempt and the
    // manifest this build expects the worker to serve.
    let manifest = CacheManifest::current()
        .to_json()
        .unwrap_or_else(|e| format!("manifest serialization failed: {e}"));
    web_sys::console::log_1(&format!("FamilyFin: registering sw.js, {}", manifest).into());
}
