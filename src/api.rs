use crate::config::{DEFAULT_CACHE_SIZE, MergeConfig};
use crate::engine::{self, LruCache};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::borrow::Cow;

static DEFAULT_MERGER: Lazy<Merger> = Lazy::new(Merger::default);

/// A merge engine bound to one configuration, with its own memoization
/// cache.
///
/// The configuration is immutable once the merger exists, so merging is a
/// pure function of the trimmed input string; the cache only short-circuits
/// recomputation and is never observable in the output. The cache sits
/// behind a mutex with short critical sections (one lookup, one insert) and
/// the merge computation itself runs outside of them, so two threads racing
/// on the same missing key at worst compute the same value twice.
pub struct Merger {
    config: MergeConfig,
    cache: Mutex<LruCache>,
}

impl Default for Merger {
    fn default() -> Self {
        Merger::new(MergeConfig::new(DEFAULT_CACHE_SIZE).expect("default configuration is valid"))
    }
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        let cache = Mutex::new(LruCache::new(config.max_cache_size));
        Merger { config, cache }
    }

    /// Merge a whitespace-delimited utility class list, resolving conflicts
    /// so the last declaration of each visual property wins.
    pub fn merge(&self, classes: &str) -> String {
        let class_list = classes.trim();
        if class_list.is_empty() {
            return String::new();
        }

        if let Some(cached) = self.cache.lock().get(class_list) {
            return cached;
        }

        let merged = engine::merge_class_list(class_list, &self.config);
        self.cache.lock().put(class_list.to_string(), merged.clone());
        merged
    }

    /// Classify one base class token (no modifiers), returning its group
    /// identifier when it is a recognized utility class.
    pub fn classify(&self, base_class: &str) -> Option<String> {
        self.config
            .class_groups
            .classify(base_class, self.config.class_separator)
            .map(Cow::into_owned)
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }
}

/// Merge `classes` with the default configuration.
///
/// # Example
/// ```
/// use tailmerge::merge;
///
/// assert_eq!(merge("p-4 p-8"), "p-8");
/// assert_eq!(merge("px-2 p-4"), "p-4");
/// assert_eq!(merge("hover:bg-red-500 bg-blue-500"), "hover:bg-red-500 bg-blue-500");
/// assert_eq!(merge("my-custom-class p-4"), "my-custom-class p-4");
/// ```
pub fn merge(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}

/// Classify `base_class` with the default configuration.
///
/// # Example
/// ```
/// use tailmerge::classify;
///
/// assert_eq!(classify("p-4").as_deref(), Some("p"));
/// assert_eq!(classify("my-custom-class"), None);
/// ```
pub fn classify(base_class: &str) -> Option<String> {
    DEFAULT_MERGER.classify(base_class)
}
