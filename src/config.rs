use crate::ClassTrie;
use crate::rules;
#[cfg(test)]
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Default bound on the number of memoized merge results.
pub const DEFAULT_CACHE_SIZE: usize = 1000;

/// Error raised when a [`MergeConfig`] cannot be constructed.
///
/// Configuration is the only place that fails fast; everything downstream
/// degrades gracefully instead (see the pass-through rules in the engine).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cache capacity must be at least 1")]
    ZeroCacheCapacity,
}

/// Immutable, process-wide merge configuration.
///
/// Built once (eagerly via [`MergeConfig::new`] or lazily through the default
/// merger) and never mutated afterwards, so it is shared read-only by all
/// merge operations without synchronization.
///
/// The separator fields describe how a token is torn apart:
///
/// ```text
/// hover:focus:!text-lg/8
/// ^^^^^ ^^^^^  modifiers        (modifier_separator ':')
///             ^ important       (important_modifier '!')
///              ^^^^^^^ base     (class_separator '-' between segments)
///                     ^^ postfix value (postfix_modifier '/')
/// ```
#[derive(Debug)]
pub struct MergeConfig {
    /// Separates variant modifiers from the base class (`hover:` in `hover:bg-red-500`).
    pub modifier_separator: char,
    /// Separates segments inside the base class (`bg-red-500`).
    pub class_separator: char,
    /// Marks a declaration important (`!bg-red-500`).
    pub important_modifier: char,
    /// Separates a trailing value modifier (`bg-red-500/50`).
    pub postfix_modifier: char,
    /// Bound on the number of memoized merge results.
    pub max_cache_size: usize,
    pub(crate) class_groups: ClassTrie,
    pub(crate) conflicting_groups: HashMap<&'static str, &'static [&'static str]>,
}

impl MergeConfig {
    /// Build a configuration with default separators, the shipped
    /// classification table, and the given cache bound.
    pub fn new(max_cache_size: usize) -> Result<Self, ConfigError> {
        if max_cache_size == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }

        Ok(MergeConfig {
            modifier_separator: ':',
            class_separator: '-',
            important_modifier: '!',
            postfix_modifier: '/',
            max_cache_size,
            class_groups: rules::groups::build_class_trie(),
            conflicting_groups: rules::conflicts::CONFLICTING_CLASS_GROUPS.iter().copied().collect(),
        })
    }

    /// Groups invalidated by `group` when both carry the same modifier
    /// signature. Directional: the relation is declared per firing direction,
    /// never mirrored implicitly.
    pub(crate) fn conflicts_of(&self, group: &str) -> &'static [&'static str] {
        self.conflicting_groups.get(group).copied().unwrap_or(&[])
    }
}

/// Shared fixture for the unit tests; the default [`crate::Merger`] builds
/// its own configuration through [`MergeConfig::new`].
#[cfg(test)]
pub(crate) static DEFAULT_CONFIG: Lazy<MergeConfig> =
    Lazy::new(|| MergeConfig::new(DEFAULT_CACHE_SIZE).expect("default configuration is valid"));
