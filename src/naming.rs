//! Short class-name generation and the process-wide mapping tables.
//!
//! Identifiers are derived from the *merged* form of an input, so two raw
//! inputs whose merges are byte-identical share one name. The derivation is
//! a SHA-256 hash of the merged string, URL-safe base64 encoded and cut to
//! seven characters. That keeps names short enough to ship in markup at
//! ~42 bits of name space; the residual collision probability is an accepted
//! tradeoff, not something this module tries to eliminate.

use crate::api;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Prefix on every generated identifier.
const NAME_PREFIX: &str = "tw-";
/// Encoded hash characters kept after the prefix.
const NAME_HASH_LEN: usize = 7;

/// Shared-state service for the raw-input -> identifier and
/// identifier -> merged-value tables.
///
/// Created on first use, torn down never, reset only through the explicit
/// test-support API ([`reset_registry`]). Lookups take the read lock;
/// inserts take the write lock; merge computation always happens outside
/// both.
#[derive(Default)]
struct Registry {
    raw_to_name: RwLock<HashMap<String, String>>,
    name_to_merged: RwLock<HashMap<String, String>>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::default);

/// Return the short, stable identifier for `classes`.
///
/// Idempotent: the same raw input always yields the same identifier, and an
/// input whose merged form matches a previously seen one yields that
/// earlier identifier. A raw-input table short-circuits repeat callers
/// before any merging or hashing happens.
///
/// # Example
/// ```
/// let name = tailmerge::short_name("px-2 p-4");
/// assert_eq!(name, tailmerge::short_name("px-2 p-4"));
/// assert!(name.starts_with("tw-"));
/// ```
pub fn short_name(classes: &str) -> String {
    let raw = classes.trim();
    if let Some(name) = REGISTRY.raw_to_name.read().get(raw) {
        return name.clone();
    }

    let merged = api::merge(raw);
    let name = derive_name(&merged);

    REGISTRY.raw_to_name.write().insert(raw.to_string(), name.clone());
    REGISTRY.name_to_merged.write().insert(name.clone(), merged);

    name
}

/// Pre-seed one raw-input -> identifier mapping.
///
/// Generated code calls this at startup so runtime lookups never recompute
/// hashes for class lists already known at build time.
pub fn register_known_mapping(classes: &str, name: &str) {
    REGISTRY.raw_to_name.write().insert(classes.trim().to_string(), name.to_string());
}

/// Snapshot of the raw-input -> identifier table.
pub fn known_mappings() -> HashMap<String, String> {
    REGISTRY.raw_to_name.read().clone()
}

/// Snapshot of the identifier -> merged-value table.
pub fn generated_rules() -> HashMap<String, String> {
    REGISTRY.name_to_merged.read().clone()
}

/// Test-support reset of both tables.
pub fn reset_registry() {
    REGISTRY.raw_to_name.write().clear();
    REGISTRY.name_to_merged.write().clear();
}

fn derive_name(merged: &str) -> String {
    let hash = Sha256::digest(merged.as_bytes());
    let encoded = URL_SAFE.encode(hash);
    format!("{NAME_PREFIX}{}", &encoded[..NAME_HASH_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable_and_prefixed() {
        let first = short_name("text-red-500 bg-blue-500");
        let second = short_name("text-red-500 bg-blue-500");
        assert_eq!(first, second);
        assert!(first.starts_with(NAME_PREFIX));
        assert_eq!(first.len(), NAME_PREFIX.len() + NAME_HASH_LEN);
    }

    #[test]
    fn names_follow_merge_identity() {
        // both inputs merge to "p-8", so they share a name
        assert_eq!(short_name("p-4 p-8"), short_name("p-2 p-8"));
        // different merge results get different names
        assert_ne!(short_name("p-4"), short_name("p-8"));
    }

    #[test]
    fn whitespace_does_not_change_the_name() {
        assert_eq!(short_name("  m-2 mt-4  "), short_name("m-2 mt-4"));
    }

    // registry state is process-global, so every assertion that depends on
    // table contents lives in one sequential test
    #[test]
    fn registry_tables_register_snapshot_and_reset() {
        register_known_mapping("grid grid-cols-3", "tw-fixture");
        assert_eq!(short_name("grid grid-cols-3"), "tw-fixture");
        assert_eq!(known_mappings().get("grid grid-cols-3").map(String::as_str), Some("tw-fixture"));

        let name = short_name("flex block px-2 p-4");
        assert_eq!(generated_rules().get(&name).map(String::as_str), Some("block p-4"));

        reset_registry();
        assert!(!known_mappings().contains_key("grid grid-cols-3"));
        assert!(!generated_rules().contains_key(&name));
    }
}
