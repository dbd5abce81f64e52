//! Merge pipeline.
//!
//! This module is the operational core of the crate. Merging a class list is
//! a short, lock-free pipeline over each whitespace-delimited token:
//!
//! ```text
//! input ── LruCache::get ──hit──> return
//!             │ miss
//!             v
//!      merge_class_list (merge.rs)
//!        - split_class          (splitter.rs)  modifiers / important / postfix
//!        - ClassTrie::classify  (classify.rs)  base class -> group id
//!        - conflict erasure     (merge.rs)     same-signature groups drop out
//!             │
//!             v
//!       LruCache::put ──> merged output
//! ```
//!
//! The cache is the only mutable state on this path and lives behind a mutex
//! in [`crate::api::Merger`]; the merge computation itself never blocks and
//! never touches shared state, so a miss race at worst recomputes a pure
//! function.
//!
//! ## Responsibilities by module
//!
//! - `splitter.rs`: tears one token into base class, ordered modifiers, the
//!   important flag, and an optional postfix-value cut; also canonicalizes
//!   modifier order.
//! - `classify.rs`: descends the classification trie (literal children
//!   first, validators second) and handles the `[property:value]` fallback.
//! - `merge.rs`: the scan over the full token list, candidate bookkeeping,
//!   and conflict resolution with deterministic output order.
//! - `cache.rs`: bounded memoization with least-recently-used eviction.
//!
//! ## Debugging
//!
//! Set `TAILMERGE_DEBUG=1` to print per-token classification and conflict
//! traces to stderr.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/merge.rs"]
mod merge;
#[path = "engine/splitter.rs"]
mod splitter;

pub(crate) use cache::LruCache;
pub(crate) use merge::merge_class_list;
pub(crate) use splitter::{sort_modifiers, split_class};
