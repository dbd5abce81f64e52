extern crate self as tailmerge;

#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod export;
mod naming;
mod rules;

pub use api::{Merger, classify, merge};
pub use config::{ConfigError, MergeConfig};
pub use export::{
    BEGIN_MARKER, END_MARKER, ExportError, ExportOptions, export_css, export_css_with_map,
    export_css_with_options, generate_build_input, replace_between_markers,
};
pub use naming::{generated_rules, known_mappings, register_known_mapping, reset_registry, short_name};

use std::borrow::Cow;
use std::collections::HashMap;

// --- Internal types ---------------------------------------------------------

/// Semantic bucket a recognized utility token belongs to, used for conflict
/// detection. Table-declared groups are static names; arbitrary-property
/// tokens (`[margin:0]`) synthesize an owned one per property.
pub(crate) type GroupId = Cow<'static, str>;

pub(crate) type NodeId = usize;

/// One value predicate paired with the group it asserts when it matches.
///
/// Predicates are total over strings: a malformed value makes them return
/// false, never panic or error (see `rules::validators`).
pub(crate) struct Validator {
    pub test: fn(&str) -> bool,
    pub group: &'static str,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").field("test", &"<predicate>").field("group", &self.group).finish()
    }
}

/// One segment position in the classification trie.
///
/// `children` maps the next literal segment to its node; `validators` handle
/// open-ended suffixes (numbers, arbitrary bracket values) in declared order,
/// first match wins; `group` is set when the path ending here is a complete
/// class on its own.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    pub(crate) children: HashMap<&'static str, NodeId>,
    pub(crate) validators: Vec<Validator>,
    pub(crate) group: Option<&'static str>,
}

/// Arena-backed classification trie.
///
/// Nodes own no other nodes; children are integer indices into one vector, so
/// the whole structure is a flat allocation that is cheap to share across
/// threads once built. Built once by `rules::groups`, immutable afterwards.
pub(crate) struct ClassTrie {
    nodes: Vec<TrieNode>,
}

impl ClassTrie {
    pub(crate) const ROOT: NodeId = 0;

    pub(crate) fn new() -> Self {
        ClassTrie { nodes: vec![TrieNode::default()] }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    fn ensure_path_from(&mut self, mut id: NodeId, path: &'static str) -> NodeId {
        if path.is_empty() {
            return id;
        }
        for segment in path.split('-') {
            id = match self.nodes[id].children.get(segment).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[id].children.insert(segment, child);
                    child
                }
            };
        }
        id
    }

    /// Declare `path` (hyphen-separated segments) as a complete class
    /// belonging to `group`.
    pub(crate) fn add(&mut self, path: &'static str, group: &'static str) {
        let id = self.ensure_path_from(Self::ROOT, path);
        self.nodes[id].group = Some(group);
    }

    /// Declare every `prefix-value` combination as a member of `group`.
    /// An empty `prefix` declares the values at the root (bare keywords like
    /// `block` or `underline`).
    pub(crate) fn values(&mut self, prefix: &'static str, values: &[&'static str], group: &'static str) {
        let id = self.ensure_path_from(Self::ROOT, prefix);
        for &value in values {
            let leaf = self.ensure_path_from(id, value);
            self.nodes[leaf].group = Some(group);
        }
    }

    /// Attach an open-ended value validator at `path`. Validators fire in
    /// declaration order against the re-joined remaining segments.
    pub(crate) fn validator(&mut self, path: &'static str, test: fn(&str) -> bool, group: &'static str) {
        let id = self.ensure_path_from(Self::ROOT, path);
        self.nodes[id].validators.push(Validator { test, group });
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every group identifier reachable through the trie, terminals and
    /// validators alike.
    #[cfg(test)]
    pub(crate) fn declared_groups(&self) -> std::collections::HashSet<&'static str> {
        let mut groups = std::collections::HashSet::new();
        for node in &self.nodes {
            groups.extend(node.group);
            groups.extend(node.validators.iter().map(|v| v.group));
        }
        groups
    }
}

impl std::fmt::Debug for ClassTrie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassTrie").field("nodes", &self.nodes.len()).finish()
    }
}
