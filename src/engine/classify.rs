//! Classification trie lookup.
//!
//! Maps a base class (modifiers, important marker, and postfix value already
//! stripped) to its semantic group. Literal segment matches are preferred at
//! full depth; a node's validators are only consulted after literal descent
//! below it has failed to reach a terminal. Tokens no table entry recognizes
//! get one last chance as an arbitrary property (`[property:value]`).

use crate::{ClassTrie, GroupId, NodeId};
use std::borrow::Cow;

impl ClassTrie {
    /// Classify `base`, returning its group identifier when it is a
    /// recognized utility class.
    pub(crate) fn classify(&self, base: &str, separator: char) -> Option<GroupId> {
        let mut parts: Vec<&str> = base.split(separator).collect();
        // tokens that legitimately start with the separator (negative values
        // like -mx-4) produce one leading empty segment
        if parts.first() == Some(&"") {
            parts.remove(0);
        }

        if let Some(group) = self.lookup(&parts, Self::ROOT, separator) {
            return Some(Cow::Borrowed(group));
        }
        arbitrary_property_group(base)
    }

    fn lookup(&self, parts: &[&str], id: NodeId, separator: char) -> Option<&'static str> {
        let node = self.node(id);
        let Some((head, tail)) = parts.split_first() else {
            return node.group;
        };

        if let Some(&child) = node.children.get(head) {
            if let Some(group) = self.lookup(tail, child, separator) {
                return Some(group);
            }
        }

        if !node.validators.is_empty() {
            let remainder = parts.join(separator.encode_utf8(&mut [0; 4]));
            for validator in &node.validators {
                if (validator.test)(&remainder) {
                    return Some(validator.group);
                }
            }
        }

        None
    }
}

/// Fallback for unrestricted one-off declarations: `[mask-type:luminance]`
/// becomes its own group keyed by the property name. The `..` infix cannot
/// appear in table-declared group names, so synthetic groups never collide
/// with real ones.
fn arbitrary_property_group(base: &str) -> Option<GroupId> {
    let caps = regex!(r"^\[(.+)\]$").captures(base)?;
    let inner = caps.get(1)?.as_str();
    let (property, _) = inner.split_once(':')?;
    if property.is_empty() {
        return None;
    }
    Some(Cow::Owned(format!("arbitrary..{property}")))
}
