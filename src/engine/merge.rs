//! Conflict-resolving scan over a full token list.
//!
//! Tokens are processed in declaration order. Recognized tokens become
//! candidates keyed by `(group, canonical modifier signature)`; a later token
//! with the same key replaces the earlier one outright (last write wins, and
//! the output position moves to the replacing token), and a token whose
//! group conflicts with another erases that group's candidate under the same
//! signature. Unrecognized tokens pass through in place and are never
//! subject to conflict resolution.
//!
//! Every surviving token is emitted at its own declaration position, so the
//! output is a pure, deterministic function of the input string regardless
//! of hasher state or thread interleaving.

use crate::MergeConfig;
use crate::engine::{sort_modifiers, split_class};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Candidate identity: one semantic group under one variant context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CandidateKey {
    group: String,
    signature: String,
}

#[derive(Debug)]
struct Candidate<'a> {
    /// Surviving token text; `None` marks a candidate erased by a conflict.
    /// The key itself is never removed once established.
    text: Option<&'a str>,
    /// Output slot currently owned by this candidate.
    slot: Option<usize>,
}

#[derive(Debug)]
enum Slot<'a> {
    /// Unrecognized token, emitted verbatim at its scan position.
    Raw(&'a str),
    /// Recognized candidate, addressed by map index.
    Group(usize),
    /// Superseded by a later declaration of the same key.
    Dead,
}

/// Merge an already-trimmed, whitespace-delimited token list.
pub(crate) fn merge_class_list(class_list: &str, config: &MergeConfig) -> String {
    let debug = std::env::var_os("TAILMERGE_DEBUG").is_some();
    let mut sep_buf = [0u8; 4];
    let sep: &str = config.modifier_separator.encode_utf8(&mut sep_buf);

    let mut candidates: IndexMap<CandidateKey, Candidate<'_>> = IndexMap::new();
    let mut slots: Vec<Slot<'_>> = Vec::new();

    for class in class_list.split_whitespace() {
        let split = split_class(class, config);

        // a postfix value modifier is not part of the classified base:
        // text-lg/8 classifies as text-lg
        let base = match split.postfix_pos {
            Some(pos) => &split.base[..pos],
            None => split.base,
        };

        let Some(group) = config.class_groups.classify(base, config.class_separator) else {
            if debug {
                eprintln!("[merge:passthrough] \"{class}\"");
            }
            slots.push(Slot::Raw(class));
            continue;
        };

        let mut modifiers = sort_modifiers(split.modifiers);
        if split.important {
            modifiers.push("!");
        }
        let signature = modifiers.join(sep);
        if debug {
            eprintln!("[merge:candidate] class=\"{class}\" group={group} signature=\"{signature}\"");
        }

        let key = CandidateKey { group: group.to_string(), signature: signature.clone() };
        match candidates.entry(key) {
            Entry::Occupied(mut entry) => {
                let index = entry.index();
                let candidate = entry.get_mut();
                candidate.text = Some(class);
                // the survivor keeps its own declaration position
                if let Some(old) = candidate.slot.replace(slots.len()) {
                    slots[old] = Slot::Dead;
                }
                slots.push(Slot::Group(index));
            }
            Entry::Vacant(entry) => {
                let index = entry.index();
                entry.insert(Candidate { text: Some(class), slot: Some(slots.len()) });
                slots.push(Slot::Group(index));
            }
        }

        for &conflict in config.conflicts_of(&group) {
            let key = CandidateKey { group: conflict.to_string(), signature: signature.clone() };
            match candidates.entry(key) {
                Entry::Occupied(mut entry) => {
                    if debug && entry.get().text.is_some() {
                        eprintln!("[merge:erase] group={conflict} signature=\"{signature}\"");
                    }
                    entry.get_mut().text = None;
                }
                // erasure establishes the key without an output slot; a later
                // declaration of this group claims its slot at that point
                Entry::Vacant(entry) => {
                    entry.insert(Candidate { text: None, slot: None });
                }
            }
        }
    }

    let mut out = String::with_capacity(class_list.len());
    for slot in slots {
        let text = match slot {
            Slot::Raw(text) => Some(text),
            Slot::Group(index) => candidates.get_index(index).and_then(|(_, c)| c.text),
            Slot::Dead => None,
        };
        if let Some(text) = text {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
    }
    out
}
