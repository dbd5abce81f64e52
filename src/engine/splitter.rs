//! Variant splitter: tears one whitespace-free token into its parts.

use crate::MergeConfig;

/// Parts of one token, borrowed from the original text.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SplitClass<'a> {
    /// Base class with modifiers and the important marker stripped.
    pub base: &'a str,
    /// Modifiers in original left-to-right order, unsorted.
    pub modifiers: Vec<&'a str>,
    /// Whether the base class carried a leading important marker.
    pub important: bool,
    /// Byte offset into `base` where a trailing value modifier begins
    /// (`bg-red-500/50` cuts at the `/`), already re-based onto `base`.
    pub postfix_pos: Option<usize>,
}

/// Scan `class` once, tracking bracket nesting so separators inside arbitrary
/// values (`[10px/20px]`) stay inert. Only the last postfix occurrence outside
/// brackets counts; one recorded before the final modifier boundary belonged
/// to a modifier and is discarded.
pub(crate) fn split_class<'a>(class: &'a str, config: &MergeConfig) -> SplitClass<'a> {
    let mut modifiers = Vec::new();
    let mut bracket_depth: u32 = 0;
    let mut modifier_start = 0;
    let mut postfix_pos: Option<usize> = None;

    for (i, c) in class.char_indices() {
        if c == '[' {
            bracket_depth += 1;
            continue;
        }
        if c == ']' {
            // unbalanced closers degrade instead of underflowing
            bracket_depth = bracket_depth.saturating_sub(1);
            continue;
        }

        if bracket_depth == 0 {
            if c == config.modifier_separator {
                modifiers.push(&class[modifier_start..i]);
                modifier_start = i + c.len_utf8();
                continue;
            }
            if c == config.postfix_modifier {
                postfix_pos = Some(i);
            }
        }
    }

    let rest = &class[modifier_start..];
    let (base, important) = match rest.strip_prefix(config.important_modifier) {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };

    // Re-base the postfix cut onto the base class; discard it when it was
    // recorded inside a modifier or on the important marker itself.
    let base_start = modifier_start + if important { config.important_modifier.len_utf8() } else { 0 };
    let postfix_pos = postfix_pos
        .and_then(|pos| pos.checked_sub(base_start))
        .filter(|&pos| pos > 0 && pos < base.len());

    SplitClass { base, modifiers, important, postfix_pos }
}

/// Canonicalize modifier order so `hover:focus:` and `focus:hover:` collide.
///
/// Plain modifiers sort alphabetically. An arbitrary variant (`[&>*]:`) has
/// unknown, possibly order-sensitive semantics, so it stays fixed: segments
/// strictly before it sort among themselves, segments strictly after sort
/// among themselves.
pub(crate) fn sort_modifiers<'a>(modifiers: Vec<&'a str>) -> Vec<&'a str> {
    if modifiers.len() < 2 {
        return modifiers;
    }

    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut pending: Vec<&str> = Vec::new();

    for modifier in modifiers {
        if modifier.starts_with('[') {
            pending.sort_unstable();
            sorted.append(&mut pending);
            sorted.push(modifier);
        } else {
            pending.push(modifier);
        }
    }
    pending.sort_unstable();
    sorted.append(&mut pending);

    sorted
}
