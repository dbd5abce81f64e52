//! Value predicates used by the classification trie.
//!
//! Every predicate is total over strings: malformed input returns false,
//! never an error. Fallible parsing goes through `str::parse(..).is_ok()`
//! and regex matching through lazily compiled statics, so the lookup path
//! stays allocation-free.

/// Keyword values accepted wherever a length is.
const STRING_LENGTHS: &[&str] = &["px", "full", "screen"];

/// Label tag sets for tagged arbitrary values like `[length:var(--x)]`.
const SIZE_LABELS: &[&str] = &["length", "size", "percentage"];
const IMAGE_LABELS: &[&str] = &["image", "url"];

/// How a tagged arbitrary value's label is matched.
#[derive(Clone, Copy)]
enum Label {
    /// No tag is acceptable.
    None,
    Name(&'static str),
    Names(&'static [&'static str]),
}

pub(crate) fn is_any(_: &str) -> bool {
    true
}

pub(crate) fn is_number(val: &str) -> bool {
    val.parse::<f64>().is_ok()
}

pub(crate) fn is_integer(val: &str) -> bool {
    val.parse::<i64>().is_ok()
}

pub(crate) fn is_percent(val: &str) -> bool {
    val.strip_suffix('%').is_some_and(is_number)
}

pub(crate) fn is_fraction(val: &str) -> bool {
    regex!(r"^\d+/\d+$").is_match(val)
}

pub(crate) fn is_length(val: &str) -> bool {
    is_number(val) || STRING_LENGTHS.contains(&val) || is_fraction(val)
}

pub(crate) fn is_tshirt_size(val: &str) -> bool {
    regex!(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").is_match(val)
}

pub(crate) fn is_shadow(val: &str) -> bool {
    regex!(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)").is_match(val)
}

pub(crate) fn is_image(val: &str) -> bool {
    regex!(r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$")
        .is_match(val)
}

fn is_length_only(val: &str) -> bool {
    let unit = regex!(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$"
    );
    let color_fn = regex!(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch))\(.+\)$");
    unit.is_match(val) && !color_fn.is_match(val)
}

/// Any bracketed value, tagged or not.
pub(crate) fn is_arbitrary_value(val: &str) -> bool {
    arbitrary_parts(val).is_some()
}

pub(crate) fn is_arbitrary_length(val: &str) -> bool {
    is_arbitrary_with(val, Label::Name("length"), is_length_only)
}

pub(crate) fn is_arbitrary_number(val: &str) -> bool {
    is_arbitrary_with(val, Label::Name("number"), is_number)
}

pub(crate) fn is_arbitrary_position(val: &str) -> bool {
    is_arbitrary_with(val, Label::Name("position"), |_| false)
}

pub(crate) fn is_arbitrary_size(val: &str) -> bool {
    is_arbitrary_with(val, Label::Names(SIZE_LABELS), |_| false)
}

pub(crate) fn is_arbitrary_image(val: &str) -> bool {
    is_arbitrary_with(val, Label::Names(IMAGE_LABELS), is_image)
}

pub(crate) fn is_arbitrary_shadow(val: &str) -> bool {
    is_arbitrary_with(val, Label::None, is_shadow)
}

/// Split `[tag:content]` into its optional lowercase tag and content.
fn arbitrary_parts(val: &str) -> Option<(Option<&str>, &str)> {
    let caps = regex!(r"(?i)^\[(?:([a-z-]+):)?(.+)\]$").captures(val)?;
    Some((caps.get(1).map(|m| m.as_str()), caps.get(2).map_or("", |m| m.as_str())))
}

/// Tagged values are decided by their label alone; untagged values fall
/// through to the content predicate.
fn is_arbitrary_with(val: &str, label: Label, test: fn(&str) -> bool) -> bool {
    let Some((tag, content)) = arbitrary_parts(val) else {
        return false;
    };
    match tag {
        Some(tag) => match label {
            Label::None => false,
            Label::Name(name) => tag == name,
            Label::Names(names) => names.contains(&tag),
        },
        None => test(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_lengths() {
        assert!(is_number("4"));
        assert!(is_number("2.5"));
        assert!(is_number("-3"));
        assert!(!is_number("4px"));
        assert!(!is_number(""));

        assert!(is_length("0.5"));
        assert!(is_length("px"));
        assert!(is_length("full"));
        assert!(is_length("screen"));
        assert!(is_length("1/2"));
        assert!(!is_length("auto"));
    }

    #[test]
    fn percents_and_fractions() {
        assert!(is_percent("50%"));
        assert!(is_percent("2.5%"));
        assert!(!is_percent("%"));
        assert!(!is_percent("50"));

        assert!(is_fraction("1/2"));
        assert!(is_fraction("11/12"));
        assert!(!is_fraction("1/"));
        assert!(!is_fraction("a/b"));
    }

    #[test]
    fn tshirt_sizes() {
        for val in ["xs", "sm", "md", "lg", "xl", "2xl", "7xl", "2.5xl"] {
            assert!(is_tshirt_size(val), "{val} should be a t-shirt size");
        }
        for val in ["", "base", "xxl", "2px"] {
            assert!(!is_tshirt_size(val), "{val} should not be a t-shirt size");
        }
    }

    #[test]
    fn arbitrary_values() {
        assert!(is_arbitrary_value("[3.7rem]"));
        assert!(is_arbitrary_value("[length:var(--x)]"));
        assert!(!is_arbitrary_value("3.7rem"));
        assert!(!is_arbitrary_value("[]"));
    }

    #[test]
    fn arbitrary_lengths_and_numbers() {
        assert!(is_arbitrary_length("[3.7rem]"));
        assert!(is_arbitrary_length("[length:var(--x)]"));
        assert!(!is_arbitrary_length("[#bada55]"));
        assert!(!is_arbitrary_length("[rgba(0,0,0,0.5)]"));

        assert!(is_arbitrary_number("[42]"));
        assert!(is_arbitrary_number("[number:var(--w)]"));
        assert!(!is_arbitrary_number("[42px]"));
    }

    #[test]
    fn arbitrary_sizes_positions_images() {
        assert!(is_arbitrary_size("[size:200px_100px]"));
        assert!(is_arbitrary_size("[percentage:25%]"));
        assert!(!is_arbitrary_size("[200px_100px]"));

        assert!(is_arbitrary_position("[position:200px_100px]"));
        assert!(!is_arbitrary_position("[200px_100px]"));

        assert!(is_arbitrary_image("[url('/img.png')]"));
        assert!(is_arbitrary_image("[image:var(--maybe-an-image)]"));
        assert!(is_arbitrary_image("[linear-gradient(to_bottom,red,blue)]"));
        assert!(!is_arbitrary_image("[red,blue]"));
    }

    #[test]
    fn arbitrary_shadows() {
        assert!(is_arbitrary_shadow("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(is_arbitrary_shadow("[inset_0_1px_0,inset_0_-1px_0]"));
        assert!(is_arbitrary_shadow("[0_0_#00f]"));
        assert!(is_arbitrary_shadow("[.5rem_0_rgba(5,5,5,5)]"));
        assert!(is_arbitrary_shadow("[-.5rem_0_#123456]"));

        assert!(!is_arbitrary_shadow("[rgba(5,5,5,5)]"));
        assert!(!is_arbitrary_shadow("[#00f]"));
        assert!(!is_arbitrary_shadow("[something-else]"));
    }
}
