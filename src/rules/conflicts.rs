//! Conflict-group table.
//!
//! Each entry declares the groups a key group invalidates when both appear
//! under the same modifier signature. The relation is directional: `p`
//! clears `px`, but a later `px` leaves an earlier `p` in place. Missing
//! groups simply conflict with nothing beyond themselves.

pub(crate) const CONFLICTING_CLASS_GROUPS: &[(&str, &[&str])] = &[
    ("overflow", &["overflow-x", "overflow-y"]),
    ("overscroll", &["overscroll-x", "overscroll-y"]),
    ("inset", &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("flex", &["basis", "grow", "shrink"]),
    ("gap", &["gap-x", "gap-y"]),
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("font-size", &["leading"]),
    ("fvn-normal", &["fvn-ordinal", "fvn-slashed-zero", "fvn-figure", "fvn-spacing", "fvn-fraction"]),
    ("fvn-ordinal", &["fvn-normal"]),
    ("fvn-slashed-zero", &["fvn-normal"]),
    ("fvn-figure", &["fvn-normal"]),
    ("fvn-spacing", &["fvn-normal"]),
    ("fvn-fraction", &["fvn-normal"]),
    ("line-clamp", &["display", "overflow"]),
    (
        "rounded",
        &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    ("border-spacing", &["border-spacing-x", "border-spacing-y"]),
    ("border-w", &["border-w-s", "border-w-e", "border-w-t", "border-w-r", "border-w-b", "border-w-l"]),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    ("border-color", &["border-color-t", "border-color-r", "border-color-b", "border-color-l"]),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
    ("scroll-m", &["scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml"]),
    ("scroll-mx", &["scroll-mr", "scroll-ml"]),
    ("scroll-my", &["scroll-mt", "scroll-mb"]),
    ("scroll-p", &["scroll-px", "scroll-py", "scroll-ps", "scroll-pe", "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl"]),
    ("scroll-px", &["scroll-pr", "scroll-pl"]),
    ("scroll-py", &["scroll-pt", "scroll-pb"]),
    ("touch", &["touch-x", "touch-y", "touch-pz"]),
    ("touch-x", &["touch"]),
    ("touch-y", &["touch"]),
    ("touch-pz", &["touch"]),
];
