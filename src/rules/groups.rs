//! The class-group trie table.
//!
//! Generated-data register: one builder call per class family, grouped by
//! the upstream utility sections. Literal paths map fixed keywords; the
//! validator attachments handle open-ended values (scales, colors,
//! arbitrary bracket syntax). Group identifiers here must stay in sync with
//! `super::conflicts`.

use super::validators as v;
use crate::ClassTrie;

/// Scale values: numbers, keyword lengths, fractions, arbitrary lengths.
fn scale(t: &mut ClassTrie, path: &'static str, group: &'static str) {
    t.validator(path, v::is_arbitrary_value, group);
    t.validator(path, v::is_length, group);
    t.validator(path, v::is_arbitrary_length, group);
}

/// Scale values plus the `auto` keyword.
fn scale_auto(t: &mut ClassTrie, path: &'static str, group: &'static str) {
    t.values(path, &["auto"], group);
    scale(t, path, group);
}

/// Bare and arbitrary numeric values.
fn number(t: &mut ClassTrie, path: &'static str, group: &'static str) {
    t.validator(path, v::is_number, group);
    t.validator(path, v::is_arbitrary_number, group);
}

/// Open color values (named palettes, opacity suffixes, arbitrary syntax).
fn color(t: &mut ClassTrie, path: &'static str, group: &'static str) {
    t.validator(path, v::is_any, group);
}

pub(crate) fn build_class_trie() -> ClassTrie {
    let mut t = ClassTrie::new();

    // Layout
    t.values("aspect", &["auto", "square", "video"], "aspect");
    t.validator("aspect", v::is_arbitrary_value, "aspect");
    t.add("container", "container");
    t.validator("columns", v::is_tshirt_size, "columns");
    t.values("break-after", &["auto", "avoid", "all", "page", "left", "right", "column"], "break-after");
    t.values("break-before", &["auto", "avoid", "all", "page", "left", "right", "column"], "break-before");
    t.values("break-inside", &["auto", "avoid", "avoid-page", "avoid-column"], "break-inside");
    t.values("box-decoration", &["slice", "clone"], "box-decoration");
    t.values("box", &["border", "content"], "box");
    t.values(
        "",
        &[
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ],
        "display",
    );
    t.values("float", &["right", "left", "none", "start", "end"], "float");
    t.values("clear", &["left", "right", "both", "none", "start", "end"], "clear");
    t.add("isolate", "isolation");
    t.add("isolation-auto", "isolation");
    t.values("object", &["contain", "cover", "fill", "none", "scale-down"], "object-fit");
    t.values(
        "object",
        &["bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top"],
        "object-position",
    );
    t.validator("object", v::is_arbitrary_value, "object-position");
    t.values("overflow", &["auto", "hidden", "clip", "visible", "scroll"], "overflow");
    t.values("overflow-x", &["auto", "hidden", "clip", "visible", "scroll"], "overflow-x");
    t.values("overflow-y", &["auto", "hidden", "clip", "visible", "scroll"], "overflow-y");
    t.values("overscroll", &["auto", "contain", "none"], "overscroll");
    t.values("overscroll-x", &["auto", "contain", "none"], "overscroll-x");
    t.values("overscroll-y", &["auto", "contain", "none"], "overscroll-y");
    t.values("", &["static", "fixed", "absolute", "relative", "sticky"], "position");
    scale_auto(&mut t, "inset", "inset");
    scale_auto(&mut t, "inset-x", "inset-x");
    scale_auto(&mut t, "inset-y", "inset-y");
    scale_auto(&mut t, "start", "start");
    scale_auto(&mut t, "end", "end");
    scale_auto(&mut t, "top", "top");
    scale_auto(&mut t, "right", "right");
    scale_auto(&mut t, "bottom", "bottom");
    scale_auto(&mut t, "left", "left");
    t.values("", &["visible", "invisible", "collapse"], "visibility");
    t.values("z", &["auto"], "z");
    t.validator("z", v::is_integer, "z");
    t.validator("z", v::is_arbitrary_value, "z");

    // Flexbox & grid
    scale_auto(&mut t, "basis", "basis");
    t.values("flex", &["row", "row-reverse", "col", "col-reverse"], "flex-direction");
    t.values("flex", &["wrap", "wrap-reverse", "nowrap"], "flex-wrap");
    t.values("flex", &["1", "auto", "initial", "none"], "flex");
    t.validator("flex", v::is_arbitrary_value, "flex");
    t.add("grow", "grow");
    number(&mut t, "grow", "grow");
    t.add("shrink", "shrink");
    number(&mut t, "shrink", "shrink");
    t.values("order", &["first", "last", "none"], "order");
    t.validator("order", v::is_integer, "order");
    t.validator("order", v::is_arbitrary_value, "order");
    t.validator("grid-cols", v::is_any, "grid-cols");
    t.values("col", &["auto"], "col-start-end");
    t.values("col-span", &["full"], "col-start-end");
    t.validator("col-span", v::is_integer, "col-start-end");
    t.validator("col-span", v::is_arbitrary_value, "col-start-end");
    t.validator("col", v::is_arbitrary_value, "col-start-end");
    t.values("col-start", &["auto"], "col-start");
    number(&mut t, "col-start", "col-start");
    t.validator("col-start", v::is_arbitrary_value, "col-start");
    t.values("col-end", &["auto"], "col-end");
    number(&mut t, "col-end", "col-end");
    t.validator("col-end", v::is_arbitrary_value, "col-end");
    t.validator("grid-rows", v::is_any, "grid-rows");
    t.values("row", &["auto"], "row-start-end");
    t.values("row-span", &["full"], "row-start-end");
    t.validator("row-span", v::is_integer, "row-start-end");
    t.validator("row-span", v::is_arbitrary_value, "row-start-end");
    t.validator("row", v::is_arbitrary_value, "row-start-end");
    t.values("row-start", &["auto"], "row-start");
    number(&mut t, "row-start", "row-start");
    t.validator("row-start", v::is_arbitrary_value, "row-start");
    t.values("row-end", &["auto"], "row-end");
    number(&mut t, "row-end", "row-end");
    t.validator("row-end", v::is_arbitrary_value, "row-end");
    t.values("grid-flow", &["row", "col", "dense", "row-dense", "col-dense"], "grid-flow");
    t.values("auto-cols", &["auto", "min", "max", "fr"], "auto-cols");
    t.validator("auto-cols", v::is_arbitrary_value, "auto-cols");
    t.values("auto-rows", &["auto", "min", "max", "fr"], "auto-rows");
    t.validator("auto-rows", v::is_arbitrary_value, "auto-rows");
    scale(&mut t, "gap", "gap");
    scale(&mut t, "gap-x", "gap-x");
    scale(&mut t, "gap-y", "gap-y");
    t.values(
        "justify",
        &["normal", "start", "end", "center", "between", "around", "evenly", "stretch"],
        "justify-content",
    );
    t.values("justify-items", &["start", "end", "center", "stretch"], "justify-items");
    t.values("justify-self", &["auto", "start", "end", "center", "stretch"], "justify-self");
    t.values(
        "content",
        &["normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
        "align-content",
    );
    t.values("items", &["start", "end", "center", "baseline", "stretch"], "align-items");
    t.values("self", &["auto", "start", "end", "center", "stretch", "baseline"], "align-self");
    t.values(
        "place-content",
        &["center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
        "place-content",
    );
    t.values("place-items", &["start", "end", "center", "baseline", "stretch"], "place-items");
    t.values("place-self", &["auto", "start", "end", "center", "stretch"], "place-self");

    // Spacing
    for (path, group) in [
        ("p", "p"),
        ("px", "px"),
        ("py", "py"),
        ("ps", "ps"),
        ("pe", "pe"),
        ("pt", "pt"),
        ("pr", "pr"),
        ("pb", "pb"),
        ("pl", "pl"),
    ] {
        scale(&mut t, path, group);
    }
    for (path, group) in [
        ("m", "m"),
        ("mx", "mx"),
        ("my", "my"),
        ("ms", "ms"),
        ("me", "me"),
        ("mt", "mt"),
        ("mr", "mr"),
        ("mb", "mb"),
        ("ml", "ml"),
    ] {
        scale_auto(&mut t, path, group);
    }
    scale(&mut t, "space-x", "space-x");
    t.add("space-x-reverse", "space-x-reverse");
    scale(&mut t, "space-y", "space-y");
    t.add("space-y-reverse", "space-y-reverse");

    // Sizing
    t.values("w", &["auto", "min", "max", "fit", "svw", "lvw", "dvw"], "w");
    scale(&mut t, "w", "w");
    t.values("min-w", &["full", "min", "max", "fit"], "min-w");
    t.validator("min-w", v::is_arbitrary_value, "min-w");
    t.validator("min-w", v::is_length, "min-w");
    t.values("max-w", &["none", "full", "min", "max", "fit", "prose"], "max-w");
    t.validator("max-w-screen", v::is_tshirt_size, "max-w");
    t.validator("max-w", v::is_arbitrary_value, "max-w");
    t.validator("max-w", v::is_length, "max-w");
    t.validator("max-w", v::is_tshirt_size, "max-w");
    t.values("h", &["auto", "min", "max", "fit", "svh", "lvh", "dvh"], "h");
    scale(&mut t, "h", "h");
    t.values("min-h", &["full", "min", "max", "fit", "svh", "lvh", "dvh"], "min-h");
    t.validator("min-h", v::is_arbitrary_value, "min-h");
    t.validator("min-h", v::is_length, "min-h");
    t.values("max-h", &["full", "min", "max", "fit", "svh", "lvh", "dvh"], "max-h");
    t.validator("max-h", v::is_arbitrary_value, "max-h");
    t.validator("max-h", v::is_length, "max-h");
    t.values("size", &["auto", "min", "max", "fit"], "size");
    scale(&mut t, "size", "size");

    // Typography
    t.add("text-base", "font-size");
    t.values("text", &["left", "center", "right", "justify", "start", "end"], "text-alignment");
    t.values("text", &["ellipsis", "clip"], "text-overflow");
    t.values("text", &["wrap", "nowrap", "balance", "pretty"], "text-wrap");
    number(&mut t, "text-opacity", "text-opacity");
    t.validator("text", v::is_tshirt_size, "font-size");
    t.validator("text", v::is_arbitrary_length, "font-size");
    t.validator("text", v::is_any, "text-color");
    t.values("", &["antialiased", "subpixel-antialiased"], "font-smoothing");
    t.values("", &["italic", "not-italic"], "font-style");
    t.values(
        "font",
        &["thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black"],
        "font-weight",
    );
    t.validator("font", v::is_arbitrary_number, "font-weight");
    t.values("font", &["sans", "serif", "mono"], "font-family");
    t.add("normal-nums", "fvn-normal");
    t.add("ordinal", "fvn-ordinal");
    t.add("slashed-zero", "fvn-slashed-zero");
    t.values("", &["lining-nums", "oldstyle-nums"], "fvn-figure");
    t.values("", &["proportional-nums", "tabular-nums"], "fvn-spacing");
    t.values("", &["diagonal-fractions", "stacked-fractions"], "fvn-fraction");
    t.values("tracking", &["tighter", "tight", "normal", "wide", "wider", "widest"], "tracking");
    t.validator("tracking", v::is_arbitrary_value, "tracking");
    t.values("line-clamp", &["none"], "line-clamp");
    number(&mut t, "line-clamp", "line-clamp");
    t.values("leading", &["none", "tight", "snug", "normal", "relaxed", "loose"], "leading");
    t.validator("leading", v::is_length, "leading");
    t.validator("leading", v::is_arbitrary_value, "leading");
    t.values("list-image", &["none"], "list-image");
    t.validator("list-image", v::is_arbitrary_value, "list-image");
    t.values("list", &["none", "disc", "decimal"], "list-style-type");
    t.validator("list", v::is_arbitrary_value, "list-style-type");
    t.values("list", &["inside", "outside"], "list-style-position");
    color(&mut t, "placeholder", "placeholder-color");
    number(&mut t, "placeholder-opacity", "placeholder-opacity");
    t.values("", &["underline", "overline", "line-through", "no-underline"], "text-decoration");
    t.values("decoration", &["solid", "dashed", "dotted", "double", "wavy"], "text-decoration-style");
    t.values("decoration", &["auto", "from-font"], "text-decoration-thickness");
    t.validator("decoration", v::is_length, "text-decoration-thickness");
    t.validator("decoration", v::is_arbitrary_length, "text-decoration-thickness");
    color(&mut t, "decoration", "text-decoration-color");
    t.values("underline-offset", &["auto"], "underline-offset");
    t.validator("underline-offset", v::is_length, "underline-offset");
    t.validator("underline-offset", v::is_arbitrary_value, "underline-offset");
    t.values("", &["uppercase", "lowercase", "capitalize", "normal-case"], "text-transform");
    t.add("truncate", "text-overflow");
    scale(&mut t, "indent", "indent");
    t.values(
        "align",
        &["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"],
        "vertical-align",
    );
    t.validator("align", v::is_arbitrary_value, "vertical-align");
    t.values("whitespace", &["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"], "whitespace");
    t.values("break", &["normal", "words", "all", "keep"], "break");
    t.values("hyphens", &["none", "manual", "auto"], "hyphens");
    t.values("content", &["none"], "content");
    t.validator("content", v::is_arbitrary_value, "content");

    // Backgrounds
    t.values("bg", &["fixed", "local", "scroll"], "bg-attachment");
    t.values("bg-clip", &["border", "padding", "content", "text"], "bg-clip");
    number(&mut t, "bg-opacity", "bg-opacity");
    t.values("bg-origin", &["border", "padding", "content"], "bg-origin");
    t.values(
        "bg",
        &["bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top"],
        "bg-position",
    );
    t.validator("bg", v::is_arbitrary_position, "bg-position");
    t.values("bg", &["repeat", "no-repeat"], "bg-repeat");
    t.values("bg-repeat", &["x", "y", "round", "space"], "bg-repeat");
    t.values("bg", &["auto", "cover", "contain"], "bg-size");
    t.validator("bg", v::is_arbitrary_size, "bg-size");
    t.values("bg", &["none"], "bg-image");
    t.values("bg-gradient-to", &["t", "tr", "r", "br", "b", "bl", "l", "tl"], "bg-image");
    t.validator("bg", v::is_arbitrary_image, "bg-image");
    color(&mut t, "bg", "bg-color");
    t.validator("from", v::is_percent, "gradient-from-pos");
    t.validator("from", v::is_arbitrary_length, "gradient-from-pos");
    color(&mut t, "from", "gradient-from");
    t.validator("via", v::is_percent, "gradient-via-pos");
    t.validator("via", v::is_arbitrary_length, "gradient-via-pos");
    color(&mut t, "via", "gradient-via");
    t.validator("to", v::is_percent, "gradient-to-pos");
    t.validator("to", v::is_arbitrary_length, "gradient-to-pos");
    color(&mut t, "to", "gradient-to");

    // Borders
    t.add("rounded", "rounded");
    t.values("rounded", &["none", "full"], "rounded");
    t.validator("rounded", v::is_tshirt_size, "rounded");
    t.validator("rounded", v::is_arbitrary_value, "rounded");
    for (path, group) in [
        ("rounded-s", "rounded-s"),
        ("rounded-e", "rounded-e"),
        ("rounded-t", "rounded-t"),
        ("rounded-r", "rounded-r"),
        ("rounded-b", "rounded-b"),
        ("rounded-l", "rounded-l"),
        ("rounded-ss", "rounded-ss"),
        ("rounded-se", "rounded-se"),
        ("rounded-ee", "rounded-ee"),
        ("rounded-es", "rounded-es"),
        ("rounded-tl", "rounded-tl"),
        ("rounded-tr", "rounded-tr"),
        ("rounded-br", "rounded-br"),
        ("rounded-bl", "rounded-bl"),
    ] {
        t.add(path, group);
        t.values(path, &["none", "full"], group);
        t.validator(path, v::is_tshirt_size, group);
        t.validator(path, v::is_arbitrary_value, group);
    }
    t.add("border", "border-w");
    t.validator("border", v::is_length, "border-w");
    t.validator("border", v::is_arbitrary_length, "border-w");
    for (path, width_group, color_group) in [
        ("border-x", "border-w-x", Some("border-color-x")),
        ("border-y", "border-w-y", Some("border-color-y")),
        ("border-s", "border-w-s", None),
        ("border-e", "border-w-e", None),
        ("border-t", "border-w-t", Some("border-color-t")),
        ("border-r", "border-w-r", Some("border-color-r")),
        ("border-b", "border-w-b", Some("border-color-b")),
        ("border-l", "border-w-l", Some("border-color-l")),
    ] {
        t.add(path, width_group);
        t.validator(path, v::is_length, width_group);
        t.validator(path, v::is_arbitrary_length, width_group);
        if let Some(color_group) = color_group {
            t.validator(path, v::is_any, color_group);
        }
    }
    t.values("border", &["solid", "dashed", "dotted", "double", "none", "hidden"], "border-style");
    t.values("border", &["collapse", "separate"], "border-collapse");
    scale(&mut t, "border-spacing", "border-spacing");
    scale(&mut t, "border-spacing-x", "border-spacing-x");
    scale(&mut t, "border-spacing-y", "border-spacing-y");
    color(&mut t, "border", "border-color");
    t.add("divide-x", "divide-x");
    t.validator("divide-x", v::is_length, "divide-x");
    t.validator("divide-x", v::is_arbitrary_length, "divide-x");
    t.add("divide-x-reverse", "divide-x-reverse");
    t.add("divide-y", "divide-y");
    t.validator("divide-y", v::is_length, "divide-y");
    t.validator("divide-y", v::is_arbitrary_length, "divide-y");
    t.add("divide-y-reverse", "divide-y-reverse");
    t.values("divide", &["solid", "dashed", "dotted", "double", "none"], "divide-style");
    number(&mut t, "divide-opacity", "divide-opacity");
    color(&mut t, "divide", "divide-color");
    t.add("outline", "outline-style");
    t.values("outline", &["none", "dashed", "dotted", "double"], "outline-style");
    t.validator("outline-offset", v::is_length, "outline-offset");
    t.validator("outline-offset", v::is_arbitrary_value, "outline-offset");
    t.validator("outline", v::is_length, "outline-w");
    t.validator("outline", v::is_arbitrary_length, "outline-w");
    color(&mut t, "outline", "outline-color");
    t.add("ring", "ring-w");
    t.validator("ring", v::is_length, "ring-w");
    t.validator("ring", v::is_arbitrary_length, "ring-w");
    t.add("ring-inset", "ring-w-inset");
    number(&mut t, "ring-opacity", "ring-opacity");
    t.validator("ring-offset", v::is_length, "ring-offset-w");
    t.validator("ring-offset", v::is_arbitrary_length, "ring-offset-w");
    color(&mut t, "ring-offset", "ring-offset-color");
    color(&mut t, "ring", "ring-color");

    // Effects
    t.add("shadow", "shadow");
    t.values("shadow", &["inner", "none"], "shadow");
    t.validator("shadow", v::is_tshirt_size, "shadow");
    t.validator("shadow", v::is_arbitrary_shadow, "shadow");
    color(&mut t, "shadow", "shadow-color");
    number(&mut t, "opacity", "opacity");
    t.values(
        "mix-blend",
        &[
            "normal",
            "multiply",
            "screen",
            "overlay",
            "darken",
            "lighten",
            "color-dodge",
            "color-burn",
            "hard-light",
            "soft-light",
            "difference",
            "exclusion",
            "hue",
            "saturation",
            "color",
            "luminosity",
            "plus-lighter",
        ],
        "mix-blend",
    );
    t.values(
        "bg-blend",
        &[
            "normal",
            "multiply",
            "screen",
            "overlay",
            "darken",
            "lighten",
            "color-dodge",
            "color-burn",
            "hard-light",
            "soft-light",
            "difference",
            "exclusion",
            "hue",
            "saturation",
            "color",
            "luminosity",
        ],
        "bg-blend",
    );

    // Filters
    t.add("filter", "filter");
    t.values("filter", &["none"], "filter");
    t.add("blur", "blur");
    t.values("blur", &["none"], "blur");
    t.validator("blur", v::is_tshirt_size, "blur");
    t.validator("blur", v::is_arbitrary_value, "blur");
    number(&mut t, "brightness", "brightness");
    number(&mut t, "contrast", "contrast");
    t.add("drop-shadow", "drop-shadow");
    t.values("drop-shadow", &["none"], "drop-shadow");
    t.validator("drop-shadow", v::is_tshirt_size, "drop-shadow");
    t.validator("drop-shadow", v::is_arbitrary_value, "drop-shadow");
    t.add("grayscale", "grayscale");
    t.values("grayscale", &["0"], "grayscale");
    t.validator("grayscale", v::is_arbitrary_value, "grayscale");
    number(&mut t, "hue-rotate", "hue-rotate");
    t.add("invert", "invert");
    t.values("invert", &["0"], "invert");
    t.validator("invert", v::is_arbitrary_value, "invert");
    number(&mut t, "saturate", "saturate");
    t.add("sepia", "sepia");
    t.values("sepia", &["0"], "sepia");
    t.validator("sepia", v::is_arbitrary_value, "sepia");
    t.add("backdrop-filter", "backdrop-filter");
    t.values("backdrop-filter", &["none"], "backdrop-filter");
    t.add("backdrop-blur", "backdrop-blur");
    t.values("backdrop-blur", &["none"], "backdrop-blur");
    t.validator("backdrop-blur", v::is_tshirt_size, "backdrop-blur");
    t.validator("backdrop-blur", v::is_arbitrary_value, "backdrop-blur");
    number(&mut t, "backdrop-brightness", "backdrop-brightness");
    number(&mut t, "backdrop-contrast", "backdrop-contrast");
    t.add("backdrop-grayscale", "backdrop-grayscale");
    t.values("backdrop-grayscale", &["0"], "backdrop-grayscale");
    t.validator("backdrop-grayscale", v::is_arbitrary_value, "backdrop-grayscale");
    number(&mut t, "backdrop-hue-rotate", "backdrop-hue-rotate");
    t.add("backdrop-invert", "backdrop-invert");
    t.values("backdrop-invert", &["0"], "backdrop-invert");
    t.validator("backdrop-invert", v::is_arbitrary_value, "backdrop-invert");
    number(&mut t, "backdrop-opacity", "backdrop-opacity");
    number(&mut t, "backdrop-saturate", "backdrop-saturate");
    t.add("backdrop-sepia", "backdrop-sepia");
    t.values("backdrop-sepia", &["0"], "backdrop-sepia");
    t.validator("backdrop-sepia", v::is_arbitrary_value, "backdrop-sepia");

    // Tables
    t.values("table", &["auto", "fixed"], "table-layout");
    t.values("caption", &["top", "bottom"], "caption");

    // Transitions & animation
    t.add("transition", "transition");
    t.values("transition", &["none", "all", "colors", "opacity", "shadow", "transform"], "transition");
    t.validator("transition", v::is_arbitrary_value, "transition");
    number(&mut t, "duration", "duration");
    t.values("ease", &["linear", "in", "out", "in-out"], "ease");
    t.validator("ease", v::is_arbitrary_value, "ease");
    number(&mut t, "delay", "delay");
    t.values("animate", &["none", "spin", "ping", "pulse", "bounce"], "animate");
    t.validator("animate", v::is_arbitrary_value, "animate");

    // Transforms
    t.add("transform", "transform");
    t.values("transform", &["cpu", "gpu", "none"], "transform");
    number(&mut t, "scale", "scale");
    number(&mut t, "scale-x", "scale-x");
    number(&mut t, "scale-y", "scale-y");
    t.validator("rotate", v::is_integer, "rotate");
    t.validator("rotate", v::is_arbitrary_value, "rotate");
    scale(&mut t, "translate-x", "translate-x");
    t.values("translate-x", &["full"], "translate-x");
    scale(&mut t, "translate-y", "translate-y");
    t.values("translate-y", &["full"], "translate-y");
    number(&mut t, "skew-x", "skew-x");
    number(&mut t, "skew-y", "skew-y");
    t.values(
        "origin",
        &["center", "top", "top-right", "right", "bottom-right", "bottom", "bottom-left", "left", "top-left"],
        "transform-origin",
    );
    t.validator("origin", v::is_arbitrary_value, "transform-origin");

    // Interactivity
    t.values("accent", &["auto"], "accent");
    color(&mut t, "accent", "accent");
    t.add("appearance-none", "appearance");
    t.add("appearance-auto", "appearance");
    t.values(
        "cursor",
        &[
            "auto",
            "default",
            "pointer",
            "wait",
            "text",
            "move",
            "help",
            "not-allowed",
            "none",
            "context-menu",
            "progress",
            "cell",
            "crosshair",
            "vertical-text",
            "alias",
            "copy",
            "no-drop",
            "grab",
            "grabbing",
            "all-scroll",
            "col-resize",
            "row-resize",
            "n-resize",
            "e-resize",
            "s-resize",
            "w-resize",
            "ne-resize",
            "nw-resize",
            "se-resize",
            "sw-resize",
            "ew-resize",
            "ns-resize",
            "nesw-resize",
            "nwse-resize",
            "zoom-in",
            "zoom-out",
        ],
        "cursor",
    );
    t.validator("cursor", v::is_arbitrary_value, "cursor");
    color(&mut t, "caret", "caret-color");
    t.values("pointer-events", &["none", "auto"], "pointer-events");
    t.add("resize", "resize");
    t.values("resize", &["none", "x", "y"], "resize");
    t.values("scroll", &["auto", "smooth"], "scroll-behavior");
    for (path, group) in [
        ("scroll-m", "scroll-m"),
        ("scroll-mx", "scroll-mx"),
        ("scroll-my", "scroll-my"),
        ("scroll-ms", "scroll-ms"),
        ("scroll-me", "scroll-me"),
        ("scroll-mt", "scroll-mt"),
        ("scroll-mr", "scroll-mr"),
        ("scroll-mb", "scroll-mb"),
        ("scroll-ml", "scroll-ml"),
        ("scroll-p", "scroll-p"),
        ("scroll-px", "scroll-px"),
        ("scroll-py", "scroll-py"),
        ("scroll-ps", "scroll-ps"),
        ("scroll-pe", "scroll-pe"),
        ("scroll-pt", "scroll-pt"),
        ("scroll-pr", "scroll-pr"),
        ("scroll-pb", "scroll-pb"),
        ("scroll-pl", "scroll-pl"),
    ] {
        scale(&mut t, path, group);
    }
    t.values("snap", &["start", "end", "center", "align-none"], "snap-align");
    t.values("snap", &["normal", "always"], "snap-stop");
    t.values("snap", &["none", "x", "y", "both"], "snap-type");
    t.values("snap", &["mandatory", "proximity"], "snap-strictness");
    t.values("touch", &["auto", "none", "manipulation"], "touch");
    t.values("touch-pan", &["x", "left", "right"], "touch-x");
    t.values("touch-pan", &["y", "up", "down"], "touch-y");
    t.add("touch-pinch-zoom", "touch-pz");
    t.values("select", &["none", "text", "all", "auto"], "select");
    t.values("will-change", &["auto", "scroll", "contents", "transform"], "will-change");
    t.validator("will-change", v::is_arbitrary_value, "will-change");

    // SVG
    t.values("fill", &["none"], "fill");
    color(&mut t, "fill", "fill");
    t.validator("stroke", v::is_length, "stroke-w");
    t.validator("stroke", v::is_arbitrary_length, "stroke-w");
    t.validator("stroke", v::is_arbitrary_number, "stroke-w");
    t.values("stroke", &["none"], "stroke");
    color(&mut t, "stroke", "stroke");

    // Accessibility
    t.values("", &["sr-only", "not-sr-only"], "sr");
    t.values("forced-color-adjust", &["auto", "none"], "forced-color-adjust");

    t
}
