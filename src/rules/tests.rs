use crate::config::DEFAULT_CONFIG;
use crate::rules::conflicts::CONFLICTING_CLASS_GROUPS;

fn group_of(base: &str) -> Option<String> {
    DEFAULT_CONFIG
        .class_groups
        .classify(base, DEFAULT_CONFIG.class_separator)
        .map(|g| g.into_owned())
}

#[test]
fn classification_table() {
    // Array of (class, expected group)
    let cases: Vec<(&str, &str)> = vec![
        // layout
        ("aspect-video", "aspect"),
        ("aspect-[4/3]", "aspect"),
        ("container", "container"),
        ("columns-3xl", "columns"),
        ("break-after-page", "break-after"),
        ("break-before-column", "break-before"),
        ("break-inside-avoid-column", "break-inside"),
        ("box-border", "box"),
        ("box-decoration-slice", "box-decoration"),
        ("block", "display"),
        ("inline-flex", "display"),
        ("table-row-group", "display"),
        ("hidden", "display"),
        ("float-start", "float"),
        ("clear-both", "clear"),
        ("isolate", "isolation"),
        ("isolation-auto", "isolation"),
        ("object-scale-down", "object-fit"),
        ("object-left-top", "object-position"),
        ("overflow-hidden", "overflow"),
        ("overflow-x-scroll", "overflow-x"),
        ("overscroll-y-contain", "overscroll-y"),
        ("static", "position"),
        ("sticky", "position"),
        ("inset-0", "inset"),
        ("inset-x-auto", "inset-x"),
        ("-inset-4", "inset"),
        ("start-2", "start"),
        ("top-[117px]", "top"),
        ("invisible", "visibility"),
        ("z-50", "z"),
        ("z-auto", "z"),
        ("-z-10", "z"),
        // flexbox & grid
        ("basis-1", "basis"),
        ("flex-row-reverse", "flex-direction"),
        ("flex-wrap", "flex-wrap"),
        ("flex-1", "flex"),
        ("flex-[2_2_0%]", "flex"),
        ("grow", "grow"),
        ("grow-0", "grow"),
        ("shrink", "shrink"),
        ("order-first", "order"),
        ("order-11", "order"),
        ("grid-cols-4", "grid-cols"),
        ("grid-cols-[200px_minmax(900px,_1fr)_100px]", "grid-cols"),
        ("col-auto", "col-start-end"),
        ("col-span-full", "col-start-end"),
        ("col-span-3", "col-start-end"),
        ("col-start-7", "col-start"),
        ("col-end-auto", "col-end"),
        ("grid-rows-3", "grid-rows"),
        ("row-span-2", "row-start-end"),
        ("grid-flow-row-dense", "grid-flow"),
        ("auto-cols-fr", "auto-cols"),
        ("auto-rows-min", "auto-rows"),
        ("gap-4", "gap"),
        ("gap-x-px", "gap-x"),
        ("justify-between", "justify-content"),
        ("justify-items-center", "justify-items"),
        ("justify-self-stretch", "justify-self"),
        ("content-around", "align-content"),
        ("items-baseline", "align-items"),
        ("self-end", "align-self"),
        ("place-content-evenly", "place-content"),
        ("place-items-start", "place-items"),
        ("place-self-auto", "place-self"),
        // spacing
        ("p-4", "p"),
        ("px-2.5", "px"),
        ("ps-1", "ps"),
        ("pb-[7px]", "pb"),
        ("m-auto", "m"),
        ("-mt-2", "mt"),
        ("me-0", "me"),
        ("space-x-3", "space-x"),
        ("space-y-reverse", "space-y-reverse"),
        // sizing
        ("w-full", "w"),
        ("w-auto", "w"),
        ("w-11/12", "w"),
        ("min-w-fit", "min-w"),
        ("max-w-prose", "max-w"),
        ("max-w-screen-2xl", "max-w"),
        ("h-screen", "h"),
        ("min-h-dvh", "min-h"),
        ("max-h-64", "max-h"),
        ("size-10", "size"),
        // typography
        ("text-base", "font-size"),
        ("text-2xl", "font-size"),
        ("text-[14px]", "font-size"),
        ("text-center", "text-alignment"),
        ("text-red-500", "text-color"),
        ("text-[#bada55]", "text-color"),
        ("text-ellipsis", "text-overflow"),
        ("truncate", "text-overflow"),
        ("text-balance", "text-wrap"),
        ("text-opacity-50", "text-opacity"),
        ("antialiased", "font-smoothing"),
        ("not-italic", "font-style"),
        ("font-semibold", "font-weight"),
        ("font-[1100]", "font-weight"),
        ("font-mono", "font-family"),
        ("normal-nums", "fvn-normal"),
        ("ordinal", "fvn-ordinal"),
        ("slashed-zero", "fvn-slashed-zero"),
        ("tabular-nums", "fvn-spacing"),
        ("stacked-fractions", "fvn-fraction"),
        ("tracking-widest", "tracking"),
        ("line-clamp-3", "line-clamp"),
        ("leading-relaxed", "leading"),
        ("leading-7", "leading"),
        ("list-image-none", "list-image"),
        ("list-decimal", "list-style-type"),
        ("list-inside", "list-style-position"),
        ("placeholder-gray-400", "placeholder-color"),
        ("underline", "text-decoration"),
        ("no-underline", "text-decoration"),
        ("decoration-wavy", "text-decoration-style"),
        ("decoration-from-font", "text-decoration-thickness"),
        ("decoration-4", "text-decoration-thickness"),
        ("decoration-sky-500", "text-decoration-color"),
        ("underline-offset-4", "underline-offset"),
        ("uppercase", "text-transform"),
        ("indent-8", "indent"),
        ("align-text-bottom", "vertical-align"),
        ("whitespace-pre-wrap", "whitespace"),
        ("break-words", "break"),
        ("hyphens-manual", "hyphens"),
        ("content-none", "content"),
        ("content-['>']", "content"),
        // backgrounds
        ("bg-fixed", "bg-attachment"),
        ("bg-clip-text", "bg-clip"),
        ("bg-opacity-75", "bg-opacity"),
        ("bg-origin-content", "bg-origin"),
        ("bg-left-bottom", "bg-position"),
        ("bg-[position:200px_100px]", "bg-position"),
        ("bg-no-repeat", "bg-repeat"),
        ("bg-repeat-round", "bg-repeat"),
        ("bg-cover", "bg-size"),
        ("bg-[size:200px_100px]", "bg-size"),
        ("bg-none", "bg-image"),
        ("bg-gradient-to-tr", "bg-image"),
        ("bg-[url('/img.png')]", "bg-image"),
        ("bg-red-500", "bg-color"),
        ("bg-[#bada55]", "bg-color"),
        ("from-emerald-400", "gradient-from"),
        ("from-10%", "gradient-from-pos"),
        ("via-purple-500", "gradient-via"),
        ("to-90%", "gradient-to-pos"),
        // borders
        ("rounded", "rounded"),
        ("rounded-full", "rounded"),
        ("rounded-2xl", "rounded"),
        ("rounded-t-lg", "rounded-t"),
        ("rounded-ss-none", "rounded-ss"),
        ("border", "border-w"),
        ("border-4", "border-w"),
        ("border-x-2", "border-w-x"),
        ("border-t", "border-w-t"),
        ("border-dashed", "border-style"),
        ("border-collapse", "border-collapse"),
        ("border-spacing-2", "border-spacing"),
        ("border-spacing-x-px", "border-spacing-x"),
        ("border-rose-300", "border-color"),
        ("border-t-amber-100", "border-color-t"),
        ("divide-y", "divide-y"),
        ("divide-x-4", "divide-x"),
        ("divide-dotted", "divide-style"),
        ("divide-slate-200", "divide-color"),
        ("outline", "outline-style"),
        ("outline-none", "outline-style"),
        ("outline-2", "outline-w"),
        ("outline-offset-2", "outline-offset"),
        ("outline-indigo-600", "outline-color"),
        ("ring", "ring-w"),
        ("ring-4", "ring-w"),
        ("ring-inset", "ring-w-inset"),
        ("ring-cyan-500", "ring-color"),
        ("ring-offset-2", "ring-offset-w"),
        ("ring-offset-white", "ring-offset-color"),
        // effects
        ("shadow", "shadow"),
        ("shadow-md", "shadow"),
        ("shadow-none", "shadow"),
        ("shadow-[0_35px_60px_-15px_rgba(0,0,0,0.3)]", "shadow"),
        ("shadow-rose-500", "shadow-color"),
        ("opacity-25", "opacity"),
        ("opacity-[.67]", "opacity"),
        ("mix-blend-soft-light", "mix-blend"),
        ("bg-blend-multiply", "bg-blend"),
        // filters
        ("filter", "filter"),
        ("filter-none", "filter"),
        ("blur-sm", "blur"),
        ("brightness-150", "brightness"),
        ("contrast-0", "contrast"),
        ("drop-shadow-xl", "drop-shadow"),
        ("grayscale", "grayscale"),
        ("hue-rotate-90", "hue-rotate"),
        ("invert-0", "invert"),
        ("saturate-50", "saturate"),
        ("sepia", "sepia"),
        ("backdrop-blur-lg", "backdrop-blur"),
        ("backdrop-opacity-60", "backdrop-opacity"),
        // tables
        ("table-fixed", "table-layout"),
        ("caption-bottom", "caption"),
        // transitions & animation
        ("transition", "transition"),
        ("transition-colors", "transition"),
        ("duration-300", "duration"),
        ("ease-in-out", "ease"),
        ("delay-150", "delay"),
        ("animate-spin", "animate"),
        // transforms
        ("transform-gpu", "transform"),
        ("scale-95", "scale"),
        ("scale-x-110", "scale-x"),
        ("rotate-45", "rotate"),
        ("-rotate-45", "rotate"),
        ("translate-x-full", "translate-x"),
        ("translate-y-2", "translate-y"),
        ("skew-x-12", "skew-x"),
        ("origin-top-left", "transform-origin"),
        // interactivity
        ("accent-pink-500", "accent"),
        ("appearance-none", "appearance"),
        ("cursor-not-allowed", "cursor"),
        ("caret-blue-700", "caret-color"),
        ("pointer-events-none", "pointer-events"),
        ("resize-y", "resize"),
        ("scroll-smooth", "scroll-behavior"),
        ("scroll-m-4", "scroll-m"),
        ("scroll-pt-8", "scroll-pt"),
        ("snap-center", "snap-align"),
        ("snap-always", "snap-stop"),
        ("snap-both", "snap-type"),
        ("snap-mandatory", "snap-strictness"),
        ("touch-none", "touch"),
        ("touch-pan-left", "touch-x"),
        ("touch-pan-up", "touch-y"),
        ("touch-pinch-zoom", "touch-pz"),
        ("select-all", "select"),
        ("will-change-transform", "will-change"),
        // svg
        ("fill-none", "fill"),
        ("fill-amber-500", "fill"),
        ("stroke-2", "stroke-w"),
        ("stroke-none", "stroke"),
        ("stroke-lime-600", "stroke"),
        // accessibility
        ("sr-only", "sr"),
        ("forced-color-adjust-auto", "forced-color-adjust"),
        // arbitrary properties
        ("[mask-type:luminance]", "arbitrary..mask-type"),
        ("[--scroll-offset:56px]", "arbitrary..--scroll-offset"),
    ];

    for (class, expected) in cases {
        assert_eq!(group_of(class).as_deref(), Some(expected), "classifying {class:?}");
    }
}

#[test]
fn unknown_classes_stay_unclassified() {
    for class in [
        "btn",
        "my-custom-class",
        "p",
        "p-",
        "text",
        "bordered",
        "shadowy-lg",
        "[not-a-property]",
        "",
    ] {
        assert_eq!(group_of(class), None, "classifying {class:?}");
    }
}

#[test]
fn every_conflict_group_is_declared_in_the_trie() {
    let declared = DEFAULT_CONFIG.class_groups.declared_groups();
    for (key, conflicts) in CONFLICTING_CLASS_GROUPS {
        assert!(declared.contains(key), "conflict key {key:?} missing from the class table");
        for group in *conflicts {
            assert!(declared.contains(group), "conflict target {group:?} missing from the class table");
        }
    }
}

#[test]
fn class_table_has_substantial_coverage() {
    let nodes = DEFAULT_CONFIG.class_groups.node_count();
    assert!(nodes > 300, "class table suspiciously small: {nodes} nodes");
}
