//! Static keyword and color tables used by the declaration rules.

/// `font-size` absolute-size keywords, longest spelling first so alternations built from this
/// table never stop at a shorter suffix.
pub const FONT_SIZE_KEYWORDS: &[(&str, &str)] = &[
    ("xxx-large", "2.0em"),
    ("xx-large", "1.7em"),
    ("x-large", "1.3em"),
    ("large", "1.15em"),
    ("medium", "1.0em"),
    ("small", "0.9em"),
    ("x-small", "0.7em"),
    ("xx-small", "0.5em"),
];

/// Border-width keywords.
pub const BORDER_WIDTH_KEYWORDS: &[(&str, &str)] =
    &[("thin", "1px"), ("medium", "3px"), ("thick", "5px")];

/// Width used for a border whose width is implied by its style.
pub const DEFAULT_BORDER_WIDTH: &str = "3px";

/// Color used for a border shorthand without a color token.
pub const DEFAULT_BORDER_COLOR: &str = "black";

/// Border styles that hide the border (width collapses to `0px`).
pub const HIDDEN_BORDER_STYLES: &[&str] = &["none", "hidden"];

/// Border styles that are drawn; all of them collapse to a solid `3px` border.
pub const VISIBLE_BORDER_STYLES: &[&str] = &[
    "solid", "dotted", "dashed", "double", "groove", "ridge", "inset", "outset",
];

/// Keywords valid in a `background` shorthand that are not colors.
pub const BACKGROUND_KEYWORDS: &[&str] = &[
    "none",
    "fixed",
    "scroll",
    "local",
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "top",
    "bottom",
    "left",
    "right",
    "center",
    "inherit",
    "initial",
    "unset",
];

/// CSS-wide keywords. Declarations using them are never rewritten.
pub const CSS_WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert"];

/// Named colors outside the RCSS palette, mapped to their sRGB hex value.
///
/// RCSS only knows the HTML 4 names plus `orange`, `grey` and `transparent`; everything the
/// test suite uses beyond that is listed here.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("pink", "#ffc0cb"),
    ("lightblue", "#add8e6"),
    ("lightgreen", "#90ee90"),
    ("lightgray", "#d3d3d3"),
    ("lightgrey", "#d3d3d3"),
    ("darkgray", "#a9a9a9"),
    ("darkgrey", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkblue", "#00008b"),
    ("darkred", "#8b0000"),
    ("brown", "#a52a2a"),
    ("gold", "#ffd700"),
    ("tan", "#d2b48c"),
    ("violet", "#ee82ee"),
    ("indigo", "#4b0082"),
    ("salmon", "#fa8072"),
    ("wheat", "#f5deb3"),
    ("khaki", "#f0e68c"),
];

/// Case-insensitive lookup in one of the keyword tables.
pub fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}

pub fn contains_keyword(list: &[&str], key: &str) -> bool {
    list.iter().any(|k| k.eq_ignore_ascii_case(key))
}

pub fn map_named_color(name: &str) -> Option<&'static str> {
    lookup(NAMED_COLORS, name)
}
