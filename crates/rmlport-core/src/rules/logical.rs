//! Logical (flow-relative) properties mapped to their physical equivalents, assuming
//! `writing-mode: horizontal-tb` and `direction: ltr`.
//!
//! The logical name is kept as a trailing comment, e.g.
//! `margin-inline-start: 4px;` becomes `margin-left: 4px; /* margin-inline-start */`.

use super::border::value_tokens;
use regex::Captures;

pub(crate) const LOGICAL_PATTERN: &str = concat!(
    r#"(?i)(?P<pre>^|[^-\w])"#,
    r#"(?P<prop>(?P<family>margin|padding|inset|border)-(?P<axis>inline|block)(?P<edge>-start|-end)?(?P<sub>-width|-style|-color)?"#,
    r#"|(?P<limit>min-|max-)?(?P<size>inline|block)-size)"#,
    r#"\s*:(?P<value>[^;}"\r\n]*);?"#,
);

/// Replacement callback for [`LOGICAL_PATTERN`].
pub(crate) fn rewrite_logical(caps: &Captures<'_>) -> String {
    let pre = caps.name("pre").map_or("", |m| m.as_str());
    let prop = &caps["prop"];
    let value = caps.name("value").map_or("", |m| m.as_str());
    match physical_declarations(prop, value) {
        Some(decls) => {
            let body = decls
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            format!("{pre}{body}; /* {} */", prop.to_ascii_lowercase())
        }
        None => caps[0].to_string(),
    }
}

/// Maps one logical declaration to the physical declarations it stands for.
///
/// Returns `None` for names that are not logical properties or for value lists that cannot be
/// split between the two physical sides.
pub fn physical_declarations(property: &str, value: &str) -> Option<Vec<(String, String)>> {
    let property = property.trim().to_ascii_lowercase();
    let value = value.trim();

    if let Some(axis) = property.strip_suffix("-size") {
        let (limit, axis) = match axis.strip_prefix("min-") {
            Some(rest) => ("min-", rest),
            None => match axis.strip_prefix("max-") {
                Some(rest) => ("max-", rest),
                None => ("", axis),
            },
        };
        let physical = match axis {
            "inline" => "width",
            "block" => "height",
            _ => return None,
        };
        return Some(vec![(format!("{limit}{physical}"), value.to_string())]);
    }

    let (family, rest) = property.split_once('-')?;
    if !matches!(family, "margin" | "padding" | "inset" | "border") {
        return None;
    }
    let (axis, rest) = match rest.split_once('-') {
        Some((axis, rest)) => (axis, Some(rest)),
        None => (rest, None),
    };
    let (start, end) = match axis {
        "inline" => ("left", "right"),
        "block" => ("top", "bottom"),
        _ => return None,
    };

    let (edge, sub) = match rest {
        None => (None, None),
        Some("start") => (Some(start), None),
        Some("end") => (Some(end), None),
        Some(rest) => match rest.split_once('-') {
            Some(("start", sub)) => (Some(start), Some(sub)),
            Some(("end", sub)) => (Some(end), Some(sub)),
            _ => (None, Some(rest)),
        },
    };
    if let Some(sub) = sub {
        if family != "border" || !matches!(sub, "width" | "style" | "color") {
            return None;
        }
    }

    let name = |side: &str| -> String {
        match (family, sub) {
            ("inset", _) => side.to_string(),
            (_, Some(sub)) => format!("{family}-{side}-{sub}"),
            (_, None) => format!("{family}-{side}"),
        }
    };

    if let Some(side) = edge {
        return Some(vec![(name(side), value.to_string())]);
    }

    // `border-inline: 1px solid red` sets both sides to the full border value.
    if family == "border" && sub.is_none() {
        return Some(vec![
            (name(start), value.to_string()),
            (name(end), value.to_string()),
        ]);
    }

    let tokens = value_tokens(value);
    let (first, second) = match tokens.as_slice() {
        [one] => (*one, *one),
        [a, b] => (*a, *b),
        _ => return None,
    };
    Some(vec![
        (name(start), first.to_string()),
        (name(end), second.to_string()),
    ])
}
