//! Border declaration rewriting.
//!
//! RCSS has no border styles: a border is a width and a color. Longhands keep their shape,
//! `border-style` turns into `border-width`, and the shorthand is reduced to
//! `border<side>: <width> <color>`.

use super::tables::{
    BORDER_WIDTH_KEYWORDS, CSS_WIDE_KEYWORDS, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH,
    HIDDEN_BORDER_STYLES, VISIBLE_BORDER_STYLES, contains_keyword, lookup, map_named_color,
};
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub(crate) const BORDER_PATTERN: &str =
    r#"(?i)border(-(?:top|right|bottom|left))?(-(?:width|style|color))?:([^;}"]+)([;}"])"#;

fn width_keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(thin|medium|thick)\b").expect("valid regex"))
}

fn style_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b[a-z]+\b").expect("valid regex"))
}

fn length_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:[+-]?[0-9]*\.?[0-9]+[a-z]+|0)$").expect("valid regex")
    })
}

/// Replacement callback for [`BORDER_PATTERN`].
pub(crate) fn rewrite_border(caps: &Captures<'_>) -> String {
    let side = caps.get(1).map_or("", |m| m.as_str());
    let sub = caps.get(2).map_or("", |m| m.as_str());
    let content = &caps[3];
    let suffix = &caps[4];
    match border_declaration(side, sub, content) {
        Some(decl) => format!("{decl}{suffix}"),
        None => caps[0].to_string(),
    }
}

/// Rewrites one border declaration.
///
/// `side` is empty or one of `-top`/`-right`/`-bottom`/`-left`, `sub` is empty or one of
/// `-width`/`-style`/`-color`, and `content` is the raw value text after the colon (leading
/// whitespace included). Returns `None` when the declaration must be left for the gate.
pub fn border_declaration(side: &str, sub: &str, content: &str) -> Option<String> {
    if sub.eq_ignore_ascii_case("-width") || sub.eq_ignore_ascii_case("-color") {
        let content = substitute_width_keywords(content);
        return Some(format!("border{side}{sub}:{content}"));
    }

    if sub.eq_ignore_ascii_case("-style") {
        let content = style_word_regex().replace_all(content, |caps: &Captures<'_>| {
            let word = &caps[0];
            if contains_keyword(HIDDEN_BORDER_STYLES, word) {
                "0px".to_string()
            } else if contains_keyword(VISIBLE_BORDER_STYLES, word) {
                DEFAULT_BORDER_WIDTH.to_string()
            } else {
                word.to_string()
            }
        });
        return Some(format!("border{side}-width: {content}"));
    }

    let parts = decompose_border(content)?;
    Some(format!("border{side}: {} {}", parts.width, parts.color))
}

/// Width and color extracted from a `border` shorthand value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderParts {
    pub width: String,
    pub color: String,
}

/// Splits a border shorthand value into at most one width and one color.
///
/// A hiding style (`none`/`hidden`) forces the width to `0px`; every style keyword is consumed.
/// Missing parts fall back to `3px` and `black`. Returns `None` if any token is not a width,
/// style or color.
pub fn decompose_border(content: &str) -> Option<BorderParts> {
    let mut width: Option<String> = None;
    let mut style: Option<&str> = None;
    let mut color: Option<String> = None;

    for token in value_tokens(content) {
        if contains_keyword(CSS_WIDE_KEYWORDS, token) || token.contains('!') {
            return None;
        }
        if let Some(px) = lookup(BORDER_WIDTH_KEYWORDS, token) {
            width.get_or_insert_with(|| px.to_string());
        } else if length_regex().is_match(token) {
            width.get_or_insert_with(|| token.to_string());
        } else if contains_keyword(HIDDEN_BORDER_STYLES, token)
            || contains_keyword(VISIBLE_BORDER_STYLES, token)
        {
            style.get_or_insert(token);
        } else if token.len() > 1
            && token.starts_with('#')
            && token[1..].chars().all(|c| c.is_ascii_hexdigit())
        {
            color.get_or_insert_with(|| token.to_ascii_lowercase());
        } else if let Some(open) = token.find('(') {
            let func = token[..open].to_ascii_lowercase();
            if !matches!(func.as_str(), "rgb" | "rgba" | "hsl" | "hsla") {
                return None;
            }
            color.get_or_insert_with(|| token.to_string());
        } else if token.chars().all(|c| c.is_ascii_alphabetic()) {
            color.get_or_insert_with(|| {
                map_named_color(token)
                    .map(str::to_string)
                    .unwrap_or_else(|| token.to_string())
            });
        } else {
            return None;
        }
    }

    if style.is_some_and(|s| contains_keyword(HIDDEN_BORDER_STYLES, s)) {
        width = Some("0px".to_string());
    }

    Some(BorderParts {
        width: width.unwrap_or_else(|| DEFAULT_BORDER_WIDTH.to_string()),
        color: color.unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
    })
}

fn substitute_width_keywords(content: &str) -> String {
    width_keyword_regex()
        .replace_all(content, |caps: &Captures<'_>| {
            lookup(BORDER_WIDTH_KEYWORDS, &caps[1])
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

/// Whitespace-separated tokens; whitespace inside parentheses does not split.
pub(crate) fn value_tokens(value: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (idx, ch) in value.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(idx);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                start.get_or_insert(idx);
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    out.push(&value[s..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }
    if let Some(s) = start {
        out.push(&value[s..]);
    }
    out
}
