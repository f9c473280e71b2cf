//! Line-level rewrite rules.
//!
//! A [`RuleTable`] is an ordered list of `(pattern, replacement, scope)` rules. Rules are pure
//! functions of the line text; the only document state they may look at is whether the line
//! sits inside a `<style>` block.

mod border;
mod calc;
mod logical;
mod tables;

pub use border::{BorderParts, border_declaration, decompose_border};
pub use calc::reduce_calc;
pub use logical::physical_declarations;
pub use tables::*;

use crate::dialect;
use crate::scan::StyleState;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Which lines a rule (or gate predicate) looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleScope {
    #[default]
    Anywhere,
    /// Lines inside a `<style>` block.
    StyleBlock,
    /// Lines inside a `<style>` block that carry no markup.
    StyleText,
}

impl RuleScope {
    pub fn applies(self, line: &str, state: StyleState) -> bool {
        match self {
            RuleScope::Anywhere => true,
            RuleScope::StyleBlock => state.is_inside(),
            RuleScope::StyleText => state.is_inside() && !line.contains('<'),
        }
    }
}

pub type RewriteFn = fn(caps: &Captures<'_>) -> String;

#[derive(Debug, Clone)]
pub enum Replacement {
    /// A `regex` replacement template (`$1`, `${name}`).
    Template(String),
    Rewrite(RewriteFn),
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub id: &'static str,
    pub pattern: Regex,
    pub replacement: Replacement,
    pub scope: RuleScope,
}

impl RewriteRule {
    pub fn template(id: &'static str, pattern: &str, template: impl Into<String>) -> Self {
        Self {
            id,
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement: Replacement::Template(template.into()),
            scope: RuleScope::Anywhere,
        }
    }

    pub fn rewrite(id: &'static str, pattern: &str, rewrite: RewriteFn) -> Self {
        Self {
            id,
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement: Replacement::Rewrite(rewrite),
            scope: RuleScope::Anywhere,
        }
    }

    pub fn with_scope(mut self, scope: RuleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn apply<'a>(&self, line: &'a str, state: StyleState) -> Cow<'a, str> {
        if !self.scope.applies(line, state) {
            return Cow::Borrowed(line);
        }
        match &self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(line, template.as_str()),
            Replacement::Rewrite(rewrite) => self
                .pattern
                .replace_all(line, |caps: &Captures<'_>| rewrite(caps)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&RewriteRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Applies every rule in order.
    pub fn apply(&self, line: &str, state: StyleState) -> String {
        let mut cur = line.to_string();
        for rule in &self.rules {
            let next = match rule.apply(&cur, state) {
                Cow::Owned(s) => s,
                Cow::Borrowed(_) => continue,
            };
            cur = next;
        }
        cur
    }

    /// Document-structure rewrites: doctype, namespaces, root element, stylesheet injection.
    pub fn structural(stylesheet_href: &str) -> Self {
        let link = dialect::stylesheet_link(stylesheet_href).replace('$', "$$");
        let root = dialect::ROOT_TAG;

        let mut table = Self::new();
        table.add(RewriteRule::template("doctype", r"(?i)<!DOCTYPE[^>]*>\s*", ""));
        table.add(RewriteRule::template("xmlns", r#"(?i) xmlns="[^"]+""#, ""));
        table.add(RewriteRule::template(
            "root-element",
            r"(?i)<(/?)html\b[^>]*>",
            format!("<${{1}}{root}>"),
        ));
        table.add(RewriteRule::template(
            "stylesheet-link",
            r"(?i)^(\s*)(.*<head(?:\s[^>]*)?>)",
            format!("${{1}}${{2}}\n${{1}}${{1}}{link}"),
        ));
        table
    }

    /// Rewrites that only make sense inside a `<style>` block.
    pub fn style_block() -> Self {
        let mut table = Self::new();
        // RML has no `html` element; the document root is `body`.
        table.add(
            RewriteRule::template("root-selector", r"(?i)(^|[^</\w-])html\b", "${1}body")
                .with_scope(RuleScope::StyleBlock),
        );
        table.add(
            RewriteRule::template("unescape-gt", "&gt;", ">").with_scope(RuleScope::StyleText),
        );
        table
    }

    /// Declaration rewrites, in application order.
    pub fn declarations() -> Self {
        let mut table = Self::new();
        table.add(RewriteRule::template(
            "direction-ltr",
            r"(?i)(^|[^-\w])direction\s*:\s*ltr\s*;?",
            "${1}",
        ));
        table.add(RewriteRule::template(
            "list-style-none",
            r"(?i)list-style(?:-type)?\s*:\s*none\s*;?",
            "",
        ));
        table.add(RewriteRule::template(
            "max-size-none",
            r"(?i)(max-(?:width|height))\s*:\s*none\s*;",
            "${1}: -1px;",
        ));
        table.add(RewriteRule::rewrite(
            "font-size-keyword",
            r#"(?i)(^|[^-\w])(font-size\s*:)([^;}"\r\n]*)"#,
            rewrite_font_size,
        ));
        table.add(RewriteRule::template(
            "font-shorthand",
            r#"(?i)(^|[^-\w])font\s*:[^;}"]*?\b([0-9]*\.?[0-9]+(?:[a-z]+\b|%))[^;}"]*([;}"])"#,
            "${1}font-size: ${2}${3}",
        ));
        table.add(RewriteRule::template(
            "font-family",
            r#"(?i)(^|[^-\w])font-family\s*:[^;}"]*;?"#,
            "${1}",
        ));
        table.add(RewriteRule::template(
            "line-height-normal",
            r"(?i)(line-height\s*:)\s*normal\b",
            "${1} 1.2em",
        ));
        table.add(RewriteRule::rewrite("calc", calc::CALC_PATTERN, calc::rewrite_calc));
        table.add(RewriteRule::rewrite(
            "logical-property",
            logical::LOGICAL_PATTERN,
            logical::rewrite_logical,
        ));
        table.add(RewriteRule::rewrite(
            "background-color",
            r#"(?i)(^|[^-\w])background\s*:(\s*)([a-z]+|#[0-9a-f]+)(\s*[;}"])"#,
            rewrite_background,
        ));
        table.add(RewriteRule::rewrite(
            "named-color",
            r#"(?i)(^|[^-\w])((?:background-)?color|border(?:-(?:top|right|bottom|left))?-color)(\s*:)([^;}"\r\n]*)"#,
            rewrite_named_colors,
        ));
        table.add(RewriteRule::rewrite(
            "border",
            border::BORDER_PATTERN,
            border::rewrite_border,
        ));
        table
    }
}

fn font_size_keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = FONT_SIZE_KEYWORDS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)(^|[^-\w])({alternation})\b")).expect("valid regex")
    })
}

fn color_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(^|[^#\w-])([a-z]+)\b").expect("valid regex"))
}

fn rewrite_font_size(caps: &Captures<'_>) -> String {
    let value = font_size_keyword_regex().replace_all(&caps[3], |kw: &Captures<'_>| {
        let size = lookup(FONT_SIZE_KEYWORDS, &kw[2]).unwrap_or_default();
        format!("{}{size}", &kw[1])
    });
    format!("{}{}{value}", &caps[1], &caps[2])
}

fn rewrite_background(caps: &Captures<'_>) -> String {
    let token = &caps[3];
    if contains_keyword(BACKGROUND_KEYWORDS, token) {
        return caps[0].to_string();
    }
    format!(
        "{}background-color:{}{token}{}",
        &caps[1], &caps[2], &caps[4]
    )
}

fn rewrite_named_colors(caps: &Captures<'_>) -> String {
    let value = color_word_regex().replace_all(&caps[4], |word: &Captures<'_>| {
        match map_named_color(&word[2]) {
            Some(hex) => format!("{}{hex}", &word[1]),
            None => word[0].to_string(),
        }
    });
    format!("{}{}{}{value}", &caps[1], &caps[2], &caps[3])
}
