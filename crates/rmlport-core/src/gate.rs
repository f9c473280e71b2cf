//! Feature gate: ordered reject predicates evaluated on each rewritten line.
//!
//! The first predicate that matches rejects the whole document; later predicates are not
//! evaluated.

use crate::rules::RuleScope;
use crate::scan::StyleState;
use regex::{Captures, Regex};
use serde::Serialize;

/// Maximum length (in characters) of the offending fragment kept in a [`Rejection`].
pub const FRAGMENT_DISPLAY_LIMIT: usize = 48;

/// Decides whether a pattern match counts, returning the fragment to report.
pub type FragmentFilter = fn(caps: &Captures<'_>) -> Option<String>;

#[derive(Debug, Clone)]
pub struct GatePredicate {
    pub id: &'static str,
    pub reason: &'static str,
    pub scope: RuleScope,
    pub pattern: Regex,
    pub filter: Option<FragmentFilter>,
}

impl GatePredicate {
    pub fn new(id: &'static str, reason: &'static str, pattern: &str) -> Self {
        Self {
            id,
            reason,
            scope: RuleScope::Anywhere,
            pattern: Regex::new(pattern).expect("valid regex"),
            filter: None,
        }
    }

    pub fn with_scope(mut self, scope: RuleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_filter(mut self, filter: FragmentFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Returns the offending fragment if the predicate matches `line`.
    pub fn check(&self, line: &str, state: StyleState) -> Option<String> {
        if !self.scope.applies(line, state) {
            return None;
        }
        match self.filter {
            None => self.pattern.find(line).map(|m| m.as_str().to_string()),
            Some(filter) => self
                .pattern
                .captures_iter(line)
                .find_map(|caps| filter(&caps)),
        }
    }
}

/// Why a document was not converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub gate: &'static str,
    pub reason: &'static str,
    /// 1-based line number in the source document.
    pub line: usize,
    pub fragment: String,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {}: `{}`)", self.reason, self.line, self.fragment)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeatureGate {
    predicates: Vec<GatePredicate>,
}

impl FeatureGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, predicate: GatePredicate) {
        self.predicates.push(predicate);
    }

    pub fn predicates(&self) -> &[GatePredicate] {
        &self.predicates
    }

    /// Evaluates the predicates in order; the first match wins.
    pub fn evaluate(&self, line: &str, line_no: usize, state: StyleState) -> Option<Rejection> {
        self.predicates.iter().find_map(|p| {
            p.check(line, state).map(|fragment| Rejection {
                gate: p.id,
                reason: p.reason,
                line: line_no,
                fragment: truncate_fragment(&fragment),
            })
        })
    }

    /// The predicates for the RmlUi feature set.
    pub fn rml() -> Self {
        let mut gate = Self::new();

        gate.add(
            GatePredicate::new(
                "test-flags",
                "test requires unsupported flags",
                r#"(?i)<meta\b[^>]*\bname="flags"[^>]*\bcontent="([^"]*)"|<meta\b[^>]*\bcontent="([^"]*)"[^>]*\bname="flags""#,
            )
            .with_filter(unsupported_flags),
        );
        gate.add(GatePredicate::new(
            "background-attachment",
            "uses unsupported background",
            r#"(?i)background\s*:[^;}"]*\bfixed\b"#,
        ));
        gate.add(GatePredicate::new(
            "display-mode",
            "uses unsupported display mode",
            r#"(?i)display\s*:[^;}"]*\b(?:table|inline-table|run-in|list-item|grid|inline-grid)\b|<table\b"#,
        ));
        gate.add(GatePredicate::new(
            "visibility",
            "uses unsupported visibility",
            r#"(?i)visibility\s*:[^;}"]*\bcollapse\b|z-index\s*:\s*[0-9.]+%"#,
        ));
        gate.add(GatePredicate::new(
            "embedded-content",
            "uses data or images",
            r"(?i)data:|support/|<img\b|<iframe\b",
        ));
        gate.add(GatePredicate::new(
            "script",
            "uses scripts",
            r"(?i)<script\b",
        ));
        gate.add(GatePredicate::new(
            "calc",
            "uses an unresolved calc() expression",
            r"(?i)\bcalc\(",
        ));
        gate.add(
            GatePredicate::new(
                "selector",
                "uses unsupported CSS selectors",
                r"(?i):before\b|:after\b|:first-line\b|:first-letter\b|@media\b|\s\+\s|\s~\s",
            )
            .with_scope(RuleScope::StyleBlock),
        );
        gate.add(GatePredicate::new(
            "value",
            "uses unsupported CSS values",
            r#"(?i):\s*inherit\b|!\s*important|[0-9.]+(?:ch|ex)(?:[\s;}"]|$)"#,
        ));
        gate.add(GatePredicate::new(
            "font",
            "uses special fonts",
            r"(?i)@font-face|(?:^|[^-\w])font\s*:|ahem",
        ));
        gate.add(GatePredicate::new(
            "property",
            "uses unsupported CSS properties",
            concat!(
                r"(?i)(?:^|[^-\w])(?:direction|content|outline|quotes|border-spacing|border-collapse",
                r"|background|background-image|box-sizing|font-variant|font-kerning",
                r"|font-feature-settings|caption-side|clip|page-break-(?:before|after|inside)",
                r"|letter-spacing|word-spacing|writing-mode|text-orientation|text-indent",
                r"|columns|column-[a-z-]+|empty-cells|aspect-ratio)\s*:",
            ),
        ));

        gate
    }
}

fn unsupported_flags(caps: &Captures<'_>) -> Option<String> {
    let flags = caps.get(1).or_else(|| caps.get(2))?.as_str().trim();
    if flags.is_empty() || flags == "interactive" {
        return None;
    }
    Some(flags.to_string())
}

fn truncate_fragment(fragment: &str) -> String {
    let fragment = fragment.trim();
    if fragment.chars().count() <= FRAGMENT_DISPLAY_LIMIT {
        return fragment.to_string();
    }
    let mut out: String = fragment.chars().take(FRAGMENT_DISPLAY_LIMIT - 3).collect();
    out.push_str("...");
    out
}
