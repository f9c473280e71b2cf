#![forbid(unsafe_code)]

//! Conversion of the W3C CSS 2.1 test suite (`xhtml1/*.xht`) into RML documents for visual
//! conformance testing of RmlUi.
//!
//! Documents are treated as sequences of physical lines. Each line goes through ordered
//! rewrite rules ([`rules`]) and then through the feature gate ([`gate`]); a single gate hit
//! rejects the whole document. [`corpus`] drives the two passes over a test directory: test
//! documents first, then the reference documents they link to.

pub mod corpus;
pub mod dialect;
pub mod error;
pub mod gate;
pub mod reference;
pub mod report;
pub mod rules;
pub mod scan;

pub use corpus::{CorpusConfig, DocumentOutcome, Pass, run_corpus};
pub use error::{Error, Result};
pub use gate::{FeatureGate, GatePredicate, Rejection};
pub use reference::{ReferenceLinkMatcher, ReferenceQueue};
pub use report::{PassSummary, Summary};
pub use rules::{RewriteRule, RuleScope, RuleTable};
pub use scan::{ConvertedDocument, ScanOutcome, StyleState};

/// Rule tables and gate, compiled once and shared by every document of a run.
#[derive(Debug, Clone)]
pub struct Converter {
    structural: RuleTable,
    style_block: RuleTable,
    declarations: RuleTable,
    gate: FeatureGate,
    links: ReferenceLinkMatcher,
    stylesheet_href: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            structural: RuleTable::structural(dialect::DEFAULT_STYLESHEET_HREF),
            style_block: RuleTable::style_block(),
            declarations: RuleTable::declarations(),
            gate: FeatureGate::rml(),
            links: ReferenceLinkMatcher::new(),
            stylesheet_href: dialect::DEFAULT_STYLESHEET_HREF.to_string(),
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the stylesheet linked from every converted document.
    pub fn with_stylesheet_href(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = href.into();
        self.structural = RuleTable::structural(&self.stylesheet_href);
        self
    }

    pub fn with_gate(mut self, gate: FeatureGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn stylesheet_href(&self) -> &str {
        &self.stylesheet_href
    }

    pub fn structural_rules(&self) -> &RuleTable {
        &self.structural
    }

    pub fn style_block_rules(&self) -> &RuleTable {
        &self.style_block
    }

    pub fn declaration_rules(&self) -> &RuleTable {
        &self.declarations
    }

    pub fn gate(&self) -> &FeatureGate {
        &self.gate
    }

    /// Applies the structural, style-block and declaration rules to one line.
    pub fn rewrite_line(&self, line: &str, state: StyleState) -> String {
        let line = self.structural.apply(line, state);
        let line = self.style_block.apply(&line, state);
        self.declarations.apply(&line, state)
    }
}

#[cfg(test)]
mod tests;
