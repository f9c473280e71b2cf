//! `rel="match"` reference links: extraction from test documents and the queue that schedules
//! the referenced documents for the second pass.

use crate::dialect::{SOURCE_EXTENSION, TARGET_EXTENSION};
use indexmap::IndexSet;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct ReferenceLinkMatcher {
    patterns: Vec<Regex>,
}

impl Default for ReferenceLinkMatcher {
    fn default() -> Self {
        // Both attribute orders occur in the suite.
        let patterns = [
            format!(r#"(?i)(<link href="(reference/[^"]+))\.{SOURCE_EXTENSION}(" rel="match" ?/>)"#),
            format!(r#"(?i)(<link rel="match" href="(reference/[^"]+))\.{SOURCE_EXTENSION}(" ?/>)"#),
        ];
        Self {
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid regex"))
                .collect(),
        }
    }
}

/// A match link found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    /// The line with the link pointing at the converted document.
    pub line: String,
    /// Source document path relative to the input directory, e.g. `reference/foo.xht`.
    pub source: String,
}

impl ReferenceLinkMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a match link on `line` and retargets it at the converted reference document.
    pub fn rewrite(&self, line: &str) -> Option<ReferenceLink> {
        for re in &self.patterns {
            let Some(caps) = re.captures(line) else {
                continue;
            };
            let source = format!("{}.{SOURCE_EXTENSION}", &caps[2]);
            let line = re
                .replace_all(line, format!("${{1}}.{TARGET_EXTENSION}${{3}}").as_str())
                .into_owned();
            return Some(ReferenceLink { line, source });
        }
        None
    }
}

/// Reference documents discovered during the primary pass, in discovery order and without
/// duplicates.
///
/// The queue is consumed by [`ReferenceQueue::drain`]; documents converted from the drained
/// batch cannot enqueue further references.
#[derive(Debug, Clone, Default)]
pub struct ReferenceQueue {
    links: IndexSet<String>,
}

impl ReferenceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the link was already scheduled.
    pub fn push(&mut self, link: impl Into<String>) -> bool {
        self.links.insert(link.into())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn drain(self) -> Vec<String> {
        self.links.into_iter().collect()
    }
}
