use crate::corpus::DocumentOutcome;
use serde::Serialize;

/// Counts for one pass over the corpus.
///
/// `parsed + skipped() == total` always holds, and every attempted document is either parsed,
/// rejected or failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    /// Documents with the source extension (after the `--match` filter).
    pub total: usize,
    /// Skipped because the file name names an unsupported feature.
    pub blocked: usize,
    /// Rejected by the feature gate.
    pub rejected: usize,
    /// Skipped because of an I/O error.
    pub failed: usize,
    pub parsed: usize,
}

impl PassSummary {
    pub fn attempted(&self) -> usize {
        self.parsed + self.rejected + self.failed
    }

    pub fn skipped(&self) -> usize {
        self.blocked + self.rejected + self.failed
    }

    pub fn record(&mut self, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Accepted { .. } => self.parsed += 1,
            DocumentOutcome::Rejected(_) => self.rejected += 1,
            DocumentOutcome::Failed(_) => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub tests: PassSummary,
    pub references: PassSummary,
    /// Match links found in converted reference documents. They are never scheduled.
    pub ignored_alternates: usize,
    /// Converted files deleted by `--clean`.
    pub cleaned: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Done!")?;
        writeln!(f)?;
        writeln!(f, "Total test files: {}", self.tests.total)?;
        writeln!(f, "Skipped test files: {}", self.tests.skipped())?;
        writeln!(f, "Parsed test files: {}", self.tests.parsed)?;
        writeln!(f)?;
        writeln!(f, "Total reference files: {}", self.references.total)?;
        writeln!(f, "Skipped reference files: {}", self.references.skipped())?;
        writeln!(f, "Ignored alternate references: {}", self.ignored_alternates)?;
        write!(f, "Parsed reference files: {}", self.references.parsed)
    }
}
