//! Per-document scanning: the line loop that rewrites, gates and accumulates one document.

use crate::Converter;
use crate::gate::Rejection;

/// Whether the scanner is inside a `<style>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleState {
    #[default]
    Outside,
    Inside,
}

impl StyleState {
    pub fn is_inside(self) -> bool {
        self == StyleState::Inside
    }

    /// State for `line`: an opening tag enters the block, a closing tag leaves it. A line that
    /// contains both (`<style>...</style>`) ends outside.
    pub fn advance(self, line: &str) -> Self {
        let lower = line.to_ascii_lowercase();
        let mut next = self;
        if lower.contains("<style") {
            next = StyleState::Inside;
        }
        if lower.contains("</style") {
            next = StyleState::Outside;
        }
        next
    }
}

/// A successfully converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub text: String,
    /// The first `rel="match"` link, as a source path relative to the input directory.
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Converted(ConvertedDocument),
    Rejected(Rejection),
}

impl ScanOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, ScanOutcome::Converted(_))
    }

    pub fn converted(self) -> Option<ConvertedDocument> {
        match self {
            ScanOutcome::Converted(doc) => Some(doc),
            ScanOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ScanOutcome::Converted(_) => None,
            ScanOutcome::Rejected(r) => Some(r),
        }
    }
}

/// The in-progress state of one document. Dropped without output on rejection.
#[derive(Debug, Default)]
pub(crate) struct TestDocument {
    state: StyleState,
    line_no: usize,
    output: String,
    reference: Option<String>,
}

impl TestDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Rewrites, gates and appends one physical line (terminator included).
    pub(crate) fn feed(&mut self, converter: &Converter, line: &str) -> Result<(), Rejection> {
        self.line_no += 1;
        self.state = self.state.advance(line);

        let mut line = std::borrow::Cow::Borrowed(line);
        if let Some(link) = converter.links.rewrite(&line) {
            if self.reference.is_none() {
                self.reference = Some(link.source);
            }
            line = std::borrow::Cow::Owned(link.line);
        }

        let line = converter.rewrite_line(&line, self.state);

        if let Some(rejection) = converter.gate.evaluate(&line, self.line_no, self.state) {
            return Err(rejection);
        }

        self.output.push_str(&line);
        Ok(())
    }

    pub(crate) fn finish(self) -> ConvertedDocument {
        ConvertedDocument {
            text: self.output,
            reference: self.reference,
        }
    }
}

impl Converter {
    /// Converts one document held in memory.
    pub fn scan(&self, text: &str) -> ScanOutcome {
        let mut doc = TestDocument::new();
        for line in text.split_inclusive('\n') {
            if let Err(rejection) = doc.feed(self, line) {
                return ScanOutcome::Rejected(rejection);
            }
        }
        ScanOutcome::Converted(doc.finish())
    }
}
