//! Corpus walk: candidate listing, name-based block filter, output cleanup, and the two
//! conversion passes (test documents, then the reference documents they link to).

use crate::dialect::{self, REFERENCE_DIR, SOURCE_EXTENSION, TARGET_EXTENSION};
use crate::reference::ReferenceQueue;
use crate::report::{PassSummary, Summary};
use crate::scan::ScanOutcome;
use crate::{Converter, Error, Rejection, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name fragments of test groups that exercise features RmlUi does not implement.
pub const BLOCKED_NAME_FRAGMENTS: &[&str] = &[
    "charset",
    "font",
    "list",
    "text-decoration",
    "text-indent",
    "text-transform",
    "bidi",
    "cursor",
    "uri",
    "stylesheet",
    "word-spacing",
    "table",
    "outline",
    "at-rule",
    "at-import",
    "attribute",
    "style",
    "quote",
    "rtl",
    "ltr",
    "first-line",
    "first-letter",
    "first-page",
    "import",
    "border",
    "chapter",
    "character-encoding",
    "escape",
    "media",
    "contain-",
    "grid",
    "case-insensitive",
    "containing-block-initial",
    "multicol",
    "system-colors",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Only file names containing this substring are processed.
    pub match_filter: Option<String>,
    /// Delete previously converted files before the run.
    pub clean: bool,
}

impl CorpusConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            match_filter: None,
            clean: false,
        }
    }

    pub fn with_match_filter(mut self, filter: Option<String>) -> Self {
        self.match_filter = filter.filter(|f| !f.is_empty());
        self
    }

    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn reference_dir(&self) -> PathBuf {
        self.output_dir.join(REFERENCE_DIR)
    }

    /// Validates the input directory and creates the output directories.
    pub fn prepare(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(Error::MissingInputDir {
                path: self.input_dir.display().to_string(),
            });
        }
        for dir in [self.output_dir.clone(), self.reference_dir()] {
            if !dir.exists() {
                fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
                    path: dir.display().to_string(),
                    source,
                })?;
            }
            if !dir.is_dir() {
                return Err(Error::NotADirectory {
                    path: dir.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Which pass a document is converted in; decides the output directory and whether its match
/// link is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Primary,
    Reference,
}

#[derive(Debug)]
pub enum DocumentOutcome {
    Accepted {
        output: PathBuf,
        reference: Option<String>,
    },
    Rejected(Rejection),
    Failed(Error),
}

impl DocumentOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DocumentOutcome::Accepted { .. })
    }
}

/// Test documents selected for the primary pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Number of source documents left by the match filter.
    pub total: usize,
    /// `(file name, matched fragment)` of every blocked document.
    pub blocked: Vec<(String, &'static str)>,
    /// Documents to convert, sorted by name.
    pub files: Vec<String>,
}

pub fn blocked_fragment(name: &str) -> Option<&'static str> {
    BLOCKED_NAME_FRAGMENTS
        .iter()
        .copied()
        .find(|fragment| name.contains(*fragment))
}

/// Lists the test documents of the input directory: match filter, extension, block list.
pub fn list_candidates(config: &CorpusConfig) -> Result<Candidates> {
    let entries = fs::read_dir(&config.input_dir).map_err(|source| Error::ReadDir {
        path: config.input_dir.display().to_string(),
        source,
    })?;

    let suffix = format!(".{SOURCE_EXTENSION}");
    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %config.input_dir.display(), "skipped unreadable entry: {err}");
                continue;
            }
        };
        // Follows symlinks.
        if !entry.path().is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(file = ?entry.file_name(), "skipped: file name is not valid UTF-8");
            continue;
        };
        if config
            .match_filter
            .as_deref()
            .is_some_and(|filter| !name.contains(filter))
        {
            continue;
        }
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }
    names.sort();

    let mut candidates = Candidates {
        total: names.len(),
        ..Default::default()
    };
    for name in names {
        match blocked_fragment(&name) {
            Some(fragment) => {
                tracing::info!(file = %name, fragment, "skipped: unsupported feature in file name");
                candidates.blocked.push((name, fragment));
            }
            None => candidates.files.push(name),
        }
    }
    Ok(candidates)
}

/// Deletes converted files in the output and reference directories. Failures are logged and
/// do not stop the cleanup. Returns the number of deleted files.
pub fn clean_outputs(config: &CorpusConfig) -> usize {
    let mut deleted = 0;
    for dir in [config.output_dir.clone(), config.reference_dir()] {
        tracing::info!(dir = %dir.display(), "deleting converted *.{TARGET_EXTENSION} files");
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(source) => {
                let err = Error::ReadDir {
                    path: dir.display().to_string(),
                    source,
                };
                tracing::warn!("{err}");
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != TARGET_EXTENSION) {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => deleted += 1,
                Err(source) => {
                    let err = Error::RemoveFile {
                        path: path.display().to_string(),
                        source,
                    };
                    tracing::warn!("{err}");
                }
            }
        }
    }
    deleted
}

/// Converts one source file and writes the result to `output`. Nothing is written for a
/// rejected document.
pub fn convert_document(converter: &Converter, source: &Path, output: &Path) -> DocumentOutcome {
    let text = match fs::read_to_string(source) {
        Ok(text) => text,
        Err(source_err) => {
            return DocumentOutcome::Failed(Error::ReadFile {
                path: source.display().to_string(),
                source: source_err,
            });
        }
    };

    match converter.scan(&text) {
        ScanOutcome::Rejected(rejection) => DocumentOutcome::Rejected(rejection),
        ScanOutcome::Converted(doc) => match fs::write(output, doc.text) {
            Ok(()) => DocumentOutcome::Accepted {
                output: output.to_path_buf(),
                reference: doc.reference,
            },
            Err(source_err) => DocumentOutcome::Failed(Error::WriteFile {
                path: output.display().to_string(),
                source: source_err,
            }),
        },
    }
}

fn log_outcome(name: &str, pass: Pass, outcome: &DocumentOutcome) {
    match outcome {
        DocumentOutcome::Accepted { output, .. } => {
            tracing::info!(file = %name, ?pass, output = %output.display(), "converted");
        }
        DocumentOutcome::Rejected(rejection) => {
            tracing::info!(
                file = %name,
                ?pass,
                gate = rejection.gate,
                line = rejection.line,
                "skipped: {rejection}"
            );
        }
        DocumentOutcome::Failed(err) => {
            tracing::warn!(file = %name, ?pass, "skipped: {err}");
        }
    }
}

/// Converts the test documents and collects their reference links into `queue`.
pub fn run_primary_pass(
    config: &CorpusConfig,
    converter: &Converter,
    candidates: &Candidates,
    mut queue: ReferenceQueue,
) -> (PassSummary, ReferenceQueue) {
    let mut summary = PassSummary {
        total: candidates.total,
        blocked: candidates.blocked.len(),
        ..Default::default()
    };

    for name in &candidates.files {
        let source = config.input_dir.join(name);
        let output = config.output_dir.join(dialect::target_file_name(name));
        let outcome = convert_document(converter, &source, &output);
        log_outcome(name, Pass::Primary, &outcome);
        summary.record(&outcome);

        if let DocumentOutcome::Accepted {
            reference: Some(link),
            ..
        } = outcome
        {
            if queue.push(link.clone()) {
                tracing::debug!(file = %name, reference = %link, "scheduled reference");
            }
        }
    }

    (summary, queue)
}

/// Converts the scheduled reference documents into the reference directory.
///
/// Returns the pass summary and the number of match links found in converted reference
/// documents (ignored alternates).
pub fn run_reference_pass(
    config: &CorpusConfig,
    converter: &Converter,
    queue: ReferenceQueue,
) -> (PassSummary, usize) {
    let links = queue.drain();
    let mut summary = PassSummary {
        total: links.len(),
        ..Default::default()
    };
    let mut ignored_alternates = 0;
    let reference_dir = config.reference_dir();

    for link in &links {
        let source = config.input_dir.join(link);
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| link.clone());
        let output = reference_dir.join(dialect::target_file_name(&file_name));
        let outcome = convert_document(converter, &source, &output);
        log_outcome(link, Pass::Reference, &outcome);
        summary.record(&outcome);

        if let DocumentOutcome::Accepted {
            reference: Some(alternate),
            ..
        } = &outcome
        {
            tracing::debug!(file = %link, reference = %alternate, "ignored alternate reference");
            ignored_alternates += 1;
        }
    }

    (summary, ignored_alternates)
}

/// Runs a full conversion: prepare directories, optional cleanup, primary pass, reference
/// pass.
///
/// Only configuration errors are returned; per-document failures are counted in the summary.
pub fn run_corpus(config: &CorpusConfig, converter: &Converter) -> Result<Summary> {
    config.prepare()?;

    let cleaned = if config.clean {
        clean_outputs(config)
    } else {
        0
    };

    let candidates = list_candidates(config)?;
    let (tests, queue) = run_primary_pass(config, converter, &candidates, ReferenceQueue::new());
    let (references, ignored_alternates) = run_reference_pass(config, converter, queue);

    Ok(Summary {
        tests,
        references,
        ignored_alternates,
        cleaned,
    })
}
