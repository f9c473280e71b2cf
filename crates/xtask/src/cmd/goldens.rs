use crate::XtaskError;
use rmlport_core::{Converter, ScanOutcome};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// What a fixture is expected to produce: converted text in `<stem>.golden.rml`, or
/// `<gate>:<line>` in `<stem>.rejection`.
enum Golden {
    Converted(String),
    Rejected(String),
}

impl Golden {
    fn of(converter: &Converter, text: &str) -> Self {
        match converter.scan(text) {
            ScanOutcome::Converted(doc) => Golden::Converted(doc.text),
            ScanOutcome::Rejected(r) => Golden::Rejected(format!("{}:{}\n", r.gate, r.line)),
        }
    }

    fn path(&self, fixture: &Path) -> PathBuf {
        match self {
            Golden::Converted(_) => fixture.with_extension("golden.rml"),
            Golden::Rejected(_) => fixture.with_extension("rejection"),
        }
    }

    /// The golden file of the opposite outcome, stale if present.
    fn other_path(&self, fixture: &Path) -> PathBuf {
        match self {
            Golden::Converted(_) => fixture.with_extension("rejection"),
            Golden::Rejected(_) => fixture.with_extension("golden.rml"),
        }
    }

    fn text(&self) -> &str {
        match self {
            Golden::Converted(text) | Golden::Rejected(text) => text,
        }
    }
}

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
}

fn list_fixtures(root: &Path, filter: Option<&str>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if !path.extension().is_some_and(|e| e == "xht") {
                continue;
            }
            if let Some(f) = filter {
                if !path.to_string_lossy().contains(f) {
                    continue;
                }
            }
            out.push(path);
        }
    }
    out.sort();
    out
}

fn parse_filter(args: &[String]) -> Result<Option<String>, XtaskError> {
    let mut filter: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--filter" => {
                i += 1;
                filter = args.get(i).map(|s| s.to_string());
            }
            "--help" | "-h" => return Err(XtaskError::Usage),
            _ => return Err(XtaskError::Usage),
        }
        i += 1;
    }
    Ok(filter)
}

fn read_fixture(path: &Path) -> Result<String, XtaskError> {
    fs::read_to_string(path).map_err(|source| XtaskError::ReadFile {
        path: path.display().to_string(),
        source,
    })
}

fn fixtures(filter: Option<&str>) -> Result<Vec<PathBuf>, XtaskError> {
    let root = fixtures_root();
    let fixtures = list_fixtures(&root, filter);
    if fixtures.is_empty() {
        return Err(XtaskError::NoFixtures(root.display().to_string()));
    }
    Ok(fixtures)
}

/// Writes the golden of one fixture and deletes the golden of the opposite outcome.
fn write_golden(converter: &Converter, fixture: &Path) -> Result<(), XtaskError> {
    let golden = Golden::of(converter, &read_fixture(fixture)?);
    let path = golden.path(fixture);
    fs::write(&path, golden.text()).map_err(|source| XtaskError::WriteFile {
        path: path.display().to_string(),
        source,
    })?;
    let stale = golden.other_path(fixture);
    if stale.exists() {
        fs::remove_file(&stale).map_err(|source| XtaskError::RemoveFile {
            path: stale.display().to_string(),
            source,
        })?;
        println!("removed stale {}", stale.display());
    }
    Ok(())
}

pub(crate) fn update_goldens(args: Vec<String>) -> Result<(), XtaskError> {
    let filter = parse_filter(&args)?;
    let converter = Converter::new();

    let mut written = 0usize;
    for fixture in fixtures(filter.as_deref())? {
        write_golden(&converter, &fixture)?;
        written += 1;
    }

    println!("updated {written} goldens");
    Ok(())
}

pub(crate) fn check_goldens(args: Vec<String>) -> Result<(), XtaskError> {
    let filter = parse_filter(&args)?;
    let converter = Converter::new();

    let mut report = String::new();
    let mut checked = 0usize;
    for fixture in fixtures(filter.as_deref())? {
        let golden = Golden::of(&converter, &read_fixture(&fixture)?);
        let path = golden.path(&fixture);
        checked += 1;
        match fs::read_to_string(&path) {
            Ok(expected) if expected == golden.text() => {}
            Ok(_) => {
                let _ = writeln!(&mut report, "mismatch: {}", path.display());
            }
            Err(_) => {
                let _ = writeln!(&mut report, "missing: {}", path.display());
            }
        }
        if golden.other_path(&fixture).exists() {
            let _ = writeln!(
                &mut report,
                "stale: {}",
                golden.other_path(&fixture).display()
            );
        }
    }

    if report.is_empty() {
        println!("{checked} goldens up to date");
        Ok(())
    } else {
        Err(XtaskError::GoldenMismatch(report))
    }
}
