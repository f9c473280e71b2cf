use rmlport_core::{Converter, CorpusConfig, Summary, run_corpus};
use std::io::Write;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Convert(rmlport_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Convert(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rmlport_core::Error> for CliError {
    fn from(value: rmlport_core::Error) -> Self {
        Self::Convert(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input_dir: Option<String>,
    output_dir: Option<String>,
    clean: bool,
    match_filter: Option<String>,
    stylesheet: Option<String>,
    json: bool,
}

fn usage() -> &'static str {
    "rmlport-cli\n\
\n\
USAGE:\n\
  rmlport-cli [--clean] [--match <substring>] [--stylesheet <href>] [--json] <in_dir> <out_dir>\n\
\n\
ARGS:\n\
  <in_dir>   the xhtml1 folder of the CSS 2.1 test suite\n\
  <out_dir>  destination of the converted tests; references go to <out_dir>/reference\n\
\n\
NOTES:\n\
  - --clean deletes previously converted *.rml files before the run.\n\
  - --match only converts tests whose file name contains <substring>.\n\
  - --stylesheet overrides the stylesheet linked from every converted document.\n\
  - --json prints the summary as JSON instead of text.\n\
  - Log verbosity is controlled by RUST_LOG (default: info); logs go to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut positional = Vec::new();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--clean" => args.clean = true,
            "--json" => args.json = true,
            "--match" => {
                let Some(filter) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.match_filter = Some(filter.clone());
            }
            "--stylesheet" => {
                let Some(href) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if href.trim().is_empty() {
                    return Err(CliError::Usage(usage()));
                }
                args.stylesheet = Some(href.trim().to_string());
            }
            "--" => positional.extend(it.by_ref().cloned()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => positional.push(path.to_string()),
        }
    }

    let [input_dir, output_dir] = <[String; 2]>::try_from(positional)
        .map_err(|_| CliError::Usage(usage()))?;
    args.input_dir = Some(input_dir);
    args.output_dir = Some(output_dir);
    Ok(args)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn write_summary(summary: &Summary, json: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut out, summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let (Some(input_dir), Some(output_dir)) = (args.input_dir, args.output_dir) else {
        return Err(CliError::Usage(usage()));
    };

    let config = CorpusConfig::new(input_dir, output_dir)
        .with_match_filter(args.match_filter)
        .with_clean(args.clean);
    let converter = match args.stylesheet {
        Some(href) => Converter::new().with_stylesheet_href(href),
        None => Converter::new(),
    };

    let summary = run_corpus(&config, &converter)?;
    if summary.cleaned > 0 {
        tracing::info!(files = summary.cleaned, "deleted previously converted files");
    }
    write_summary(&summary, args.json)
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
