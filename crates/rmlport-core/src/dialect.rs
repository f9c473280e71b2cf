//! Names and fixed strings of the source (XHTML 1.1 test suite) and target (RML/RCSS) dialects.

/// Extension of the source test documents (the `xhtml1` folder of the CSS 2.1 test suite).
pub const SOURCE_EXTENSION: &str = "xht";

/// Extension of the converted documents.
pub const TARGET_EXTENSION: &str = "rml";

/// Directory name used both for `rel="match"` link targets in the source and for converted
/// reference documents under the output root.
pub const REFERENCE_DIR: &str = "reference";

/// Root element name of the target dialect (replaces `html`).
pub const ROOT_TAG: &str = "rml";

/// Shared stylesheet linked from every converted document.
pub const DEFAULT_STYLESHEET_HREF: &str = "/../Tests/Data/style.rcss";

/// Builds the stylesheet link element injected after `<head>`.
pub fn stylesheet_link(href: &str) -> String {
    format!(r#"<link type="text/rcss" href="{href}" />"#)
}

/// Replaces a trailing `.xht` with `.rml`; other names get `.rml` appended.
pub fn target_file_name(source_name: &str) -> String {
    let suffix = format!(".{SOURCE_EXTENSION}");
    let stem = source_name.strip_suffix(&suffix).unwrap_or(source_name);
    format!("{stem}.{TARGET_EXTENSION}")
}
