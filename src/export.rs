//! Stylesheet export collaborators.
//!
//! Everything in this module is boundary I/O and runs outside the merge hot
//! path. Generated rules are spliced into a target file between textual
//! markers with find-or-append semantics: existing sections are replaced in
//! place, missing sections are appended, and a begin marker without its end
//! marker is an error surfaced to the caller.

use crate::{api, naming};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Start of the generated section in a target stylesheet.
pub const BEGIN_MARKER: &str = "/* tailmerge:begin */";
/// End of the generated section in a target stylesheet.
pub const END_MARKER: &str = "/* tailmerge:end */";

/// Preamble written when a build-tool input file does not exist yet.
const BUILD_INPUT_SCAFFOLD: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("found begin marker but no end marker")]
    MissingEndMarker,
}

/// Output shaping for [`export_css_with_options`].
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Prefix applied to every generated class name.
    pub prefix: String,
    /// Emit single-line rules without comments.
    pub minify: bool,
    /// Emit an `Original:` comment above each rule.
    pub comments: bool,
    pub begin_marker: String,
    pub end_marker: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            prefix: String::new(),
            minify: false,
            comments: false,
            begin_marker: BEGIN_MARKER.to_string(),
            end_marker: END_MARKER.to_string(),
        }
    }
}

/// Export the registered mappings as `.name { @apply merged; }` rules into
/// `path`, replacing the marked section.
pub fn export_css(path: impl AsRef<Path>) -> Result<(), ExportError> {
    export_css_with_options(path, &ExportOptions::default())
}

/// [`export_css`] with explicit output shaping.
pub fn export_css_with_options(path: impl AsRef<Path>, options: &ExportOptions) -> Result<(), ExportError> {
    let css = render_stylesheet(&naming::known_mappings(), options);
    write_marked_section(path.as_ref(), &css, options, "")
}

/// Export a caller-provided raw-input -> identifier map instead of the
/// process-wide registry. Useful for build scripts that assemble mappings
/// themselves.
pub fn export_css_with_map(
    path: impl AsRef<Path>,
    mappings: &HashMap<String, String>,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let css = render_stylesheet(mappings, options);
    write_marked_section(path.as_ref(), &css, options, "")
}

/// Write a build-tool input stylesheet: the directive preamble (when the
/// file is new) plus the generated rules in a marked section.
pub fn generate_build_input(path: impl AsRef<Path>) -> Result<(), ExportError> {
    let options = ExportOptions::default();
    let css = render_stylesheet(&naming::known_mappings(), &options);
    write_marked_section(path.as_ref(), &css, &options, BUILD_INPUT_SCAFFOLD)
}

/// Render one rule per mapping, sorted by raw input for stable output.
fn render_stylesheet(mappings: &HashMap<String, String>, options: &ExportOptions) -> String {
    let mut raws: Vec<&String> = mappings.keys().collect();
    raws.sort();

    let mut out = String::new();
    for raw in raws {
        let name = &mappings[raw];
        let merged = api::merge(raw);

        if options.comments && !options.minify {
            out.push_str("/* Original: ");
            out.push_str(raw);
            out.push_str(" */\n");
        }
        out.push('.');
        out.push_str(&options.prefix);
        out.push_str(name);
        if options.minify {
            out.push_str("{@apply ");
            out.push_str(&merged);
            out.push_str(";}");
        } else {
            out.push_str(" { @apply ");
            out.push_str(&merged);
            out.push_str("; }\n");
        }
    }
    out
}

/// Splice `replacement` into the marked section of `content`.
///
/// Missing markers append a fresh marked section at the end; a begin marker
/// without an end marker is refused rather than guessed at.
pub fn replace_between_markers(
    content: &str,
    replacement: &str,
    begin_marker: &str,
    end_marker: &str,
) -> Result<String, ExportError> {
    let Some(begin_idx) = content.find(begin_marker) else {
        let mut out = String::with_capacity(content.len() + replacement.len() + 64);
        out.push_str(content);
        out.push_str("\n\n");
        out.push_str(begin_marker);
        out.push('\n');
        out.push_str(replacement);
        out.push('\n');
        out.push_str(end_marker);
        return Ok(out);
    };

    // keep everything through the end of the begin-marker line
    let mut begin_line_end = begin_idx + begin_marker.len();
    let bytes = content.as_bytes();
    while begin_line_end < bytes.len() && bytes[begin_line_end] != b'\n' && bytes[begin_line_end] != b'\r' {
        begin_line_end += 1;
    }
    if begin_line_end < bytes.len() {
        begin_line_end += 1;
    }

    let end_idx = content[begin_line_end..]
        .find(end_marker)
        .map(|idx| idx + begin_line_end)
        .ok_or(ExportError::MissingEndMarker)?;

    let mut out = String::with_capacity(content.len() - (end_idx - begin_line_end) + replacement.len() + 1);
    out.push_str(&content[..begin_line_end]);
    out.push_str(replacement);
    out.push('\n');
    out.push_str(&content[end_idx..]);
    Ok(out)
}

/// Read `path` (or start from `scaffold` when it does not exist), splice the
/// marked section, and write the result back.
fn write_marked_section(
    path: &Path,
    replacement: &str,
    options: &ExportOptions,
    scaffold: &str,
) -> Result<(), ExportError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => scaffold.to_string(),
        Err(err) => return Err(err.into()),
    };

    let updated = replace_between_markers(&content, replacement, &options.begin_marker, &options.end_marker)?;
    fs::write(path, updated)?;
    Ok(())
}
