//! JSON-LD `<head>` injection for rendered HTML.
//!
//! Rendering belongs to the docs framework. This pass only rewrites its
//! output, placing one marked `<script>` before `</head>` in every page.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::debug;

/// Opening of the script written by this pass, `data-docmeta` marks it.
const SCRIPT_OPEN: &str = r#"<script type="application/ld+json" data-docmeta"#;

/// Outcome of [`inject_dir`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InjectReport {
    /// Pages that received the script.
    pub injected: usize,
    /// Pages left untouched (no `</head>`, or already injected).
    pub skipped: usize,
}

/// Wrap a JSON-LD payload in a marked `<script>` element.
///
/// `<`, `>` and `&` become JSON unicode escapes, so the payload can never
/// close the script early and still parses to the same value.
pub fn script_tag(payload: &str) -> String {
    let mut escaped = String::with_capacity(payload.len());
    for ch in payload.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(ch),
        }
    }
    format!("{SCRIPT_OPEN}>{escaped}</script>")
}

/// Insert `tag` before the first `</head>` (any case).
///
/// Returns `None` when there is no `</head>` or the head already carries
/// a marked script.
pub fn inject_head(html: &str, tag: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets intact
    let lower = html.to_ascii_lowercase();
    let pos = lower.find("</head>")?;
    if lower[..pos].contains(SCRIPT_OPEN) {
        return None;
    }

    let mut out = String::with_capacity(html.len() + tag.len());
    out.push_str(&html[..pos]);
    out.push_str(tag);
    out.push_str(&html[pos..]);
    Some(out)
}

/// Inject `tag` into every `.html` file under `output_dir`.
pub fn inject_dir(output_dir: &Path, tag: &str) -> Result<InjectReport> {
    if !output_dir.is_dir() {
        anyhow::bail!("output directory `{}` does not exist", output_dir.display());
    }

    let files = collect_html_files(output_dir)?;
    let results: Vec<bool> = files
        .par_iter()
        .map(|path| inject_file(path, tag))
        .collect::<Result<_>>()?;

    let injected = results.iter().filter(|&&done| done).count();
    Ok(InjectReport {
        injected,
        skipped: results.len() - injected,
    })
}

fn inject_file(path: &Path, tag: &str) -> Result<bool> {
    let html =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let Some(updated) = inject_head(&html, tag) else {
        debug!("inject"; "skipping {}", path.display());
        return Ok(false);
    };

    fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

fn collect_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "html") {
            files.push(path);
        }
    }
    Ok(files)
}
