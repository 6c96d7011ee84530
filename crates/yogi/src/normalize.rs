//! In-place YAML realignment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;
use yogi_yaml::{emit_block, load_document};

/// Outcome of one alignment pass over a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// The file parsed and was rewritten in canonical block style.
    Aligned,
    /// The file did not parse; nothing was written.
    Injured { line: usize, problem: String },
}

/// Parse the file at `path` and overwrite it with a block-style,
/// two-space-indented rendering of the same document.
///
/// A parse failure is reported in the outcome rather than as an error, and
/// leaves the file untouched. Read and write failures propagate.
pub fn align_file(path: &Path) -> Result<Alignment> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let doc = match load_document(&content) {
        Ok(doc) => doc,
        Err(yogi_yaml::Error::Parse { problem, line, .. }) => {
            debug!(line, "parse failed, leaving file as-is");
            return Ok(Alignment::Injured { line, problem });
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to load: {}", path.display()));
        }
    };

    let rendered = emit_block(&doc)
        .with_context(|| format!("Failed to render document from: {}", path.display()))?;
    fs::write(path, &rendered)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!(bytes = rendered.len(), "rewrote file in block style");

    Ok(Alignment::Aligned)
}
