//! Line-oriented style diagnostics.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// The kind of style problem a line has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    TrailingWhitespace,
    TabCharacter,
}

/// A single style problem, tied to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub line: usize,
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::TrailingWhitespace => write!(
                f,
                "Line {}: Trailing spaces - like crumbs in your yoga mat",
                self.line
            ),
            IssueKind::TabCharacter => write!(
                f,
                "Line {}: TAB character - that's not how we flow",
                self.line
            ),
        }
    }
}

/// Scan `content` line by line and report every style issue, in line order.
///
/// A line can collect both flags; the trailing-whitespace one comes first.
pub fn scan_content(content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let number = idx + 1;
        if line != line.trim_end() {
            issues.push(Issue {
                line: number,
                kind: IssueKind::TrailingWhitespace,
            });
        }
        if line.contains('\t') {
            issues.push(Issue {
                line: number,
                kind: IssueKind::TabCharacter,
            });
        }
    }
    issues
}

/// Read the file at `path` and scan it for style issues.
///
/// Read-only; the caller is responsible for the existence pre-check.
pub fn diagnose_file(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(scan_content(&content))
}
