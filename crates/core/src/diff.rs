//! Unified diff parsing into a structured change model
//!
//! Turns raw `git diff` text into an ordered sequence of [`FileChange`]s,
//! each holding ordered [`Hunk`]s of tagged [`Line`]s with a computed
//! new-file line number. Parsing is permissive: malformed fragments are
//! skipped, never fatal, because diffs may be partial or hand-edited.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Which side of the change a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Added,
    Removed,
    Context,
}

/// One line inside a hunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    /// Line content without the leading `+`/`-`/space marker.
    pub text: String,
    /// Computed position in the new file: `new_start` plus the number of
    /// lines already appended to the hunk. Advances on every kind, so
    /// removed lines consume a new-file slot too.
    pub new_line: usize,
}

/// A contiguous changed region of one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunk {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub lines: Vec<Line>,
}

/// All hunks of one changed file. Identity is `new_path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub old_path: String,
    pub new_path: String,
    pub hunks: Vec<Hunk>,
}

/// Hunk headers must carry all four fields in comma-count form; the
/// abbreviated `@@ -1 +1 @@` shape is not recognized.
fn hunk_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^@@ -(\d+),(\d+) \+(\d+),(\d+) @@").expect("hunk header regex is valid")
    })
}

/// Parse unified diff text into file changes.
///
/// Never fails: file headers with fewer than four tokens, hunk headers
/// outside a file, unrecognized hunk-header shapes, and content lines
/// outside an open hunk are all silently skipped.
pub fn parse(text: &str) -> Vec<FileChange> {
    let mut files: Vec<FileChange> = Vec::new();
    let mut hunk_open = false;

    for raw in text.trim().lines() {
        if raw.starts_with("diff --git") {
            let parts: Vec<&str> = raw.split_whitespace().collect();
            if parts.len() >= 4 {
                files.push(FileChange {
                    old_path: strip_revision_prefix(parts[2], "a/"),
                    new_path: strip_revision_prefix(parts[3], "b/"),
                    hunks: Vec::new(),
                });
                // A new file change has no hunk open yet, so the `---`/`+++`
                // header lines that follow are not captured as content.
                hunk_open = false;
            }
        } else if let Some(hunk) = parse_hunk_header(raw) {
            if let Some(file) = files.last_mut() {
                file.hunks.push(hunk);
                hunk_open = true;
            }
        } else if hunk_open {
            let kind = match raw.as_bytes().first() {
                Some(b'+') => LineKind::Added,
                Some(b'-') => LineKind::Removed,
                Some(b' ') => LineKind::Context,
                _ => continue,
            };

            if let Some(hunk) = files.last_mut().and_then(|f| f.hunks.last_mut()) {
                let new_line = hunk.new_start + hunk.lines.len();
                hunk.lines.push(Line {
                    kind,
                    text: raw[1..].to_string(),
                    new_line,
                });
            }
        }
    }

    files
}

/// Strip the conventional `a/` / `b/` revision prefix from a header token.
fn strip_revision_prefix(token: &str, prefix: &str) -> String {
    token.strip_prefix(prefix).unwrap_or(token).to_string()
}

fn parse_hunk_header(line: &str) -> Option<Hunk> {
    let caps = hunk_header_regex().captures(line)?;

    Some(Hunk {
        old_start: caps[1].parse().ok()?,
        old_count: caps[2].parse().ok()?,
        new_start: caps[3].parse().ok()?,
        new_count: caps[4].parse().ok()?,
        lines: Vec::new(),
    })
}
