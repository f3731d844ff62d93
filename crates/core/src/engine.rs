//! Review orchestration: parse the diff, run every pass, assemble the result
//!
//! The engine is the fault boundary of the core: whatever happens inside a
//! review is captured and surfaced as a failed [`ReviewResult`], never as a
//! panic reaching the caller.

use crate::diff::{self, FileChange, LineKind};
use crate::finding::{Finding, ReviewResult, ReviewSummary};
use crate::rules::RuleSet;
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};

/// Runs a rule set over every added line of a parsed diff
pub struct ReviewEngine {
    rules: RuleSet,
}

impl ReviewEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Review a unified diff.
    ///
    /// Never fails: malformed diff fragments are skipped by the parser, and
    /// any internal fault is captured here and returned as a result with
    /// `success = false` and an error description.
    pub fn review(&self, diff_text: &str) -> ReviewResult {
        match panic::catch_unwind(AssertUnwindSafe(|| self.review_inner(diff_text))) {
            Ok(result) => result,
            Err(payload) => ReviewResult::failed(panic_message(payload.as_ref())),
        }
    }

    fn review_inner(&self, diff_text: &str) -> ReviewResult {
        let files = diff::parse(diff_text);

        // Files are scanned in parallel; the indexed par_iter preserves file
        // order on collect, so the merged findings are byte-identical to a
        // sequential file-by-file scan.
        let per_file: Vec<Vec<Finding>> = files
            .par_iter()
            .map(|file| self.scan_file(file))
            .collect();

        let mut findings = Vec::new();
        for file_findings in per_file {
            findings.extend(file_findings);
        }

        let mut summary = ReviewSummary {
            total_files: files.len(),
            ..Default::default()
        };
        for finding in &findings {
            summary.record(finding.category);
        }

        ReviewResult {
            files,
            findings,
            summary,
            success: true,
            error: None,
        }
    }

    /// Scan every added line of one file, in hunk then line order.
    fn scan_file(&self, file: &FileChange) -> Vec<Finding> {
        let mut findings = Vec::new();

        for hunk in &file.hunks {
            for line in &hunk.lines {
                if line.kind != LineKind::Added {
                    continue;
                }
                findings.extend(self.rules.scan_line(&file.new_path, line.new_line, &line.text));
            }
        }

        findings
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

/// Best-effort extraction of a message from a caught panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal review failure".to_string()
    }
}
