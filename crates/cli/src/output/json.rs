//! JSON output formatting

use patchlint_core::ReviewResult;

/// Serialize the full review result, findings and parsed files included.
pub fn to_json(result: &ReviewResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
