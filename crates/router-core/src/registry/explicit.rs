//! Explicit-request surface patterns.
//!
//! A small shared table recognizes the ways users name an agent directly.
//! Every pattern has exactly one capture group for the candidate id; the
//! extracted id is lowercased here and validated by the calling strategy
//! against the filtered catalog and the phase-eligible set. No match, or a
//! candidate that fails validation, means "no explicit request" - never an
//! error.

use crate::pattern::TextPattern;

/// Build the explicit-request patterns, tested in declared order.
pub fn explicit_request_patterns() -> Vec<TextPattern> {
    let patterns = [
        // "use backend-developer", "use backend-developer agent"
        r"(?i)\buse\s+([a-z][a-z0-9-]*)",
        // "as system-architect"
        r"(?i)\bas\s+([a-z][a-z0-9-]*)",
        // "backend-developer agent", "backend-developer agent에게"
        r"(?i)\b([a-z][a-z0-9-]*)\s+agent(에게|한테)?",
        // "backend-developer한테 시켜줘", "ml-engineer로 작업해줘"
        r"([A-Za-z][A-Za-z0-9-]*)(으로|로|한테|에게)\s*(시켜|해줘|맡|부탁|작업|처리|진행)",
        // "backend-developer가 작업하도록 해줘"
        r"([A-Za-z][A-Za-z0-9-]*)(가|이)\s*(작업|처리|구현|담당)",
    ];

    patterns
        .iter()
        .map(|p| TextPattern::new(p).unwrap())
        .collect()
}

/// Extract a candidate agent id from free text.
///
/// Returns the first capture of the first matching pattern, lowercased.
/// Validation against the catalog and eligibility set is the caller's job.
pub fn extract_explicit_request(patterns: &[TextPattern], prompt: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(candidate) = pattern.capture(prompt) {
            return Some(candidate.to_lowercase());
        }
    }
    None
}
