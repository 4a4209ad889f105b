//! Splitting a raw multi-email completion into individual drafts.
//!
//! Protocol: the email prompt asks the model to separate drafts with the
//! literal line `===EMAIL===`. A completion that is a JSON array of strings is
//! accepted as well; the delimiter split is the fallback.

use crate::llm_client::strip_json_fences;

pub const EMAIL_DELIMITER: &str = "===EMAIL===";

/// Returns the trimmed, non-empty email bodies in the order the model wrote them.
pub fn split_emails(raw: &str) -> Vec<String> {
    if let Ok(drafts) = serde_json::from_str::<Vec<String>>(strip_json_fences(raw)) {
        return keep_non_empty(drafts.iter().map(String::as_str));
    }
    keep_non_empty(raw.split(EMAIL_DELIMITER))
}

fn keep_non_empty<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<String> {
    segments
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
