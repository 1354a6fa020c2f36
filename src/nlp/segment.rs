//! Review formatting and sentence segmentation
//!
//! Reviews arrive as raw free text, often with missing spaces after
//! periods or no terminal punctuation at all. Formatting fixes both so
//! segmentation sees well-formed sentence boundaries.

use crate::error::AbsaError;

/// Normalize a raw review string.
///
/// Ensures a space follows every period, trims surrounding whitespace,
/// and appends a terminal `.` when the review does not already end in
/// `.`, `!` or `?`.
///
/// Fails with [`AbsaError::EmptyReview`] when the review reduces to an
/// empty string — before any collaborator is invoked.
pub fn format_review(review: &str) -> Result<String, AbsaError> {
    let mut fixed = String::with_capacity(review.len() + 2);
    for ch in review.chars() {
        if ch == '.' {
            fixed.push_str(". ");
        } else {
            fixed.push(ch);
        }
    }

    let trimmed = fixed.trim();
    if trimmed.is_empty() {
        return Err(AbsaError::EmptyReview);
    }

    let last = trimmed.chars().next_back().unwrap_or('.');
    if matches!(last, '.' | '!' | '?') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}."))
    }
}

/// Split a formatted review into sentences on `.`, `!` and `?`.
///
/// Empty fragments (e.g. from "..") are dropped; terminators are not
/// retained in the output.
pub fn split_sentences(review: &str) -> Vec<String> {
    review
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
