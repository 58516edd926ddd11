//! Business name to web id normalization.

pub const MAX_WEB_ID_LEN: usize = 50;

/// Base used when a business name has no ASCII letters or digits at all.
pub const FALLBACK_WEB_ID: &str = "website";

/// Turn a free-text business name into a URL-safe web id candidate.
///
/// Every run of characters outside `[a-z0-9]` (after lower-casing) becomes a
/// single `-`, separators are trimmed from both ends, and the result is capped
/// at [`MAX_WEB_ID_LEN`] characters.
pub fn generate_web_id(business_name: &str) -> String {
    let mut result = String::new();
    let mut pending_dash = false;

    for ch in business_name.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            result.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    // Only ASCII is pushed, so byte length equals char count.
    result.truncate(MAX_WEB_ID_LEN);
    let trimmed = result.trim_end_matches('-');

    if trimmed.is_empty() {
        return FALLBACK_WEB_ID.to_string();
    }

    trimmed.to_string()
}
