//! Whitespace normalization for extracted text runs

/// Trims the text, turns newlines and tabs into spaces and collapses runs of spaces.
///
/// Idempotent: normalizing normalized text returns it unchanged.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut previous_space = false;
    for ch in text.trim().chars() {
        let ch = match ch {
            '\n' | '\t' => ' ',
            other => other,
        };
        if ch == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        normalized.push(ch);
    }
    normalized
}
