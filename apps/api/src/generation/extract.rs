//! Pulls a JSON object out of free-form model output.
//!
//! The model is asked for bare JSON but routinely wraps it in prose or code fences.
//! A regex cannot balance nested braces, so this is a small scanner that tracks depth
//! and skips braces inside string literals.

/// Returns the first top-level `{...}` object in `text`, braces balanced.
///
/// Returns `None` when there is no `{` at all, or when the first `{` is never closed.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
