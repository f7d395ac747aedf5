use rand::prelude::IndexedRandom;
use std::time::Duration;

/// Sleep for one of `delays_ms`, picked at random. No-op when empty.
pub fn random_delay(delays_ms: &[u64]) {
    if let Some(delay) = delays_ms.choose(&mut rand::rng()) {
        std::thread::sleep(Duration::from_millis(*delay));
    }
}

/// Look up a string field, falling back when it is missing, null or not a string.
pub fn str_field<'a>(value: &'a serde_json::Value, key: &str, default: &'a str) -> &'a str {
    value.get(key).and_then(|v| v.as_str()).unwrap_or(default)
}

/// Capitalize the first letter of every word, lowercasing the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Truncate to `max_chars`, appending "..." when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
