const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_MARKERS: [&str; 6] = [
    "Bearer ",
    "x-api-key: ",
    "x-goog-api-key: ",
    "api_key=",
    "key=",
    "secret=",
];

/// Flattens and truncates prompt-like text for logging, redacting anything
/// that follows a credential marker.
pub fn sanitize_prompt(prompt: &str) -> String {
    let flattened = prompt.split_whitespace().collect::<Vec<_>>().join(" ");

    if flattened.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = flattened.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let cut: String = flattened.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", cut, total)
    } else {
        flattened
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for marker in SECRET_MARKERS {
        let mut from = 0;
        while let Some(pos) = result[from..].find(marker) {
            let start = from + pos + marker.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ','))
                .map(|i| start + i)
                .unwrap_or(result.len());
            if start == end || &result[start..end] == "[REDACTED]" {
                from = end;
                continue;
            }
            result.replace_range(start..end, "[REDACTED]");
            from = start + "[REDACTED]".len();
        }
    }
    result
}
