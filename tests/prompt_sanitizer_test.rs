use deepvoice::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_prompt("   \n "), "[EMPTY]");
}

#[test]
fn given_multiline_prompt_when_sanitizing_then_flattens_whitespace() {
    assert_eq!(
        sanitize_prompt("Task:\n- classify\n\n- explain"),
        "Task: - classify - explain"
    );
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_total() {
    let prompt = "a".repeat(250);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (250 chars total)"));
}

#[test]
fn given_long_non_ascii_prompt_when_sanitizing_then_cuts_on_char_boundary() {
    let prompt = "தமிழ்".repeat(60);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.contains("chars total"));
}

#[test]
fn given_credentials_when_sanitizing_then_redacts_them() {
    let sanitized = sanitize_prompt("url?key=AIzaSecret&alt=json Bearer tok123 x-api-key: sk_live");

    assert!(!sanitized.contains("AIzaSecret"));
    assert!(!sanitized.contains("tok123"));
    assert!(!sanitized.contains("sk_live"));
    assert!(sanitized.contains("alt=json"));
}

#[test]
fn given_repeated_credentials_when_sanitizing_then_redacts_each_occurrence() {
    let sanitized = sanitize_prompt("api_key=one api_key=two");

    assert_eq!(sanitized, "api_key=[REDACTED] api_key=[REDACTED]");
}
