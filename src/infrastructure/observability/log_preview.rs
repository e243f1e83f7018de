const MAX_PREVIEW_CHARS: usize = 100;

const SECRET_MARKERS: [&str; 5] = [
    "DeepL-Auth-Key ",
    "Bearer ",
    "auth_key=",
    "api_key=",
    "password=",
];

/// Shortens user text for debug logs and masks anything that looks like a
/// credential.
pub fn preview_for_log(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let preview = if total > MAX_PREVIEW_CHARS {
        let head: String = trimmed.chars().take(MAX_PREVIEW_CHARS).collect();
        format!("{head}... ({total} chars total)")
    } else {
        trimmed.to_string()
    };

    SECRET_MARKERS
        .iter()
        .fold(preview, |acc, marker| mask_after(&acc, marker))
}

fn mask_after(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(marker) {
        let value_start = idx + marker.len();
        out.push_str(&rest[..value_start]);
        out.push_str("[REDACTED]");

        let value_len = rest[value_start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
            .unwrap_or(rest.len() - value_start);
        rest = &rest[value_start + value_len..];
    }

    out.push_str(rest);
    out
}
