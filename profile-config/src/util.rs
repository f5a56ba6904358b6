use std::time::Duration;

/// Parse a human readable duration (`"30s"`, `"1m 30s"`, `"250ms"`).
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    humantime::parse_duration(raw.trim()).map_err(|err| err.to_string())
}

/// Like [`parse_duration`], but `"0"`, `"none"` and `"off"` mean "no limit".
pub fn parse_optional_duration(raw: &str) -> Result<Option<Duration>, String> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" | "0" | "none" | "off" => Ok(None),
        _ => parse_duration(trimmed).map(|duration| {
            if duration.is_zero() {
                None
            } else {
                Some(duration)
            }
        }),
    }
}

/// Normalize a base URL so a bare `host:port` is accepted.
///
/// Adds `http://` when no scheme is present and trims trailing slashes so
/// route paths can be appended without producing `//`.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.contains("://")
    {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    if normalized != raw {
        log::debug!(
            "[Config] Normalized base URL from '{}' to '{}'",
            raw,
            normalized
        );
    }
    normalized
}

/// Read a variable through `lookup`, treating blank values as unset.
pub fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
