/// Trim whitespace and a single leading and/or trailing comma
///
/// Commas are stripped once per side, not repeatedly: ",,x" becomes ",x".
pub fn clean(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix(',').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    trimmed.trim()
}
