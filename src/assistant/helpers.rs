use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\r\n]+").unwrap());

/// Normalize a symptom or condition name into a table key.
/// "Chest   Pain" → "chest_pain"
pub fn normalize_key(raw: &str) -> String {
    RE_WHITESPACE
        .replace_all(raw.trim(), "_")
        .to_lowercase()
}

/// Split free text the way the symptom checker screen does: on commas and
/// newlines, trimming each piece and dropping empty ones.
pub fn split_symptom_text(text: &str) -> Vec<String> {
    RE_SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop repeated strings, keeping the first occurrence of each.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
