//! Medical text normalization: whitespace collapsing and abbreviation
//! expansion. Pure and idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Common clinical shorthand, matched case-insensitively on word
/// boundaries so partial words are left alone.
static ABBREVIATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("pt", "patient"),
        ("dx", "diagnosis"),
        ("rx", "prescription"),
        ("tx", "treatment"),
        ("hx", "history"),
        ("sx", "symptoms"),
    ]
    .iter()
    .map(|(abbr, full)| {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", abbr)).unwrap();
        (pattern, *full)
    })
    .collect()
});

/// Clean and canonicalize raw query or extracted text.
pub fn clean(text: &str) -> String {
    let mut text = WHITESPACE.replace_all(text.trim(), " ").into_owned();
    for (pattern, full) in ABBREVIATIONS.iter() {
        text = pattern.replace_all(&text, *full).into_owned();
    }
    text
}
