use once_cell::sync::Lazy;
use regex::Regex;

// @module: Gloss plausibility check

// @const: Letters specific to Azerbaijani or Turkish, matched case-sensitively
const AZ_SPECIFIC_CHARS: &str = "əğıöüşçƏĞİÖÜŞÇ";
const TR_SPECIFIC_CHARS: &str = "ğıüşçöİıĞÜŞÇÖ";

// @const: Azerbaijani infinitive endings (-maq / -mək)
static INFINITIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\w+(maq|mək)\b").expect("Invalid infinitive regex")
});

// @const: Digits, whitespace and numeric punctuation only
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\d\s.,/+-]+$").expect("Invalid numeric regex")
});

/// Decide whether `text` reads like a translation rather than stray
/// punctuation, a number or a fragment of the term.
///
/// Glosses are mostly Azerbaijani, sometimes without any special letters
/// (`"qol vurmaq"`), so any one of these is enough:
/// - an Azerbaijani or Turkish specific letter
/// - a word ending in `maq`/`mək` (case-insensitive)
/// - an inner space, unless the text is purely numeric
pub fn looks_like_translation(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    if text
        .chars()
        .any(|c| AZ_SPECIFIC_CHARS.contains(c) || TR_SPECIFIC_CHARS.contains(c))
    {
        return true;
    }

    if INFINITIVE_REGEX.is_match(text) {
        return true;
    }

    text.contains(' ') && !NUMERIC_REGEX.is_match(text)
}
