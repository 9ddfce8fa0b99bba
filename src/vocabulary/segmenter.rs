/*!
 * Paragraph segmentation.
 *
 * Source paragraphs frequently hold several entries with no separator, e.g.
 * `"Wie alt sind Sie?- ...?Woher-haradan?"` or `"qol vurmaqMarketing - ..."`.
 * Boundaries are recovered by inserting a marker in three passes and then
 * splitting on it. Nothing is deleted except surrounding whitespace.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker inserted at recovered entry boundaries
const BOUNDARY: &str = "\n";

/// `?` directly followed by a German interrogative starts a new question
static QUESTION_LEAD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\?(Woher|Wohin|Warum|Wie|Wo|Was|Welche|Welcher|Welches)")
        .expect("Invalid question lead regex")
});

/// Sentence punctuation glued to the next letter
static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([?!.])([A-Za-zÄÖÜäöüß])").expect("Invalid sentence end regex")
});

/// Lowercase letter or digit glued to a capital, typically a gloss running
/// into the next German term
static CASE_CHANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z0-9əğıöüşç])([A-ZÄÖÜ])").expect("Invalid case change regex")
});

/// Replace en and em dashes with a plain hyphen
pub fn normalize_dashes(text: &str) -> String {
    text.replace(['\u{2013}', '\u{2014}'], "-")
}

/// Split a paragraph into trimmed, non-empty segments of at most one entry each.
///
/// The three boundary rules run as separate passes over the whole string so
/// later passes see the markers inserted by earlier ones.
pub fn split_glued_segments(line: &str) -> Vec<String> {
    let marked = QUESTION_LEAD_REGEX.replace_all(line, format!("?{}$1", BOUNDARY).as_str());
    let marked = SENTENCE_END_REGEX.replace_all(&marked, format!("$1{}$2", BOUNDARY).as_str());
    let marked = CASE_CHANGE_REGEX.replace_all(&marked, format!("$1{}$2", BOUNDARY).as_str());

    marked
        .split(BOUNDARY)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize dashes, then split into segments
pub fn segment(paragraph: &str) -> Vec<String> {
    split_glued_segments(&normalize_dashes(paragraph))
}
