/*!
 * Azerbaijani to Turkish-like gloss conversion.
 *
 * This is not a translator. Known phrases are mapped through a small phrase
 * table; everything else gets orthographic substitutions and a short list of
 * whole-word replacements. The output is meant to be reviewed by a human.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Whole-phrase renderings, keyed by the lowercased, trimmed gloss
static PHRASE_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("sabahınız xeyir", "günaydın"),
        ("axşamınız xeyir", "iyi akşamlar"),
        ("hər vaxtınız xeyir, günortanız xeyir", "iyi günler"),
        ("hər vaxtınız xeyir", "iyi günler"),
        ("günortanız xeyir", "tünaydın"),
        ("neçə yaşındansınız?", "kaç yaşındasınız?"),
        ("adınız nədir ?", "adınız nedir?"),
        ("adınız nədir?", "adınız nedir?"),
        ("çox yaxşı", "çok iyi"),
        ("bir az", "biraz"),
        ("təkrar etmək", "tekrar etmek"),
        ("cavab vermək", "cevap vermek"),
        ("soruşmaq", "sormak"),
        ("yaşamaq", "yaşamak"),
        ("öyrənmək", "öğrenmek"),
        ("dinləmək", "dinlemek"),
        ("oxumaq", "okumak"),
        ("işləmək", "çalışmak"),
    ])
});

/// Letter substitutions applied to the original casing
const ORTHOGRAPHY: [(char, &str); 6] = [
    ('Ə', "E"),
    ('ə', "e"),
    ('x', "h"),
    ('X', "H"),
    ('q', "k"),
    ('Q', "K"),
];

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Whole-word replacements, applied in order to the progressively rewritten text
static WORD_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("və", "ve"),
        ("haradan", "nereden"),
        ("harada", "nerede"),
        ("nə", "ne"),
        ("hansı", "hangi"),
        ("şəhər", "şehir"),
        ("məmləkət", "memleket"),
        ("subay", "bekar"),
        ("evli", "evli"),
        ("yaşamaq", "yaşamak"),
        ("öyrənmək", "öğrenmek"),
        ("dinləmək", "dinlemek"),
        ("oxumaq", "okumak"),
        ("yazılı", "yazılı"),
        ("şifahi", "sözlü"),
    ]
    .into_iter()
    .map(|(word, replacement)| {
        let pattern = word_pattern(word);
        (Regex::new(&pattern).expect("Invalid word rule regex"), replacement)
    })
    .collect()
});

/// Case-insensitive whole-word pattern for a rule word.
///
/// Simple case folding does not pair dotless `ı` with `I`, so it gets an
/// explicit class that also covers the capitalised forms.
fn word_pattern(word: &str) -> String {
    let escaped = regex::escape(word).replace('ı', "[ıIi]");
    format!(r"(?i)\b{}\b", escaped)
}

/// Rule based gloss converter
pub struct GlossConverter;

impl GlossConverter {
    /// Produce a Turkish-like rendering of an Azerbaijani gloss
    pub fn convert(text: &str) -> String {
        if let Some(phrase) = Self::lookup_phrase(text) {
            return phrase.to_string();
        }

        let mut result = Self::apply_orthography(text);
        result = WHITESPACE_REGEX.replace_all(&result, " ").trim().to_string();

        for (pattern, replacement) in WORD_RULES.iter() {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }

        result
    }

    /// Phrase-table hit for the whole gloss, if any
    pub fn lookup_phrase(text: &str) -> Option<&'static str> {
        PHRASE_TABLE.get(text.trim().to_lowercase().as_str()).copied()
    }

    fn apply_orthography(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match ORTHOGRAPHY.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => result.push_str(to),
                None => result.push(c),
            }
        }
        result
    }
}
