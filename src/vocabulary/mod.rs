/*!
 * Vocabulary extraction from loosely formatted glossary text.
 *
 * Paragraphs from the source documents hold lines like `"Haus - ev"`, often
 * glued together or spilling onto the next paragraph. The submodules turn
 * them into (term, gloss) pairs and approximate the gloss in Turkish:
 *
 * - `segmenter`: splits glued paragraphs into single-entry segments
 * - `likelihood`: decides whether a fragment reads like a gloss
 * - `extractor`: builds pairs and stitches continuation lines
 * - `gloss`: Azerbaijani to Turkish-like rule based conversion
 */

// Re-export main types for easier usage
pub use self::extractor::{extract_pairs, PairExtractor, VocabPair};
pub use self::gloss::GlossConverter;
pub use self::likelihood::looks_like_translation;
pub use self::segmenter::{normalize_dashes, segment, split_glued_segments};

// Submodules
pub mod extractor;
pub mod gloss;
pub mod likelihood;
pub mod segmenter;
