/*!
 * Term/gloss pair extraction with continuation handling.
 *
 * Segments are consumed in order. A segment with a delimiter opens a new pair;
 * a segment without one may extend the gloss of the pair opened just before it.
 * Anything doubtful is dropped and closes the open pair.
 */

use log::trace;

use super::likelihood::looks_like_translation;
use super::segmenter::segment;

/// Delimiters tried in order; a later one is only used when no earlier one occurs
const DELIMITERS: [char; 2] = ['-', ','];

/// One extracted vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabPair {
    /// Source-language term (left of the delimiter)
    pub term: String,

    /// Gloss as written in the document (right of the delimiter)
    pub gloss: String,
}

impl VocabPair {
    pub fn new(term: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            gloss: gloss.into(),
        }
    }
}

/// Stateful extractor for a single document.
///
/// `carry` indexes the pair still open for continuation lines, if any.
#[derive(Debug, Default)]
pub struct PairExtractor {
    pairs: Vec<VocabPair>,
    carry: Option<usize>,
}

impl PairExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment a raw paragraph and feed every segment
    pub fn push_paragraph(&mut self, paragraph: &str) {
        for line in segment(paragraph) {
            self.push_segment(&line);
        }
    }

    /// Feed one segment
    pub fn push_segment(&mut self, line: &str) {
        match DELIMITERS.iter().find(|&&delimiter| line.contains(delimiter)) {
            Some(&delimiter) => self.push_delimited(line, delimiter),
            None => self.push_continuation(line),
        }
    }

    fn push_delimited(&mut self, line: &str, delimiter: char) {
        self.carry = match split_entry(line, delimiter) {
            Some(pair) => {
                self.pairs.push(pair);
                Some(self.pairs.len() - 1)
            }
            None => {
                trace!("Dropped segment: {}", line);
                None
            }
        };
    }

    fn push_continuation(&mut self, line: &str) {
        let open = self.carry.filter(|_| looks_like_translation(line));
        match open.and_then(|index| self.pairs.get_mut(index)) {
            Some(pair) => {
                pair.gloss.push(' ');
                pair.gloss.push_str(line);
            }
            None => {
                trace!("Dropped segment: {}", line);
                self.carry = None;
            }
        }
    }

    /// Pairs extracted so far, in first-seen order
    pub fn pairs(&self) -> &[VocabPair] {
        &self.pairs
    }

    /// Index of the pair open for continuation
    pub fn carry(&self) -> Option<usize> {
        self.carry
    }

    pub fn into_pairs(self) -> Vec<VocabPair> {
        self.pairs
    }
}

/// Split on the first `delimiter`; accept when both sides are non-empty and
/// the right side reads like a translation
fn split_entry(line: &str, delimiter: char) -> Option<VocabPair> {
    let (left, right) = line.split_once(delimiter)?;
    let (left, right) = (left.trim(), right.trim());

    if left.is_empty() || right.is_empty() || !looks_like_translation(right) {
        return None;
    }

    Some(VocabPair::new(left, right))
}

/// Extract the pairs of one document from its paragraphs
pub fn extract_pairs<I, S>(paragraphs: I) -> Vec<VocabPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = PairExtractor::new();
    for paragraph in paragraphs {
        extractor.push_paragraph(paragraph.as_ref());
    }
    extractor.into_pairs()
}
