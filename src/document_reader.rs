/*!
 * Paragraph text extraction from `.docx` containers.
 *
 * A `.docx` file is a zip archive; the body text lives in `word/document.xml`.
 * Every `p` element of the WordprocessingML namespace becomes one paragraph
 * whose text is the concatenation of the `t` runs below it, whatever prefix
 * the document binds the namespace to. Formatting, tabs and breaks are
 * discarded. Entities are decoded once.
 */

use log::debug;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

use crate::errors::DocumentError;

/// Internal path of the main text stream
pub const DOCUMENT_XML: &str = "word/document.xml";

/// WordprocessingML main namespace; element prefixes are resolved against it
const WORDML_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const PARAGRAPH_TAG: &[u8] = b"p";
const TEXT_TAG: &[u8] = b"t";

/// Reader for word-processor documents
pub struct DocxReader;

impl DocxReader {
    /// Read the non-empty, trimmed paragraphs of a document in order
    pub fn read_paragraphs<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DocumentError> {
        let path = path.as_ref();
        let xml = Self::read_document_xml(path)?;

        let paragraphs = Self::paragraphs_from_xml(&xml).map_err(|message| DocumentError::Xml {
            path: path.to_path_buf(),
            message,
        })?;

        debug!("Read {} paragraphs from {}", paragraphs.len(), path.display());
        Ok(paragraphs)
    }

    /// Load the raw XML text stream out of the zip container
    fn read_document_xml(path: &Path) -> Result<String, DocumentError> {
        let io_error = |source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let mut archive = ZipArchive::new(file).map_err(|e| DocumentError::InvalidContainer {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut entry = archive
            .by_name(DOCUMENT_XML)
            .map_err(|_| DocumentError::MissingEntry {
                path: path.to_path_buf(),
                entry: DOCUMENT_XML.to_string(),
            })?;

        let mut buffer = Vec::new();
        entry.read_to_end(&mut buffer).map_err(io_error)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Collect paragraph text from a WordprocessingML body.
    ///
    /// Paragraphs are returned in document order of their start tags. A
    /// paragraph nested inside another one (text boxes, frames) contributes
    /// its text to the enclosing paragraph and is also returned on its own.
    pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, String> {
        let mut reader = NsReader::from_reader(Cursor::new(xml.as_bytes()));

        let mut buf = Vec::new();
        let mut slots: Vec<String> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut in_text = false;

        loop {
            buf.clear();
            match reader.read_resolved_event_into(&mut buf) {
                Ok((ResolveResult::Bound(Namespace(WORDML_NS)), Event::Start(e))) => {
                    match e.local_name().as_ref() {
                        PARAGRAPH_TAG => {
                            open.push(slots.len());
                            slots.push(String::new());
                        }
                        TEXT_TAG => in_text = !open.is_empty(),
                        _ => {}
                    }
                }
                Ok((_, Event::Text(t))) => {
                    if in_text {
                        let text = t
                            .unescape()
                            .unwrap_or_else(|_| String::from_utf8_lossy(&t));
                        for &index in &open {
                            slots[index].push_str(&text);
                        }
                    }
                }
                Ok((ResolveResult::Bound(Namespace(WORDML_NS)), Event::End(e))) => {
                    match e.local_name().as_ref() {
                        TEXT_TAG => in_text = false,
                        PARAGRAPH_TAG => {
                            open.pop();
                        }
                        _ => {}
                    }
                }
                Ok((_, Event::Eof)) => break,
                Err(err) => {
                    return Err(format!(
                        "error at position {}: {}",
                        reader.buffer_position(),
                        err
                    ))
                }
                _ => {}
            }
        }

        Ok(slots
            .iter()
            .map(|text| text.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
