use csv::WriterBuilder;
use log::debug;
use std::collections::HashSet;
use std::path::Path;

use crate::app_config::OutputFormat;
use crate::errors::ExportError;
use crate::file_utils::FileManager;
use crate::vocabulary::{GlossConverter, VocabPair};

// @module: Tabular output of extracted vocabulary

// @const: Fixed output header
pub const HEADER: [&str; 3] = ["german", "source_translation", "turkish_like"];

// @struct: Finalized output row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRow {
    // @field: German term
    pub term: String,

    // @field: Gloss as found in the document
    pub source_gloss: String,

    // @field: Turkish-like approximation of the gloss
    pub approx_gloss: String,
}

impl VocabRow {
    // @creates: Row with the gloss run through the converter
    pub fn from_pair(pair: VocabPair) -> Self {
        let approx_gloss = GlossConverter::convert(&pair.gloss);
        Self {
            term: pair.term.trim().to_string(),
            source_gloss: pair.gloss,
            approx_gloss,
        }
    }

    fn as_record(&self) -> [&str; 3] {
        [self.term.as_str(), self.source_gloss.as_str(), self.approx_gloss.as_str()]
    }
}

/// Keep the first row for every term, preserving order
pub fn dedup_by_term(rows: Vec<VocabRow>) -> Vec<VocabRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.term.trim().to_string()))
        .collect()
}

// @struct: Delimited table writer
pub struct TableWriter;

impl TableWriter {
    /// Write the header and all rows to `path`, creating parent directories
    pub fn write_rows<P: AsRef<Path>>(
        rows: &[VocabRow],
        path: P,
        format: OutputFormat,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            FileManager::ensure_dir(parent).map_err(|e| ExportError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other(e.to_string()),
            })?;
        }

        let mut writer = WriterBuilder::new()
            .delimiter(format.delimiter())
            .from_path(path)?;

        writer.write_record(HEADER)?;
        for row in rows {
            writer.write_record(row.as_record())?;
        }
        writer.flush().map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Wrote {} rows as {} to {}", rows.len(), format, path.display());
        Ok(())
    }
}
