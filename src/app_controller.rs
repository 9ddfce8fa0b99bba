use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document_reader::DocxReader;
use crate::exporter::{dedup_by_term, TableWriter, VocabRow};
use crate::file_utils::FileManager;
use crate::vocabulary::extract_pairs;

// @module: Application controller for vocabulary extraction

/// Main application controller: documents in, one table out
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read every input in order and build the output rows.
    ///
    /// Any unreadable document aborts the whole run.
    pub fn collect_rows<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<Vec<VocabRow>> {
        let documents = FileManager::expand_inputs(inputs, &self.config.input_extension)?;
        let progress_bar = Self::document_progress(documents.len());

        let mut rows = Vec::new();
        for document in &documents {
            progress_bar.set_message(Self::display_name(document));

            let paragraphs = DocxReader::read_paragraphs(document)
                .with_context(|| format!("Failed to read document: {}", document.display()))?;
            let pairs = extract_pairs(&paragraphs);
            debug!(
                "{}: {} paragraphs, {} pairs",
                document.display(),
                paragraphs.len(),
                pairs.len()
            );

            rows.extend(pairs.into_iter().map(VocabRow::from_pair));
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        if self.config.output.unique {
            let before = rows.len();
            rows = dedup_by_term(rows);
            debug!("Removed {} duplicate terms", before - rows.len());
        }

        info!("Extracted {} rows from {} documents", rows.len(), documents.len());
        Ok(rows)
    }

    /// Run the whole conversion and return the number of rows written
    pub fn run<P: AsRef<Path>>(&self, inputs: &[P], output: &Path) -> Result<usize> {
        let rows = self.collect_rows(inputs)?;

        TableWriter::write_rows(&rows, output, self.config.output.format)
            .with_context(|| format!("Failed to write output: {}", output.display()))?;

        Ok(rows.len())
    }

    /// Output path from the configuration
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.config.output.path)
    }

    // Progress is only worth showing for more than one document
    fn document_progress(count: usize) -> ProgressBar {
        if count < 2 {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(count as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("#>-"));
        progress_bar
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}
