/*!
 * # vocab-tr - German vocabulary tables from glossed Word documents
 *
 * A Rust library for turning loosely formatted `"Term - gloss"` lines in
 * `.docx` files into a CSV/TSV vocabulary table.
 *
 * ## Features
 *
 * - Read paragraph text out of `.docx` containers
 * - Recover entry boundaries in glued paragraphs
 * - Extract term/gloss pairs, including glosses continued on the next line
 * - Approximate each Azerbaijani gloss in Turkish with a fixed rule set
 * - Write comma or tab separated output, optionally one row per term
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document_reader`: `.docx` paragraph extraction
 * - `vocabulary`: Segmentation, pair extraction and gloss conversion:
 *   - `vocabulary::segmenter`: Boundary recovery in glued paragraphs
 *   - `vocabulary::likelihood`: Gloss plausibility predicate
 *   - `vocabulary::extractor`: Pair extraction with continuation lines
 *   - `vocabulary::gloss`: Turkish-like gloss approximation
 * - `exporter`: Row building, deduplication and table output
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document_reader;
pub mod errors;
pub mod exporter;
pub mod file_utils;
pub mod vocabulary;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{DocumentError, ExportError};
pub use exporter::VocabRow;
pub use vocabulary::{GlossConverter, PairExtractor, VocabPair};
