/*!
 * Error types for the vocab-tr application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a word-processor document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be opened or read
    #[error("Cannot read document {path:?}: {source}")]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid zip container
    #[error("Not a valid document container {path:?}: {message}")]
    InvalidContainer {
        /// Path of the document
        path: PathBuf,
        /// Message from the zip reader
        message: String,
    },

    /// The container has no main text stream
    #[error("Document {path:?} has no '{entry}' entry")]
    MissingEntry {
        /// Path of the document
        path: PathBuf,
        /// Internal entry that was looked up
        entry: String,
    },

    /// The text stream is not well-formed XML
    #[error("Malformed XML in {path:?}: {message}")]
    Xml {
        /// Path of the document
        path: PathBuf,
        /// Message from the XML reader
        message: String,
    },
}

/// Errors that can occur while writing the output table
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error creating the output file or its directory
    #[error("Cannot write output {path:?}: {source}")]
    Io {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV writer
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
