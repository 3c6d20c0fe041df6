//! Error types for `.vcf` file loading.

use std::io;

use thiserror::Error;

/// Errors that can occur when loading a `.vcf` file from disk.
///
/// Parsing of vCard content itself never fails: malformed property lines
/// degrade to default or empty values and unterminated blocks are
/// discarded. Only getting the text off the disk can go wrong, and callers
/// report such files and move on to the next one.
#[derive(Debug, Error)]
pub enum VcfError {
    /// The file could not be read (missing, permissions, hardware).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file bytes are not valid UTF-8 text.
    #[error("file is not valid UTF-8 text")]
    InvalidUtf8,
}
