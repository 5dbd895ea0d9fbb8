//! Error types for the press pipeline.
//!
//! Only genuinely fatal conditions live here: a missing source or
//! intermediate file, or an I/O failure on a file we own. Converter
//! unavailability and converter failures are handled inside the export
//! scan and never propagate (see [`crate::export`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort processing of a single document.
///
/// In batch mode the caller reports the error and moves on to the next
/// input; nothing here terminates the process.
#[derive(Debug, Error)]
pub enum PressError {
    /// The referenced source or intermediate file does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Reading an input file failed after it was found.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing an output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
