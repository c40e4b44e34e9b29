//! Errors raised by the host layers (drawing I/O, deletion, configuration).
//!
//! The reduction itself is total and never fails.

use crate::segments::SegmentId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("element {0} appears more than once in the drawing")]
    DuplicateElement(SegmentId),

    #[error("element {0} is not part of the drawing")]
    UnknownElement(SegmentId),

    #[error("selection contains no straight lines in a recognized category")]
    EmptySelection,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
