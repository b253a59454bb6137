//! Catalog validation errors.

use std::path::PathBuf;

/// Errors that can occur while building or loading a track catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Annotation {index} in track {track} has a non-finite time")]
    NonFinite { track: usize, index: usize },

    #[error("Annotation {index} in track {track} ends before it starts ({start} >= {end})")]
    EmptyInterval {
        track: usize,
        index: usize,
        start: f64,
        end: f64,
    },

    #[error("Annotation {index} in track {track} starts at {start} before the previous one ends at {previous_end}")]
    Overlap {
        track: usize,
        index: usize,
        start: f64,
        previous_end: f64,
    },

    #[error("Unsupported catalog format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}
