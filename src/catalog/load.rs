//! Catalog file loading (JSON and TOML).
//!
//! JSON catalogs are either a bare array of tracks or an object with a
//! `tracks` key:
//!
//! ```json
//! [[{"start_time": 2.0, "end_time": 3.0}], []]
//! ```
//!
//! TOML catalogs always use the `tracks` key:
//!
//! ```toml
//! tracks = [[{ start_time = 2.0, end_time = 3.0 }], []]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{CatalogError, Track, TrackCatalog};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Track>),
    Document(CatalogDocument),
}

/// Load and validate a catalog, picking the format from the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TrackCatalog> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read catalog: {:?}", path))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let catalog = match extension.as_deref() {
        Some("json") => parse_json(&content),
        Some("toml") => parse_toml(&content),
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into())
        }
    }
    .with_context(|| format!("Invalid catalog: {:?}", path))?;

    tracing::info!(
        path = %path.display(),
        tracks = catalog.len(),
        annotations = catalog.annotation_count(),
        "loaded catalog"
    );

    Ok(catalog)
}

/// Parse a JSON catalog.
pub fn parse_json(content: &str) -> Result<TrackCatalog> {
    let parsed: JsonCatalog =
        serde_json::from_str(content).context("Failed to parse catalog JSON")?;
    let tracks = match parsed {
        JsonCatalog::Bare(tracks) => tracks,
        JsonCatalog::Document(doc) => doc.tracks,
    };
    Ok(TrackCatalog::validated(tracks)?)
}

/// Parse a TOML catalog.
pub fn parse_toml(content: &str) -> Result<TrackCatalog> {
    let doc: CatalogDocument = toml::from_str(content).context("Failed to parse catalog TOML")?;
    Ok(TrackCatalog::validated(doc.tracks)?)
}
