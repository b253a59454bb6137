//! Track catalog: the immutable timeline of annotations.
//!
//! A catalog is an ordered list of tracks, and each track is an ordered,
//! non-overlapping list of annotations. Tracks are an organizational
//! grouping only; a track's span is taken to be
//! `[first.start_time, last.end_time]`.
//!
//! The catalog is built once and never mutated afterwards. Construction
//! precomputes two things the search engine relies on:
//!
//! - the positions of all non-empty tracks, so the track search can skip
//!   empty tracks without touching the track list
//! - the global bounds (first start time, last end time), used as the
//!   cheapest possible "nothing can be showing" check

mod demo;
mod error;
mod load;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use demo::demo;
pub use error::CatalogError;
pub use load::{load, parse_json, parse_toml};

/// A timed overlay: visible from `start_time` to `end_time` (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(alias = "startTime")]
    pub start_time: f64,
    #[serde(alias = "endTime")]
    pub end_time: f64,
}

impl Annotation {
    pub fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Inclusive membership: `start_time <= time <= end_time`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }

    /// Open-interval membership: `start_time < time < end_time`.
    pub fn strictly_contains(&self, time: f64) -> bool {
        time > self.start_time && time < self.end_time
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Positional identity of an annotation inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotationId {
    /// Index of the track in the catalog
    pub track: usize,
    /// Index of the annotation within its track
    pub index: usize,
}

impl AnnotationId {
    pub fn new(track: usize, index: usize) -> Self {
        Self { track, index }
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.track, self.index)
    }
}

/// A copy of an annotation together with where it lives in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocatedAnnotation {
    pub id: AnnotationId,
    pub annotation: Annotation,
}

impl LocatedAnnotation {
    pub fn new(id: AnnotationId, annotation: Annotation) -> Self {
        Self { id, annotation }
    }

    pub fn start_time(&self) -> f64 {
        self.annotation.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.annotation.end_time
    }
}

/// An ordered group of annotations. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track {
    annotations: Vec<Annotation>,
}

impl Track {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self { annotations }
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn first(&self) -> Option<&Annotation> {
        self.annotations.first()
    }

    pub fn last(&self) -> Option<&Annotation> {
        self.annotations.last()
    }

    /// The track's range: first annotation's start to last annotation's end.
    ///
    /// Returns `None` for an empty track.
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.start_time, last.end_time)),
            _ => None,
        }
    }
}

impl From<Vec<Annotation>> for Track {
    fn from(annotations: Vec<Annotation>) -> Self {
        Self::new(annotations)
    }
}

/// Global time range covered by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBounds {
    /// Start time of the first annotation in the first non-empty track
    pub first_start: f64,
    /// End time of the last annotation in the last non-empty track
    pub last_end: f64,
}

impl TimeBounds {
    /// Compute bounds from a track list, or `None` if no track has annotations.
    pub fn of(tracks: &[Track]) -> Option<Self> {
        Some(Self {
            first_start: first_annotation_start_time(tracks)?,
            last_end: last_annotation_end_time(tracks)?,
        })
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.first_start && time <= self.last_end
    }
}

/// Start time of the first annotation in the first non-empty track.
///
/// Returns `None` when there are no tracks or every track is empty.
/// An annotation starting at exactly `0.0` is a valid answer.
pub fn first_annotation_start_time(tracks: &[Track]) -> Option<f64> {
    tracks
        .iter()
        .find_map(Track::first)
        .map(|annotation| annotation.start_time)
}

/// End time of the last annotation in the last non-empty track.
///
/// Mirror of [`first_annotation_start_time`], scanning from the end.
pub fn last_annotation_end_time(tracks: &[Track]) -> Option<f64> {
    tracks
        .iter()
        .rev()
        .find_map(Track::last)
        .map(|annotation| annotation.end_time)
}

/// Immutable, ordered collection of tracks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
    #[serde(skip)]
    non_empty: Vec<usize>,
    #[serde(skip)]
    bounds: Option<TimeBounds>,
}

impl TrackCatalog {
    /// Build a catalog from well-formed tracks.
    ///
    /// Annotations must satisfy `start_time < end_time` and each track must be
    /// sorted and non-overlapping. This is only checked in debug builds; use
    /// [`TrackCatalog::validated`] for untrusted input.
    pub fn new(tracks: Vec<Track>) -> Self {
        debug_assert!(
            Self::validate(&tracks).is_ok(),
            "malformed track catalog: {:?}",
            Self::validate(&tracks).err()
        );

        let non_empty = tracks
            .iter()
            .enumerate()
            .filter(|(_, track)| !track.is_empty())
            .map(|(index, _)| index)
            .collect();
        let bounds = TimeBounds::of(&tracks);

        Self {
            tracks,
            non_empty,
            bounds,
        }
    }

    /// Build a catalog, rejecting malformed annotations.
    pub fn validated(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        Self::validate(&tracks)?;
        Ok(Self::new(tracks))
    }

    /// Check the data-model preconditions of every track.
    pub fn validate(tracks: &[Track]) -> Result<(), CatalogError> {
        for (track_idx, track) in tracks.iter().enumerate() {
            let mut previous_end: Option<f64> = None;

            for (index, annotation) in track.annotations().iter().enumerate() {
                let (start, end) = (annotation.start_time, annotation.end_time);

                if !start.is_finite() || !end.is_finite() {
                    return Err(CatalogError::NonFinite {
                        track: track_idx,
                        index,
                    });
                }
                if start >= end {
                    return Err(CatalogError::EmptyInterval {
                        track: track_idx,
                        index,
                        start,
                        end,
                    });
                }
                if let Some(previous_end) = previous_end {
                    if start < previous_end {
                        return Err(CatalogError::Overlap {
                            track: track_idx,
                            index,
                            start,
                            previous_end,
                        });
                    }
                }
                previous_end = Some(end);
            }
        }
        Ok(())
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks, including empty ones.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total number of annotations across all tracks.
    pub fn annotation_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// Ascending positions of the tracks that have at least one annotation.
    pub fn non_empty_tracks(&self) -> &[usize] {
        &self.non_empty
    }

    /// Cached global bounds; `None` if the catalog has no annotations at all.
    pub fn bounds(&self) -> Option<TimeBounds> {
        self.bounds
    }

    /// Look up an annotation by position.
    pub fn locate(&self, id: AnnotationId) -> Option<LocatedAnnotation> {
        self.track(id.track)
            .and_then(|track| track.get(id.index))
            .map(|annotation| LocatedAnnotation::new(id, *annotation))
    }

    /// Iterate every annotation with its position, in track order.
    pub fn iter(&self) -> impl Iterator<Item = LocatedAnnotation> + '_ {
        self.tracks
            .iter()
            .enumerate()
            .flat_map(|(track_idx, track)| {
                track
                    .annotations()
                    .iter()
                    .enumerate()
                    .map(move |(index, annotation)| {
                        LocatedAnnotation::new(AnnotationId::new(track_idx, index), *annotation)
                    })
            })
    }

    /// Human-readable description used in show/hide messages.
    pub fn label(annotation: &LocatedAnnotation) -> String {
        format!(
            "annotation {} in track {} (start/end = {}/{})",
            annotation.id.index + 1,
            annotation.id.track + 1,
            annotation.start_time(),
            annotation.end_time()
        )
    }
}

impl From<Vec<Vec<Annotation>>> for TrackCatalog {
    fn from(tracks: Vec<Vec<Annotation>>) -> Self {
        Self::new(tracks.into_iter().map(Track::from).collect())
    }
}
