//! Interval location over a track catalog.
//!
//! Stateless binary searches used by the step search controller:
//!
//! - [`find_track`] locates the track whose span contains a time value
//! - [`next_track`] finds the next track that has annotations
//! - [`find_annotation`] locates the annotation containing a time value
//! - [`next_annotation`] finds the annotation that follows, possibly in the
//!   next track
//!
//! Membership is inclusive at both ends. When a time sits exactly on a shared
//! boundary (one interval ends where the next begins) the earlier interval
//! wins, so the hand-over happens on the first time strictly past the
//! boundary.
//!
//! "Not found" is always `None`, never an error.

use crate::catalog::{AnnotationId, LocatedAnnotation, Track, TrackCatalog};

/// A track together with its position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRef<'a> {
    pub index: usize,
    pub track: &'a Track,
}

impl<'a> TrackRef<'a> {
    /// Resolve a track position, or `None` if it is out of range.
    pub fn resolve(catalog: &'a TrackCatalog, index: usize) -> Option<Self> {
        catalog.track(index).map(|track| Self { index, track })
    }

    fn located(&self, index: usize) -> Option<LocatedAnnotation> {
        self.track
            .get(index)
            .map(|annotation| LocatedAnnotation::new(AnnotationId::new(self.index, index), *annotation))
    }
}

/// Result of [`find_track`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMatch<'a> {
    /// Track whose span contains the time
    pub current: TrackRef<'a>,
    /// Next non-empty track after `current`, if any
    pub next: Option<TrackRef<'a>>,
}

/// Result of [`find_annotation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationMatch {
    /// Annotation containing the time
    pub current: LocatedAnnotation,
    /// Annotation that follows `current`, possibly in the next track
    pub next: Option<LocatedAnnotation>,
}

/// Whether `time` lies within the track's span (inclusive).
///
/// Always false for an empty track.
pub fn in_track(time: f64, track: &Track) -> bool {
    track
        .span()
        .map_or(false, |(start, end)| time >= start && time <= end)
}

/// Binary search for the track whose span contains `time`.
///
/// Only non-empty tracks are searched, using the catalog's precomputed index,
/// so empty tracks cost nothing. Returns `None` when `time` falls in a gap
/// between track spans or the catalog has no annotations.
pub fn find_track(time: f64, catalog: &TrackCatalog) -> Option<TrackMatch<'_>> {
    let positions = catalog.non_empty_tracks();
    let tracks = catalog.tracks();
    let contains = |pos: usize| in_track(time, &tracks[positions[pos]]);

    let mut start = 0;
    let mut end = positions.len();

    while start < end {
        let middle = start + (end - start) / 2;
        let Some((_, last_end)) = tracks[positions[middle]].span() else {
            break;
        };

        if contains(middle) {
            // Prefer an earlier track that also contains a boundary time.
            // Track spans do not overlap, so this steps back at most once.
            let mut found = middle;
            while found > 0 && contains(found - 1) {
                found -= 1;
            }

            let current = TrackRef {
                index: positions[found],
                track: &tracks[positions[found]],
            };
            let next = positions.get(found + 1).map(|&index| TrackRef {
                index,
                track: &tracks[index],
            });
            return Some(TrackMatch { current, next });
        } else if time > last_end {
            start = middle + 1;
        } else {
            end = middle;
        }
    }

    None
}

/// First track after `from_index` that has at least one annotation.
pub fn next_track(catalog: &TrackCatalog, from_index: usize) -> Option<TrackRef<'_>> {
    let positions = catalog.non_empty_tracks();
    let after = positions.partition_point(|&index| index <= from_index);
    positions
        .get(after)
        .and_then(|&index| TrackRef::resolve(catalog, index))
}

/// The annotation after `from_index` in `current`, or the first annotation
/// of `next` when `from_index` is the last one.
pub fn next_annotation(
    current: TrackRef<'_>,
    next: Option<TrackRef<'_>>,
    from_index: usize,
) -> Option<LocatedAnnotation> {
    if from_index + 1 < current.track.len() {
        return current.located(from_index + 1);
    }
    next.and_then(|track| track.located(0))
}

/// Binary search for the annotation in `current` containing `time`.
///
/// `next` is only used to fill in [`AnnotationMatch::next`] when the match is
/// the last annotation of `current`.
pub fn find_annotation(
    time: f64,
    current: Option<TrackRef<'_>>,
    next: Option<TrackRef<'_>>,
) -> Option<AnnotationMatch> {
    let current = current?;
    let annotations = current.track.annotations();

    let mut start = 0;
    let mut end = annotations.len();

    while start < end {
        let middle = start + (end - start) / 2;
        let annotation = &annotations[middle];

        if annotation.contains(time) {
            // Touching annotations: the one ending at `time` wins
            let found = if middle > 0 && annotations[middle - 1].contains(time) {
                middle - 1
            } else {
                middle
            };

            return Some(AnnotationMatch {
                current: current.located(found)?,
                next: next_annotation(current, next, found),
            });
        } else if time > annotation.end_time {
            start = middle + 1;
        } else {
            end = middle;
        }
    }

    None
}
