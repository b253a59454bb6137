//! The step search controller.

use crate::catalog::TrackCatalog;
use crate::locate::{find_annotation, find_track, in_track, TrackRef};

use super::cursor::SearchCursor;
use super::observer::{NoopObserver, SearchObserver, SearchStage, StageOutcome};
use super::Transition;

/// Maps a playback time to show/hide transitions.
///
/// Owns the catalog (read-only) and a [`SearchCursor`] that is updated in
/// place on every [`query`](Self::query). Not internally synchronized:
/// share it between threads only behind a lock.
pub struct StepSearchController {
    catalog: TrackCatalog,
    cursor: SearchCursor,
    observer: Box<dyn SearchObserver>,
}

impl StepSearchController {
    /// Create a controller with no stage tracing.
    pub fn new(catalog: TrackCatalog) -> Self {
        Self::with_observer(catalog, Box::new(NoopObserver))
    }

    /// Create a controller reporting every stage to `observer`.
    pub fn with_observer(catalog: TrackCatalog, observer: Box<dyn SearchObserver>) -> Self {
        if catalog.bounds().is_none() {
            tracing::warn!("catalog has no annotations; every query will be empty");
        }
        let cursor = SearchCursor::new(&catalog);
        Self {
            catalog,
            cursor,
            observer,
        }
    }

    /// Continue from a previously captured cursor.
    ///
    /// The cached bounds are recomputed from `catalog`.
    pub fn resume(catalog: TrackCatalog, mut cursor: SearchCursor) -> Self {
        cursor.bounds = catalog.bounds();
        Self {
            catalog,
            cursor,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    pub fn cursor(&self) -> &SearchCursor {
        &self.cursor
    }

    /// Forget the last position. Does not emit a hide for a visible annotation.
    pub fn reset(&mut self) {
        self.cursor = SearchCursor::new(&self.catalog);
    }

    /// Decide what to hide and show at `time`.
    ///
    /// Never fails: out-of-range and gap times yield an empty [`Transition`].
    pub fn query(&mut self, time: f64) -> Transition {
        self.observer.query_started(time);
        let transition = self.stepped_search(time);
        self.observer.query_finished(time, &transition);
        transition
    }

    fn stepped_search(&mut self, time: f64) -> Transition {
        let mut transition = Transition::default();

        // Step 1 - outside every track. This only rules out new searches;
        // a visible annotation still has to be hidden below.
        let in_bounds = self
            .cursor
            .bounds
            .map_or(false, |bounds| bounds.contains(time));
        if !in_bounds {
            self.observer.stage(time, SearchStage::Bounds, StageOutcome::Abort);
        }

        // Step 2 - still inside the visible annotation?
        if self.cursor.current_annotation_visible {
            if let Some(current) = self.cursor.current_annotation {
                if current.annotation.strictly_contains(time) {
                    self.observer
                        .stage(time, SearchStage::StillVisible, StageOutcome::Abort);
                    return transition;
                }

                // Another annotation may start exactly where this one ends,
                // so keep searching.
                self.cursor.current_annotation_visible = false;
                transition.to_hide = Some(current);
                self.observer
                    .stage(time, SearchStage::StillVisible, StageOutcome::Hide);
            }
        }

        if !in_bounds {
            return transition;
        }

        // Step 3 - in the dead zone between two annotations?
        if let (Some(current), Some(next)) =
            (self.cursor.current_annotation, self.cursor.next_annotation)
        {
            if time > current.end_time() && time < next.start_time() {
                self.observer.stage(time, SearchStage::Gap, StageOutcome::Abort);
                return transition;
            }
        }

        // Step 4 - relocate the track unless we're still inside it
        let in_current_track = self
            .cursor
            .current_track
            .and_then(|index| self.catalog.track(index))
            .map_or(false, |track| in_track(time, track));

        if !in_current_track {
            match find_track(time, &self.catalog) {
                Some(found) => {
                    self.cursor.current_track = Some(found.current.index);
                    self.cursor.next_track = found.next.map(|track| track.index);
                    self.observer
                        .stage(time, SearchStage::TrackRelocation, StageOutcome::Relocated);
                }
                None => {
                    self.cursor.current_track = None;
                    self.cursor.next_track = None;
                    self.observer
                        .stage(time, SearchStage::TrackRelocation, StageOutcome::Missed);
                }
            }
        }

        // Step 5 - relocate the annotation within the current track
        let Some(track_index) = self.cursor.current_track else {
            return transition;
        };
        let current_track = TrackRef::resolve(&self.catalog, track_index);
        let next_track = self
            .cursor
            .next_track
            .and_then(|index| TrackRef::resolve(&self.catalog, index));

        let Some(found) = find_annotation(time, current_track, next_track) else {
            self.observer
                .stage(time, SearchStage::AnnotationRelocation, StageOutcome::Missed);
            return transition;
        };

        let same_as_current = self
            .cursor
            .current_annotation
            .map_or(false, |current| current.id == found.current.id);

        if same_as_current && transition.to_hide.map(|hidden| hidden.id) == Some(found.current.id) {
            // Step 2 only ruled out the open interval; on the closed boundary
            // the annotation still applies, so the hide is withdrawn.
            transition.to_hide = None;
            self.cursor.current_annotation_visible = true;
            self.observer
                .stage(time, SearchStage::AnnotationRelocation, StageOutcome::Kept);
        } else if same_as_current && self.cursor.current_annotation_visible {
            self.observer
                .stage(time, SearchStage::AnnotationRelocation, StageOutcome::Kept);
        } else {
            self.cursor.current_annotation_visible = true;
            self.cursor.current_annotation = Some(found.current);
            self.cursor.next_annotation = found.next;
            transition.to_show = Some(found.current);
            self.observer
                .stage(time, SearchStage::AnnotationRelocation, StageOutcome::Show);
        }

        transition
    }
}

impl std::fmt::Debug for StepSearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepSearchController")
            .field("catalog", &self.catalog)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
