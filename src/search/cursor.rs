//! Search cursor: the state carried between queries.

use serde::{Deserialize, Serialize};

use crate::catalog::{LocatedAnnotation, TimeBounds, TrackCatalog};

/// Last known position of the stepped search.
///
/// Owned and mutated only by [`StepSearchController`](super::StepSearchController).
/// Serializable so a caller can snapshot it (for example in diagnostics).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCursor {
    pub(crate) current_track: Option<usize>,
    pub(crate) next_track: Option<usize>,
    pub(crate) current_annotation: Option<LocatedAnnotation>,
    pub(crate) next_annotation: Option<LocatedAnnotation>,
    pub(crate) current_annotation_visible: bool,
    pub(crate) bounds: Option<TimeBounds>,
}

impl SearchCursor {
    /// Fresh cursor for `catalog`, with the global bounds cached.
    pub fn new(catalog: &TrackCatalog) -> Self {
        Self {
            bounds: catalog.bounds(),
            ..Self::default()
        }
    }

    /// Position of the last located track.
    pub fn current_track(&self) -> Option<usize> {
        self.current_track
    }

    /// Position of the next non-empty track after the current one.
    pub fn next_track(&self) -> Option<usize> {
        self.next_track
    }

    /// Last located annotation, visible or not.
    pub fn current_annotation(&self) -> Option<LocatedAnnotation> {
        self.current_annotation
    }

    /// Annotation following the current one.
    pub fn next_annotation(&self) -> Option<LocatedAnnotation> {
        self.next_annotation
    }

    /// True while a show has been emitted without a matching hide.
    pub fn is_visible(&self) -> bool {
        self.current_annotation_visible
    }

    /// The annotation currently showing, if any.
    pub fn visible_annotation(&self) -> Option<LocatedAnnotation> {
        self.current_annotation
            .filter(|_| self.current_annotation_visible)
    }

    pub fn bounds(&self) -> Option<TimeBounds> {
        self.bounds
    }
}
