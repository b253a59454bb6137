//! Stepped search: decides which annotation to show or hide at a time.
//!
//! The [`StepSearchController`] keeps a [`SearchCursor`] between queries and
//! runs a cost-ordered series of checks before falling back to binary search:
//!
//! 1. global bounds
//! 2. still inside the visible annotation
//! 3. inside the gap before the next annotation
//! 4. track relocation
//! 5. annotation relocation
//!
//! For playback that moves steadily forward most queries stop at stage 2 or 3.

mod controller;
mod cursor;
mod observer;

use serde::Serialize;

use crate::catalog::LocatedAnnotation;

pub use controller::StepSearchController;
pub use cursor::SearchCursor;
pub use observer::{NoopObserver, SearchObserver, SearchStage, StageOutcome, TracingObserver};

/// Result of a query: at most one annotation to hide and one to show.
///
/// Serializes to `{}` when nothing changed; absent sides are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Transition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_show: Option<LocatedAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_hide: Option<LocatedAnnotation>,
}

impl Transition {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.to_show.is_none() && self.to_hide.is_none()
    }
}
