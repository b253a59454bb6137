//! Cuesync - keeps timed overlay annotations in step with a playback clock
//!
//! Given a catalog of tracks, each an ordered list of non-overlapping timed
//! annotations, cuesync answers one question per clock tick: which annotation
//! should be hidden and which shown at this instant?
//!
//! # Usage
//!
//! ```
//! use cuesync::{catalog, StepSearchController};
//!
//! let mut controller = StepSearchController::new(catalog::demo());
//! let transition = controller.query(2.5);
//! assert_eq!(transition.to_show.map(|a| a.start_time()), Some(2.0));
//! assert!(controller.query(2.75).is_empty());
//! ```

pub mod catalog;
pub mod cli;
pub mod clock;
pub mod config;
pub mod hooks;
pub mod locate;
pub mod search;
pub mod theme;

pub use catalog::{Annotation, AnnotationId, LocatedAnnotation, Track, TrackCatalog};
pub use clock::{OverlayDriver, Player, TimeObserver};
pub use config::Config;
pub use hooks::{time_update, HookRegistry};
pub use search::{SearchCursor, StepSearchController, Transition};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from (`None` for release builds).
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA").filter(|sha| !sha.is_empty() && *sha != "unknown")
}
