//! Stage observers for diagnostic tracing of the stepped search.

use super::Transition;

/// The five stages of a stepped search, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStage {
    /// Time outside the catalog's global bounds
    Bounds,
    /// Time still inside the visible annotation
    StillVisible,
    /// Time in the gap between current and next annotation
    Gap,
    /// Track relocation by binary search
    TrackRelocation,
    /// Annotation relocation by binary search
    AnnotationRelocation,
}

impl SearchStage {
    /// 1-based stage number, in evaluation order.
    pub fn number(&self) -> u8 {
        match self {
            Self::Bounds => 1,
            Self::StillVisible => 2,
            Self::Gap => 3,
            Self::TrackRelocation => 4,
            Self::AnnotationRelocation => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bounds => "bounds",
            Self::StillVisible => "still-visible",
            Self::Gap => "gap",
            Self::TrackRelocation => "find-track",
            Self::AnnotationRelocation => "find-annotation",
        }
    }
}

/// What a stage decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// Search stops here
    Abort,
    /// The visible annotation no longer applies and is hidden
    Hide,
    /// A new track was located
    Relocated,
    /// The binary search found nothing at this time
    Missed,
    /// A new annotation is shown
    Show,
    /// The search landed on the annotation already showing
    Kept,
}

impl StageOutcome {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Abort => "abort search",
            Self::Hide => "hide current annotation",
            Self::Relocated => "moved to a new track",
            Self::Missed => "nothing found",
            Self::Show => "show new annotation",
            Self::Kept => "current annotation still applies",
        }
    }
}

/// Receives a callback at every stage boundary of a query.
///
/// All methods default to no-ops except [`SearchObserver::stage`].
pub trait SearchObserver: Send {
    /// Called once before the stages run.
    fn query_started(&mut self, _time: f64) {}

    /// Called whenever a stage reaches a decision.
    fn stage(&mut self, time: f64, stage: SearchStage, outcome: StageOutcome);

    /// Called once with the query's result.
    fn query_finished(&mut self, _time: f64, _transition: &Transition) {}
}

/// Observer that ignores everything. The controller's default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn stage(&mut self, _time: f64, _stage: SearchStage, _outcome: StageOutcome) {}
}

/// Observer that emits `tracing` events for every stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn query_started(&mut self, time: f64) {
        tracing::debug!(time, "search");
    }

    fn stage(&mut self, time: f64, stage: SearchStage, outcome: StageOutcome) {
        tracing::debug!(
            time,
            stage = stage.number(),
            "step {} ({}): {}",
            stage.number(),
            stage.name(),
            outcome.describe()
        );
    }

    fn query_finished(&mut self, time: f64, transition: &Transition) {
        tracing::trace!(
            time,
            show = ?transition.to_show.map(|a| a.id),
            hide = ?transition.to_hide.map(|a| a.id),
            "search finished"
        );
    }
}
