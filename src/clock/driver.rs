//! Couples a search controller and its hooks to the clock.

use crate::hooks::{time_update, HookRegistry};
use crate::search::{StepSearchController, Transition};

use super::TimeObserver;

/// A [`TimeObserver`] that queries a controller and dispatches its hooks.
#[derive(Debug)]
pub struct OverlayDriver {
    controller: StepSearchController,
    hooks: HookRegistry,
    last: Transition,
    transitions: usize,
}

impl OverlayDriver {
    pub fn new(controller: StepSearchController, hooks: HookRegistry) -> Self {
        Self {
            controller,
            hooks,
            last: Transition::default(),
            transitions: 0,
        }
    }

    pub fn controller(&self) -> &StepSearchController {
        &self.controller
    }

    /// Result of the most recent update.
    pub fn last_transition(&self) -> Transition {
        self.last
    }

    /// Number of updates that produced a show or a hide.
    pub fn transition_count(&self) -> usize {
        self.transitions
    }
}

impl TimeObserver for OverlayDriver {
    fn time_update(&mut self, time: f64) {
        self.last = time_update(&mut self.controller, &mut self.hooks, time);
        if !self.last.is_empty() {
            self.transitions += 1;
        }
    }
}
