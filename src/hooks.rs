//! Show/hide hook registry.
//!
//! Side effects live outside the data model: callers register callbacks per
//! annotation position and dispatch a [`Transition`] after each query.

use std::collections::HashMap;

use crate::catalog::AnnotationId;
use crate::search::{StepSearchController, Transition};

/// A zero-argument side effect bound to an annotation.
pub type Hook = Box<dyn FnMut() + Send>;

#[derive(Default)]
struct Hooks {
    show: Option<Hook>,
    hide: Option<Hook>,
}

/// Callbacks keyed by annotation position.
///
/// Annotations without hooks are fine; dispatching to them does nothing.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<AnnotationId, Hooks>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the show hook for `id`.
    pub fn on_show(&mut self, id: AnnotationId, hook: impl FnMut() + Send + 'static) -> &mut Self {
        self.hooks.entry(id).or_default().show = Some(Box::new(hook));
        self
    }

    /// Register (or replace) the hide hook for `id`.
    pub fn on_hide(&mut self, id: AnnotationId, hook: impl FnMut() + Send + 'static) -> &mut Self {
        self.hooks.entry(id).or_default().hide = Some(Box::new(hook));
        self
    }

    /// Drop both hooks for `id`.
    pub fn remove(&mut self, id: AnnotationId) {
        self.hooks.remove(&id);
    }

    pub fn has_show(&self, id: AnnotationId) -> bool {
        self.hooks.get(&id).map_or(false, |h| h.show.is_some())
    }

    pub fn has_hide(&self, id: AnnotationId) -> bool {
        self.hooks.get(&id).map_or(false, |h| h.hide.is_some())
    }

    /// Number of annotations with at least one hook.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run the hooks for a transition: hide first, then show.
    pub fn dispatch(&mut self, transition: &Transition) {
        if let Some(hidden) = transition.to_hide {
            if let Some(hook) = self.hooks.get_mut(&hidden.id).and_then(|h| h.hide.as_mut()) {
                hook();
            }
        }
        if let Some(shown) = transition.to_show {
            if let Some(hook) = self.hooks.get_mut(&shown.id).and_then(|h| h.show.as_mut()) {
                hook();
            }
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.hooks.keys().collect();
        ids.sort();
        f.debug_struct("HookRegistry").field("ids", &ids).finish()
    }
}

/// Query the controller at `time` and run the matching hooks.
pub fn time_update(
    controller: &mut StepSearchController,
    registry: &mut HookRegistry,
    time: f64,
) -> Transition {
    let transition = controller.query(time);
    registry.dispatch(&transition);
    transition
}
