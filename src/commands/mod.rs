//! Subcommand handlers

pub mod at;
pub mod catalog;
pub mod config;
pub mod play;

use anyhow::Result;

use cuesync::catalog::{self as catalog_mod, TrackCatalog};
use cuesync::cli::CatalogSource;
use cuesync::search::TracingObserver;
use cuesync::theme::Theme;
use cuesync::{Config, HookRegistry, StepSearchController};

/// Pick the catalog: `--catalog` flag, then config, then the built-in demo.
pub fn resolve_catalog(source: &CatalogSource, config: &Config) -> Result<TrackCatalog> {
    match source.path.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => catalog_mod::load(path),
        None => {
            tracing::debug!("no catalog configured, using the demo timeline");
            Ok(catalog_mod::demo())
        }
    }
}

pub fn build_controller(catalog: TrackCatalog, trace_stages: bool) -> StepSearchController {
    if trace_stages {
        StepSearchController::with_observer(catalog, Box::new(TracingObserver))
    } else {
        StepSearchController::new(catalog)
    }
}

/// Hooks that print a "Show ..." / "Hide ..." line per annotation.
pub fn print_hooks(catalog: &TrackCatalog, theme: &Theme) -> HookRegistry {
    let mut hooks = HookRegistry::new();

    for annotation in catalog.iter() {
        let label = TrackCatalog::label(&annotation);
        let show_line = theme.show_text(&format!("Show {}", label));
        let hide_line = theme.hide_text(&format!("Hide {}", label));

        hooks
            .on_show(annotation.id, move || println!("{}", show_line))
            .on_hide(annotation.id, move || println!("{}", hide_line));
    }

    hooks
}
