//! Simulated playback handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

use cuesync::cli::PlayArgs;
use cuesync::theme::{current_theme, stderr_theme};
use cuesync::{Config, OverlayDriver, Player};

use super::{build_controller, print_hooks, resolve_catalog};

/// Drive the timeline from the fixed-cadence clock until Ctrl-C or `--until`.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config, trace_stages: bool) -> Result<()> {
    let playback = &config.playback;
    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| playback.tick_interval());
    let step = args.step.unwrap_or(playback.step_seconds);
    let start = args.start.unwrap_or(playback.start_time);
    let until = args.until.or(playback.stop_after);

    ensure!(
        step.is_finite() && step > 0.0,
        "--step must be a positive number of seconds (got {})",
        step
    );

    let catalog = resolve_catalog(&args.source, config)?;
    let theme = current_theme();
    let status = stderr_theme();

    match catalog.bounds() {
        Some(bounds) => eprintln!(
            "{}",
            status.secondary_text(&format!(
                "Playing {} tracks, {} annotations ({}s - {}s)",
                catalog.len(),
                catalog.annotation_count(),
                bounds.first_start,
                bounds.last_end
            ))
        ),
        None => eprintln!(
            "{}",
            status.secondary_text("Catalog has no annotations; nothing will be shown")
        ),
    }

    let hooks = print_hooks(&catalog, &theme);
    let controller = build_controller(catalog, trace_stages);

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl-C handler")?;

    let mut player = Player::new(interval, step).starting_at(start);
    player.subscribe(Box::new(OverlayDriver::new(controller, hooks)));
    let last = player.play(&stop, until);

    eprintln!("{}", status.secondary_text(&format!("Stopped at {}s", last)));
    Ok(())
}
