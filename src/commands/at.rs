//! One-shot query handler

use anyhow::Result;

use cuesync::cli::AtArgs;
use cuesync::theme::current_theme;
use cuesync::{Config, OverlayDriver, Player};

use super::{build_controller, print_hooks, resolve_catalog};

/// Query a single time, running the show/hide hooks once.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &AtArgs, config: &Config, trace_stages: bool) -> Result<()> {
    let catalog = resolve_catalog(&args.source, config)?;
    let mut controller = build_controller(catalog, trace_stages);

    if args.json {
        let transition = controller.query(args.time);
        println!("{}", serde_json::to_string_pretty(&transition)?);
        return Ok(());
    }

    let theme = current_theme();
    let hooks = print_hooks(controller.catalog(), &theme);
    let mut player = Player::default();
    player.subscribe(Box::new(OverlayDriver::new(controller, hooks)));
    player.emit(args.time);

    Ok(())
}
