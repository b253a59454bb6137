//! Catalog inspection handler

use anyhow::Result;

use cuesync::cli::CatalogCommandArgs;
use cuesync::theme::current_theme;
use cuesync::Config;

use super::resolve_catalog;

/// Print every track with its annotations, followed by the global bounds.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &CatalogCommandArgs, config: &Config) -> Result<()> {
    let catalog = resolve_catalog(&args.source, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let theme = current_theme();

    for (index, track) in catalog.tracks().iter().enumerate() {
        if track.is_empty() {
            println!("{}", theme.secondary_text(&format!("Track {}: (empty)", index + 1)));
            continue;
        }

        let spans: Vec<String> = track
            .annotations()
            .iter()
            .map(|a| format!("{}-{}", a.start_time, a.end_time))
            .collect();
        println!(
            "{}",
            theme.primary_text(&format!("Track {}: {}", index + 1, spans.join(", ")))
        );
    }

    match catalog.bounds() {
        Some(bounds) => println!(
            "{}",
            theme.primary_text(&format!(
                "First start: {}, last end: {}",
                bounds.first_start, bounds.last_end
            ))
        ),
        None => println!("{}", theme.secondary_text("No annotations")),
    }

    Ok(())
}
