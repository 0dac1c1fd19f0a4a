//! Example loading drip rules and querying them like the dripstone hook does
//!
//! Reads the config from the path given as the first argument, or from the
//! platform config directory. A missing file is created with the defaults.

use anyhow::{anyhow, Context};
use drip::{dripping_fluid, ConfigStore, FluidId, GameRegistry, Registry};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => drip::default_config_path()
            .ok_or_else(|| anyhow!("no platform config directory; pass a path"))?,
    };

    let registry = GameRegistry::vanilla()?;
    let report = ConfigStore::new(&registry)
        .load_report(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    println!("Drip rules from {}", path.display());
    println!("============================================");
    if report.created {
        println!("(written with defaults)");
    }
    for warning in &report.warnings {
        println!("dropped: {warning}");
    }

    let empty = registry.fluid("empty");
    for (block, name) in registry.blocks() {
        let Some(entry) = report.table.get(block) else {
            continue;
        };
        let fluid_name = |fluid: FluidId| {
            registry
                .fluid_identifier(fluid)
                .map_or_else(|| fluid.to_string(), |id| id.to_string())
        };
        let name = name.to_string();
        let dripped = dripping_fluid(&report.table, block, empty).map(fluid_name);
        println!(
            "{name:<28} -> {:<18} replace={:<5} drips={}",
            fluid_name(entry.fluid()),
            entry.replace(),
            dripped.as_deref().unwrap_or("nothing")
        );
    }

    Ok(())
}
