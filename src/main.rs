//! Windowed demo of the survival plugin.

use std::path::PathBuf;

use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use forager::{init_logging, spawn_world_system, SurvivalPlugin, SurvivalSettings};

/// A first-person survival sandbox
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON file overriding the default tunables
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match &args.config {
        Some(path) => SurvivalSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => SurvivalSettings::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .insert_resource(settings)
        .add_plugins(SurvivalPlugin)
        .add_systems(Startup, spawn_world_system)
        .run();
    Ok(())
}
