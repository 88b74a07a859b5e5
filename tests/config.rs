//! Loading tunables from disk and running the plugin with them.

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use forager::{ConfigError, SurvivalPlugin, SurvivalSettings, Vitals};
use rstest::rstest;
use test_utils::{advance, spawn_test_player, TICK};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("forager-{}-{name}.json", std::process::id()));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[rstest]
fn partial_files_keep_the_defaults() {
    let path = write_temp("partial", r#"{ "harvest": { "reach": 250.0 } }"#);
    let settings = SurvivalSettings::load(&path).expect("valid config loads");
    fs::remove_file(&path).expect("remove temp config");

    assert_relative_eq!(settings.harvest.reach, 250.0);
    assert_eq!(settings.stats, SurvivalSettings::default().stats);
    assert_eq!(settings.recipes, SurvivalSettings::default().recipes);
}

#[rstest]
fn missing_files_report_their_path() {
    let path = std::env::temp_dir().join("forager-does-not-exist.json");
    let err = SurvivalSettings::load(&path).expect_err("missing file is an error");
    assert!(matches!(err, ConfigError::Io { path: ref p, .. } if *p == path));
}

#[rstest]
#[case::zero_interval("zero-interval", r#"{ "stats": { "decay_interval_secs": 0.0 } }"#)]
#[case::endless_interval("endless-interval", r#"{ "stats": { "decay_interval_secs": 1e30 } }"#)]
#[case::endless_marker("endless-marker", r#"{ "harvest": { "marker_lifetime_secs": 1e30 } }"#)]
fn invalid_values_are_rejected(#[case] name: &str, #[case] json: &str) {
    let path = write_temp(name, json);
    let result = SurvivalSettings::load(&path);
    fs::remove_file(&path).expect("remove temp config");

    assert!(matches!(result, Err(ConfigError::Invalid { .. })));
}

#[rstest]
fn the_plugin_runs_on_host_settings() {
    let settings = SurvivalSettings::from_json_str(
        r#"{ "stats": { "decay_interval_secs": 0.5, "hunger_decay": 10.0 } }"#,
    )
    .expect("valid settings");

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
    app.insert_resource(settings);
    app.add_plugins(SurvivalPlugin);
    app.update();
    let player = spawn_test_player(&mut app, Transform::default());

    advance(&mut app, 2);

    let vitals = app.world().get::<Vitals>(player).expect("player keeps its vitals");
    assert_relative_eq!(vitals.hunger, 90.0);
}
