//! Utility helpers for tests.
//!
//! App fixtures, spawn helpers and an `rspec` runner shared by the
//! integration suites.

mod app;
mod rspec_runner;
mod thread_safe_app;

pub use app::{advance, find_players, spawn_node, spawn_test_player, test_app, TICK};
pub use rspec_runner::run_serial;
pub use thread_safe_app::{lock_app, SharedApp, ThreadSafeApp};
