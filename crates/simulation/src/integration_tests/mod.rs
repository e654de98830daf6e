//! Integration tests for road building using the `TestWorld` harness.
//!
//! These tests spin up a headless Bevy App with `SimulationPlugin` and verify
//! the selection, preview and commit behavior across whole frames.

mod change_detection_tests;
mod cursor_feedback_tests;
mod world_init_tests;
