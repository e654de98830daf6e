//! # TestWorld: headless integration test harness for road building
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer. The harness
//! plays the part of the input source: it writes the pointer position and
//! each candidate's `clicked` / `hovered` flags before every frame.

mod assertions;
mod input;
mod queries;
mod spawning;

use bevy::app::App;
use bevy::prelude::*;

use crate::road_building::{CursorFeedbackEvent, HintLifecycleEvent, RoadBuiltEvent};
use crate::world_init::SkipWorldInit;
use crate::SimulationPlugin;

/// Every notification the road builder sent since the harness was created.
#[derive(Debug, Default)]
pub struct EventLog {
    pub hint: Vec<HintLifecycleEvent>,
    pub roads_built: Vec<RoadBuiltEvent>,
    pub cursor: Vec<CursorFeedbackEvent>,
}

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to spawn cities, drive the pointer, then call `tick()`
/// to advance frames and query/assert on the resulting state.
pub struct TestWorld {
    app: App,
    log: EventLog,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create an **empty** world: no starting cities, all resources at their
    /// defaults.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert the marker BEFORE SimulationPlugin so init_world skips.
        app.insert_resource(SkipWorldInit);
        app.add_plugins(SimulationPlugin);

        let mut world = Self {
            app,
            log: EventLog::default(),
        };
        // Run one update so Startup systems execute (init_world will no-op).
        world.update();
        world
    }

    /// Create a world with the seeded starting cities from `init_world`.
    pub fn with_starting_cities() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);

        let mut world = Self {
            app,
            log: EventLog::default(),
        };
        world.update();
        world
    }

    /// Run a single frame and collect the notifications it produced.
    fn update(&mut self) {
        self.app.update();

        let world = self.app.world_mut();
        self.log
            .hint
            .extend(world.resource_mut::<Events<HintLifecycleEvent>>().drain());
        self.log
            .roads_built
            .extend(world.resource_mut::<Events<RoadBuiltEvent>>().drain());
        self.log
            .cursor
            .extend(world.resource_mut::<Events<CursorFeedbackEvent>>().drain());
    }
}
