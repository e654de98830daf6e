//! System set definitions for the per-frame road-building pipeline.
//!
//! # Update phases (`RoadBuildingSet`)
//!
//! ```text
//! Registry  →  Pointer  →  Interaction  →  Presentation
//! ```
//!
//! * **Registry** – Keep the candidate registry in sync with spawned and
//!   despawned cities.
//! * **Pointer** – The input source writes the world-space pointer and each
//!   candidate's `clicked` / `hovered` flags for this frame.
//! * **Interaction** – Selection, hover, commit and preview recompute. Clicks
//!   (and any commit they trigger) are fully handled before the preview is
//!   recomputed within the same system.
//! * **Presentation** – Visual-only consumers: candidate colors, preview and
//!   road meshes, cursor icon, HUD.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain by `SimulationPlugin`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoadBuildingSet {
    /// Candidate registration and removal.
    Registry,
    /// Per-frame pointer flags from the input source.
    Pointer,
    /// The road-building state machine.
    Interaction,
    /// Rendering and cursor feedback.
    Presentation,
}
