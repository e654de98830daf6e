//! Interactive road construction between two cities.
//!
//! Split into sub-modules by concern:
//! - `types`: State carried between frames, the preview record, pointer position
//! - `events`: Notifications for the renderer and the cursor
//! - `selection`: Per-frame click and hover resolution
//! - `hint`: Road preview lifecycle and geometry refresh
//! - `commit`: Turning the preview into a committed road
//! - `systems`: Bevy system driving one frame

mod commit;
mod error;
mod events;
mod hint;
mod selection;
mod systems;
mod types;


pub use commit::commit_road;
pub use error::RoadBuildingError;
pub use events::{CursorFeedbackEvent, HintLifecycleEvent, RoadBuildingOutbox, RoadBuiltEvent};
pub use hint::{discard_hint, refresh_hint};
pub use selection::{run_road_building_frame, RoadBuildingContext};
pub use systems::update_road_building;
pub use types::{HintId, HintTint, PointerWorldPos, RoadBuildingState, RoadHint};
