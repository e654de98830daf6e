//! Cursor feedback: a pointing-hand cursor while a city is hovered.
//!
//! The road builder only reports hover start and end. Egui resets the window
//! cursor on every pass, so the last reported state is kept here and
//! reapplied each frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::road_building::CursorFeedbackEvent;

#[derive(Resource, Debug, Default)]
pub struct CursorFeedback {
    pub interactive: bool,
}

/// The cursor state after applying `events` in order.
pub fn fold_cursor_feedback<'a>(
    interactive: bool,
    events: impl IntoIterator<Item = &'a CursorFeedbackEvent>,
) -> bool {
    events
        .into_iter()
        .fold(interactive, |_, event| *event == CursorFeedbackEvent::Interactive)
}

pub fn track_cursor_feedback(
    mut events: EventReader<CursorFeedbackEvent>,
    mut feedback: ResMut<CursorFeedback>,
) {
    let interactive = fold_cursor_feedback(feedback.interactive, events.read());
    if feedback.interactive != interactive {
        feedback.interactive = interactive;
    }
}

pub fn apply_cursor_icon(feedback: Res<CursorFeedback>, mut contexts: EguiContexts) {
    if feedback.interactive {
        contexts
            .ctx_mut()
            .set_cursor_icon(egui::CursorIcon::PointingHand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_events_keeps_state() {
        assert!(fold_cursor_feedback(true, []));
        assert!(!fold_cursor_feedback(false, []));
    }

    #[test]
    fn test_last_event_wins() {
        let events = [
            CursorFeedbackEvent::Interactive,
            CursorFeedbackEvent::Default,
        ];
        assert!(!fold_cursor_feedback(false, &events));

        let events = [
            CursorFeedbackEvent::Default,
            CursorFeedbackEvent::Interactive,
        ];
        assert!(fold_cursor_feedback(false, &events));
    }
}
