//! Assertion helpers for `TestWorld` integration tests.

use bevy::prelude::*;

use crate::candidates::CandidateVisual;

use super::TestWorld;

impl TestWorld {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert `city` is the current selection and drawn as selected.
    pub fn assert_selected(&self, city: Entity) {
        assert_eq!(
            self.selected(),
            Some(city),
            "Expected {city} to be selected, found {:?}",
            self.selected()
        );
        assert_eq!(self.visual(city), CandidateVisual::Selected);
    }

    /// Assert nothing is selected and no preview exists.
    pub fn assert_nothing_selected(&self) {
        assert!(
            self.selected().is_none(),
            "Expected no selection, found {:?}",
            self.selected()
        );
        assert!(self.hint().is_none(), "Expected no road preview");
        assert_eq!(self.selected_visual_count(), 0);
    }

    pub fn assert_road_count(&self, expected: usize) {
        let count = self.road_count();
        assert_eq!(count, expected, "Expected {expected} roads, got {count}");
    }

    pub fn assert_visual(&self, city: Entity, expected: CandidateVisual) {
        let actual = self.visual(city);
        assert_eq!(
            actual, expected,
            "Expected {city} to look {expected:?}, found {actual:?}"
        );
    }

    /// Assert at most one candidate is selected and that it matches the state.
    pub fn assert_selection_exclusive(&self) {
        let drawn = self.selected_visual_count();
        assert!(drawn <= 1, "{drawn} candidates drawn as selected");
        assert_eq!(
            drawn == 1,
            self.selected().is_some(),
            "Selected visual and selection state disagree"
        );
    }
}
