//! Pointer simulation: the harness stands in for the input source.

use bevy::prelude::*;

use crate::candidates::CandidateRegistry;
use crate::road_building::PointerWorldPos;

use super::TestWorld;

impl TestWorld {
    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    /// Move the pointer to `pos` and hover every candidate whose bounds
    /// contain it. Takes effect on the next frame.
    pub fn move_pointer(&mut self, pos: Vec2) {
        let world = self.app.world_mut();
        world.resource_mut::<PointerWorldPos>().world_pos = pos;
        for candidate in world.resource_mut::<CandidateRegistry>().iter_mut() {
            candidate.pointer.hovered = candidate.bounds.contains(pos);
        }
    }

    /// Move the pointer to the center of `city`.
    pub fn hover_city(&mut self, city: Entity) {
        let center = self.candidate(city).center();
        self.move_pointer(center);
    }

    /// Override one candidate's hover flag, independent of the pointer.
    pub fn set_hovered(&mut self, city: Entity, hovered: bool) {
        let mut registry = self.app.world_mut().resource_mut::<CandidateRegistry>();
        if let Some(candidate) = registry.get_mut(city) {
            candidate.pointer.hovered = hovered;
        }
    }

    /// Mark the given cities as clicked for the next frame only.
    pub fn press(&mut self, cities: &[Entity]) {
        let mut registry = self.app.world_mut().resource_mut::<CandidateRegistry>();
        for city in cities {
            if let Some(candidate) = registry.get_mut(*city) {
                candidate.pointer.clicked = true;
            }
        }
    }

    /// Move onto `city` for one frame, then click it on the next, like a
    /// real pointer would.
    pub fn click_city(&mut self, city: Entity) {
        self.hover_city(city);
        self.tick(1);
        self.press(&[city]);
        self.tick(1);
    }

    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// Run `n` frames. Clicks are released after every frame; hover persists
    /// until the pointer moves.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.update();
            for candidate in self
                .app
                .world_mut()
                .resource_mut::<CandidateRegistry>()
                .iter_mut()
            {
                candidate.pointer.clicked = false;
            }
        }
    }
}
