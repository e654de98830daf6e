use bevy::prelude::*;

use crate::road_geometry::bounds_center;
use crate::roads::RoadId;

/// Pointer interaction reported by the input source for one candidate in the
/// current frame. Both flags are overwritten every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerFlags {
    pub clicked: bool,
    pub hovered: bool,
}

/// Visual state of a candidate, decided by the road-building state machine
/// and turned into colors by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateVisual {
    #[default]
    Idle,
    Hovered,
    Selected,
}

/// A selectable city that can anchor a road endpoint.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: Entity,
    pub bounds: Rect,
    pub pointer: PointerFlags,
    pub visual: CandidateVisual,
    /// Whether the candidate is currently highlighted as "the hovered one".
    pub is_hovered: bool,
    /// Roads built from this candidate, in commit order.
    pub roads: Vec<RoadId>,
}

impl Candidate {
    pub fn new(id: Entity, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            pointer: PointerFlags::default(),
            visual: CandidateVisual::Idle,
            is_hovered: false,
            roads: Vec::new(),
        }
    }

    pub fn center(&self) -> Vec2 {
        bounds_center(self.bounds)
    }
}

/// Ordered list of the candidates the road builder can select.
///
/// Iteration order is insertion order, modulo removals.
#[derive(Resource, Debug, Default)]
pub struct CandidateRegistry {
    candidates: Vec<Candidate>,
}

impl CandidateRegistry {
    pub fn add(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Remove the first candidate with the given identity. Unknown
    /// identities are ignored.
    pub fn remove(&mut self, id: Entity) -> Option<Candidate> {
        let index = self.index_of(id)?;
        Some(self.candidates.remove(index))
    }

    pub fn index_of(&self, id: Entity) -> Option<usize> {
        self.candidates.iter().position(|c| c.id == id)
    }

    pub fn contains(&self, id: Entity) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: Entity) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: Entity) -> Option<&mut Candidate> {
        self.candidates.iter_mut().find(|c| c.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut Candidate> {
        self.candidates.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Candidate> {
        self.candidates.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Clear the per-frame pointer flags of every candidate.
    pub fn clear_pointer_flags(&mut self) {
        for candidate in &mut self.candidates {
            candidate.pointer = PointerFlags::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(index: u32) -> Candidate {
        Candidate::new(
            Entity::from_raw(index),
            Rect::from_center_size(Vec2::new(index as f32 * 100.0, 0.0), Vec2::splat(40.0)),
        )
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut registry = CandidateRegistry::default();
        registry.add(candidate(3));
        registry.add(candidate(1));
        registry.add(candidate(2));

        let ids: Vec<u32> = registry.iter().map(|c| c.id.index()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut registry = CandidateRegistry::default();
        for i in 0..4 {
            registry.add(candidate(i));
        }

        let removed = registry.remove(Entity::from_raw(1));
        assert_eq!(removed.map(|c| c.id), Some(Entity::from_raw(1)));

        let ids: Vec<u32> = registry.iter().map(|c| c.id.index()).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut registry = CandidateRegistry::default();
        registry.add(candidate(0));

        assert!(registry.remove(Entity::from_raw(99)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_only_first_match() {
        let mut registry = CandidateRegistry::default();
        registry.add(candidate(5));
        registry.add(candidate(5));

        registry.remove(Entity::from_raw(5));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(Entity::from_raw(5)));
    }

    #[test]
    fn test_center_of_bounds() {
        let c = candidate(2);
        assert_eq!(c.center(), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_clear_pointer_flags() {
        let mut registry = CandidateRegistry::default();
        registry.add(candidate(0));
        if let Some(c) = registry.at_mut(0) {
            c.pointer = PointerFlags {
                clicked: true,
                hovered: true,
            };
        }
        registry.clear_pointer_flags();
        assert_eq!(registry.at(0).map(|c| c.pointer), Some(PointerFlags::default()));
    }
}
