use bevy::prelude::*;

use crate::road_geometry::RoadPlacement;
use crate::traffic::CommuterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoadId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoadKind {
    /// Tag of a road that was never committed (the preview).
    #[default]
    None,
    Basic,
}

/// A committed, directional road between two cities.
///
/// `from` and `to` are non-owning references to the candidate entities.
/// After creation only `commuters` changes, and only by appending.
#[derive(Debug, Clone)]
pub struct Road {
    pub id: RoadId,
    pub kind: RoadKind,
    pub from: Entity,
    pub to: Entity,
    pub placement: RoadPlacement,
    pub commuters: Vec<CommuterId>,
}

impl Road {
    pub fn length(&self) -> f32 {
        self.placement.length()
    }
}

/// Every committed road, in commit order.
#[derive(Resource, Debug, Default)]
pub struct RoadStore {
    pub roads: Vec<Road>,
    next_id: u32,
}

impl RoadStore {
    /// Create a new road with a fresh identity and return that identity.
    pub fn add_road(
        &mut self,
        kind: RoadKind,
        from: Entity,
        to: Entity,
        placement: RoadPlacement,
    ) -> RoadId {
        let id = RoadId(self.next_id);
        self.next_id += 1;
        self.roads.push(Road {
            id,
            kind,
            from,
            to,
            placement,
            commuters: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: RoadId) -> Option<&Road> {
        self.roads.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RoadId) -> Option<&mut Road> {
        self.roads.iter_mut().find(|r| r.id == id)
    }

    /// Roads leaving `city`, in commit order.
    pub fn roads_from(&self, city: Entity) -> impl Iterator<Item = &Road> {
        self.roads.iter().filter(move |r| r.from == city)
    }

    /// Whether a road already runs from `from` to `to` (direction matters).
    pub fn connects(&self, from: Entity, to: Entity) -> bool {
        self.roads.iter().any(|r| r.from == from && r.to == to)
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_road_assigns_fresh_ids() {
        let mut store = RoadStore::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        let first = store.add_road(RoadKind::Basic, a, b, RoadPlacement::default());
        let second = store.add_road(RoadKind::Basic, b, a, RoadPlacement::default());

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert!(store.get(first).is_some_and(|r| r.commuters.is_empty()));
    }

    #[test]
    fn test_roads_are_directional() {
        let mut store = RoadStore::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        store.add_road(RoadKind::Basic, a, b, RoadPlacement::default());

        assert!(store.connects(a, b));
        assert!(!store.connects(b, a));
        assert_eq!(store.roads_from(a).count(), 1);
        assert_eq!(store.roads_from(b).count(), 0);
    }

    #[test]
    fn test_default_kind_is_none() {
        assert_eq!(RoadKind::default(), RoadKind::None);
    }
}
