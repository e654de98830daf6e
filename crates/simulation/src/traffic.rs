//! Registration surface of the commuter simulation.
//!
//! Roads are handed over here once committed; from then on this module owns
//! the growth of each road's commuter list. Commuter movement itself lives
//! elsewhere.

use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::roads::{Road, RoadId, RoadKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommuterId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Commuter {
    pub id: CommuterId,
    pub road: RoadId,
    pub distance_travelled: f32,
    pub preferred_speed: f32,
}

/// What the commuter simulation knows about a registered road.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegisteredRoad {
    pub kind: RoadKind,
    pub from: Entity,
    pub to: Entity,
    pub length: f32,
}

#[derive(Resource, Debug, Default)]
pub struct CommuterNetwork {
    pub roads: BTreeMap<RoadId, RegisteredRoad>,
    pub commuters: BTreeMap<CommuterId, Commuter>,
    next_commuter: u32,
}

impl CommuterNetwork {
    pub fn register_road(&mut self, id: RoadId, road: &Road) {
        self.roads.insert(
            id,
            RegisteredRoad {
                kind: road.kind,
                from: road.from,
                to: road.to,
                length: road.length(),
            },
        );
    }

    pub fn is_registered(&self, id: RoadId) -> bool {
        self.roads.contains_key(&id)
    }

    /// Put a new commuter on `road`, appending it to the road's commuter
    /// list. Returns `None` if the road was never registered here.
    pub fn add_commuter(&mut self, road: &mut Road, preferred_speed: f32) -> Option<CommuterId> {
        if !self.is_registered(road.id) {
            return None;
        }
        let id = CommuterId(self.next_commuter);
        self.next_commuter += 1;
        self.commuters.insert(
            id,
            Commuter {
                id,
                road: road.id,
                distance_travelled: 0.0,
                preferred_speed,
            },
        );
        road.commuters.push(id);
        Some(id)
    }

    pub fn commuters_on(&self, road: RoadId) -> impl Iterator<Item = &Commuter> {
        self.commuters.values().filter(move |c| c.road == road)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road_geometry::solve_road_placement;
    use crate::roads::RoadStore;

    fn store_with_road() -> (RoadStore, RoadId) {
        let mut store = RoadStore::default();
        let placement = solve_road_placement(Vec2::new(100.0, 0.0), Vec2::ZERO, 10.0);
        let id = store.add_road(
            RoadKind::Basic,
            Entity::from_raw(1),
            Entity::from_raw(2),
            placement,
        );
        (store, id)
    }

    #[test]
    fn test_register_road_records_length() {
        let (store, id) = store_with_road();
        let mut network = CommuterNetwork::default();
        let Some(road) = store.get(id) else {
            panic!("road missing");
        };
        network.register_road(id, road);

        let registered = network.roads.get(&id).copied();
        assert!(registered.is_some_and(|r| (r.length - 100.0).abs() < 1e-3));
        assert!(network.is_registered(id));
    }

    #[test]
    fn test_add_commuter_appends_to_road() {
        let (mut store, id) = store_with_road();
        let mut network = CommuterNetwork::default();
        let Some(road) = store.get_mut(id) else {
            panic!("road missing");
        };
        network.register_road(id, road);

        let first = network.add_commuter(road, 12.0);
        let second = network.add_commuter(road, 8.0);

        assert!(first.is_some() && second.is_some());
        assert_eq!(road.commuters.len(), 2);
        assert_eq!(road.commuters, vec![CommuterId(0), CommuterId(1)]);
        assert_eq!(network.commuters_on(id).count(), 2);
    }

    #[test]
    fn test_add_commuter_requires_registration() {
        let (mut store, id) = store_with_road();
        let mut network = CommuterNetwork::default();
        let Some(road) = store.get_mut(id) else {
            panic!("road missing");
        };

        assert!(network.add_commuter(road, 10.0).is_none());
        assert!(road.commuters.is_empty());
    }
}
