// connection_builder.rs
//
// Works out, for every road, which roads may be taken right after it, and records
// each legal pair as a connection on the road's finish intersection.

use crate::error::RoadMapError;
use crate::road_network::connection::Connection;
use crate::road_network::intersection::IntersectionId;
use crate::road_network::road::RoadLink;
use crate::shared_data::ResolvedGrid;
use log::{debug, error};
use std::collections::BTreeMap;

/// Append-only inbound lists, one per intersection, filled during a single pass.
#[derive(Debug, Default)]
pub struct ConnectionGraphBuilder {
    inbound: BTreeMap<IntersectionId, Vec<Connection>>,
}

impl ConnectionGraphBuilder {
    /// Starts with an empty inbound list for every known intersection.
    pub fn new<I>(intersections: I) -> Self
    where
        I: IntoIterator<Item = IntersectionId>,
    {
        Self {
            inbound: intersections.into_iter().map(|id| (id, Vec::new())).collect(),
        }
    }

    pub fn append(&mut self, intersection: IntersectionId, connection: Connection) {
        self.inbound.entry(intersection).or_default().push(connection);
    }

    pub fn freeze(self) -> ConnectionGraph {
        ConnectionGraph {
            inbound: self
                .inbound
                .into_iter()
                .map(|(id, connections)| (id, connections.into_boxed_slice()))
                .collect(),
        }
    }
}

/// Inbound connections per intersection. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    inbound: BTreeMap<IntersectionId, Box<[Connection]>>,
}

impl ConnectionGraph {
    pub fn inbound(&self, intersection: IntersectionId) -> &[Connection] {
        self.inbound
            .get(&intersection)
            .map(|connections| &connections[..])
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntersectionId, &[Connection])> {
        self.inbound.iter().map(|(id, connections)| (*id, &connections[..]))
    }

    pub fn connection_count(&self) -> usize {
        self.inbound.values().map(|connections| connections.len()).sum()
    }

    pub(crate) fn into_parts(self) -> BTreeMap<IntersectionId, Box<[Connection]>> {
        self.inbound
    }
}

/// Roads starting where `road` finishes, minus `road`'s exact reverse.
pub fn possible_connections<'a>(road: &RoadLink, roads: &'a [RoadLink]) -> Vec<&'a RoadLink> {
    roads
        .iter()
        .filter(|candidate| !candidate.is_reverse_of(road))
        .filter(|candidate| candidate.start == road.finish)
        .collect()
}

/// Builds every connection of the grid. Fails on the first road that cannot continue.
pub fn build_connections(grid: &ResolvedGrid) -> Result<ConnectionGraph, RoadMapError> {
    let mut builder = ConnectionGraphBuilder::new(grid.intersections.keys().copied());

    for road in &grid.roads {
        let candidates = possible_connections(road, &grid.roads);
        if candidates.is_empty() {
            error!("Road {} has nowhere to go at intersection {}", road.id, road.finish);
            return Err(RoadMapError::UnconnectableRoad { road: road.id });
        }

        let mut connected = false;
        for destination in candidates {
            if road.orientation.can_continue(destination.orientation) {
                debug!(
                    "Connection at {}: road {} ({:?}) -> road {} ({:?})",
                    road.finish, road.id, road.orientation, destination.id, destination.orientation
                );
                builder.append(road.finish, Connection::new(road.id, destination.id));
                connected = true;
            }
        }

        // Candidates exist, but the road is still a dead end.
        if !connected {
            error!("Road {} has no orientation-compatible continuation", road.id);
            return Err(RoadMapError::IncompatibleRoad { road: road.id });
        }
    }

    Ok(builder.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road_network::coordinates::Coordinates;
    use crate::road_network::orientation::Orientation;
    use crate::road_network::road::{LaneType, RoadId};

    fn link(id: u32, start: u32, finish: u32, orientation: Orientation) -> RoadLink {
        RoadLink {
            id: RoadId(id),
            start: IntersectionId(start),
            finish: IntersectionId(finish),
            orientation,
            lane_type: LaneType::SingleDirection,
        }
    }

    fn grid(intersections: &[u32], roads: Vec<RoadLink>) -> ResolvedGrid {
        ResolvedGrid {
            intersections: intersections
                .iter()
                .map(|&id| (IntersectionId(id), Coordinates::new(id as i32, 0)))
                .collect(),
            roads,
        }
    }

    #[test]
    fn candidates_skip_the_reverse_road() {
        let roads = vec![
            link(1, 1, 2, Orientation::Left),
            link(2, 2, 1, Orientation::Right),
            link(3, 2, 3, Orientation::Left),
        ];
        let ids: Vec<_> = possible_connections(&roads[0], &roads)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![RoadId(3)]);
    }

    #[test]
    fn one_connection_per_legal_continuation() {
        // Ring 1 -> 2 -> 3 -> 1 going DOWN, plus a right-turn detour 2 -> 4 -> 5 -> 6 -> 1.
        let g = grid(
            &[1, 2, 3, 4, 5, 6],
            vec![
                link(1, 1, 2, Orientation::Down),
                link(2, 2, 3, Orientation::Down),
                link(3, 3, 1, Orientation::Down),
                link(4, 2, 4, Orientation::Left),
                link(5, 4, 5, Orientation::Up),
                link(6, 5, 6, Orientation::Right),
                link(7, 6, 1, Orientation::Down),
            ],
        );
        let graph = build_connections(&g).unwrap();
        let at_two: Vec<_> = graph
            .inbound(IntersectionId(2))
            .iter()
            .map(|c| (c.connected_road, c.destination_road()))
            .collect();
        assert_eq!(at_two, vec![(RoadId(1), RoadId(2)), (RoadId(1), RoadId(4))]);
        assert_eq!(graph.inbound(IntersectionId(1)).len(), 2);
        assert_eq!(graph.connection_count(), 8);
        assert!(graph
            .iter()
            .flat_map(|(_, connections)| connections)
            .all(|c| !c.traffic_light.is_traffic_allowed()));
    }

    #[test]
    fn empty_candidates_are_unconnectable() {
        let g = grid(&[1, 2], vec![link(1, 1, 2, Orientation::Left)]);
        let err = build_connections(&g).unwrap_err();
        assert!(matches!(err, RoadMapError::UnconnectableRoad { road } if road == RoadId(1)));
    }

    #[test]
    fn only_incompatible_candidates_is_a_dead_end() {
        // LEFT then DOWN is the mirrored turn, which the table rejects.
        let g = grid(
            &[1, 2, 3],
            vec![link(1, 1, 2, Orientation::Left), link(2, 2, 3, Orientation::Down)],
        );
        let err = build_connections(&g).unwrap_err();
        assert!(matches!(err, RoadMapError::IncompatibleRoad { road } if road == RoadId(1)));
    }

    #[test]
    fn frozen_graph_answers_unknown_intersections_with_nothing() {
        let graph = ConnectionGraphBuilder::new([IntersectionId(1)]).freeze();
        assert!(graph.inbound(IntersectionId(1)).is_empty());
        assert!(graph.inbound(IntersectionId(42)).is_empty());
        assert_eq!(graph.connection_count(), 0);
    }
}
