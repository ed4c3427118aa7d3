use crate::road_network::coordinates::Coordinates;
use crate::road_network::intersection::{Intersection, IntersectionId};
use crate::road_network::road::{Road, RoadId};
use crate::shared_data::{canvas_size, LayoutConfig, SimulationDefaults};
use serde::Serialize;

/// A validated road network with hit boxes, ready for rendering and simulation.
///
/// Intersections and roads are kept sorted by id.
#[derive(Debug, Clone, Serialize)]
pub struct RoadMap {
    /// Number of grid columns.
    pub map_width: i32,
    /// Number of grid rows.
    pub map_height: i32,
    /// Simulation settings carried over from the grid file.
    pub defaults: SimulationDefaults,
    /// Settings the hit boxes were computed with.
    pub layout: LayoutConfig,
    /// Every intersection, sorted by id.
    intersections: Vec<Intersection>,
    /// Every road, sorted by id.
    roads: Vec<Road>,
}

impl RoadMap {
    pub(crate) fn new(
        map_width: i32,
        map_height: i32,
        defaults: SimulationDefaults,
        layout: LayoutConfig,
        mut intersections: Vec<Intersection>,
        mut roads: Vec<Road>,
    ) -> Self {
        intersections.sort_by_key(|intersection| intersection.id);
        roads.sort_by_key(|road| road.id);
        Self {
            map_width,
            map_height,
            defaults,
            layout,
            intersections,
            roads,
        }
    }

    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections
            .binary_search_by_key(&id, |intersection| intersection.id)
            .ok()
            .map(|index| &self.intersections[index])
    }

    pub fn road(&self, id: RoadId) -> Option<&Road> {
        self.roads
            .binary_search_by_key(&id, |road| road.id)
            .ok()
            .map(|index| &self.roads[index])
    }

    /// Roads that may be taken after `road`, in connection order.
    pub fn successors(&self, road: RoadId) -> Vec<RoadId> {
        let Some(finish) = self.road(road).and_then(|r| self.intersection(r.finish)) else {
            return Vec::new();
        };
        finish
            .inbound_connections()
            .iter()
            .filter(|connection| connection.connected_road == road)
            .map(|connection| connection.destination_road())
            .collect()
    }

    /// Intersection whose hit box contains the layout point, if any.
    pub fn intersection_at(&self, point: Coordinates) -> Option<&Intersection> {
        self.intersections
            .iter()
            .find(|intersection| intersection.hit_box().contains(point))
    }

    /// Road whose hit box contains the layout point, if any.
    pub fn road_at(&self, point: Coordinates) -> Option<&Road> {
        self.roads.iter().find(|road| road.hit_box().contains(point))
    }

    pub fn canvas_size(&self) -> (i32, i32) {
        canvas_size(self.map_width, self.map_height, &self.layout)
    }
}
