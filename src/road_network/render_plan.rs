// render_plan.rs
//
// Everything a rendering backend needs to paint a RoadMap: canvas size, which
// tile goes where, and where each traffic light sits. No pixels are produced here.

use crate::road_network::coordinates::{to_layout, Coordinates};
use crate::road_network::hit_box::arrival_edge_midpoint;
use crate::road_network::intersection::IntersectionId;
use crate::road_network::orientation::Orientation;
use crate::road_network::road::{Road, RoadId};
use crate::road_network::road_map::RoadMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Floor tile touching the canvas border.
    OuterFloor,
    InnerFloor,
    Intersection,
    SingleHorizontal,
    DoubleHorizontal,
    SingleVertical,
    DoubleVertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Top-left corner in layout space.
    pub origin: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightAnchor {
    pub intersection: IntersectionId,
    /// Road the light faces.
    pub connected_road: RoadId,
    /// Road the light lets traffic onto.
    pub destination_road: RoadId,
    /// Layout point on the arrival edge.
    pub position: Coordinates,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderPlan {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub floor_tiles: Vec<Tile>,
    pub intersection_tiles: Vec<Tile>,
    pub road_tiles: Vec<Tile>,
    pub light_anchors: Vec<LightAnchor>,
}

impl RenderPlan {
    pub fn new(road_map: &RoadMap) -> Self {
        let (canvas_width, canvas_height) = road_map.canvas_size();
        let cell_size = road_map.layout.cell_size;

        let intersection_tiles = road_map
            .intersections()
            .iter()
            .map(|intersection| Tile {
                kind: TileKind::Intersection,
                origin: to_layout(intersection.coordinates, &road_map.layout),
            })
            .collect();

        let road_tiles = road_map
            .roads()
            .iter()
            .flat_map(|road| road_tiles(road, cell_size))
            .collect();

        Self {
            canvas_width,
            canvas_height,
            floor_tiles: floor_tiles(canvas_width, canvas_height, cell_size),
            intersection_tiles,
            road_tiles,
            light_anchors: light_anchors(road_map),
        }
    }
}

/// One tile per cell of the canvas, border cells marked as outer floor.
pub fn floor_tiles(canvas_width: i32, canvas_height: i32, cell_size: i32) -> Vec<Tile> {
    if cell_size <= 0 {
        return Vec::new();
    }
    let step = cell_size as usize;
    let mut tiles = Vec::new();
    for y in (0..canvas_height).step_by(step) {
        for x in (0..canvas_width).step_by(step) {
            let on_border = x == 0
                || y == 0
                || x >= canvas_width - cell_size
                || y >= canvas_height - cell_size;
            let kind = if on_border {
                TileKind::OuterFloor
            } else {
                TileKind::InnerFloor
            };
            tiles.push(Tile {
                kind,
                origin: Coordinates::new(x, y),
            });
        }
    }
    tiles
}

/// Cell-sized tiles along a road, from the source's far edge to the destination's near edge.
pub fn road_tiles(road: &Road, cell_size: i32) -> Vec<Tile> {
    if cell_size <= 0 || road.hit_box().is_degenerate() {
        return Vec::new();
    }
    let step = cell_size as usize;
    let (min, max) = road.hit_box().bounds();
    let origin = cell_origin(road, cell_size);

    if road.orientation.is_horizontal() {
        let kind = if road.is_single_direction() {
            TileKind::SingleHorizontal
        } else {
            TileKind::DoubleHorizontal
        };
        (min.x..max.x)
            .step_by(step)
            .map(|x| Tile {
                kind,
                origin: Coordinates::new(x, origin.y),
            })
            .collect()
    } else {
        let kind = if road.is_single_direction() {
            TileKind::SingleVertical
        } else {
            TileKind::DoubleVertical
        };
        (min.y..max.y)
            .step_by(step)
            .map(|y| Tile {
                kind,
                origin: Coordinates::new(origin.x, y),
            })
            .collect()
    }
}

// Top-left of the full cell strip a road is drawn in. Double roads on the lower
// or right half start half a cell further in than their strip.
fn cell_origin(road: &Road, cell_size: i32) -> Coordinates {
    let (min, _) = road.hit_box().bounds();
    let shifted = !road.is_single_direction()
        && matches!(road.orientation, Orientation::Left | Orientation::Down);
    let half = if shifted { cell_size / 2 } else { 0 };
    if road.orientation.is_horizontal() {
        min.offset(0, -half)
    } else {
        min.offset(-half, 0)
    }
}

/// Where to draw each connection's traffic light: on the edge the arriving road
/// shares with the intersection.
pub fn light_anchors(road_map: &RoadMap) -> Vec<LightAnchor> {
    let mut anchors = Vec::new();
    for intersection in road_map.intersections() {
        for connection in intersection.inbound_connections() {
            let Some(road) = road_map.road(connection.connected_road) else {
                continue;
            };
            anchors.push(LightAnchor {
                intersection: intersection.id,
                connected_road: connection.connected_road,
                destination_road: connection.destination_road(),
                position: arrival_edge_midpoint(road.hit_box(), road.orientation),
            });
        }
    }
    anchors
}
