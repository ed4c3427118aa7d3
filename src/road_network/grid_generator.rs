// grid_generator.rs
//
// Produces well-formed grids for demos and benchmarks. The grid is tiled with
// 2x2 blocks, each a clockwise one-way ring, so every road turns right into the
// next one and every intersection is reached exactly once.

use crate::error::RoadMapError;
use crate::road_network::coordinates::Coordinates;
use crate::road_network::intersection::IntersectionId;
use crate::road_network::orientation::Orientation;
use crate::road_network::road::{LaneType, RoadId};
use crate::shared_data::{IntersectionInfo, LayoutConfig, RoadInfo, RoadMapInfo, SimulationDefaults};
use rand::Rng;

/// Random-lane ring grid. Width and height must be even and at least 2.
pub fn generate_ring_grid<R: Rng>(
    width: i32,
    height: i32,
    rng: &mut R,
) -> Result<RoadMapInfo, RoadMapError> {
    if width < 2 || height < 2 || width % 2 != 0 || height % 2 != 0 {
        return Err(RoadMapError::invalid_input(format!(
            "ring grids need even dimensions of at least 2, got {width}x{height}"
        )));
    }
    Ok(ring_grid(width, height, || {
        if rng.random_bool(0.5) {
            LaneType::DoubleDirection
        } else {
            LaneType::SingleDirection
        }
    }))
}

/// A single 2x2 ring: road 0 runs along the top, then right, bottom, left.
pub fn ring_block(lane_type: LaneType) -> RoadMapInfo {
    ring_grid(2, 2, || lane_type)
}

fn ring_grid(width: i32, height: i32, mut lane_type: impl FnMut() -> LaneType) -> RoadMapInfo {
    let id_at = |x: i32, y: i32| IntersectionId((y * width + x) as u32);

    let mut intersections = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            intersections.push(IntersectionInfo {
                id: id_at(x, y),
                coordinates: Coordinates::new(x, y),
            });
        }
    }

    let mut roads = Vec::with_capacity(intersections.len());
    for block_y in (0..height).step_by(2) {
        for block_x in (0..width).step_by(2) {
            let corners = [
                Coordinates::new(block_x, block_y),
                Coordinates::new(block_x + 1, block_y),
                Coordinates::new(block_x + 1, block_y + 1),
                Coordinates::new(block_x, block_y + 1),
            ];
            for (i, &start) in corners.iter().enumerate() {
                let finish = corners[(i + 1) % corners.len()];
                roads.push(RoadInfo {
                    id: RoadId(roads.len() as u32),
                    start: id_at(start.x, start.y),
                    finish: id_at(finish.x, finish.y),
                    orientation: Orientation::between(start, finish),
                    lane_type: lane_type(),
                });
            }
        }
    }

    RoadMapInfo {
        map_width: width,
        map_height: height,
        defaults: SimulationDefaults::default(),
        layout: LayoutConfig::default(),
        intersections,
        roads,
    }
}
