// builder.rs
//
// Turns a raw grid description into a RoadMap:
// resolve ids -> build connections -> check reachability -> compute hit boxes.
// Any failure aborts the whole build; no partial map is returned.

use crate::error::RoadMapError;
use crate::road_network::connection_builder::{build_connections, ConnectionGraph};
use crate::road_network::connection_checker::check_connections;
use crate::road_network::coordinates::to_layout;
use crate::road_network::hit_box::{intersection_hit_box, road_hit_box};
use crate::road_network::intersection::Intersection;
use crate::road_network::road::Road;
use crate::road_network::road_map::RoadMap;
use crate::shared_data::{LayoutConfig, ResolvedGrid, RoadMapInfo};
use log::{info, warn};

pub fn build_advanced_info(road_map_info: &RoadMapInfo) -> Result<RoadMap, RoadMapError> {
    info!(
        "Building road map {}x{}: {} intersections, {} roads",
        road_map_info.map_width,
        road_map_info.map_height,
        road_map_info.intersections.len(),
        road_map_info.roads.len()
    );

    let grid = road_map_info.resolve()?;
    let graph = build_connections(&grid)?;
    check_connections(&graph)?;
    info!("Built {} connections", graph.connection_count());

    let (intersections, roads) = build_hit_boxes(&grid, graph, &road_map_info.layout);
    Ok(RoadMap::new(
        road_map_info.map_width,
        road_map_info.map_height,
        road_map_info.defaults,
        road_map_info.layout,
        intersections,
        roads,
    ))
}

fn build_hit_boxes(
    grid: &ResolvedGrid,
    graph: ConnectionGraph,
    layout: &LayoutConfig,
) -> (Vec<Intersection>, Vec<Road>) {
    let mut inbound = graph.into_parts();

    let intersections = grid
        .intersections
        .iter()
        .map(|(&id, &coordinates)| {
            let hit_box = intersection_hit_box(to_layout(coordinates, layout), layout.cell_size);
            let connections = inbound.remove(&id).unwrap_or_default();
            Intersection::new(id, coordinates, connections, hit_box)
        })
        .collect();

    let roads = grid
        .roads
        .iter()
        .map(|link| {
            // resolve() guarantees both endpoints exist.
            let source = to_layout(grid.intersections[&link.start], layout);
            let destination = to_layout(grid.intersections[&link.finish], layout);
            let hit_box = road_hit_box(
                link.orientation,
                link.lane_type,
                source,
                destination,
                layout.cell_size,
            );
            if hit_box.is_degenerate() {
                warn!(
                    "Road {} has a degenerate hit box between {} and {}",
                    link.id, link.start, link.finish
                );
            }
            Road::new(link, hit_box)
        })
        .collect();

    (intersections, roads)
}
