use roadmap_builder::road_network::coordinates::Coordinates;
use roadmap_builder::road_network::intersection::IntersectionId;
use roadmap_builder::road_network::road::{LaneType, RoadId};
use roadmap_builder::shared_data::{IntersectionInfo, LayoutConfig, RoadInfo, SimulationDefaults};
use roadmap_builder::{build_advanced_info, RoadMapError, RoadMapInfo};

fn intersection(id: u32, x: i32, y: i32) -> IntersectionInfo {
    IntersectionInfo {
        id: IntersectionId(id),
        coordinates: Coordinates::new(x, y),
    }
}

fn road(id: u32, start: u32, finish: u32) -> RoadInfo {
    RoadInfo {
        id: RoadId(id),
        start: IntersectionId(start),
        finish: IntersectionId(finish),
        orientation: None,
        lane_type: LaneType::SingleDirection,
    }
}

fn grid(
    width: i32,
    height: i32,
    intersections: Vec<IntersectionInfo>,
    roads: Vec<RoadInfo>,
) -> RoadMapInfo {
    RoadMapInfo {
        map_width: width,
        map_height: height,
        defaults: SimulationDefaults::default(),
        layout: LayoutConfig::default(),
        intersections,
        roads,
    }
}

// 1 (0,0) -> 2 (1,0) -> 3 (1,1) -> 4 (0,1) -> 1: LEFT, UP, RIGHT, DOWN.
fn ring() -> RoadMapInfo {
    grid(
        2,
        2,
        vec![
            intersection(1, 0, 0),
            intersection(2, 1, 0),
            intersection(3, 1, 1),
            intersection(4, 0, 1),
        ],
        vec![road(1, 1, 2), road(2, 2, 3), road(3, 3, 4), road(4, 4, 1)],
    )
}

#[test]
fn scenario_a_ring_builds_with_one_inbound_each() {
    let map = build_advanced_info(&ring()).unwrap();
    assert_eq!(map.intersections().len(), 4);
    for intersection in map.intersections() {
        let inbound = intersection.inbound_connections();
        assert_eq!(inbound.len(), 1, "intersection {}", intersection.id);
        assert!(!inbound[0].traffic_light.is_traffic_allowed());
    }
    assert_eq!(map.successors(RoadId(4)), vec![RoadId(1)]);
}

#[test]
fn scenario_b_intersection_never_targeted_is_unreachable() {
    // Intersection 5 only feeds the ring; no road ever arrives there.
    let mut info = ring();
    info.map_width = 3;
    info.intersections.push(intersection(5, 2, 1));
    info.roads.push(road(5, 5, 3));

    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(
        err,
        RoadMapError::UnreachableIntersection { intersection } if intersection == IntersectionId(5)
    ));
}

#[test]
fn scenario_b_reversed_ring_road_fails_fast() {
    // Reversing 4 -> 1 leaves intersection 1 untargeted, but road 3 runs into
    // the dead end at 4 first.
    let mut info = ring();
    info.roads[3] = road(4, 1, 4);

    let err = build_advanced_info(&info).unwrap_err();
    assert!(err.is_structural());
    assert!(matches!(err, RoadMapError::UnconnectableRoad { road } if road == RoadId(3)));
}

#[test]
fn scenario_c_isolated_road_is_unconnectable() {
    let info = grid(
        2,
        1,
        vec![intersection(1, 0, 0), intersection(2, 1, 0)],
        vec![road(1, 1, 2)],
    );
    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(err, RoadMapError::UnconnectableRoad { road } if road == RoadId(1)));
}

#[test]
fn scenario_d_head_on_pair_is_not_a_u_turn_candidate() {
    // 1 (0,1) -> 2 (0,0) is DOWN, 2 -> 1 is UP.
    let info = grid(
        1,
        2,
        vec![intersection(1, 0, 1), intersection(2, 0, 0)],
        vec![road(1, 1, 2), road(2, 2, 1)],
    );
    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(err, RoadMapError::UnconnectableRoad { road } if road == RoadId(1)));
}

#[test]
fn mirrored_turn_is_a_dead_end() {
    // 1 -> 2 runs LEFT, 2 -> 3 runs DOWN: a turn the table does not allow.
    let info = grid(
        2,
        2,
        vec![intersection(1, 0, 1), intersection(2, 1, 1), intersection(3, 1, 0)],
        vec![road(1, 1, 2), road(2, 2, 3)],
    );
    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(err, RoadMapError::IncompatibleRoad { road } if road == RoadId(1)));
}

#[test]
fn grid_file_round_trips_through_the_builder() {
    let json = serde_json::to_string(&ring()).unwrap();
    let info = RoadMapInfo::from_json_str(&json).unwrap();
    let map = build_advanced_info(&info).unwrap();
    let out = serde_json::to_value(&map).unwrap();
    assert_eq!(out["intersections"].as_array().unwrap().len(), 4);
    assert_eq!(out["roads"][0]["orientation"], "LEFT");
}

#[test]
fn far_away_ring_is_rejected_instead_of_overflowing() {
    let mut info = ring();
    info.map_width = 15_000_002;
    for intersection in &mut info.intersections {
        intersection.coordinates.x += 15_000_000;
    }
    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(err, RoadMapError::InvalidInput { .. }));
}

#[test]
fn ring_with_zero_multiplier_is_rejected() {
    let mut info = ring();
    info.layout.layout_multiplier = 0;
    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(err, RoadMapError::InvalidInput { .. }));
    assert!(!err.is_structural());
}

#[test]
fn intersection_outside_the_map_is_rejected() {
    let mut info = ring();
    info.map_width = 1;
    let err = build_advanced_info(&info).unwrap_err();
    assert!(matches!(err, RoadMapError::InvalidInput { .. }));
}
