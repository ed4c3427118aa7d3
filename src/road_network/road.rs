use crate::road_network::hit_box::HitBox;
use crate::road_network::intersection::IntersectionId;
use crate::road_network::orientation::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a road, as given by the grid file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoadId(pub u32);

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a road is drawn over the full cell or shares it with its opposite road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneType {
    /// Full cell width.
    SingleDirection,
    /// Half the cell, on the side given by the road's orientation.
    DoubleDirection,
}

/// Topology of a road, resolved against the intersection arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadLink {
    pub id: RoadId,
    pub start: IntersectionId,
    pub finish: IntersectionId,
    pub orientation: Orientation,
    pub lane_type: LaneType,
}

impl RoadLink {
    /// True when `other` runs the exact opposite way between the same two intersections.
    pub fn is_reverse_of(&self, other: &RoadLink) -> bool {
        self.start == other.finish && self.finish == other.start
    }
}

/// A directed edge of the built road map, with its computed hit box.
#[derive(Debug, Clone, Serialize)]
pub struct Road {
    /// Unique identifier for the road.
    pub id: RoadId,
    /// Intersection the road leaves from.
    pub start: IntersectionId,
    /// Intersection the road arrives at.
    pub finish: IntersectionId,
    /// Direction of travel from `start` to `finish`.
    pub orientation: Orientation,
    /// Full cell or half cell.
    pub lane_type: LaneType,
    /// Region between the two intersections, degenerate when they do not leave a gap.
    hit_box: HitBox,
}

impl Road {
    pub(crate) fn new(link: &RoadLink, hit_box: HitBox) -> Self {
        Self {
            id: link.id,
            start: link.start,
            finish: link.finish,
            orientation: link.orientation,
            lane_type: link.lane_type,
            hit_box,
        }
    }

    pub fn is_single_direction(&self) -> bool {
        self.lane_type == LaneType::SingleDirection
    }

    pub fn hit_box(&self) -> &HitBox {
        &self.hit_box
    }
}
