// src/shared_data.rs
//
// Data exchanged with the outside world: the grid description handed over by the
// map loader, and the layout settings that travel with it.

use crate::error::RoadMapError;
use crate::global_variables::{CELL_SIZE, LAYOUT_MULTIPLIER};
use crate::road_network::coordinates::Coordinates;
use crate::road_network::intersection::IntersectionId;
use crate::road_network::orientation::Orientation;
use crate::road_network::road::{LaneType, RoadId, RoadLink};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Cell size and per-cell multiplier used by the layout transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side of one cell in pixels. Must be positive.
    pub cell_size: i32,
    /// Cells between neighbouring intersections. At least 1.
    pub layout_multiplier: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            layout_multiplier: LAYOUT_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionInfo {
    pub id: IntersectionId,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadInfo {
    pub id: RoadId,
    pub start: IntersectionId,
    pub finish: IntersectionId,
    /// Derived from the endpoints when absent.
    #[serde(default)]
    pub orientation: Option<Orientation>,
    #[serde(default = "default_lane_type")]
    pub lane_type: LaneType,
}

fn default_lane_type() -> LaneType {
    LaneType::SingleDirection
}

/// Simulation settings carried by the grid file. The builder passes them through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationDefaults {
    pub default_speed: u32,
    pub default_road_capacity: u32,
    pub default_number_cars: u32,
}

/// Raw grid description, as produced by the map loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadMapInfo {
    pub map_width: i32,
    pub map_height: i32,
    #[serde(flatten)]
    pub defaults: SimulationDefaults,
    #[serde(default)]
    pub layout: LayoutConfig,
    pub intersections: Vec<IntersectionInfo>,
    pub roads: Vec<RoadInfo>,
}

/// Grid description with every id checked and every orientation known.
#[derive(Debug, Clone)]
pub struct ResolvedGrid {
    pub intersections: BTreeMap<IntersectionId, Coordinates>,
    pub roads: Vec<RoadLink>,
}

impl RoadMapInfo {
    pub fn from_json_str(json: &str) -> Result<Self, RoadMapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RoadMapError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }

    /// Pixel size of a canvas able to hold the whole map.
    pub fn canvas_size(&self) -> (i32, i32) {
        canvas_size(self.map_width, self.map_height, &self.layout)
    }

    /// Checks the layout, ids and placement, and fills in missing orientations.
    pub fn resolve(&self) -> Result<ResolvedGrid, RoadMapError> {
        self.check_extent()?;

        let mut intersections = BTreeMap::new();
        for info in &self.intersections {
            if !info.coordinates.is_placed() {
                return Err(RoadMapError::invalid_input(format!(
                    "intersection {} has no coordinates",
                    info.id
                )));
            }
            let Coordinates { x, y } = info.coordinates;
            if !(0..self.map_width).contains(&x) || !(0..self.map_height).contains(&y) {
                return Err(RoadMapError::invalid_input(format!(
                    "intersection {} at ({x}, {y}) lies outside the {}x{} map",
                    info.id, self.map_width, self.map_height
                )));
            }
            if intersections.insert(info.id, info.coordinates).is_some() {
                return Err(RoadMapError::invalid_input(format!(
                    "duplicate intersection {}",
                    info.id
                )));
            }
        }

        let mut seen_roads = HashSet::new();
        let mut roads = Vec::with_capacity(self.roads.len());
        for info in &self.roads {
            if !seen_roads.insert(info.id) {
                return Err(RoadMapError::invalid_input(format!("duplicate road {}", info.id)));
            }
            let start = lookup(&intersections, info.start, info.id)?;
            let finish = lookup(&intersections, info.finish, info.id)?;
            let orientation = match info.orientation {
                Some(orientation) => orientation,
                None => Orientation::between(start, finish).ok_or_else(|| {
                    RoadMapError::invalid_input(format!(
                        "road {} has no orientation and its endpoints are not aligned",
                        info.id
                    ))
                })?,
            };
            roads.push(RoadLink {
                id: info.id,
                start: info.start,
                finish: info.finish,
                orientation,
                lane_type: info.lane_type,
            });
        }

        Ok(ResolvedGrid {
            intersections,
            roads,
        })
    }

    // Every layout position and box corner is bounded by the canvas, so a canvas
    // that fits in i32 keeps all later geometry in range.
    fn check_extent(&self) -> Result<(), RoadMapError> {
        let LayoutConfig {
            cell_size,
            layout_multiplier,
        } = self.layout;
        if cell_size <= 0 || layout_multiplier < 1 {
            return Err(RoadMapError::invalid_input(format!(
                "layout needs a positive cell size and a multiplier of at least 1, \
                 got cell_size {cell_size} and layout_multiplier {layout_multiplier}"
            )));
        }
        if self.map_width < 1 || self.map_height < 1 {
            return Err(RoadMapError::invalid_input(format!(
                "map size {}x{} is empty",
                self.map_width, self.map_height
            )));
        }
        if checked_canvas_size(self.map_width, self.map_height, &self.layout).is_none() {
            return Err(RoadMapError::invalid_input(format!(
                "a {}x{} map does not fit in layout space",
                self.map_width, self.map_height
            )));
        }
        Ok(())
    }
}

fn lookup(
    intersections: &BTreeMap<IntersectionId, Coordinates>,
    id: IntersectionId,
    road: RoadId,
) -> Result<Coordinates, RoadMapError> {
    intersections.get(&id).copied().ok_or_else(|| {
        RoadMapError::invalid_input(format!("road {road} refers to unknown intersection {id}"))
    })
}

/// `C*(3 + M*(w-1))` by `C*(3 + M*(h-1))`: one border cell on each side plus the last
/// intersection, and `M` cells per further column or row.
///
/// Saturates at `i32::MAX`; see [`checked_canvas_size`].
pub fn canvas_size(map_width: i32, map_height: i32, layout: &LayoutConfig) -> (i32, i32) {
    let (c, m) = (layout.cell_size, layout.layout_multiplier);
    let side = |n: i32| {
        m.saturating_mul(n.saturating_sub(1))
            .saturating_add(3)
            .saturating_mul(c)
    };
    (side(map_width), side(map_height))
}

/// `None` when either side overflows `i32`.
pub fn checked_canvas_size(
    map_width: i32,
    map_height: i32,
    layout: &LayoutConfig,
) -> Option<(i32, i32)> {
    let (c, m) = (layout.cell_size, layout.layout_multiplier);
    let side = |n: i32| {
        n.checked_sub(1)
            .and_then(|cells| m.checked_mul(cells))
            .and_then(|cells| cells.checked_add(3))
            .and_then(|cells| cells.checked_mul(c))
    };
    Some((side(map_width)?, side(map_height)?))
}
