use crate::shared_data::LayoutConfig;
use serde::{Deserialize, Serialize};

/// A point on the grid: (column, row) in logical space, or (x, y) in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    /// Sentinel for "not placed yet".
    pub const UNPLACED: Coordinates = Coordinates { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_placed(&self) -> bool {
        *self != Self::UNPLACED
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::UNPLACED
    }
}

/// Maps a logical grid coordinate to the top-left corner of its cell in layout space.
///
/// The layout keeps a one-cell border, so logical (0, 0) lands at (C, C) and every
/// further column or row moves `C * M` pixels. The sentinel is not special-cased and
/// maps to `(C - C*M, C - C*M)`; callers must not feed it unplaced coordinates.
///
/// Total over `i32`: arithmetic wraps, so out-of-range input still gives a fixed
/// result. `RoadMapInfo::resolve` rejects grids whose layout would wrap.
pub fn to_layout(coordinates: Coordinates, layout: &LayoutConfig) -> Coordinates {
    let step = layout.cell_size.wrapping_mul(layout.layout_multiplier);
    Coordinates::new(
        layout.cell_size.wrapping_add(step.wrapping_mul(coordinates.x)),
        layout.cell_size.wrapping_add(step.wrapping_mul(coordinates.y)),
    )
}
