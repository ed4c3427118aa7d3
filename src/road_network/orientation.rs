use crate::road_network::coordinates::Coordinates;
use serde::{Deserialize, Serialize};

/// Direction a road travels from its start intersection to its finish intersection.
///
/// The labels follow the grid file convention, which names a road after the lane
/// side it is drawn on rather than its compass heading:
/// - `Left`: toward increasing column
/// - `Right`: toward decreasing column
/// - `Up`: toward increasing row
/// - `Down`: toward decreasing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

// Rows: arriving orientation. Columns: departing orientation, in `index` order
// (Up, Down, Left, Right). Straight-through plus one rotational family of turns;
// the mirrored turns stay illegal.
const COMPATIBILITY: [[bool; 4]; 4] = [
    // Up continues Up or Right.
    [true, false, false, true],
    // Down continues Down or Left.
    [false, true, true, false],
    // Left continues Up or Left.
    [true, false, true, false],
    // Right continues Down or Right.
    [false, true, false, true],
];

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    fn index(self) -> usize {
        match self {
            Orientation::Up => 0,
            Orientation::Down => 1,
            Orientation::Left => 2,
            Orientation::Right => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    /// Whether traffic arriving on a `self` road may continue onto a `next` road.
    pub fn can_continue(self, next: Orientation) -> bool {
        COMPATIBILITY[self.index()][next.index()]
    }

    /// Derives the orientation of a road from its logical endpoints.
    /// Returns `None` when the endpoints are equal or not axis-aligned.
    pub fn between(start: Coordinates, finish: Coordinates) -> Option<Orientation> {
        match (finish.x - start.x, finish.y - start.y) {
            (dx, 0) if dx > 0 => Some(Orientation::Left),
            (dx, 0) if dx < 0 => Some(Orientation::Right),
            (0, dy) if dy > 0 => Some(Orientation::Up),
            (0, dy) if dy < 0 => Some(Orientation::Down),
            _ => None,
        }
    }
}
