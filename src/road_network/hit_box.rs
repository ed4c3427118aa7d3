// hit_box.rs
//
// Bounding regions in layout space. Every region is a quadrilateral whose four
// corners are listed in drawing order; all of them happen to be axis-aligned, so
// containment is answered from their bounding rectangle. A road region also keeps
// its signed length along the direction of travel, which goes to zero or below when
// the destination does not lie ahead of the source.

use crate::road_network::coordinates::Coordinates;
use crate::road_network::orientation::Orientation;
use crate::road_network::road::LaneType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HitBox {
    /// Corners in drawing order.
    pub points: [Coordinates; 4],
    /// Signed extent along the direction of travel.
    #[serde(skip)]
    span: i32,
}

impl HitBox {
    fn from_xy(x_points: [i32; 4], y_points: [i32; 4], span: i32) -> Self {
        let mut points = [Coordinates::default(); 4];
        for (i, point) in points.iter_mut().enumerate() {
            *point = Coordinates::new(x_points[i], y_points[i]);
        }
        Self { points, span }
    }

    /// Top-left and bottom-right corners of the bounding rectangle.
    pub fn bounds(&self) -> (Coordinates, Coordinates) {
        let xs = self.points.iter().map(|p| p.x);
        let ys = self.points.iter().map(|p| p.y);
        let min = Coordinates::new(xs.clone().min().unwrap_or(0), ys.clone().min().unwrap_or(0));
        let max = Coordinates::new(xs.max().unwrap_or(0), ys.max().unwrap_or(0));
        (min, max)
    }

    pub fn width(&self) -> i32 {
        let (min, max) = self.bounds();
        max.x - min.x
    }

    pub fn height(&self) -> i32 {
        let (min, max) = self.bounds();
        max.y - min.y
    }

    /// Zero or negative area: a road whose endpoints coincide or touch, or whose
    /// orientation points away from its destination.
    pub fn is_degenerate(&self) -> bool {
        self.span <= 0 || self.width() <= 0 || self.height() <= 0
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom are not.
    /// Degenerate boxes contain nothing.
    pub fn contains(&self, point: Coordinates) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let (min, max) = self.bounds();
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }
}

/// `cell_size` square anchored at the intersection's layout position.
pub fn intersection_hit_box(position: Coordinates, cell_size: i32) -> HitBox {
    let (x, y) = (position.x, position.y);
    HitBox::from_xy(
        [x, x, x + cell_size, x + cell_size],
        [y, y + cell_size, y + cell_size, y],
        cell_size,
    )
}

/// Region covering the gap between a road's two intersections.
///
/// `source` and `destination` are the layout positions of the start and finish
/// intersections. Horizontal roads span from the near edge of one intersection to
/// the near edge of the other at the destination's row; vertical roads likewise at
/// the destination's column. Double-direction roads take half the cell: `Left` the
/// lower half, `Right` the upper half, `Up` the left half, `Down` the right half.
pub fn road_hit_box(
    orientation: Orientation,
    lane_type: LaneType,
    source: Coordinates,
    destination: Coordinates,
    cell_size: i32,
) -> HitBox {
    let (s, d, c) = (source, destination, cell_size);
    let half = c / 2;
    let double = lane_type == LaneType::DoubleDirection;

    match orientation {
        Orientation::Left => {
            let x_points = [s.x + c, s.x + c, d.x, d.x];
            let span = d.x - (s.x + c);
            if double {
                HitBox::from_xy(x_points, [d.y + half, d.y + c, d.y + c, d.y + half], span)
            } else {
                HitBox::from_xy(x_points, [d.y, d.y + c, d.y + c, d.y], span)
            }
        }
        Orientation::Right => {
            let x_points = [d.x + c, d.x + c, s.x, s.x];
            let span = s.x - (d.x + c);
            if double {
                HitBox::from_xy(x_points, [d.y, d.y + half, d.y + half, d.y], span)
            } else {
                HitBox::from_xy(x_points, [d.y, d.y + c, d.y + c, d.y], span)
            }
        }
        Orientation::Up => {
            let y_points = [s.y + c, d.y, d.y, s.y + c];
            let span = d.y - (s.y + c);
            if double {
                HitBox::from_xy([d.x, d.x, d.x + half, d.x + half], y_points, span)
            } else {
                HitBox::from_xy([d.x, d.x, d.x + c, d.x + c], y_points, span)
            }
        }
        Orientation::Down => {
            let y_points = [d.y + c, s.y, s.y, d.y + c];
            let span = s.y - (d.y + c);
            if double {
                HitBox::from_xy([d.x + half, d.x + half, d.x + c, d.x + c], y_points, span)
            } else {
                HitBox::from_xy([d.x, d.x, d.x + c, d.x + c], y_points, span)
            }
        }
    }
}

/// Midpoint of the edge where a road's region meets its destination intersection.
pub fn arrival_edge_midpoint(road_box: &HitBox, orientation: Orientation) -> Coordinates {
    let (min, max) = road_box.bounds();
    let mid_x = min.x + (max.x - min.x) / 2;
    let mid_y = min.y + (max.y - min.y) / 2;
    match orientation {
        Orientation::Left => Coordinates::new(max.x, mid_y),
        Orientation::Right => Coordinates::new(min.x, mid_y),
        Orientation::Up => Coordinates::new(mid_x, max.y),
        Orientation::Down => Coordinates::new(mid_x, min.y),
    }
}
