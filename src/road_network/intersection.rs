use crate::road_network::connection::Connection;
use crate::road_network::coordinates::Coordinates;
use crate::road_network::hit_box::HitBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an intersection, as given by the grid file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IntersectionId(pub u32);

impl fmt::Display for IntersectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the built road map.
///
/// Inbound connections and the hit box are filled in by the builder and are
/// read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Intersection {
    /// Unique identifier for the intersection.
    pub id: IntersectionId,
    /// Logical (column, row) position on the grid.
    pub coordinates: Coordinates,
    /// Connections whose arriving road finishes here.
    inbound_connections: Box<[Connection]>,
    /// One-cell region in layout space.
    hit_box: HitBox,
}

impl Intersection {
    pub(crate) fn new(
        id: IntersectionId,
        coordinates: Coordinates,
        inbound_connections: Box<[Connection]>,
        hit_box: HitBox,
    ) -> Self {
        Self {
            id,
            coordinates,
            inbound_connections,
            hit_box,
        }
    }

    /// One entry per (arriving road, legal continuation) pair.
    pub fn inbound_connections(&self) -> &[Connection] {
        &self.inbound_connections
    }

    pub fn hit_box(&self) -> &HitBox {
        &self.hit_box
    }
}
