use crate::road_network::road::RoadId;
use serde::Serialize;

/// Binary gate onto a destination road. Closed until the simulation opens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficLight {
    traffic_allowed: bool,
    pub destination_road: RoadId,
}

impl TrafficLight {
    pub fn new(destination_road: RoadId) -> Self {
        Self {
            traffic_allowed: false,
            destination_road,
        }
    }

    pub fn is_traffic_allowed(&self) -> bool {
        self.traffic_allowed
    }

    pub fn allow(&mut self) {
        self.traffic_allowed = true;
    }

    pub fn deny(&mut self) {
        self.traffic_allowed = false;
    }
}

/// "Traffic on `connected_road` may proceed from here", stored on the road's
/// finish intersection. The light decides whether it may proceed right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub connected_road: RoadId,
    pub traffic_light: TrafficLight,
}

impl Connection {
    pub fn new(connected_road: RoadId, destination_road: RoadId) -> Self {
        Self {
            connected_road,
            traffic_light: TrafficLight::new(destination_road),
        }
    }

    pub fn destination_road(&self) -> RoadId {
        self.traffic_light.destination_road
    }
}
