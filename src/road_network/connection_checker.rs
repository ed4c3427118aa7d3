use crate::error::RoadMapError;
use crate::road_network::connection_builder::ConnectionGraph;
use log::error;

/// Every intersection must be reachable through at least one inbound connection.
/// Stops at the first (lowest id) intersection that is not.
pub fn check_connections(graph: &ConnectionGraph) -> Result<(), RoadMapError> {
    for (intersection, inbound) in graph.iter() {
        if inbound.is_empty() {
            error!("Intersection {} is never reached by any road", intersection);
            return Err(RoadMapError::UnreachableIntersection { intersection });
        }
    }
    Ok(())
}
