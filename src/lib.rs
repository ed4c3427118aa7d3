pub mod error;
pub mod global_variables;
pub mod road_network;
pub mod shared_data;

pub use error::RoadMapError;
pub use road_network::builder::build_advanced_info;
pub use road_network::road_map::RoadMap;
pub use shared_data::RoadMapInfo;
