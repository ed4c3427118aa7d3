// road_network/mod.rs
pub mod builder;
pub mod connection;
pub mod connection_builder;
pub mod connection_checker;
pub mod coordinates;
pub mod grid_generator;
pub mod hit_box;
pub mod intersection;
pub mod orientation;
pub mod render_plan;
pub mod road;
pub mod road_map;
