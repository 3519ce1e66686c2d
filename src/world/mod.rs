pub mod parser;
pub mod render;
pub mod world;

pub use parser::{parse_scenario, parse_scenario_from_str, parse_snapshot_from_str};
pub use world::World;
