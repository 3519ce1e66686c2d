pub mod engine;

pub use engine::{SimulationEngine, SimulationReport};
