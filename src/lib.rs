//! # Treasure Hunt
//!
//! A simulation of scripted adventurers looking for treasures on a map
//! crossed by mountains.
//!
//! This library provides the treasure map model, the adventurer movement rules,
//! the turn-by-turn driver and the text format used to load and save maps.

pub mod agent;
pub mod cli;
pub mod error;
pub mod heading;
pub mod instruction;
pub mod position;
pub mod simulation;
pub mod world;

pub use agent::Agent;
pub use cli::Args;
pub use error::{ParseError, Result, WorldError, WorldResult};
pub use heading::Heading;
pub use instruction::Instruction;
pub use position::Position;
pub use simulation::{SimulationEngine, SimulationReport};
pub use world::World;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Agent, Args, Heading, ParseError, Position, Result, SimulationEngine, SimulationReport,
        World, WorldError,
    };
}
