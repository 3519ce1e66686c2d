use crate::position::Position;
use thiserror::Error;

/// Failures raised by world placement and script execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Position outside `[0, width) x [0, height)`
    #[error("position {position} is outside the {width}x{height} map")]
    OutOfBounds {
        position: Position,
        width: i32,
        height: i32,
    },
    /// Position already holds a mountain
    #[error("position {0} is already taken by a mountain")]
    ObstacleConflict(Position),
    /// Mountain placed on a treasure
    #[error("position {0} is already taken by a treasure")]
    ResourceConflict(Position),
    /// Unknown heading symbol
    #[error("invalid heading: {0:?}")]
    InvalidHeading(String),
    /// Unknown script symbol
    #[error("invalid instruction {symbol:?} in script of {agent}")]
    InvalidInstruction { agent: String, symbol: char },
    /// Non-positive map size
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// Errors raised while loading a scenario or snapshot
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed record
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// Record kind other than C, M, T or A
    #[error("line {line}: unknown record type {kind:?}")]
    UnknownRecord { line: usize, kind: String },
    /// Field that should be an integer
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },
    /// Data record before the `C` line, or no `C` line at all
    #[error("line {line}: map dimensions (C line) must come first")]
    MissingMap { line: usize },
    /// Second `C` line
    #[error("line {line}: map dimensions declared twice")]
    DuplicateMap { line: usize },
    /// Record rejected by the world
    #[error("line {line}: {source}")]
    World { line: usize, source: WorldError },
    /// Scenario holds no data line
    #[error("scenario is empty")]
    Empty,
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;

/// Result of a world or agent operation
pub type WorldResult<T> = std::result::Result<T, WorldError>;
