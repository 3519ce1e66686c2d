use crate::agent::Agent;
use crate::error::{ParseError, Result, WorldError};
use crate::heading::Heading;
use crate::position::Position;
use crate::world::world::World;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

const FIELD_SEPARATOR: &str = " - ";

/// How the last field of an `A` record is read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    /// Scenario input: the field is the movement script
    Scenario,
    /// Rendered output: the field is the number of treasures collected
    Snapshot,
}

/// Parse a scenario from a file path
pub fn parse_scenario<P: AsRef<Path>>(path: P) -> Result<World> {
    let src = fs::read_to_string(path)?;
    parse_scenario_from_str(&src)
}

/// Parse a scenario from an in-memory string
pub fn parse_scenario_from_str(src: &str) -> Result<World> {
    parse(src, Layout::Scenario)
}

/// Parse a rendered world back; adventurers come back with their collected count
/// and an empty script
pub fn parse_snapshot_from_str(src: &str) -> Result<World> {
    parse(src, Layout::Snapshot)
}

fn parse(src: &str, layout: Layout) -> Result<World> {
    let mut world: Option<World> = None;
    let mut in_header = true;

    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        // comments are only allowed before the first record
        if in_header && text.starts_with('#') {
            continue;
        }
        in_header = false;

        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        let kind = fields[0];

        if kind == "C" {
            if world.is_some() {
                return Err(ParseError::DuplicateMap { line });
            }
            expect_fields(&fields, 3, line)?;
            let width = number(fields[1], line)?;
            let height = number(fields[2], line)?;
            let created =
                World::new(width, height).map_err(|source| ParseError::World { line, source })?;
            world = Some(created);
            continue;
        }

        let w = match world.as_mut() {
            Some(w) => w,
            None if matches!(kind, "M" | "T" | "A") => return Err(ParseError::MissingMap { line }),
            None => {
                return Err(ParseError::UnknownRecord {
                    line,
                    kind: kind.to_string(),
                })
            }
        };

        let placed: std::result::Result<(), WorldError> = match kind {
            "M" => {
                expect_fields(&fields, 3, line)?;
                let pos = position(fields[1], fields[2], line)?;
                w.place_obstacle(pos)
            }
            "T" => {
                expect_fields(&fields, 4, line)?;
                let pos = position(fields[1], fields[2], line)?;
                let quantity: u32 = number(fields[3], line)?;
                w.place_resource(pos, quantity)
            }
            "A" => {
                expect_fields(&fields, 6, line)?;
                let agent = parse_agent(&fields, layout, line)?;
                w.register_agent(agent)
            }
            other => {
                return Err(ParseError::UnknownRecord {
                    line,
                    kind: other.to_string(),
                })
            }
        };
        placed.map_err(|source| ParseError::World { line, source })?;
    }

    let world = world.ok_or(ParseError::Empty)?;
    info!(
        width = world.width(),
        height = world.height(),
        mountains = world.obstacles().len(),
        treasures = world.remaining_resources(),
        adventurers = world.agents().len(),
        "treasure map loaded"
    );
    Ok(world)
}

fn expect_fields(fields: &[&str], expected: usize, line: usize) -> Result<()> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(ParseError::InvalidLine {
            line,
            reason: format!(
                "{} record expects {} fields, found {}",
                fields[0],
                expected,
                fields.len()
            ),
        })
    }
}

fn number<T: FromStr>(field: &str, line: usize) -> Result<T> {
    field.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

fn position(x: &str, y: &str, line: usize) -> Result<Position> {
    Ok(Position::new(number(x, line)?, number(y, line)?))
}

fn parse_agent(fields: &[&str], layout: Layout, line: usize) -> Result<Agent> {
    let name = fields[1];
    if name.is_empty() {
        return Err(ParseError::InvalidLine {
            line,
            reason: "adventurer name is empty".to_string(),
        });
    }
    let pos = position(fields[2], fields[3], line)?;
    let heading: Heading = fields[4]
        .parse()
        .map_err(|source| ParseError::World { line, source })?;

    Ok(match layout {
        Layout::Scenario => Agent::new(name, pos, heading, fields[5]),
        Layout::Snapshot => Agent::with_collected(name, pos, heading, number(fields[5], line)?),
    })
}
