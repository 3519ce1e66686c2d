use crate::error::{WorldError, WorldResult};
use crate::heading::Heading;
use crate::instruction::Instruction;
use crate::position::Position;
use crate::world::World;

/// Scripted adventurer walking the treasure map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    name: String,
    position: Position,
    heading: Heading,
    collected: u32,
    script: String,
    cursor: usize, // byte offset of the next instruction in `script`
}

impl Agent {
    /// Create an adventurer with nothing collected yet
    pub fn new(
        name: impl Into<String>,
        position: Position,
        heading: Heading,
        script: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            heading,
            collected: 0,
            script: script.into(),
            cursor: 0,
        }
    }

    /// Adventurer restored from a rendered snapshot; its script is already spent
    pub fn with_collected(
        name: impl Into<String>,
        position: Position,
        heading: Heading,
        collected: u32,
    ) -> Self {
        Self {
            collected,
            ..Self::new(name, position, heading, "")
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    #[inline]
    pub fn collected(&self) -> u32 {
        self.collected
    }

    #[inline]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Instructions not yet applied
    #[inline]
    pub fn remaining_script(&self) -> &str {
        &self.script[self.cursor..]
    }

    /// Check if the whole script has run
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.len()
    }

    /// Apply a single instruction.
    ///
    /// A forward move into a mountain or off the map leaves the adventurer as is
    /// and is not an error.
    pub fn step(&mut self, world: &mut World, symbol: char) -> WorldResult<()> {
        let instruction =
            Instruction::from_symbol(symbol).ok_or_else(|| WorldError::InvalidInstruction {
                agent: self.name.clone(),
                symbol,
            })?;

        match instruction {
            Instruction::Forward => self.move_forward(world)?,
            Instruction::TurnLeft => self.heading = self.heading.rotate_left(),
            Instruction::TurnRight => self.heading = self.heading.rotate_right(),
        }
        Ok(())
    }

    fn move_forward(&mut self, world: &mut World) -> WorldResult<()> {
        let candidate = self.position.offset(self.heading.forward_offset());
        if !world.can_enter(candidate) {
            return Ok(());
        }

        self.position = candidate;
        let remaining = world.resource_at(candidate)?;
        if remaining > 0 {
            self.collected += 1;
            world.place_resource(candidate, remaining - 1)?;
        }
        Ok(())
    }

    /// Run the rest of the script in order.
    ///
    /// Stops at the first unknown symbol, leaving the cursor on it.
    pub fn run_script(&mut self, world: &mut World) -> WorldResult<()> {
        while let Some(symbol) = self.remaining_script().chars().next() {
            self.step(world, symbol)?;
            self.cursor += symbol.len_utf8();
        }
        Ok(())
    }
}
