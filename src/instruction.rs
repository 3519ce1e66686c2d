/// Decoded script symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `A`: one cell ahead
    Forward,
    /// `G`: quarter turn left
    TurnLeft,
    /// `D`: quarter turn right
    TurnRight,
}

impl Instruction {
    /// Decode a script character; `None` for unknown symbols
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Instruction::Forward),
            'G' => Some(Instruction::TurnLeft),
            'D' => Some(Instruction::TurnRight),
            _ => None,
        }
    }
}
