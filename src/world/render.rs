use crate::world::world::World;
use std::fmt;

/// Renders the final map in scenario format: `C`, then `M`, then non-empty `T`,
/// then `A` lines with the collected count in place of the script
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C - {} - {}", self.width(), self.height())?;
        for mountain in self.obstacles() {
            write!(f, "\nM - {} - {}", mountain.x, mountain.y)?;
        }
        for (pos, count) in self.resources() {
            write!(f, "\nT - {} - {} - {}", pos.x, pos.y, count)?;
        }
        for agent in self.agents() {
            let pos = agent.position();
            write!(
                f,
                "\nA - {} - {} - {} - {} - {}",
                agent.name(),
                pos.x,
                pos.y,
                agent.heading(),
                agent.collected()
            )?;
        }
        Ok(())
    }
}
