use crate::agent::Agent;
use crate::error::{WorldError, WorldResult};
use crate::position::Position;
use std::collections::{HashMap, HashSet};

/// Treasure map: grid size, mountains, treasure deposits and adventurers in turn order
#[derive(Clone, Debug)]
pub struct World {
    width: i32,
    height: i32,
    obstacles: HashSet<Position>,
    resources: HashMap<Position, u32>,
    agents: Vec<Agent>,
}

impl World {
    /// Create an empty world of `width` x `height` cells
    pub fn new(width: i32, height: i32) -> WorldResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            obstacles: HashSet::new(),
            resources: HashMap::new(),
            agents: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` lies in `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[inline]
    fn check_bounds(&self, pos: Position) -> WorldResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(WorldError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Add a mountain
    pub fn place_obstacle(&mut self, pos: Position) -> WorldResult<()> {
        self.check_bounds(pos)?;
        if self.obstacles.contains(&pos) {
            return Err(WorldError::ObstacleConflict(pos));
        }
        if self.resources.contains_key(&pos) {
            return Err(WorldError::ResourceConflict(pos));
        }
        self.obstacles.insert(pos);
        Ok(())
    }

    /// Set the treasure count at `pos`, replacing any previous value
    pub fn place_resource(&mut self, pos: Position, quantity: u32) -> WorldResult<()> {
        self.check_bounds(pos)?;
        if self.obstacles.contains(&pos) {
            return Err(WorldError::ObstacleConflict(pos));
        }
        self.resources.insert(pos, quantity);
        Ok(())
    }

    /// Append an adventurer to the turn order.
    /// Adventurers may share a cell.
    pub fn register_agent(&mut self, agent: Agent) -> WorldResult<()> {
        let pos = agent.position();
        self.check_bounds(pos)?;
        if self.obstacles.contains(&pos) {
            return Err(WorldError::ObstacleConflict(pos));
        }
        self.agents.push(agent);
        Ok(())
    }

    pub fn is_obstacle(&self, pos: Position) -> WorldResult<bool> {
        self.check_bounds(pos)?;
        Ok(self.obstacles.contains(&pos))
    }

    /// Remaining treasures at `pos`, 0 when there is no deposit
    pub fn resource_at(&self, pos: Position) -> WorldResult<u32> {
        self.check_bounds(pos)?;
        Ok(self.resources.get(&pos).copied().unwrap_or(0))
    }

    /// Whether an adventurer may step onto `pos`
    #[inline]
    pub fn can_enter(&self, pos: Position) -> bool {
        self.contains(pos) && !self.obstacles.contains(&pos)
    }

    /// Adventurers in turn order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Detach the adventurers so one of them can run against `&mut self`
    pub(crate) fn take_agents(&mut self) -> Vec<Agent> {
        std::mem::take(&mut self.agents)
    }

    pub(crate) fn restore_agents(&mut self, agents: Vec<Agent>) {
        debug_assert!(self.agents.is_empty());
        self.agents = agents;
    }

    /// Mountains in row-major order
    pub fn obstacles(&self) -> Vec<Position> {
        let mut out: Vec<Position> = self.obstacles.iter().copied().collect();
        out.sort_unstable_by_key(|p| p.row_major());
        out
    }

    /// Non-empty treasure deposits in row-major order
    pub fn resources(&self) -> Vec<(Position, u32)> {
        let mut out: Vec<(Position, u32)> = self
            .resources
            .iter()
            .filter(|&(_, &q)| q > 0)
            .map(|(&p, &q)| (p, q))
            .collect();
        out.sort_unstable_by_key(|(p, _)| p.row_major());
        out
    }

    /// Treasures left on the whole map
    pub fn remaining_resources(&self) -> u64 {
        self.resources.values().map(|&q| u64::from(q)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::Heading;

    fn world() -> World {
        World::new(4, 3).unwrap()
    }

    fn agent_at(x: i32, y: i32) -> Agent {
        Agent::new("Lara", Position::new(x, y), Heading::South, "")
    }

    #[test]
    fn test_world_creation() {
        let w = world();

        assert_eq!(w.width(), 4);
        assert_eq!(w.height(), 3);
        assert!(w.agents().is_empty());
        assert!(w.obstacles().is_empty());
        assert_eq!(w.remaining_resources(), 0);
    }

    #[test]
    fn test_non_positive_dimensions_are_rejected() {
        assert_eq!(
            World::new(0, 3).unwrap_err(),
            WorldError::InvalidDimensions { width: 0, height: 3 }
        );
        assert!(World::new(3, -1).is_err());
    }

    #[test]
    fn test_bounds_are_half_open() {
        let w = world();

        assert!(w.contains(Position::new(0, 0)));
        assert!(w.contains(Position::new(3, 2)));
        assert!(!w.contains(Position::new(4, 0)));
        assert!(!w.contains(Position::new(0, 3)));
        assert!(!w.contains(Position::new(-1, 0)));
        assert!(!w.contains(Position::new(0, -1)));
    }

    #[test]
    fn test_place_obstacle() {
        let mut w = world();
        let p = Position::new(1, 0);

        w.place_obstacle(p).unwrap();

        assert_eq!(w.is_obstacle(p), Ok(true));
        assert_eq!(w.is_obstacle(Position::new(0, 0)), Ok(false));
        assert_eq!(w.place_obstacle(p), Err(WorldError::ObstacleConflict(p)));
    }

    #[test]
    fn test_place_obstacle_on_treasure_fails() {
        let mut w = world();
        let p = Position::new(2, 2);
        w.place_resource(p, 1).unwrap();

        assert_eq!(w.place_obstacle(p), Err(WorldError::ResourceConflict(p)));
        assert_eq!(w.is_obstacle(p), Ok(false));
    }

    #[test]
    fn test_bounds_are_checked_first() {
        let mut w = world();
        // width and height themselves are outside the map
        for p in [Position::new(4, 0), Position::new(0, 3), Position::new(-1, 2)] {
            let expected = WorldError::OutOfBounds {
                position: p,
                width: 4,
                height: 3,
            };
            assert_eq!(w.place_obstacle(p), Err(expected.clone()));
            assert_eq!(w.place_resource(p, 2), Err(expected.clone()));
            assert_eq!(w.is_obstacle(p), Err(expected.clone()));
            assert_eq!(w.resource_at(p), Err(expected.clone()));
            assert_eq!(w.register_agent(agent_at(p.x, p.y)), Err(expected));
        }
    }

    #[test]
    fn test_place_resource_overwrites() {
        let mut w = world();
        let p = Position::new(0, 2);

        assert_eq!(w.resource_at(p), Ok(0));
        w.place_resource(p, 3).unwrap();
        w.place_resource(p, 5).unwrap();
        assert_eq!(w.resource_at(p), Ok(5));
        assert_eq!(w.remaining_resources(), 5);
    }

    #[test]
    fn test_place_resource_on_mountain_fails() {
        let mut w = world();
        let p = Position::new(1, 1);
        w.place_obstacle(p).unwrap();

        assert_eq!(w.place_resource(p, 1), Err(WorldError::ObstacleConflict(p)));
        assert_eq!(w.resource_at(p), Ok(0));
    }

    #[test]
    fn test_register_agent_keeps_turn_order() {
        let mut w = world();
        w.register_agent(Agent::new("first", Position::new(0, 0), Heading::North, ""))
            .unwrap();
        w.register_agent(Agent::new("second", Position::new(0, 0), Heading::East, ""))
            .unwrap();

        let names: Vec<&str> = w.agents().iter().map(|a| a.name()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_register_agent_on_mountain_fails() {
        let mut w = world();
        let p = Position::new(2, 1);
        w.place_obstacle(p).unwrap();

        assert_eq!(
            w.register_agent(agent_at(2, 1)),
            Err(WorldError::ObstacleConflict(p))
        );
        assert!(w.agents().is_empty());
    }

    #[test]
    fn test_can_enter() {
        let mut w = world();
        w.place_obstacle(Position::new(1, 1)).unwrap();

        assert!(w.can_enter(Position::new(0, 0)));
        assert!(!w.can_enter(Position::new(1, 1)));
        assert!(!w.can_enter(Position::new(4, 1)));
        assert!(!w.can_enter(Position::new(-1, 1)));
    }

    #[test]
    fn test_listings_are_row_major_and_skip_empty_deposits() {
        let mut w = world();
        w.place_obstacle(Position::new(3, 0)).unwrap();
        w.place_obstacle(Position::new(0, 1)).unwrap();
        w.place_obstacle(Position::new(1, 0)).unwrap();
        w.place_resource(Position::new(2, 2), 1).unwrap();
        w.place_resource(Position::new(0, 2), 0).unwrap();
        w.place_resource(Position::new(3, 1), 4).unwrap();

        assert_eq!(
            w.obstacles(),
            [Position::new(1, 0), Position::new(3, 0), Position::new(0, 1)]
        );
        assert_eq!(
            w.resources(),
            [(Position::new(3, 1), 4), (Position::new(2, 2), 1)]
        );
    }

    #[test]
    fn test_take_and_restore_agents() {
        let mut w = world();
        w.register_agent(agent_at(0, 0)).unwrap();

        let agents = w.take_agents();
        assert_eq!(agents.len(), 1);
        assert!(w.agents().is_empty());

        w.restore_agents(agents);
        assert_eq!(w.agents().len(), 1);
    }
}
