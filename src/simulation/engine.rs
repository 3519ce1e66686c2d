use crate::agent::Agent;
use crate::error::WorldResult;
use crate::world::World;
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of a completed run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    pub elapsed: Duration,
    pub adventurers: usize,
    /// Treasures picked up during this run
    pub collected: u64,
    /// Treasures still on the map
    pub remaining: u64,
}

/// Runs every adventurer's script, one adventurer at a time in turn order
pub struct SimulationEngine {
    suppress_events: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(suppress_events: bool) -> Self {
        Self { suppress_events }
    }

    /// Run the complete simulation.
    ///
    /// The first invalid instruction stops the run. Adventurers before the failing
    /// one keep their moves, the failing one keeps the moves made before the bad
    /// symbol, and the ones after it never move.
    pub fn run(&self, world: &mut World) -> WorldResult<SimulationReport> {
        let mut agents = world.take_agents();
        let collected_before: u64 = agents.iter().map(|a| u64::from(a.collected())).sum();
        info!(adventurers = agents.len(), "starting treasure hunt");

        let sim_start = Instant::now();
        let outcome = agents
            .iter_mut()
            .try_for_each(|agent| Self::run_agent(agent, world));
        let elapsed = sim_start.elapsed();

        // the map gets its adventurers back even when a script failed
        let collected_after: u64 = agents.iter().map(|a| u64::from(a.collected())).sum();
        let adventurers = agents.len();
        world.restore_agents(agents);
        outcome?;

        let report = SimulationReport {
            elapsed,
            adventurers,
            collected: collected_after - collected_before,
            remaining: world.remaining_resources(),
        };
        info!(
            collected = report.collected,
            remaining = report.remaining,
            "treasure hunt finished"
        );
        Ok(report)
    }

    fn run_agent(agent: &mut Agent, world: &mut World) -> WorldResult<()> {
        agent.run_script(world)?;
        debug!(
            adventurer = agent.name(),
            x = agent.position().x,
            y = agent.position().y,
            heading = %agent.heading(),
            collected = agent.collected(),
            "script finished"
        );
        Ok(())
    }

    /// Print simulation summary
    pub fn print_summary(&self, world: &World, report: &SimulationReport) {
        if !self.suppress_events {
            for agent in world.agents() {
                println!(
                    "{} {} {} {}",
                    "💰".yellow(),
                    agent.name().bright_yellow(),
                    format!("ended at {} facing {}", agent.position(), agent.heading()).green(),
                    format!("with {} treasure(s)", agent.collected()).cyan(),
                );
            }
        }

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            report.elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("adventurers={}", report.adventurers).cyan(),
            format!("collected={}", report.collected).cyan(),
            format!("remaining={}", report.remaining).cyan(),
        );
    }
}
