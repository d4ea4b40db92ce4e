use crate::cli::Args;
use crate::error::Result;
use crate::rng::RandomSource;
use crate::simulation::ant_behavior::step_ant;
use crate::simulation::eater_behavior::step_eater;
use crate::simulation::state::{Simulation, SimulationId};
use crate::store::SimulationStore;
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::trace;

/// What happened during one or more ticks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Last tick covered by the report
    pub tick: u64,
    pub delivered: u64,
    pub picked_up: u64,
    pub spawned: u64,
    pub eaten: u64,
}

impl TickReport {
    /// Fold a later report into this one
    pub fn absorb(&mut self, other: &TickReport) {
        self.tick = self.tick.max(other.tick);
        self.delivered += other.delivered;
        self.picked_up += other.picked_up;
        self.spawned += other.spawned;
        self.eaten += other.eaten;
    }
}

/// Advance `sim` by one tick.
///
/// Colonies go in creation order: each ant of a colony acts in turn, then the
/// colony tries to spawn once. Ant-eaters act after every colony, so they see
/// the ants' new positions. Nothing here runs concurrently; later agents
/// observe the effects of earlier ones within the same tick.
pub fn advance<R: RandomSource>(sim: &mut Simulation, rng: &mut R) -> TickReport {
    let mut report = TickReport {
        tick: sim.bump_tick(),
        ..TickReport::default()
    };

    let grid = &mut sim.grid;
    let food_piles = &mut sim.food_piles;
    for colony in sim.colonies.iter_mut() {
        for ant in colony.ants.iter_mut() {
            let outcome = step_ant(ant, &mut colony.nest, grid, food_piles, rng);
            report.delivered += outcome.delivered as u64;
            report.picked_up += outcome.picked_up as u64;
        }
        if colony.try_spawn().is_some() {
            report.spawned += 1;
        }
    }

    for eater in sim.ant_eaters.iter_mut() {
        if step_eater(eater, &mut sim.colonies, &sim.grid, rng).is_some() {
            report.eaten += 1;
        }
    }

    trace!(
        sim = sim.id(),
        tick = report.tick,
        delivered = report.delivered,
        spawned = report.spawned,
        eaten = report.eaten,
        "tick advanced"
    );
    report
}

impl Simulation {
    /// Advance this simulation by one tick, see [`advance`]
    pub fn advance<R: RandomSource>(&mut self, rng: &mut R) -> TickReport {
        advance(self, rng)
    }
}

/// Drives simulations in a store for a number of ticks and reports on one of them
pub struct SimulationEngine {
    realtime: bool,
    suppress_events: bool,
    totals: TickReport,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(args: &Args) -> Self {
        Self {
            realtime: args.realtime,
            suppress_events: args.suppress_events,
            totals: TickReport::default(),
        }
    }

    /// Totals recorded for the watched simulation so far
    pub fn totals(&self) -> &TickReport {
        &self.totals
    }

    /// Advance every stored simulation `ticks` times. With `realtime` set, the
    /// engine sleeps the watched simulation's `tick_ms` between ticks.
    pub fn run(
        &mut self,
        store: &mut SimulationStore,
        watched: SimulationId,
        ticks: u64,
    ) -> Result<Duration> {
        let pacing = Duration::from_millis(store.get(watched)?.tick_ms());
        let started = Instant::now();

        for _ in 0..ticks {
            let reports = store.advance_all();
            if let Some((_, report)) = reports.iter().find(|(id, _)| *id == watched) {
                self.totals.absorb(report);
                self.log_events(report);
            }
            if self.realtime {
                std::thread::sleep(pacing);
            }
        }

        Ok(started.elapsed())
    }

    /// Log notable events of a tick
    #[inline]
    fn log_events(&self, report: &TickReport) {
        if self.suppress_events {
            return;
        }
        if report.eaten > 0 {
            println!(
                "{} {} {}",
                format!("[tick {}]", report.tick).dimmed(),
                "🐜 eaten:".red(),
                report.eaten.to_string().bright_red(),
            );
        }
        if report.spawned > 0 {
            println!(
                "{} {} {}",
                format!("[tick {}]", report.tick).dimmed(),
                "🥚 spawned:".green(),
                report.spawned.to_string().bright_green(),
            );
        }
    }

    /// Print simulation summary
    pub fn print_summary(&self, sim: &Simulation, replicas: usize, elapsed: Duration) {
        for (i, colony) in sim.colonies().iter().enumerate() {
            println!(
                "{} {} {} {}",
                format!("colony {}", i).bright_yellow(),
                format!("nest={}", colony.nest.position).dimmed(),
                format!("ants={}", colony.ants.len()).cyan(),
                format!("food={}", colony.nest.food).cyan(),
            );
        }
        for (i, eater) in sim.ant_eaters().iter().enumerate() {
            println!(
                "{} {} {} {}",
                format!("ant-eater {}", i).bright_magenta(),
                format!("at={}", eater.position).dimmed(),
                format!("state={}", eater.state).cyan(),
                format!("eaten={}", eater.ants_eaten).cyan(),
            );
        }

        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            format!("(replicas={})", replicas).dimmed(),
            "|".dimmed(),
            format!("ticks={}", sim.tick()).cyan(),
            format!("ants={}", sim.ants().count()).cyan(),
            format!("delivered={}", self.totals.delivered).cyan(),
            format!("eaten={}", self.totals.eaten).cyan(),
            format!("food_left={}", sim.total_food()).cyan(),
        );
    }
}
