use std::time::Duration;

use crate::{
    app::clock::Clock,
    generators::{
        CarveStatus, GenerationState, MazeRng, RepairReport, carve, force_connected,
    },
    maze::Maze,
    seeds::SeedPattern,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to do until the next cycle is started.
    Idle,
    /// Carving, possibly paused between slices.
    Carving,
    /// Carving finished; the repair pass runs next.
    Repairing,
    /// The maze is finished and ready to be drawn.
    Done,
}

/// Where a seed pattern goes at the start of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Fixed {
        origin: (u8, u8),
        pattern: &'static SeedPattern,
    },
    /// The origin is drawn from the random stream, within the inclusive ranges.
    Scattered {
        pattern: &'static SeedPattern,
        x: (u8, u8),
        y: (u8, u8),
    },
}

/// Drives generation cycles in slices bounded by a time budget.
pub struct Scheduler {
    maze: Maze,
    rng: MazeRng,
    state: GenerationState,
    phase: Phase,
    /// How long a single call to [`Scheduler::step`] may carve for
    budget: Duration,
    last_repair: RepairReport,
}

impl Scheduler {
    pub fn new(maze: Maze, rng: MazeRng, budget: Duration) -> Self {
        Scheduler {
            maze,
            rng,
            state: GenerationState::default(),
            phase: Phase::Idle,
            budget,
            last_repair: RepairReport::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    /// Returns the maze in whatever state it is in, for testing purposes.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Result of the repair pass of the last finished cycle.
    pub fn last_repair(&self) -> RepairReport {
        self.last_repair
    }

    /// Checks whether a cycle has been started and not finished yet.
    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Carving | Phase::Repairing)
    }

    /// Starts a new cycle: resets the maze and stamps the seeds.
    ///
    /// Whatever the previous cycle was doing is thrown away. With `reseed`, the random
    /// stream restarts before anything is drawn from it.
    pub fn start_cycle(&mut self, plan: &[Placement], reseed: Option<u64>) {
        if self.is_generating() {
            tracing::debug!("[scheduler] discarding cycle in phase {:?}", self.phase);
        }
        if let Some(seed) = reseed {
            self.rng.reseed(seed);
        }

        self.maze.reset();
        self.state = GenerationState::default();
        for placement in plan {
            let (origin, pattern) = match *placement {
                Placement::Fixed { origin, pattern } => (origin, pattern),
                Placement::Scattered { pattern, x, y } => {
                    let origin = (self.rng.rand(x.0, x.1), self.rng.rand(y.0, y.1));
                    (origin, pattern)
                }
            };
            self.maze.paste_seed(origin, pattern);
        }

        tracing::info!(
            "[scheduler] new cycle with {} seeds (reseeded: {})",
            plan.len(),
            reseed.is_some()
        );
        self.phase = Phase::Carving;
    }

    /// Runs one slice of the current cycle and returns the phase it ended in.
    ///
    /// Carving stops at the first path boundary after the budget ran out; the repair pass
    /// always runs to completion once carving is done.
    ///
    /// # Panics
    /// If the carver reports an internal consistency violation.
    pub fn step(&mut self, clock: &impl Clock) -> Phase {
        if self.phase == Phase::Carving {
            let deadline = clock.now() + self.budget;
            self.state.deadline = deadline;
            match carve(&mut self.maze, &mut self.rng, &mut self.state, || {
                clock.now() > deadline
            }) {
                Ok(CarveStatus::Paused) => return self.phase,
                Ok(CarveStatus::Done) => self.phase = Phase::Repairing,
                Err(e) => {
                    tracing::error!("[scheduler] maze generation failed: {}", e);
                    panic!("maze generation failed: {}", e);
                }
            }
        }

        if self.phase == Phase::Repairing {
            self.last_repair = force_connected(&mut self.maze, &mut self.rng);
            tracing::info!(
                "[scheduler] cycle finished, repair removed {} walls",
                self.last_repair.walls_removed
            );
            self.phase = Phase::Done;
        }

        self.phase
    }

    /// The finished maze, if the current cycle is done.
    pub fn finished(&self) -> Option<&Maze> {
        (self.phase == Phase::Done).then_some(&self.maze)
    }

    /// Hands out the finished maze and goes idle until the next cycle is started.
    pub fn take_finished(&mut self) -> Option<&Maze> {
        if self.phase != Phase::Done {
            return None;
        }
        self.phase = Phase::Idle;
        Some(&self.maze)
    }
}
