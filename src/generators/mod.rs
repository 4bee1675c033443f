use std::{fmt, time::Duration};

use rand::{Rng, SeedableRng, distr::uniform::SampleUniform, rngs::StdRng};

mod carve;
mod repair;

pub use carve::{CarveStatus, START_SAMPLES, carve};
pub use repair::{RepairReport, force_connected};

/// The random stream shared by carving, repair and seed placement.
pub struct MazeRng {
    rng: StdRng,
}

impl MazeRng {
    /// A stream that is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        MazeRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A stream seeded from the operating system.
    pub fn from_os_rng() -> Self {
        MazeRng {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Restarts the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws a value in `min..=max`.
    pub fn rand<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.random_range(min..=max)
    }
}

/// Carving state that survives between time slices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationState {
    /// Where the carver currently is.
    pub cursor: (u8, u8),
    /// Where the carver was before its last move. `None` before the first move of a path.
    ///
    /// Kept for inspection between slices; carving itself never reads it back, since a
    /// resumed slice always starts a new path.
    pub old_cursor: Option<(u8, u8)>,
    /// Set when the last slice ran out of time before the maze was complete.
    pub paused: bool,
    /// Deadline of the current slice, on the [`Clock`](crate::app::clock::Clock) timeline.
    pub deadline: Duration,
}

/// Internal consistency failures. Seeing one means the engine has a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    /// Loop erasure reached a cell with no open wall before getting back to the loop start.
    BacktrackStuck { at: (u8, u8), target: (u8, u8) },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::BacktrackStuck { at, target } => write!(
                f,
                "loop erasure stuck at {:?} while backtracking to {:?}",
                at, target
            ),
        }
    }
}

impl std::error::Error for GenerationError {}
