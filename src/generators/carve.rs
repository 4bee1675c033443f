//! Loop-erased random walk carving.
//!
//! Each path starts at an empty cell and wanders by knocking down walls until it runs into a
//! cell that already belongs to the maze. When the walk crosses itself, the loop it just
//! closed is erased by walking it backwards and putting the walls back up. Paths are carved
//! one at a time, and the caller gets a chance to stop between any two paths.

use crate::{
    generators::{GenerationError, GenerationState, MazeRng},
    maze::{Maze, Side},
};

/// Random samples taken when looking for a start cell before falling back to a full scan.
pub const START_SAMPLES: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveStatus {
    /// No empty cells are left.
    Done,
    /// `out_of_time` fired; calling [`carve`] again continues where this call stopped.
    Paused,
}

/// Carves paths until the maze has no empty cells left, or until `out_of_time` returns `true`.
///
/// `out_of_time` is only consulted after a path has been completed, so a slice may overrun
/// its budget by the time of one path.
pub fn carve(
    maze: &mut Maze,
    rng: &mut MazeRng,
    state: &mut GenerationState,
    mut out_of_time: impl FnMut() -> bool,
) -> Result<CarveStatus, GenerationError> {
    // A walk only ends when it joins the maze, so an unseeded maze needs a first cell
    if maze.coords().all(|coord| maze.get(coord).is_empty()) {
        if let Some(root) = pick_start(maze, rng) {
            tracing::debug!("[carve] unseeded maze, rooting at {:?}", root);
            maze.set_empty(root, false);
        }
    }

    let mut paths = 0usize;
    loop {
        let Some(start) = pick_start(maze, rng) else {
            tracing::debug!("[carve] no empty cells left after {} paths", paths);
            state.paused = false;
            return Ok(CarveStatus::Done);
        };

        carve_path(maze, rng, state, start)?;
        // Visited only ever means "on the path being carved"
        maze.clear_visited();
        paths += 1;

        if out_of_time() {
            tracing::debug!(
                "[carve] out of time after {} paths, pausing at {:?}",
                paths,
                state.cursor
            );
            state.paused = true;
            return Ok(CarveStatus::Paused);
        }
    }
}

/// Finds an empty cell, or `None` if there are none left.
fn pick_start(maze: &Maze, rng: &mut MazeRng) -> Option<(u8, u8)> {
    for _ in 0..START_SAMPLES {
        let coord = (
            rng.rand(0, maze.width() - 1),
            rng.rand(0, maze.height() - 1),
        );
        if maze.get(coord).is_empty() {
            return Some(coord);
        }
    }

    // Empty cells are sparse; fall back to picking uniformly among all of them
    let count = maze
        .coords()
        .filter(|&coord| maze.get(coord).is_empty())
        .count();
    if count == 0 {
        return None;
    }
    let nth = rng.rand(1, count);
    maze.coords()
        .filter(|&coord| maze.get(coord).is_empty())
        .nth(nth - 1)
}

fn carve_path(
    maze: &mut Maze,
    rng: &mut MazeRng,
    state: &mut GenerationState,
    start: (u8, u8),
) -> Result<(), GenerationError> {
    state.cursor = start;
    state.old_cursor = None;

    loop {
        let cursor = state.cursor;
        maze.set(cursor, maze.get(cursor).with_empty(false).with_visited(true));
        state.old_cursor = Some(cursor);

        let side = random_closed_side(maze, rng, cursor);
        let next = side.step(cursor);
        state.cursor = next;

        if maze.get(next).is_visited() {
            erase_loop(maze, cursor, next)?;
        } else {
            maze.set_wall(cursor, side, false);
            if !maze.get(next).is_empty() {
                // Joined the rest of the maze
                tracing::trace!("[carve] path from {:?} joined at {:?}", start, next);
                return Ok(());
            }
        }
    }
}

/// Draws directions until one leads through a standing wall to a cell inside the maze.
///
/// NOTE: There is no fallback order. Any cell the walk stands on still has the wall it did
/// not come through, so a draw eventually succeeds.
fn random_closed_side(maze: &Maze, rng: &mut MazeRng, cursor: (u8, u8)) -> Side {
    loop {
        let side = Side::from_index(rng.rand(0, 3));
        if maze.is_in_bounds(side.step(cursor)) && maze.wall(cursor, side) {
            return side;
        }
    }
}

/// Walks back from `from` along the current path to `target`, putting every wall it crosses
/// back up and returning the cells it leaves to the empty pool.
fn erase_loop(maze: &mut Maze, from: (u8, u8), target: (u8, u8)) -> Result<(), GenerationError> {
    let mut coord = from;
    while coord != target {
        let Some(side) = Side::ALL
            .into_iter()
            .find(|&side| maze.is_open(coord, side))
        else {
            tracing::error!("[carve] cannot backtrack from {:?} to {:?}", coord, target);
            return Err(GenerationError::BacktrackStuck { at: coord, target });
        };
        maze.set_wall(coord, side, true);
        maze.set(coord, maze.get(coord).with_visited(false).with_empty(true));
        coord = side.step(coord);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::force_connected;
    use crate::maze::Cell;
    use crate::seeds::{BLANK, DIGITS, HEART, SeedPattern};

    fn carve_all(maze: &mut Maze, seed: u64) -> GenerationState {
        let mut rng = MazeRng::seeded(seed);
        let mut state = GenerationState::default();
        let status = carve(maze, &mut rng, &mut state, || false).unwrap();
        assert_eq!(status, CarveStatus::Done);
        state
    }

    fn assert_no_flags(maze: &Maze) {
        for coord in maze.coords() {
            let cell = maze.get(coord);
            assert!(!cell.is_empty(), "{:?} still empty", coord);
            assert!(!cell.is_visited(), "{:?} still visited", coord);
        }
    }

    #[test]
    fn test_unseeded_carve_is_perfect_maze() {
        for seed in 0..20 {
            let mut maze = Maze::new(9, 7);
            let state = carve_all(&mut maze, seed);
            assert!(!state.paused);
            assert_no_flags(&maze);
            assert_eq!(maze.open_edge_count(), maze.area() - 1);
            assert!(maze.is_connected());
        }
    }

    #[test]
    fn test_watch_sized_carve_is_perfect_maze() {
        let mut maze = Maze::watch();
        carve_all(&mut maze, 1234);
        assert_eq!(maze.open_edge_count(), 24 * 24 - 1);
        assert!(maze.is_connected());
    }

    #[test]
    fn test_carving_never_raises_seeded_walls() {
        for seed in 0..10 {
            let mut maze = Maze::new(4, 4);
            maze.paste_seed((0, 0), &SeedPattern::new(2, 1, &[0b11_00_0000]));
            carve_all(&mut maze, seed);
            force_connected(&mut maze, &mut MazeRng::seeded(seed));
            assert!(!maze.get((1, 0)).wall_left());
            assert!(!maze.get((1, 0)).wall_up());
            assert!(maze.is_connected());
        }
    }

    #[test]
    fn test_cycle_only_removes_walls_after_stamping() {
        let stamps: [&[((u8, u8), &SeedPattern)]; 2] = [
            &[((3, 1), &DIGITS[0]), ((10, 13), &BLANK)],
            &[((2, 4), &HEART)],
        ];
        for (seed, stamp) in stamps.into_iter().enumerate() {
            let mut maze = Maze::watch();
            for &(origin, pattern) in stamp {
                maze.paste_seed(origin, pattern);
            }
            let stamped = maze
                .coords()
                .map(|c| (maze.get(c).wall_up(), maze.get(c).wall_left()))
                .collect::<Vec<_>>();

            carve_all(&mut maze, 77 + seed as u64);
            force_connected(&mut maze, &mut MazeRng::seeded(seed as u64));
            for (coord, (up, left)) in maze.coords().zip(stamped) {
                let cell = maze.get(coord);
                assert!(up || !cell.wall_up(), "up wall raised at {:?}", coord);
                assert!(left || !cell.wall_left(), "left wall raised at {:?}", coord);
            }
            assert_no_flags(&maze);
            assert!(maze.is_connected());
        }
    }

    #[test]
    fn test_out_of_time_pauses_after_one_path() {
        let mut maze = Maze::watch();
        let mut rng = MazeRng::seeded(5);
        let mut state = GenerationState::default();
        let mut checks = 0;
        let status = carve(&mut maze, &mut rng, &mut state, || {
            checks += 1;
            true
        })
        .unwrap();
        assert_eq!(status, CarveStatus::Paused);
        assert!(state.paused);
        assert_eq!(checks, 1);
        // The first path is complete and no longer marked as in progress
        assert!(maze.coords().any(|c| maze.get(c).is_empty()));
        assert!(maze.coords().all(|c| !maze.get(c).is_visited()));
    }

    #[test]
    fn test_resumed_carve_matches_uninterrupted_carve() {
        let mut whole = Maze::watch();
        whole.paste_seed((3, 1), &DIGITS[4]);
        carve_all(&mut whole, 99);

        let mut sliced = Maze::watch();
        sliced.paste_seed((3, 1), &DIGITS[4]);
        let mut rng = MazeRng::seeded(99);
        let mut state = GenerationState::default();
        let mut slices = 0;
        while carve(&mut sliced, &mut rng, &mut state, || true).unwrap() == CarveStatus::Paused {
            slices += 1;
        }
        assert!(slices > 1);
        assert!(whole.coords().all(|c| whole.get(c) == sliced.get(c)));
    }

    #[test]
    fn test_pick_start_falls_back_to_scan() {
        let mut maze = Maze::new(16, 16);
        maze.fill(Cell::default(), Cell::FLAG_EMPTY);
        maze.set_empty((11, 13), true);
        let mut rng = MazeRng::seeded(3);
        assert_eq!(pick_start(&maze, &mut rng), Some((11, 13)));
        maze.set_empty((11, 13), false);
        assert_eq!(pick_start(&maze, &mut rng), None);
    }

    #[test]
    fn test_erase_loop_restores_walls() {
        // Path (0,0) -> (1,0) -> (1,1) -> (0,1), about to step back into (0,0)
        let mut maze = Maze::new(3, 3);
        let path = [(0, 0), (1, 0), (1, 1), (0, 1)];
        for coord in path {
            maze.set(coord, maze.get(coord).with_empty(false).with_visited(true));
        }
        maze.set_wall((0, 0), Side::Right, false);
        maze.set_wall((1, 0), Side::Down, false);
        maze.set_wall((1, 1), Side::Left, false);

        erase_loop(&mut maze, (0, 1), (0, 0)).unwrap();
        assert_eq!(maze.open_edge_count(), 0);
        for coord in [(1, 0), (1, 1), (0, 1)] {
            assert!(maze.get(coord).is_empty());
            assert!(!maze.get(coord).is_visited());
        }
        assert!(maze.get((0, 0)).is_visited());
    }

    #[test]
    fn test_erase_loop_stuck_is_an_error() {
        let mut maze = Maze::new(3, 3);
        let result = erase_loop(&mut maze, (1, 1), (0, 0));
        assert_eq!(
            result,
            Err(GenerationError::BacktrackStuck {
                at: (1, 1),
                target: (0, 0)
            })
        );
    }
}
