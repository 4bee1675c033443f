use crate::{
    generators::MazeRng,
    maze::{Maze, Side},
};

/// Order in which the flood fill tries to move.
const FLOOD_ORDER: [Side; 4] = [Side::Up, Side::Right, Side::Down, Side::Left];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepairReport {
    /// Cells reached by the flood fill.
    pub reached: usize,
    /// Walls knocked down to join regions that carving left apart.
    pub walls_removed: usize,
}

/// Where the reached part of the maze meets the unreached part.
enum Boundary {
    /// A reached and an unreached cell with no wall between them; the fill can simply
    /// continue from the cell on the scanned side.
    Open((u8, u8)),
    /// Every boundary is walled. Each entry is a cell and the side of it the wall is on.
    Walled(Vec<((u8, u8), Side)>),
    /// Everything was reached.
    None,
}

/// Makes every cell reachable from every other cell.
///
/// Flood fills from the bottom-right corner, borrowing the visited flag, and when the fill
/// runs dry it either resumes at an open boundary or knocks down a random boundary wall.
/// Only the latter changes the maze. Running it on a connected maze changes nothing.
///
/// Expects no cell to be marked visited, and clears the flag again when done.
pub fn force_connected(maze: &mut Maze, rng: &mut MazeRng) -> RepairReport {
    debug_assert!(maze.coords().all(|coord| !maze.get(coord).is_visited()));

    let mut report = RepairReport::default();
    let mut cursor = (maze.width() - 1, maze.height() - 1);
    loop {
        if !maze.get(cursor).is_visited() {
            maze.set_visited(cursor, true);
            report.reached += 1;
        }

        let next = FLOOD_ORDER
            .into_iter()
            .filter(|&side| maze.is_open(cursor, side))
            .map(|side| side.step(cursor))
            .find(|&neighbor| !maze.get(neighbor).is_visited());
        if let Some(next) = next {
            cursor = next;
            continue;
        }

        match find_boundary(maze) {
            Boundary::Open(coord) => cursor = coord,
            Boundary::Walled(walls) => {
                let (coord, side) = walls[rng.rand(0, walls.len() - 1)];
                tracing::debug!(
                    "[repair] region sealed off, removing {} wall of {:?} ({} candidates)",
                    side,
                    coord,
                    walls.len()
                );
                maze.set_wall(coord, side, false);
                report.walls_removed += 1;
                cursor = coord;
            }
            Boundary::None => break,
        }
    }

    maze.clear_visited();
    report
}

/// Scans the maze row by row for reached/unreached boundaries, checking the left side of a
/// cell before its up side. Returns the first open boundary found, or all walled ones.
fn find_boundary(maze: &Maze) -> Boundary {
    let mut walls = Vec::new();
    for coord in maze.coords() {
        let reached = maze.get(coord).is_visited();
        for side in [Side::Left, Side::Up] {
            let neighbor = side.step(coord);
            if !maze.is_in_bounds(neighbor) || maze.get(neighbor).is_visited() == reached {
                continue;
            }
            if !maze.wall(coord, side) {
                return Boundary::Open(coord);
            }
            walls.push((coord, side));
        }
    }

    if walls.is_empty() {
        Boundary::None
    } else {
        Boundary::Walled(walls)
    }
}
