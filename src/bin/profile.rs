use std::time::{Duration, Instant};

use mazeface::{
    app::{
        clock::SystemClock,
        scheduler::{Phase, Placement, Scheduler},
    },
    generators::MazeRng,
    maze::Maze,
    seeds::{BLANK, DIGITS, HEART},
};

/// Runs full generation cycles back to back and reports how long they take.
///
/// Usage: profile [cycles] [digits|blank|heart|none]
fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let cycles = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(100);
    let mode = args.next().unwrap_or_else(|| "digits".to_string());

    let plan = match mode.as_str() {
        "digits" => [(3, 1), (10, 1), (3, 13), (10, 13)]
            .into_iter()
            .zip([1, 2, 5, 9])
            .map(|(origin, digit)| Placement::Fixed {
                origin,
                pattern: &DIGITS[digit],
            })
            .collect(),
        "blank" => vec![Placement::Scattered {
            pattern: &BLANK,
            x: (0, 20),
            y: (3, 20),
        }],
        "heart" => vec![Placement::Fixed {
            origin: (2, 4),
            pattern: &HEART,
        }],
        "none" => Vec::new(),
        other => {
            eprintln!("Unknown seed mode {}. Use digits, blank, heart or none.", other);
            return Ok(());
        }
    };

    let clock = SystemClock::new();
    // Large enough that every cycle finishes in a single step
    let mut scheduler = Scheduler::new(Maze::watch(), MazeRng::seeded(0), Duration::from_secs(60));
    let mut timings = Vec::with_capacity(cycles);
    let mut forced_walls = 0;
    let mut disconnected = 0;
    let mut perfect = 0;

    for cycle in 0..cycles {
        let start = Instant::now();
        scheduler.start_cycle(&plan, Some(cycle as u64));
        while scheduler.step(&clock) != Phase::Done {}
        timings.push(start.elapsed());

        forced_walls += scheduler.last_repair().walls_removed;
        if let Some(maze) = scheduler.take_finished() {
            if !maze.is_connected() {
                disconnected += 1;
            }
            if maze.open_edge_count() == maze.area() - 1 {
                perfect += 1;
            }
        }
    }

    if timings.is_empty() {
        println!("No cycles run.");
        return Ok(());
    }
    let total: Duration = timings.iter().sum();
    println!("Seed mode: {}", mode);
    println!("Cycles: {}", cycles);
    println!(
        "Cycle time: min {:?}, avg {:?}, max {:?}",
        timings.iter().min().copied().unwrap_or_default(),
        total / cycles as u32,
        timings.iter().max().copied().unwrap_or_default()
    );
    println!("Walls removed by repair: {}", forced_walls);
    println!("Perfect mazes: {}", perfect);
    println!("Disconnected mazes: {}", disconnected);
    Ok(())
}
