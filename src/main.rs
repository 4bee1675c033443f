use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use mazeface::app::{
    ClockType, FaceConfig, Swipe, TouchEvent, WatchFace, clock::SystemClock,
    renderer::TerminalRenderer,
};
use tracing_appender::non_blocking::WorkerGuard;

/// What the main loop should do with a key press.
enum Action {
    Touch(TouchEvent),
    Button,
    Quit,
}

/// Logs go to a file since the terminal is busy drawing the maze.
fn init_tracing() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "mazeface.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

/// Reads `--12h` and `--offset <minutes>` from the command line.
fn parse_args() -> FaceConfig {
    let mut config = FaceConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--12h" => config.clock_type = ClockType::H12,
            "--offset" => match args.next().and_then(|s| s.parse::<i32>().ok()) {
                Some(minutes) => config.utc_offset_minutes = minutes,
                None => eprintln!("--offset expects a number of minutes, ignoring it."),
            },
            other => eprintln!("Ignoring unknown argument {}", other),
        }
    }
    config
}

fn key_action(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Char('l') => Action::Touch(TouchEvent::LongTap),
        KeyCode::Char(' ') => Action::Touch(TouchEvent::Tap),
        KeyCode::Char('b') => Action::Button,
        KeyCode::Up => Action::Touch(TouchEvent::Swipe(Swipe::Up)),
        KeyCode::Right => Action::Touch(TouchEvent::Swipe(Swipe::Right)),
        KeyCode::Down => Action::Touch(TouchEvent::Swipe(Swipe::Down)),
        KeyCode::Left => Action::Touch(TouchEvent::Swipe(Swipe::Left)),
        _ => return None,
    };
    Some(action)
}

fn run(face: &mut WatchFace<SystemClock>, renderer: &mut TerminalRenderer) -> std::io::Result<()> {
    let refresh_period: Duration = face.config().refresh_period;
    tracing::info!("Started watch face loop");
    loop {
        if event::poll(refresh_period)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key_action(key.code) {
                        Some(Action::Quit) => break,
                        Some(Action::Touch(touch)) => {
                            let handled = face.on_touch(touch);
                            tracing::debug!("[input] {:?} handled: {}", touch, handled);
                        }
                        Some(Action::Button) => {
                            face.on_button();
                        }
                        None => {}
                    }
                }
            }
        }

        let status = format!(
            "{:?} | Enter: long tap, arrows: swipe, b: button, q: quit",
            face.displaying()
        );
        if let Some(maze) = face.refresh() {
            renderer.draw(maze, &status)?;
        }
    }
    tracing::info!("Exiting watch face loop");
    Ok(())
}

fn main() -> std::io::Result<()> {
    let _guard = init_tracing();
    let config = parse_args();
    let mut face = WatchFace::new(SystemClock::new(), config);
    let mut renderer = TerminalRenderer::new();

    renderer.setup_terminal()?;
    let result = run(&mut face, &mut renderer);
    TerminalRenderer::restore_terminal(&mut std::io::stdout())?;
    result
}
