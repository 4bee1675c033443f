use std::io::{Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::Maze;

/// Draws finished mazes to the terminal. Only wall bits are read.
pub struct TerminalRenderer {
    stdout: Stdout,
}

impl TerminalRenderer {
    /// The width of each drawn unit (wall, corner or cell), in character widths.
    pub const CELL_WIDTH: u16 = 2;
    const WALL: &'static str = "██";
    const OPEN: &'static str = "  ";

    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }

    /// Set a panic hook to restore terminal state on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = TerminalRenderer::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(&mut self) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        TerminalRenderer::set_panic_hook();
        queue!(
            self.stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        self.stdout.flush()
    }

    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()
    }

    /// Builds the text lines of a maze: one line per wall row and one per cell row, each unit
    /// [`Self::CELL_WIDTH`] characters wide.
    pub fn frame(maze: &Maze) -> Vec<String> {
        let (width, height) = (maze.width(), maze.height());
        // Boundary walls are drawn whatever the edge cells say
        let h_wall = |x: u8, y: u8| y == 0 || maze.get((x, y)).wall_up();
        let v_wall = |x: u8, y: u8| x == 0 || maze.get((x, y)).wall_left();
        let unit = |wall: bool| {
            let symbol = if wall {
                TerminalRenderer::WALL
            } else {
                TerminalRenderer::OPEN
            };
            #[cfg(debug_assertions)]
            {
                use unicode_width::UnicodeWidthStr;
                assert_eq!(
                    symbol.width(),
                    TerminalRenderer::CELL_WIDTH as usize,
                    "Each unit must occupy exactly two character widths."
                );
            }
            symbol
        };

        let mut lines = Vec::with_capacity(height as usize * 2 + 1);
        for y in 0..=height {
            // Wall row above cell row y; a corner shows if any wall touches it
            let mut line = String::new();
            for x in 0..=width {
                let corner = h_wall(x, y)
                    || h_wall(x.wrapping_sub(1), y)
                    || v_wall(x, y)
                    || v_wall(x, y.wrapping_sub(1));
                line.push_str(unit(corner));
                if x < width {
                    line.push_str(unit(h_wall(x, y)));
                }
            }
            lines.push(line);

            if y == height {
                break;
            }
            let mut line = String::new();
            for x in 0..=width {
                line.push_str(unit(v_wall(x, y)));
                if x < width {
                    line.push_str(unit(false));
                }
            }
            lines.push(line);
        }
        lines
    }

    /// Check if terminal size is sufficient for the maze.
    /// If not, display a message and return Ok(false)
    fn check_size(&mut self, maze: &Maze) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        let needed_width = (maze.width() as u16 * 2 + 1) * Self::CELL_WIDTH;
        let needed_height = maze.height() as u16 * 2 + 2;
        if term_width < needed_width || term_height < needed_height {
            let msg = format!(
                "Terminal size is too small ({}x{}) to draw the maze ({}x{}). Please resize the terminal.\r\n",
                term_width, term_height, needed_width, needed_height
            );
            queue!(
                self.stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            self.stdout.flush()?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Draws the maze with a status line below it.
    /// Returns Ok(false) if the terminal was too small to draw it.
    pub fn draw(&mut self, maze: &Maze, status: &str) -> std::io::Result<bool> {
        if !self.check_size(maze)? {
            return Ok(false);
        }
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in TerminalRenderer::frame(maze) {
            queue!(
                self.stdout,
                style::PrintStyledContent(line.with(Color::White)),
                style::Print("\r\n")
            )?;
        }
        queue!(
            self.stdout,
            style::PrintStyledContent(status.with(Color::Blue).attribute(Attribute::Bold))
        )?;
        self.stdout.flush()?;
        Ok(true)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Side;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_frame_dimensions() {
        let maze = Maze::new(5, 3);
        let lines = TerminalRenderer::frame(&maze);
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.width() == 11 * 2));
    }

    #[test]
    fn test_frame_shows_open_walls() {
        let mut maze = Maze::new(2, 2);
        maze.set_wall((0, 0), Side::Right, false);
        let lines = TerminalRenderer::frame(&maze);
        // Cell row 0: left boundary, cell, removed wall, cell, right boundary
        assert_eq!(lines[1], "██      ██");
        assert_eq!(lines[3], "██  ██  ██");
    }
}
