use std::{fmt, io::Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Direction, Maze};

/// Width of one cell in characters, including its east wall column.
pub const CELL_WIDTH: u16 = 4;

/// Terminal columns and rows needed to draw `maze`.
pub fn text_size(maze: &Maze) -> (u16, u16) {
    (
        maze.width() as u16 * CELL_WIDTH + 1,
        maze.height() as u16 * 2 + 1,
    )
}

/// Plain-text form of the maze, with the origin in the lower-left corner.
///
/// ```text
/// +---+---+
/// |       |
/// +   +---+
/// |       |
/// +---+---+
/// ```
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.height() - 1;
        write!(f, "+")?;
        for x in 0..self.width() {
            let edge = if self.has_wall((x, top), Direction::North) {
                "---+"
            } else {
                "   +"
            };
            write!(f, "{}", edge)?;
        }
        writeln!(f)?;

        for y in (0..self.height()).rev() {
            let mut cells = String::from(if self.has_wall((0, y), Direction::West) {
                "|"
            } else {
                " "
            });
            let mut floor = String::from("+");
            for x in 0..self.width() {
                cells.push_str(if self.has_wall((x, y), Direction::East) {
                    "   |"
                } else {
                    "    "
                });
                floor.push_str(if self.has_wall((x, y), Direction::South) {
                    "---+"
                } else {
                    "   +"
                });
            }
            writeln!(f, "{}", cells)?;
            writeln!(f, "{}", floor)?;
        }
        Ok(())
    }
}

/// Draws the maze with [`render`] on a terminal, or writes the bare text form
/// when the output is redirected to a file or a pipe.
pub fn draw<W: Write>(maze: &Maze, out: &mut W, is_terminal: bool) -> std::io::Result<()> {
    if is_terminal {
        render(maze, out)
    } else {
        write!(out, "{}", maze)?;
        out.flush()
    }
}

/// Clears the terminal and draws the maze from the top-left corner.
///
/// Falls back to a warning when the terminal is too small to hold the maze.
pub fn render<W: Write>(maze: &Maze, out: &mut W) -> std::io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let (width, height) = text_size(maze);
    let (term_width, term_height) = terminal::size().unwrap_or((u16::MAX, u16::MAX));
    if term_width < width || term_height < height {
        tracing::warn!(
            "[render] terminal {}x{} is smaller than the maze ({}x{})",
            term_width,
            term_height,
            width,
            height
        );
        let msg = format!(
            "Terminal size ({}x{}) is too small to display the maze ({}x{}). Output may wrap.\r\n",
            term_width, term_height, width, height
        );
        queue!(
            out,
            style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold))
        )?;
    }

    for line in maze.to_string().lines() {
        queue!(
            out,
            style::PrintStyledContent(line.with(Color::White)),
            style::Print("\r\n")
        )?;
    }
    out.flush()
}
