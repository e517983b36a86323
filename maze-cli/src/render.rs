//! Text output: the console dump and the terminal path replay.

use std::collections::HashSet;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use maze_core::{Cell, Point};
use maze_gen::Maze;
use maze_paths::DistanceField;

/// Largest maze, in either direction, that gets dumped to the console.
pub const MAX_DUMP_SIZE: i32 = 50;

/// Whether `maze` is small enough to print.
pub fn fits_console(maze: &Maze) -> bool {
    maze.grid.width() <= MAX_DUMP_SIZE && maze.grid.height() <= MAX_DUMP_SIZE
}

/// Character and colour for the cell at `p`. Entrance and exit markers win
/// over the path, the path wins over the plain cell.
fn glyph(maze: &Maze, path: &HashSet<Point>, p: Point) -> (char, Color) {
    if p == maze.entrance {
        return ('E', Color::Green);
    }
    if p == maze.exit {
        return ('X', Color::Red);
    }
    match maze.grid.at(p) {
        Cell::Goal => ('G', Color::Yellow),
        _ if path.contains(&p) => ('.', Color::Cyan),
        Cell::Wall => (Cell::Wall.to_char(), Color::DarkGrey),
        c => (c.to_char(), Color::Reset),
    }
}

/// Render `maze` as plain text, marking `path` cells with `.`.
pub fn dump(maze: &Maze, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();
    for y in 0..maze.grid.height() {
        for x in 0..maze.grid.width() {
            out.push(glyph(maze, &on_path, Point::new(x, y)).0);
        }
        out.push('\n');
    }
    out
}

/// Distance levels shown by the distance map: `0` at the source up to
/// `HEAT_LEVELS - 1` at the farthest reached cell.
const HEAT_LEVELS: i32 = 10;

/// Level of distance `d` on a field whose farthest cell is `max` away.
fn heat_level(d: i32, max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    (i64::from(d) * i64::from(HEAT_LEVELS - 1) / i64::from(max)) as i32
}

/// Blue near the source, red far from it.
fn heat_color(level: i32) -> Color {
    let t = (level * 255 / (HEAT_LEVELS - 1)) as u8;
    Color::Rgb { r: t, g: 64, b: 255 - t }
}

/// Character for each cell of the distance map, with its level when reached.
fn heat_rows(maze: &Maze, field: &DistanceField) -> Vec<Vec<(char, Option<i32>)>> {
    let max = field.max_distance().unwrap_or(0);
    let origin = field.range().min;
    field
        .to_rows()
        .into_iter()
        .enumerate()
        .map(|(y, row)| {
            row.into_iter()
                .enumerate()
                .map(|(x, d)| match d {
                    Some(d) => {
                        let level = heat_level(d, max);
                        (char::from(b'0' + level as u8), Some(level))
                    }
                    None => {
                        let p = origin.shift(x as i32, y as i32);
                        (if maze.grid.at(p).is_passable() { ' ' } else { '#' }, None)
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the distance field of a solved maze as digits scaled by
/// [`DistanceField::max_distance`].
pub fn distance_dump(maze: &Maze, field: &DistanceField) -> String {
    let mut out = String::new();
    for row in heat_rows(maze, field) {
        out.extend(row.into_iter().map(|(ch, _)| ch));
        out.push('\n');
    }
    out
}

/// Like [`distance_dump`], written to `out` with a blue-to-red shading.
pub fn print_distances(
    out: &mut impl Write,
    maze: &Maze,
    field: &DistanceField,
) -> io::Result<()> {
    for row in heat_rows(maze, field) {
        for (ch, level) in row {
            let color = level.map_or(Color::DarkGrey, heat_color);
            queue!(out, SetForegroundColor(color), Print(ch))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

/// Like [`dump`], written to `out` with colours.
pub fn print_colored(out: &mut impl Write, maze: &Maze, path: &[Point]) -> io::Result<()> {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    for y in 0..maze.grid.height() {
        for x in 0..maze.grid.width() {
            let (ch, color) = glyph(maze, &on_path, Point::new(x, y));
            queue!(out, SetForegroundColor(color), Print(ch))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

/// Clear the terminal, draw `maze`, then reveal `path` one cell every
/// `delay`. Leaves the cursor below the maze.
pub fn animate(
    out: &mut impl Write,
    maze: &Maze,
    path: &[Point],
    delay: Duration,
) -> io::Result<()> {
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0), cursor::Hide)?;
    print_colored(out, maze, &[])?;

    let result = reveal_path(out, maze, path, delay);

    execute!(out, cursor::MoveTo(0, maze.grid.height() as u16), cursor::Show)?;
    result
}

fn reveal_path(
    out: &mut impl Write,
    maze: &Maze,
    path: &[Point],
    delay: Duration,
) -> io::Result<()> {
    for &p in path {
        if p == maze.entrance || p == maze.exit || maze.grid.at(p) == Cell::Goal {
            continue;
        }
        execute!(
            out,
            cursor::MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(Color::Cyan),
            Print('.'),
            ResetColor
        )?;
        thread::sleep(delay);
    }
    Ok(())
}
