//! The full generate-and-solve pipeline.

use log::info;
use maze_core::{Cell, Grid, MazeConfig, MazeError, MazeKind, Point};
use maze_paths::{Solution, solve};
use rand::Rng;

use crate::compose::PatchLayout;
use crate::generator::MazeGen;

/// Entrance cell, opened on the left edge of every maze.
pub const ENTRANCE: Point = Point::new(0, 1);

/// Exit cell of a `width` × `height` maze, opened on the right edge.
#[inline]
pub const fn exit_for(width: i32, height: i32) -> Point {
    Point::new(width - 1, height - 2)
}

/// A generated maze with its fixed entrance and exit and the goal, if one
/// could be placed.
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: Grid,
    pub entrance: Point,
    pub exit: Point,
    pub goal: Option<Point>,
}

impl Maze {
    /// Route from the entrance to the goal. `None` when there is no goal.
    pub fn solve(&self) -> Option<Solution> {
        self.goal.map(|goal| solve(&self.grid, goal, self.entrance))
    }
}

/// Everything one pipeline run hands to a viewer.
#[derive(Debug, Clone)]
pub struct MazeRun {
    pub maze: Maze,
    /// `None` when solving was disabled or no goal was placed.
    pub solution: Option<Solution>,
}

impl<R: Rng> MazeGen<R> {
    /// Generate a maze per `cfg`: carve (simple) or compose (braided), open
    /// the entrance and exit, then place the goal away from both.
    pub fn generate(&mut self, cfg: &MazeConfig) -> Result<Maze, MazeError> {
        cfg.validate()?;
        let grid = match cfg.kind {
            MazeKind::Simple => {
                let grid = Grid::walled(cfg.simple_width, cfg.simple_height)?;
                self.carve_patch(&grid);
                grid
            }
            MazeKind::Braided => self.compose(&PatchLayout::from_config(cfg))?,
        };

        let entrance = ENTRANCE;
        let exit = exit_for(grid.width(), grid.height());
        grid.set(entrance, Cell::Open);
        grid.set(exit, Cell::Open);

        let goal = self.place_goal(&grid, &[entrance, exit]);
        info!(
            "generated {:?} maze {}x{}: entrance {entrance}, exit {exit}, goal {}",
            cfg.kind,
            grid.width(),
            grid.height(),
            goal.map_or_else(|| "none".to_string(), |g| g.to_string())
        );
        Ok(Maze { grid, entrance, exit, goal })
    }

    /// [`generate`](Self::generate) and, when `cfg.solve` is set, solve from
    /// the entrance to the goal.
    pub fn run(&mut self, cfg: &MazeConfig) -> Result<MazeRun, MazeError> {
        let maze = self.generate(cfg)?;
        let solution = if cfg.solve { maze.solve() } else { None };
        if let Some(sol) = &solution {
            match sol.path_len() {
                Some(n) => info!("solution found, path length {n}"),
                None => info!("no solution from {} to the goal", maze.entrance),
            }
        }
        Ok(MazeRun { maze, solution })
    }
}
