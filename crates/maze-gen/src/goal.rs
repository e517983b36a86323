use log::warn;
use maze_core::{Cell, Grid, Point};
use rand::{Rng, RngExt};

use crate::generator::MazeGen;

impl<R: Rng> MazeGen<R> {
    /// Mark a uniformly chosen open cell not listed in `exclude` as the goal.
    ///
    /// Returns `None`, leaving the grid untouched, when no such cell exists.
    pub fn place_goal(&mut self, grid: &Grid, exclude: &[Point]) -> Option<Point> {
        let valid: Vec<Point> = grid
            .open_cells()
            .into_iter()
            .filter(|p| !exclude.contains(p))
            .collect();
        if valid.is_empty() {
            warn!("no open cell left for the goal");
            return None;
        }
        let goal = valid[self.rng.random_range(0..valid.len())];
        grid.set(goal, Cell::Goal);
        Some(goal)
    }
}
