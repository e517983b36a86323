//! Randomized depth-first carving.

use log::debug;
use maze_core::{Cell, Grid, Point};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::generator::MazeGen;

/// Two-cell moves between carving lattice points.
const STEPS: [Point; 4] = [
    Point::new(2, 0),
    Point::new(-2, 0),
    Point::new(0, 2),
    Point::new(0, -2),
];

impl<R: Rng> MazeGen<R> {
    /// Carve a perfect maze into `grid` with a randomized depth-first walk.
    ///
    /// The walk starts one cell in from the view's top-left corner and moves
    /// two cells at a time, opening the target and the wall in between
    /// whenever the target is in bounds and still a wall. When no move is
    /// possible it backtracks. The view should be wall-filled and have odd
    /// dimensions; an even dimension leaves the last column or row without
    /// a closing wall.
    ///
    /// Returns the number of cells opened.
    pub fn carve_patch(&mut self, grid: &Grid) -> usize {
        let start = grid.bounds().min.shift(1, 1);
        if !grid.contains(start) {
            return 0;
        }

        let mut stack = vec![start];
        grid.set(start, Cell::Open);
        let mut opened = 1;
        let mut steps = STEPS;

        while let Some(&cur) = stack.last() {
            steps.shuffle(&mut self.rng);
            let next = steps
                .iter()
                .map(|&d| (cur + d, d))
                .find(|&(n, _)| grid.contains(n) && grid.at(n) == Cell::Wall);

            match next {
                Some((n, d)) => {
                    grid.set(cur.shift(d.x / 2, d.y / 2), Cell::Open);
                    grid.set(n, Cell::Open);
                    opened += 2;
                    stack.push(n);
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!("carved {opened} cells in {}", grid.bounds());
        opened
    }

    /// Allocate a wall-filled `width` × `height` grid and carve it.
    pub fn carved_patch(&mut self, width: i32, height: i32) -> Grid {
        let patch = Grid::new(width, height);
        self.carve_patch(&patch);
        patch
    }
}
