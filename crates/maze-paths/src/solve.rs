use maze_core::{Grid, Point};

use crate::bfs::DistanceField;
use crate::trace::trace_path;

/// A distance field rooted at a target together with the path traced
/// through it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub distances: DistanceField,
    /// `None` when the start cannot reach the target.
    pub path: Option<Vec<Point>>,
}

impl Solution {
    /// Number of cells on the path, both ends included.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Compute distances from `target` over `grid` once, then trace the path
/// from `start`.
pub fn solve(grid: &Grid, target: Point, start: Point) -> Solution {
    let distances = DistanceField::bfs(grid, grid.bounds(), target);
    let path = trace_path(grid, &distances, start);
    Solution { distances, path }
}
