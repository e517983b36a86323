use std::collections::VecDeque;

use log::debug;
use maze_core::{Point, Range};

use crate::traits::Pather;

/// Sentinel distance for cells the search never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Breadth-first distances from one source cell, one entry per cell of a
/// rectangle.
///
/// Built once per solve and then only read; a regenerated maze needs a new
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceField {
    range: Range,
    source: Point,
    dist: Vec<i32>,
}

impl DistanceField {
    /// Compute step distances from `source` to every cell of `range` that
    /// `pather` can reach. Each step has cost 1.
    ///
    /// The source always gets distance 0 when it lies inside `range`, even
    /// if it is not itself passable. A source outside `range` yields a field
    /// where every cell is [`UNREACHABLE`].
    pub fn bfs<P: Pather>(pather: &P, range: Range, source: Point) -> Self {
        let mut field = Self {
            range,
            source,
            dist: vec![UNREACHABLE; range.len()],
        };
        let Some(si) = field.idx(source) else {
            return field;
        };

        let mut queue: VecDeque<Point> = VecDeque::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);
        field.dist[si] = 0;
        queue.push_back(source);
        let mut reached = 1usize;

        while let Some(cp) = queue.pop_front() {
            let next = field.at(cp) + 1;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = field.idx(np) else {
                    continue;
                };
                // First visit is already the shortest in an unweighted search.
                if field.dist[ni] != UNREACHABLE {
                    continue;
                }
                field.dist[ni] = next;
                queue.push_back(np);
                reached += 1;
            }
        }

        debug!("bfs from {source}: reached {reached} of {} cells", range.len());
        field
    }

    /// Distance at `p`, or [`UNREACHABLE`] for unreached or out-of-range points.
    pub fn at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether the search reached `p`.
    #[inline]
    pub fn is_reachable(&self, p: Point) -> bool {
        self.at(p) != UNREACHABLE
    }

    /// The cell the search started from (the path target).
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Number of reached cells, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// Largest finite distance, if anything was reached.
    pub fn max_distance(&self) -> Option<i32> {
        self.dist.iter().copied().filter(|&d| d != UNREACHABLE).max()
    }

    /// Copy the field out as rows, top to bottom, with `None` for unreached
    /// cells.
    pub fn to_rows(&self) -> Vec<Vec<Option<i32>>> {
        let r = self.range;
        (r.min.y..r.max.y)
            .map(|y| {
                (r.min.x..r.max.x)
                    .map(|x| Some(self.at(Point::new(x, y))).filter(|&d| d != UNREACHABLE))
                    .collect()
            })
            .collect()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.range.contains(p) {
            return None;
        }
        let x = (p.x - self.range.min.x) as usize;
        let y = (p.y - self.range.min.y) as usize;
        Some(y * self.range.width() as usize + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Cell, Grid};

    fn corridor(len: i32) -> Grid {
        let g = Grid::new(len, 1);
        g.fill(Cell::Open);
        g
    }

    #[test]
    fn straight_corridor() {
        let g = corridor(5);
        let field = DistanceField::bfs(&g, g.bounds(), Point::new(0, 0));
        let row: Vec<i32> = (0..5).map(|x| field.at(Point::new(x, 0))).collect();
        assert_eq!(row, vec![0, 1, 2, 3, 4]);
        assert_eq!(field.reached(), 5);
        assert_eq!(field.max_distance(), Some(4));
    }

    #[test]
    fn walls_block_and_stay_unreachable() {
        let g = corridor(5);
        g.set(Point::new(2, 0), Cell::Wall);
        let field = DistanceField::bfs(&g, g.bounds(), Point::new(0, 0));
        assert_eq!(field.at(Point::new(1, 0)), 1);
        assert_eq!(field.at(Point::new(2, 0)), UNREACHABLE);
        assert_eq!(field.at(Point::new(4, 0)), UNREACHABLE);
        assert!(!field.is_reachable(Point::new(3, 0)));
        assert_eq!(field.reached(), 2);
    }

    #[test]
    fn goal_cells_are_traversed() {
        let g = corridor(3);
        g.set(Point::new(1, 0), Cell::Goal);
        let field = DistanceField::bfs(&g, g.bounds(), Point::new(0, 0));
        assert_eq!(field.at(Point::new(2, 0)), 2);
    }

    #[test]
    fn distances_are_one_more_than_best_neighbour() {
        // Open room with a pillar in the middle.
        let g = Grid::new(5, 5);
        g.fill(Cell::Open);
        g.set(Point::new(2, 2), Cell::Wall);
        let target = Point::new(0, 0);
        let field = DistanceField::bfs(&g, g.bounds(), target);
        assert_eq!(field.at(target), 0);
        for (p, c) in g.iter() {
            if !c.is_passable() {
                assert_eq!(field.at(p), UNREACHABLE);
                continue;
            }
            if p == target {
                continue;
            }
            let mut nbuf = Vec::new();
            g.neighbors(p, &mut nbuf);
            let best = nbuf.iter().map(|&n| field.at(n)).min().unwrap();
            assert_eq!(field.at(p), best + 1, "at {p}");
        }
        assert_eq!(field.at(Point::new(4, 4)), 8);
    }

    #[test]
    fn source_outside_range_reaches_nothing() {
        let g = corridor(3);
        let field = DistanceField::bfs(&g, g.bounds(), Point::new(7, 7));
        assert_eq!(field.reached(), 0);
        assert_eq!(field.max_distance(), None);
    }

    #[test]
    fn rows_mark_unreached_as_none() {
        let g = Grid::new(3, 1);
        g.set(Point::new(0, 0), Cell::Open);
        g.set(Point::new(1, 0), Cell::Open);
        let field = DistanceField::bfs(&g, g.bounds(), Point::new(0, 0));
        assert_eq!(field.to_rows(), vec![vec![Some(0), Some(1), None]]);
    }
}
