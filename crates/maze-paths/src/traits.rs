use maze_core::{Grid, Point};

/// Minimal pathfinding interface: neighbour enumeration.
///
/// The order neighbours are appended in is significant: [`trace_path`]
/// breaks ties between equally distant neighbours by taking the first.
///
/// [`trace_path`]: crate::trace_path
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Fixed neighbour scan order: down, up, left, right.
pub const SCAN_ORDER: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// A maze grid steps in [`SCAN_ORDER`] onto any passable in-bounds cell.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in SCAN_ORDER {
            let n = p + d;
            if self.at(n).is_passable() {
                buf.push(n);
            }
        }
    }
}
