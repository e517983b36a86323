use log::debug;
use maze_core::Point;

use crate::bfs::{DistanceField, UNREACHABLE};
use crate::traits::Pather;

/// Walk from `start` down `field` to its source, one step at a time.
///
/// Each step moves to the neighbour with the strictly smallest distance;
/// among equals the first neighbour `pather` yields wins. Returns the full
/// route including both `start` and the field's source, or `None` when
/// `start` was not reached by the search or a step finds no neighbour closer
/// than the current cell.
pub fn trace_path<P: Pather>(
    pather: &P,
    field: &DistanceField,
    start: Point,
) -> Option<Vec<Point>> {
    let target = field.source();
    let start_dist = field.at(start);
    if start_dist == UNREACHABLE {
        debug!("trace from {start}: not reachable from {target}");
        return None;
    }

    let mut path = Vec::with_capacity(start_dist as usize + 1);
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    let mut current = start;
    path.push(current);

    while current != target {
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        let mut best = None;
        let mut best_dist = UNREACHABLE;
        for &n in nbuf.iter() {
            let d = field.at(n);
            if d < best_dist {
                best_dist = d;
                best = Some(n);
            }
        }

        match best {
            Some(next) if best_dist < field.at(current) => {
                current = next;
                path.push(current);
            }
            _ => {
                debug!("trace from {start}: stuck at {current}");
                return None;
            }
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Cell, Grid};

    fn open_room(w: i32, h: i32) -> Grid {
        let g = Grid::new(w, h);
        g.fill(Cell::Open);
        g
    }

    fn assert_valid_path(path: &[Point], start: Point, target: Point, field: &DistanceField) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&target));
        assert_eq!(path.len() as i32, field.at(start) + 1);
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent_4(pair[1]), "{} -> {}", pair[0], pair[1]);
            assert_eq!(field.at(pair[1]), field.at(pair[0]) - 1);
        }
    }

    #[test]
    fn corridor_path() {
        let g = open_room(5, 1);
        let target = Point::new(0, 0);
        let field = DistanceField::bfs(&g, g.bounds(), target);
        let path = trace_path(&g, &field, Point::new(4, 0)).unwrap();
        assert_eq!(path, (0..5).rev().map(|x| Point::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn start_equals_target() {
        let g = open_room(3, 3);
        let target = Point::new(1, 1);
        let field = DistanceField::bfs(&g, g.bounds(), target);
        assert_eq!(trace_path(&g, &field, target), Some(vec![target]));
    }

    #[test]
    fn ties_prefer_down_then_up_then_left_then_right() {
        // From the top-left corner of an open room, "down" and "right" both
        // lead toward the bottom-right target at equal distance.
        let g = open_room(3, 3);
        let target = Point::new(2, 2);
        let field = DistanceField::bfs(&g, g.bounds(), target);
        let path = trace_path(&g, &field, Point::new(0, 0)).unwrap();
        assert_valid_path(&path, Point::new(0, 0), target, &field);
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );

        // Going up-left, "up" beats "left".
        let target = Point::new(0, 0);
        let field = DistanceField::bfs(&g, g.bounds(), target);
        let path = trace_path(&g, &field, Point::new(2, 2)).unwrap();
        assert_eq!(path[1], Point::new(2, 1));
    }

    #[test]
    fn unreachable_start_has_no_path() {
        let g = open_room(5, 1);
        g.set(Point::new(2, 0), Cell::Wall);
        let field = DistanceField::bfs(&g, g.bounds(), Point::new(0, 0));
        assert_eq!(trace_path(&g, &field, Point::new(4, 0)), None);
        // A wall cell is never reached either.
        assert_eq!(trace_path(&g, &field, Point::new(2, 0)), None);
    }

    #[test]
    fn detour_around_obstacle() {
        let rows = ["#####", "#   #", "# # #", "#   #", "#####"];
        let g = Grid::new(5, 5);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == ' ' {
                    g.set(Point::new(x as i32, y as i32), Cell::Open);
                }
            }
        }
        let target = Point::new(3, 3);
        let start = Point::new(1, 1);
        let field = DistanceField::bfs(&g, g.bounds(), target);
        let path = trace_path(&g, &field, start).unwrap();
        assert_valid_path(&path, start, target, &field);
        assert_eq!(path.len(), 5);
        // Down is preferred on the tie at the start.
        assert_eq!(path[1], Point::new(1, 2));
    }
}
