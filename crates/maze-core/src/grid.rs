//! The [`Grid`] type: a 2D grid of maze [`Cell`]s with slice semantics.
//!
//! A `Grid` is a *view* into a shared backing buffer. Cloning a `Grid` yields
//! another view of the **same** storage. Use [`slice`](Grid::slice) to obtain
//! sub-grid views, e.g. the window a patch is copied into.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::Cell;
use crate::error::MazeError;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl GridBuffer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::Wall; width * height],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some((y as usize) * self.width + (x as usize))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D grid of [`Cell`]s backed by shared storage.
///
/// Cloning produces another view into the same buffer (slice semantics).
#[derive(Debug, Clone)]
pub struct Grid {
    buffer: Rc<RefCell<GridBuffer>>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell set to
    /// [`Cell::Wall`]. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer::new(w, h))),
            bounds: Range::new(0, 0, width.max(0), height.max(0)),
        }
    }

    /// Like [`new`](Grid::new) but rejects non-positive dimensions.
    pub fn walled(width: i32, height: i32) -> Result<Self, MazeError> {
        if width <= 0 {
            return Err(MazeError::NonPositiveDimension { name: "width", value: width });
        }
        if height <= 0 {
            return Err(MazeError::NonPositiveDimension { name: "height", value: height });
        }
        Ok(Self::new(width, height))
    }

    /// The bounding range of this grid / sub-grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get a sub-grid view. The returned `Grid` shares the same backing
    /// buffer but has narrower bounds (the intersection of the requested
    /// range and the current bounds).
    pub fn slice(&self, r: Range) -> Grid {
        Grid {
            buffer: Rc::clone(&self.buffer),
            bounds: self.bounds.intersect(r),
        }
    }

    /// Read the cell at `p`. Points outside the bounds read as
    /// [`Cell::Wall`].
    pub fn at(&self, p: Point) -> Cell {
        if !self.bounds.contains(p) {
            return Cell::Wall;
        }
        let buf = self.buffer.borrow();
        buf.index(p.x, p.y).map(|i| buf.cells[i]).unwrap_or_default()
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    pub fn set(&self, p: Point, cell: Cell) {
        if !self.bounds.contains(p) {
            return;
        }
        let mut buf = self.buffer.borrow_mut();
        if let Some(i) = buf.index(p.x, p.y) {
            buf.cells[i] = cell;
        }
    }

    /// Fill every cell in the view with `cell`.
    pub fn fill(&self, cell: Cell) {
        let mut buf = self.buffer.borrow_mut();
        for p in self.bounds.iter() {
            if let Some(i) = buf.index(p.x, p.y) {
                buf.cells[i] = cell;
            }
        }
    }

    /// Copy cells from `src` into `self`, aligning `src.bounds.min` with
    /// `self.bounds.min`. Returns the size actually copied.
    ///
    /// # Panics
    ///
    /// If `src` is a view of the same grid as `self`.
    pub fn copy_from(&self, src: &Grid) -> Point {
        let sw = src.bounds.width().min(self.bounds.width());
        let sh = src.bounds.height().min(self.bounds.height());
        let src_buf = src.buffer.borrow();
        let mut dst_buf = self.buffer.borrow_mut();
        for dy in 0..sh {
            for dx in 0..sw {
                let sp = src.bounds.min.shift(dx, dy);
                let dp = self.bounds.min.shift(dx, dy);
                if let (Some(si), Some(di)) =
                    (src_buf.index(sp.x, sp.y), dst_buf.index(dp.x, dp.y))
                {
                    dst_buf.cells[di] = src_buf.cells[si];
                }
            }
        }
        Point::new(sw, sh)
    }

    /// Count how many cells in the view equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == cell).count()
    }

    /// Positions of every [`Cell::Open`] cell, in row-major order.
    pub fn open_cells(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(_, c)| c == Cell::Open)
            .map(|(p, _)| p)
            .collect()
    }

    /// Copy the view out as rows of cells, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let b = self.bounds;
        (b.min.y..b.max.y)
            .map(|y| (b.min.x..b.max.x).map(|x| self.at(Point::new(x, y))).collect())
            .collect()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

/// Renders the view as text: `#` for walls, a space for open cells and `G`
/// for the goal, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            let line: String = row.into_iter().map(Cell::to_char).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.at(p)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
