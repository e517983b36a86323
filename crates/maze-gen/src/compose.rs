//! Patch tiling and braiding.
//!
//! Patches are laid out with a border of [`PATCH_BORDER`] (= -1), so two
//! neighbouring patches share one wall column or row. Stitching opens cells
//! of that shared wall where both sides are already open, which joins the
//! patches and adds loops.

use log::{debug, warn};
use maze_core::{Cell, Grid, MazeConfig, MazeError, PATCH_BORDER, Point, Range, composite_len};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::generator::MazeGen;

/// How patches are tiled into one composite grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchLayout {
    pub patch_width: i32,
    pub patch_height: i32,
    pub num_patches_x: i32,
    pub num_patches_y: i32,
    /// Stitches opened per adjacent pair of patches.
    pub num_stitches: usize,
}

impl PatchLayout {
    /// Layout described by the braided settings of `cfg`.
    pub fn from_config(cfg: &MazeConfig) -> Self {
        Self {
            patch_width: cfg.patch_width,
            patch_height: cfg.patch_height,
            num_patches_x: cfg.num_patches_x,
            num_patches_y: cfg.num_patches_y,
            num_stitches: cfg.num_stitches,
        }
    }

    /// Composite grid size as (width, height).
    pub fn total_size(&self) -> Point {
        Point::new(
            composite_len(self.patch_width, self.num_patches_x),
            composite_len(self.patch_height, self.num_patches_y),
        )
    }

    /// Top-left corner of patch `(px, py)` in the composite.
    pub fn patch_origin(&self, px: i32, py: i32) -> Point {
        Point::new(
            px * (self.patch_width + PATCH_BORDER),
            py * (self.patch_height + PATCH_BORDER),
        )
    }

    /// Every wall shared by two adjacent patches: left-right pairs first,
    /// then top-bottom pairs, each in row-major patch order.
    pub fn seams(&self) -> Vec<Seam> {
        let mut seams = Vec::new();
        for py in 0..self.num_patches_y {
            for px in 0..self.num_patches_x - 1 {
                let o = self.patch_origin(px, py);
                seams.push(Seam::Column {
                    col: o.x + self.patch_width - 1,
                    mid_row: o.y + self.patch_height / 2,
                    radius: self.patch_height / 2,
                });
            }
        }
        for py in 0..self.num_patches_y - 1 {
            for px in 0..self.num_patches_x {
                let o = self.patch_origin(px, py);
                seams.push(Seam::Row {
                    row: o.y + self.patch_height - 1,
                    mid_col: o.x + self.patch_width / 2,
                    radius: self.patch_width / 2,
                });
            }
        }
        seams
    }

    fn validate(&self) -> Result<(), MazeError> {
        MazeConfig {
            patch_width: self.patch_width,
            patch_height: self.patch_height,
            num_patches_x: self.num_patches_x,
            num_patches_y: self.num_patches_y,
            ..MazeConfig::default()
        }
        .validate()
    }
}

/// A wall shared by two adjacent patches, with the search window used to
/// look for stitch points along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seam {
    /// Wall column between a left and a right patch; rows within `radius`
    /// of `mid_row` are searched.
    Column { col: i32, mid_row: i32, radius: i32 },
    /// Wall row between an upper and a lower patch; columns within `radius`
    /// of `mid_col` are searched.
    Row { row: i32, mid_col: i32, radius: i32 },
}

impl Seam {
    /// Wall cells on this seam whose two neighbours across the seam are
    /// both open.
    pub fn candidates(&self, grid: &Grid) -> Vec<Point> {
        let (window, across) = match *self {
            Seam::Column { col, mid_row, radius } => (
                (-radius..=radius)
                    .map(|o| Point::new(col, mid_row + o))
                    .collect::<Vec<_>>(),
                Point::new(1, 0),
            ),
            Seam::Row { row, mid_col, radius } => (
                (-radius..=radius)
                    .map(|o| Point::new(mid_col + o, row))
                    .collect::<Vec<_>>(),
                Point::new(0, 1),
            ),
        };
        window
            .into_iter()
            .filter(|&p| grid.contains(p))
            .filter(|&p| grid.at(p - across) == Cell::Open && grid.at(p + across) == Cell::Open)
            .collect()
    }
}

impl<R: Rng> MazeGen<R> {
    /// Build a braided maze: carve one fresh patch per slot, copy it into
    /// the composite at its offset (later patches overwrite the shared
    /// border), then stitch every seam.
    ///
    /// Entrance and exit are not opened here.
    pub fn compose(&mut self, layout: &PatchLayout) -> Result<Grid, MazeError> {
        layout.validate()?;
        let size = layout.total_size();
        let grid = Grid::walled(size.x, size.y)?;

        for py in 0..layout.num_patches_y {
            for px in 0..layout.num_patches_x {
                let patch = self.carved_patch(layout.patch_width, layout.patch_height);
                let o = layout.patch_origin(px, py);
                let slot = Range::new(
                    o.x,
                    o.y,
                    o.x + layout.patch_width,
                    o.y + layout.patch_height,
                );
                grid.slice(slot).copy_from(&patch);
                debug!("placed patch ({px}, {py}) at {o}");
            }
        }

        let stitched = self.stitch(&grid, layout);
        debug!(
            "composed {}x{} maze from {}x{} patches, {stitched} stitches",
            size.x, size.y, layout.num_patches_x, layout.num_patches_y
        );
        Ok(grid)
    }

    /// Open up to `layout.num_stitches` randomly chosen candidates on every
    /// seam. Returns the number of cells opened.
    pub fn stitch(&mut self, grid: &Grid, layout: &PatchLayout) -> usize {
        let mut total = 0;
        for seam in layout.seams() {
            let mut candidates = seam.candidates(grid);
            let take = layout.num_stitches.min(candidates.len());
            if candidates.is_empty() && layout.num_stitches > 0 {
                warn!("no stitch candidates on {seam:?}; seam stays closed");
            }
            if take == 0 {
                continue;
            }
            candidates.shuffle(&mut self.rng);
            for &p in &candidates[..take] {
                grid.set(p, Cell::Open);
            }
            debug!("{seam:?}: {take} of {} candidates stitched", candidates.len());
            total += take;
        }
        total
    }
}
