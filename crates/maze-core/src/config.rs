//! Generation settings passed explicitly into every pipeline stage.

use crate::error::MazeError;
use crate::geom::Point;

/// Which generator the pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MazeKind {
    /// One depth-first carve over the whole grid: a perfect maze.
    Simple,
    /// Several carved patches tiled together and stitched into loops.
    #[default]
    Braided,
}

/// Settings for one full generate-and-solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub kind: MazeKind,
    pub simple_width: i32,
    pub simple_height: i32,
    pub patch_width: i32,
    pub patch_height: i32,
    pub num_patches_x: i32,
    pub num_patches_y: i32,
    /// Stitches opened per pair of adjacent patches.
    pub num_stitches: usize,
    /// Compute the distance field and solution path after generation.
    pub solve: bool,
    /// Delay between replay steps. Only read by viewers.
    pub animation_speed_ms: u64,
    /// Seed for a reproducible run; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            kind: MazeKind::Braided,
            simple_width: 41,
            simple_height: 41,
            patch_width: 21,
            patch_height: 21,
            num_patches_x: 3,
            num_patches_y: 3,
            num_stitches: 4,
            solve: true,
            animation_speed_ms: 50,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Check the dimensions used by the selected [`MazeKind`].
    pub fn validate(&self) -> Result<(), MazeError> {
        match self.kind {
            MazeKind::Simple => {
                carve_dimension("simple_width", self.simple_width)?;
                carve_dimension("simple_height", self.simple_height)?;
            }
            MazeKind::Braided => {
                carve_dimension("patch_width", self.patch_width)?;
                carve_dimension("patch_height", self.patch_height)?;
                if self.num_patches_x < 1 {
                    return Err(MazeError::NoPatches { axis: 'x' });
                }
                if self.num_patches_y < 1 {
                    return Err(MazeError::NoPatches { axis: 'y' });
                }
                fits_composite('x', self.patch_width, self.num_patches_x)?;
                fits_composite('y', self.patch_height, self.num_patches_y)?;
            }
        }
        Ok(())
    }

    /// Final grid size as (width, height).
    ///
    /// Braided patches overlap by one shared row/column, so each extra patch
    /// adds `patch - 1` cells.
    pub fn total_size(&self) -> Point {
        match self.kind {
            MazeKind::Simple => Point::new(self.simple_width, self.simple_height),
            MazeKind::Braided => Point::new(
                composite_len(self.patch_width, self.num_patches_x),
                composite_len(self.patch_height, self.num_patches_y),
            ),
        }
    }
}

/// Overlap between neighbouring patches, as a (negative) border width.
pub const PATCH_BORDER: i32 = -1;

/// Length of `count` patches of size `patch` laid out with [`PATCH_BORDER`].
#[inline]
pub const fn composite_len(patch: i32, count: i32) -> i32 {
    patch * count + (count - 1) * PATCH_BORDER
}

/// Like [`composite_len`], `None` when the result does not fit in an `i32`.
fn checked_composite_len(patch: i32, count: i32) -> Option<i32> {
    patch
        .checked_mul(count)?
        .checked_add(count.checked_sub(1)?.checked_mul(PATCH_BORDER)?)
}

fn fits_composite(axis: char, patch: i32, count: i32) -> Result<(), MazeError> {
    match checked_composite_len(patch, count) {
        Some(_) => Ok(()),
        None => Err(MazeError::TooLarge { axis, patch, count }),
    }
}

fn carve_dimension(name: &'static str, value: i32) -> Result<(), MazeError> {
    if value <= 0 {
        return Err(MazeError::NonPositiveDimension { name, value });
    }
    if value < 3 {
        return Err(MazeError::TooSmall { name, value });
    }
    if value % 2 == 0 {
        return Err(MazeError::EvenDimension { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.total_size(), Point::new(61, 61));
    }

    #[test]
    fn composite_len_overlaps_by_one() {
        assert_eq!(composite_len(5, 1), 5);
        assert_eq!(composite_len(5, 2), 9);
        assert_eq!(composite_len(21, 3), 61);
    }

    #[test]
    fn rejects_even_and_small_dimensions() {
        let cfg = MazeConfig {
            patch_width: 20,
            ..MazeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MazeError::EvenDimension { name: "patch_width", value: 20 })
        );

        let cfg = MazeConfig {
            kind: MazeKind::Simple,
            simple_height: 1,
            ..MazeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MazeError::TooSmall { name: "simple_height", value: 1 })
        );

        let cfg = MazeConfig {
            kind: MazeKind::Simple,
            simple_width: -4,
            ..MazeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MazeError::NonPositiveDimension { name: "simple_width", value: -4 })
        );
    }

    #[test]
    fn rejects_zero_patch_counts() {
        let cfg = MazeConfig {
            num_patches_y: 0,
            ..MazeConfig::default()
        };
        assert_eq!(cfg.validate(), Err(MazeError::NoPatches { axis: 'y' }));
    }

    #[test]
    fn rejects_composites_that_overflow() {
        let cfg = MazeConfig {
            patch_width: i32::MAX,
            patch_height: 3,
            num_patches_x: 3,
            num_patches_y: 1,
            ..MazeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MazeError::TooLarge { axis: 'x', patch: i32::MAX, count: 3 })
        );

        let cfg = MazeConfig {
            patch_height: 1_000_001,
            num_patches_y: 5_000,
            ..MazeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(MazeError::TooLarge { axis: 'y', patch: 1_000_001, count: 5_000 })
        );
    }

    #[test]
    fn one_patch_of_the_largest_odd_size_fits() {
        let cfg = MazeConfig {
            patch_width: i32::MAX,
            num_patches_x: 1,
            ..MazeConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(checked_composite_len(i32::MAX, 1), Some(i32::MAX));
        assert_eq!(checked_composite_len(i32::MAX, 2), None);
        assert_eq!(checked_composite_len(21, 3), Some(61));
    }

    #[test]
    fn simple_kind_ignores_patch_settings() {
        let cfg = MazeConfig {
            kind: MazeKind::Simple,
            patch_width: 4,
            num_patches_x: 0,
            ..MazeConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.total_size(), Point::new(41, 41));
    }
}
