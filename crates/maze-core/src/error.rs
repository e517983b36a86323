//! Errors raised while validating maze dimensions and configuration.

use std::fmt;

/// Errors that can occur when building a grid or validating a
/// [`MazeConfig`](crate::MazeConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A width or height was zero or negative.
    NonPositiveDimension { name: &'static str, value: i32 },
    /// A carved dimension was even; carving needs odd sizes.
    EvenDimension { name: &'static str, value: i32 },
    /// A carved dimension was below the 3-cell minimum.
    TooSmall { name: &'static str, value: i32 },
    /// A patch count along one axis was zero.
    NoPatches { axis: char },
    /// The tiled patches along one axis would not fit in an `i32`.
    TooLarge { axis: char, patch: i32, count: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::EvenDimension { name, value } => {
                write!(f, "{name} must be odd, got {value}")
            }
            Self::TooSmall { name, value } => {
                write!(f, "{name} must be at least 3, got {value}")
            }
            Self::NoPatches { axis } => {
                write!(f, "need at least one patch along {axis}")
            }
            Self::TooLarge { axis, patch, count } => {
                write!(f, "{count} patches of size {patch} along {axis} are too large")
            }
        }
    }
}

impl std::error::Error for MazeError {}
