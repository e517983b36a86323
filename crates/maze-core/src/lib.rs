//! **maze-core** provides core types for braided grid mazes.
//!
//! This crate provides the foundational types shared by the generator and
//! the solver: geometry primitives, the three-state maze cell, a
//! shared-buffer grid with slice views, the configuration value object and
//! the error taxonomy.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use config::{MazeConfig, MazeKind, PATCH_BORDER, composite_len};
pub use error::MazeError;
pub use geom::{Point, Range};
pub use grid::Grid;
