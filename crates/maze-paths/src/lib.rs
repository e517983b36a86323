//! Shortest-path solving for maze grids.
//!
//! - **Distance field**: breadth-first distances from a target cell to every
//!   reachable cell ([`DistanceField::bfs`]).
//! - **Path tracing**: greedy descent of a distance field from a start cell
//!   down to the target ([`trace_path`]).
//!
//! [`solve`] computes the field once and traces through it; callers that
//! need several paths to the same target should build the field themselves
//! and call [`trace_path`] repeatedly.

mod bfs;
mod solve;
mod trace;
mod traits;

pub use bfs::{DistanceField, UNREACHABLE};
pub use solve::{Solution, solve};
pub use trace::trace_path;
pub use traits::{Pather, SCAN_ORDER};
