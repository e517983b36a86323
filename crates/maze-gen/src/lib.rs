//! Maze generation for braided grid mazes.
//!
//! Everything random goes through one [`MazeGen`], which owns the random
//! source:
//! - **Carving**: randomized depth-first carving of a perfect maze
//!   ([`MazeGen::carve_patch`]).
//! - **Composition**: tiling independently carved patches with one shared
//!   wall between neighbours, then stitching through those walls to add
//!   loops ([`MazeGen::compose`]).
//! - **Goal placement**: a uniformly chosen open cell ([`MazeGen::place_goal`]).
//! - **Pipeline**: all of the above plus entrance, exit and the solver
//!   ([`MazeGen::run`]).

mod carve;
mod compose;
mod generator;
mod goal;
mod maze;

pub use compose::{PatchLayout, Seam};
pub use generator::MazeGen;
pub use maze::{ENTRANCE, Maze, MazeRun, exit_for};
