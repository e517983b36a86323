use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maze generator owning the random source used by every stage.
///
/// Reusing one `MazeGen` across runs gives independent mazes without any
/// reseeding by the caller; constructing it from a fixed seed makes a run
/// reproducible.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl MazeGen<StdRng> {
    /// A generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, otherwise seeded from the thread-local
    /// generator.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::new(StdRng::from_rng(&mut rand::rng())),
        }
    }
}
