use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::access::ensure_access;
use crate::carve::carve;
use crate::error::{MazeError, MAX_CELLS};
use crate::gates::place_gates;
use crate::grid::{Cell, Grid};
use crate::maze::Maze;
use crate::prune::prune_dead_ends;

/// Rounds an even side up to the next odd value.
pub fn odd_dimension(n: usize) -> usize {
    if n % 2 == 1 {
        n
    } else {
        n + 1
    }
}

/// One-shot maze builder. The random source is owned for the whole run and
/// handed to every stage in turn.
pub struct MazeGenerator<R> {
    width: usize,
    height: usize,
    rng: R,
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(width: usize, height: usize, rng: R) -> Result<Self, MazeError> {
        let width = odd_dimension(width);
        let height = odd_dimension(height);
        if width < 3 || height < 3 {
            return Err(MazeError::TooSmall { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(MazeError::TooLarge { width, height }),
        }
        Ok(Self { width, height, rng })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Runs carve, gates, prune and access repair, in that order.
    pub fn generate(mut self) -> Maze {
        let grid = Grid::filled(self.width, self.height, Cell::Wall);
        let grid = carve(grid, &mut self.rng);
        let grid = place_gates(grid, &mut self.rng);
        let grid = prune_dead_ends(grid);
        let grid = ensure_access(grid);
        debug!(
            "{}x{} maze done, {} open cells",
            self.width,
            self.height,
            grid.count(Cell::Passage)
        );
        Maze::new(grid)
    }
}

/// Generation settings used by the application layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    /// Extra attempts, with seeds `seed + 1, seed + 2, ...`, when a maze
    /// comes out unsolvable.
    pub retries: u32,
    /// Fail instead of keeping an unsolvable maze.
    pub strict: bool,
}

/// Generates a maze from `config`, regenerating on unsolvable results.
pub fn build_maze(config: &MazeConfig) -> Result<Maze, MazeError> {
    build_with(config, |seed| {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(MazeGenerator::new(config.width, config.height, rng)?.generate())
    })
}

/// The attempt loop behind [`build_maze`], with the per-seed generation
/// supplied by the caller.
pub fn build_with<F>(config: &MazeConfig, mut generate: F) -> Result<Maze, MazeError>
where
    F: FnMut(u64) -> Result<Maze, MazeError>,
{
    let mut attempt: u32 = 0;
    loop {
        let seed = config.seed.wrapping_add(u64::from(attempt));
        let maze = generate(seed)?;
        attempt += 1;

        if maze.is_solvable() {
            if attempt > 1 {
                info!("solvable maze found with seed {seed} after {attempt} attempts");
            }
            return Ok(maze);
        }
        if attempt > config.retries {
            if config.strict {
                return Err(MazeError::Unsolvable { attempts: attempt });
            }
            warn!("maze from seed {seed} has no path from start to end");
            return Ok(maze);
        }
        debug!("seed {seed} gave an unsolvable maze, retrying");
    }
}
