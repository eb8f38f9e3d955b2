use thiserror::Error;

/// Upper bound on `width * height` accepted by the generator.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze of {width}x{height} has no interior room, both sides must be at least 3")]
    TooSmall { width: usize, height: usize },

    #[error("maze of {width}x{height} exceeds the limit of {max} cells", max = MAX_CELLS)]
    TooLarge { width: usize, height: usize },

    #[error("no solvable maze after {attempts} attempt(s)")]
    Unsolvable { attempts: u32 },
}
