//! Randomized perfect-maze generation with border gates, plus the small
//! terminal game that walks it.

pub mod access;
pub mod carve;
pub mod config;
pub mod error;
pub mod game;
pub mod gates;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod player;
pub mod prune;
pub mod render;

pub use error::MazeError;
pub use generator::{build_maze, MazeConfig, MazeGenerator};
pub use grid::{Cell, Dir, Grid, Pos};
pub use maze::Maze;
