use clap::Parser;

use crate::generator::MazeConfig;

const DEFAULT_WIDTH: usize = 31;
const DEFAULT_HEIGHT: usize = 21;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "maze", about = "Generate a maze and walk it to the exit")]
pub struct Args {
    /// Maze width in cells, rounded up to odd
    #[arg(long, env = "MAZE_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells, rounded up to odd
    #[arg(long, env = "MAZE_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed for a replayable maze; random when omitted
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,

    /// Regenerate up to this many times while the exit is unreachable
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Exit with an error instead of keeping an unsolvable maze
    #[arg(long)]
    pub strict: bool,

    /// Print the maze and exit instead of playing
    #[arg(long)]
    pub print: bool,
}

impl Args {
    pub fn maze_config(&self, seed: u64) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            seed,
            retries: self.retries,
            strict: self.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "maze", "--width", "12", "--height", "9", "--seed", "5", "--retries", "3", "--print",
        ])
        .expect("valid flags");
        assert_eq!(args.width, 12);
        assert_eq!(args.seed, Some(5));
        assert!(args.print);
        assert!(!args.strict);

        let config = args.maze_config(5);
        assert_eq!((config.width, config.height, config.retries), (12, 9, 3));
    }

    #[test]
    fn rejects_negative_sizes() {
        assert!(Args::try_parse_from(["maze", "--width", "-3"]).is_err());
    }
}
