//! Read-only view over a finished maze.

use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Dir, Grid, Pos};

/// A generated maze. Nothing reachable from here mutates the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Maze {
    pub(crate) fn new(grid: Grid) -> Self {
        let start = grid.find(Cell::Start);
        let end = grid.find(Cell::End);
        Self { grid, start, end }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The cell at `(x, y)`, or `Wall` outside the grid.
    pub fn cell_at(&self, x: isize, y: isize) -> Cell {
        self.grid.get(x, y).unwrap_or(Cell::Wall)
    }

    pub fn can_move_to(&self, x: isize, y: isize) -> bool {
        !matches!(self.grid.get(x, y), None | Some(Cell::Wall))
    }

    pub fn start_position(&self) -> Option<Pos> {
        self.start
    }

    pub fn end_position(&self) -> Option<Pos> {
        self.end
    }

    pub fn is_at_exit(&self, pos: Pos) -> bool {
        self.end == Some(pos)
    }

    /// Cell states, one slice per row from the top.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every cell a walker can reach from `from` without crossing a wall.
    pub fn reachable_from(&self, from: Pos) -> HashSet<Pos> {
        let mut seen = HashSet::new();
        if !self.can_move_to(from.x as isize, from.y as isize) {
            return seen;
        }
        let mut q = VecDeque::new();
        seen.insert(from);
        q.push_back(from);
        while let Some(pos) = q.pop_front() {
            for dir in Dir::ALL {
                let Some(next) = self.grid.offset(pos, dir, 1) else {
                    continue;
                };
                if self.grid.is(next, Cell::Wall) || !seen.insert(next) {
                    continue;
                }
                q.push_back(next);
            }
        }
        seen
    }

    /// Whether End can be walked to from Start.
    pub fn is_solvable(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => self.reachable_from(start).contains(&end),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Maze {
        Maze::new(Grid::parse(&[
            "#S###", //
            "#.#.#", //
            "#...#", //
            "#.###", //
            "#E###",
        ]))
    }

    #[test]
    fn queries_outside_the_grid_are_safe() {
        let maze = sample();
        for (x, y) in [(-1, 0), (0, -1), (5, 2), (2, 5), (isize::MAX, 0)] {
            assert_eq!(maze.cell_at(x, y), Cell::Wall);
            assert!(!maze.can_move_to(x, y));
        }
    }

    #[test]
    fn gates_are_walkable() {
        let maze = sample();
        assert!(maze.can_move_to(1, 0));
        assert!(maze.can_move_to(1, 4));
        assert!(maze.can_move_to(3, 1));
        assert!(!maze.can_move_to(2, 1));
    }

    #[test]
    fn gate_lookup_and_exit() {
        let maze = sample();
        assert_eq!(maze.start_position(), Some(Pos::new(1, 0)));
        assert_eq!(maze.end_position(), Some(Pos::new(1, 4)));
        assert!(maze.is_at_exit(Pos::new(1, 4)));
        assert!(!maze.is_at_exit(Pos::new(1, 0)));
    }

    #[test]
    fn no_exit_without_end() {
        let maze = Maze::new(Grid::filled(3, 3, Cell::Wall));
        assert_eq!(maze.end_position(), None);
        assert!(!maze.is_at_exit(Pos::new(0, 0)));
        assert!(!maze.is_solvable());
    }

    #[test]
    fn solvability_follows_walls() {
        assert!(sample().is_solvable());

        let cut = Maze::new(Grid::parse(&[
            "#S###", //
            "#.#.#", //
            "###.#", //
            "#.###", //
            "#E###",
        ]));
        assert!(!cut.is_solvable());
        assert_eq!(cut.reachable_from(Pos::new(1, 0)).len(), 2);
    }

    #[test]
    fn cells_walk_rows_top_down() {
        let maze = sample();
        let rows: Vec<&[Cell]> = maze.cells().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0].to_vec(),
            vec![Cell::Wall, Cell::Start, Cell::Wall, Cell::Wall, Cell::Wall]
        );
        assert_eq!(rows[4][1], Cell::End);
    }

    #[test]
    fn repeated_queries_agree() {
        let maze = sample();
        let before = maze.clone();
        for _ in 0..3 {
            assert_eq!(maze.cell_at(1, 2), Cell::Passage);
            assert!(maze.can_move_to(3, 2));
        }
        assert_eq!(maze, before);
    }
}
