use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Grid, Pos};

/// Marks one Start on the top or left border and one End on the bottom or
/// right border, each next to a passage.
///
/// When either side has no candidate, the gates go to `(1, 0)` and
/// `(width - 2, height - 1)` without checking their neighbours.
pub fn place_gates<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    let (starts, ends) = gate_candidates(&grid);

    let (start, end) = match (starts.choose(rng), ends.choose(rng)) {
        (Some(&start), Some(&end)) => {
            let mut start = start;
            for _ in 0..starts.len() {
                if start != end {
                    break;
                }
                start = starts.choose(rng).copied().unwrap_or(start);
            }
            (start, end)
        }
        _ => {
            let fallback = fallback_gates(&grid);
            warn!(
                "no gate candidates ({} start, {} end), using fallback gates",
                starts.len(),
                ends.len()
            );
            fallback
        }
    };

    debug!(
        "gates: start ({}, {}), end ({}, {})",
        start.x, start.y, end.x, end.y
    );
    grid.set(start, Cell::Start);
    grid.set(end, Cell::End);
    grid
}

/// Border positions whose inward neighbour is a passage, as
/// `(top + left, bottom + right)`.
pub fn gate_candidates(grid: &Grid) -> (Vec<Pos>, Vec<Pos>) {
    let (w, h) = (grid.width(), grid.height());
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    if w < 3 || h < 3 {
        return (starts, ends);
    }

    for x in (1..w - 1).step_by(2) {
        if grid.is(Pos::new(x, 1), Cell::Passage) {
            starts.push(Pos::new(x, 0));
        }
    }
    for x in (1..w - 1).step_by(2) {
        if grid.is(Pos::new(x, h - 2), Cell::Passage) {
            ends.push(Pos::new(x, h - 1));
        }
    }
    for y in (1..h - 1).step_by(2) {
        if grid.is(Pos::new(1, y), Cell::Passage) {
            starts.push(Pos::new(0, y));
        }
    }
    for y in (1..h - 1).step_by(2) {
        if grid.is(Pos::new(w - 2, y), Cell::Passage) {
            ends.push(Pos::new(w - 1, y));
        }
    }

    (starts, ends)
}

fn fallback_gates(grid: &Grid) -> (Pos, Pos) {
    (
        Pos::new(1, 0),
        Pos::new(grid.width() - 2, grid.height() - 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn candidates_split_by_edge() {
        let grid = Grid::parse(&[
            "#####", //
            "#...#", //
            "###.#", //
            "#...#", //
            "#####",
        ]);
        let (starts, ends) = gate_candidates(&grid);
        assert_eq!(
            starts,
            vec![Pos::new(1, 0), Pos::new(3, 0), Pos::new(0, 1), Pos::new(0, 3)]
        );
        assert_eq!(
            ends,
            vec![Pos::new(1, 4), Pos::new(3, 4), Pos::new(4, 1), Pos::new(4, 3)]
        );
    }

    #[test]
    fn gates_land_on_candidates() {
        let grid = Grid::parse(&[
            "#####", //
            "#.#.#", //
            "#.#.#", //
            "#.#.#", //
            "#####",
        ]);
        let (starts, ends) = gate_candidates(&grid);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let gated = place_gates(grid, &mut rng);

        let start = gated.find(Cell::Start).expect("start placed");
        let end = gated.find(Cell::End).expect("end placed");
        assert!(starts.contains(&start));
        assert!(ends.contains(&end));
        assert_eq!(gated.count(Cell::Start), 1);
        assert_eq!(gated.count(Cell::End), 1);
    }

    #[test]
    fn missing_candidates_use_fallback() {
        let grid = Grid::parse(&[
            "#####", //
            "#####", //
            "##.##", //
            "#####", //
            "#####",
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let gated = place_gates(grid, &mut rng);
        assert_eq!(gated.find(Cell::Start), Some(Pos::new(1, 0)));
        assert_eq!(gated.find(Cell::End), Some(Pos::new(3, 4)));
    }
}
