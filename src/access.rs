use log::debug;

use crate::grid::{Cell, Grid, Pos};

/// Opens the cell just inside any gate that has no passage neighbour.
///
/// Only the gate's own neighbourhood is inspected; the opened cell is not
/// checked for a route into the rest of the maze.
pub fn ensure_access(mut grid: Grid) -> Grid {
    for gate in [Cell::Start, Cell::End] {
        let Some(pos) = grid.find(gate) else {
            continue;
        };
        if grid.count_neighbors(pos, Cell::Passage) > 0 {
            continue;
        }
        if let Some(inward) = inward_of(&grid, pos) {
            debug!(
                "{gate:?} at ({}, {}) was sealed, opening ({}, {})",
                pos.x, pos.y, inward.x, inward.y
            );
            grid.set(inward, Cell::Passage);
        }
    }
    grid
}

/// The interior cell facing a border position. Corners have none.
fn inward_of(grid: &Grid, pos: Pos) -> Option<Pos> {
    let (w, h) = (grid.width(), grid.height());
    let mid_row = pos.y > 0 && pos.y + 1 < h;
    let mid_col = pos.x > 0 && pos.x + 1 < w;

    if pos.x == 0 {
        mid_row.then(|| Pos::new(1, pos.y))
    } else if pos.x + 1 == w {
        mid_row.then(|| Pos::new(w - 2, pos.y))
    } else if pos.y == 0 {
        mid_col.then(|| Pos::new(pos.x, 1))
    } else if pos.y + 1 == h {
        mid_col.then(|| Pos::new(pos.x, h - 2))
    } else {
        None
    }
}
