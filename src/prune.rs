use log::debug;

use crate::grid::{Cell, Grid, Pos};

/// Interior passages with exactly one passage neighbour, in row-major order.
pub fn dead_ends(grid: &Grid) -> Vec<Pos> {
    let mut found = Vec::new();
    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            let pos = Pos::new(x, y);
            if grid.is(pos, Cell::Passage) && grid.count_neighbors(pos, Cell::Passage) == 1 {
                found.push(pos);
            }
        }
    }
    found
}

/// Walls up the first half of the dead ends found in a single scan.
///
/// Chains are thinned by one cell, not collapsed. A removed dead end may take
/// a gate's only link with it; [`crate::access::ensure_access`] patches that
/// locally.
pub fn prune_dead_ends(mut grid: Grid) -> Grid {
    let found = dead_ends(&grid);
    let remove = found.len() / 2;
    for &pos in &found[..remove] {
        grid.set(pos, Cell::Wall);
    }
    debug!("pruned {remove} of {} dead ends", found.len());
    grid
}
