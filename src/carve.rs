use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Dir, Grid, Pos};

/// Walls the whole grid and grows a perfect maze from a random odd cell.
///
/// Cells at odd coordinates are the rooms; the even cells between two rooms
/// are the connectors. Each carved room is joined to exactly one room that was
/// already carved, so the result is a spanning tree over the rooms.
pub fn carve<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Grid {
    let (width, height) = (grid.width(), grid.height());
    let mut grid = Grid::filled(width, height, Cell::Wall);

    let seed = Pos::new(
        rng.gen_range(0..width / 2) * 2 + 1,
        rng.gen_range(0..height / 2) * 2 + 1,
    );
    grid.set(seed, Cell::Passage);

    let mut frontier: Vec<Pos> = Vec::new();
    add_frontier(&grid, seed, &mut frontier);

    let mut carved = 1;
    while !frontier.is_empty() {
        let idx = rng.gen_range(0..frontier.len());
        let cell = frontier[idx];
        if grid.is(cell, Cell::Wall) {
            grid.set(cell, Cell::Passage);
            connect_to_maze(&mut grid, cell, rng);
            add_frontier(&grid, cell, &mut frontier);
            carved += 1;
        }
        frontier.swap_remove(idx);
    }

    debug!("carved {carved} rooms from seed ({}, {})", seed.x, seed.y);
    grid
}

fn add_frontier(grid: &Grid, pos: Pos, frontier: &mut Vec<Pos>) {
    for dir in Dir::ALL {
        if let Some(next) = grid.offset(pos, dir, 2) {
            if grid.is_interior(next) && grid.is(next, Cell::Wall) {
                frontier.push(next);
            }
        }
    }
}

fn connect_to_maze<R: Rng + ?Sized>(grid: &mut Grid, pos: Pos, rng: &mut R) {
    let mut dirs = Dir::ALL;
    dirs.shuffle(rng);
    for dir in dirs {
        let Some(next) = grid.offset(pos, dir, 2) else {
            continue;
        };
        if grid.is_interior(next) && grid.is(next, Cell::Passage) {
            if let Some(between) = grid.offset(pos, dir, 1) {
                grid.set(between, Cell::Passage);
            }
            return;
        }
    }
}
