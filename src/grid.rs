//! Flat cell storage shared by every generation stage.
//!
//! All reads and writes go through [`Grid::index`], so callers never touch the
//! backing vector with raw coordinates.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Passage,
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Builds a grid from rows of `#`, `.`, `S` and `E`. Intended for tests.
    pub fn parse(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::filled(width, height, Cell::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Passage,
                    'S' => Cell::Start,
                    'E' => Cell::End,
                    _ => Cell::Wall,
                };
                grid.set(Pos::new(x, y), cell);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: isize, y: isize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn at(&self, pos: Pos) -> Option<Cell> {
        self.get(pos.x as isize, pos.y as isize)
    }

    /// Writes `cell` at `pos`. Out-of-range writes are ignored.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if let Some(i) = self.index(pos.x as isize, pos.y as isize) {
            self.cells[i] = cell;
        }
    }

    pub fn is(&self, pos: Pos, cell: Cell) -> bool {
        self.at(pos) == Some(cell)
    }

    /// The in-bounds cell `dist` steps from `pos` in `dir`.
    pub fn offset(&self, pos: Pos, dir: Dir, dist: isize) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let nx = pos.x as isize + dx * dist;
        let ny = pos.y as isize + dy * dist;
        self.index(nx, ny).map(|_| Pos::new(nx as usize, ny as usize))
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x + 1 == self.width || pos.y + 1 == self.height
    }

    /// Strictly inside the border ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x + 1 < self.width && pos.y + 1 < self.height
    }

    pub fn count_neighbors(&self, pos: Pos, cell: Cell) -> usize {
        Dir::ALL
            .iter()
            .filter_map(|&dir| self.offset(pos, dir, 1))
            .filter(|&n| self.is(n, cell))
            .count()
    }

    /// First row-major position holding `cell`.
    pub fn find(&self, cell: Cell) -> Option<Pos> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|i| Pos::new(i % self.width, i / self.width))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }
}
