use crate::grid::{Dir, Pos};
use crate::maze::Maze;

/// Where the player stands when a maze has no Start.
const FALLBACK_SPAWN: Pos = Pos::new(1, 1);

/// Decodes a movement key. Accepts WASD in either case, plus the keys in
/// the same place on a Russian layout.
pub fn dir_for_key(key: char) -> Option<Dir> {
    match key {
        'w' | 'W' | 'ц' | 'Ц' => Some(Dir::Up),
        's' | 'S' | 'ы' | 'Ы' => Some(Dir::Down),
        'a' | 'A' | 'ф' | 'Ф' => Some(Dir::Left),
        'd' | 'D' | 'в' | 'В' => Some(Dir::Right),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pos: Pos,
}

impl Player {
    pub fn spawn(maze: &Maze) -> Self {
        Self {
            pos: maze.start_position().unwrap_or(FALLBACK_SPAWN),
        }
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    /// Steps one cell in `dir` if the maze allows it.
    pub fn try_move(&mut self, dir: Dir, maze: &Maze) -> bool {
        let (dx, dy) = dir.delta();
        let nx = self.pos.x as isize + dx;
        let ny = self.pos.y as isize + dy;
        if !maze.can_move_to(nx, ny) {
            return false;
        }
        self.pos = Pos::new(nx as usize, ny as usize);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};

    fn corridor() -> Maze {
        Maze::new(Grid::parse(&[
            "#S###", //
            "#...#", //
            "###E#",
        ]))
    }

    #[test]
    fn both_layouts_decode() {
        assert_eq!(dir_for_key('w'), Some(Dir::Up));
        assert_eq!(dir_for_key('Ц'), Some(Dir::Up));
        assert_eq!(dir_for_key('S'), Some(Dir::Down));
        assert_eq!(dir_for_key('ы'), Some(Dir::Down));
        assert_eq!(dir_for_key('A'), Some(Dir::Left));
        assert_eq!(dir_for_key('ф'), Some(Dir::Left));
        assert_eq!(dir_for_key('d'), Some(Dir::Right));
        assert_eq!(dir_for_key('В'), Some(Dir::Right));
        assert_eq!(dir_for_key('x'), None);
        assert_eq!(dir_for_key('q'), None);
    }

    #[test]
    fn spawns_on_start() {
        assert_eq!(Player::spawn(&corridor()).position(), Pos::new(1, 0));
        let blank = Maze::new(Grid::filled(3, 3, Cell::Wall));
        assert_eq!(Player::spawn(&blank).position(), Pos::new(1, 1));
    }

    #[test]
    fn walks_to_the_exit() {
        let maze = corridor();
        let mut player = Player::spawn(&maze);
        assert!(player.try_move(Dir::Down, &maze));
        assert!(player.try_move(Dir::Right, &maze));
        assert!(player.try_move(Dir::Right, &maze));
        assert!(player.try_move(Dir::Down, &maze));
        assert!(maze.is_at_exit(player.position()));
    }

    #[test]
    fn blocked_moves_keep_position() {
        let maze = corridor();
        let mut player = Player::spawn(&maze);
        assert!(!player.try_move(Dir::Up, &maze));
        assert!(!player.try_move(Dir::Left, &maze));
        assert_eq!(player.position(), Pos::new(1, 0));
    }
}
