//! Turn-based walk through a generated maze.

use crate::grid::Pos;
use crate::maze::Maze;
use crate::player::{dir_for_key, Player};

pub const WELCOME: &str = "Welcome to the maze! Move with W/A/S/D, reach the exit (E) to win.";
pub const PROMPT: &str = "Direction (W/A/S/D) or Q to quit";
pub const BLOCKED: &str = "You cannot move that way! Press any key to continue.";
pub const GOODBYE: &str = "Thanks for playing!";
pub const VICTORY: &str = "Congratulations! You found the exit!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    /// Wall, border or an unrecognised key.
    Blocked,
    /// The key that dismissed a `Blocked` notice; nothing moved.
    Dismissed,
    Quit,
    Won,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Moved | Outcome::Dismissed => PROMPT,
            Outcome::Blocked => BLOCKED,
            Outcome::Quit => GOODBYE,
            Outcome::Won => VICTORY,
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, Outcome::Quit | Outcome::Won)
    }
}

pub struct Session {
    maze: Maze,
    player: Player,
    moves: u32,
    notice_pending: bool,
}

impl Session {
    pub fn new(maze: Maze) -> Self {
        let player = Player::spawn(&maze);
        Self {
            maze,
            player,
            moves: 0,
            notice_pending: false,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Pos {
        self.player.position()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Applies one key press. After a `Blocked` outcome the next key only
    /// dismisses the notice, whatever it is.
    pub fn handle_key(&mut self, key: char) -> Outcome {
        if self.notice_pending {
            self.notice_pending = false;
            return Outcome::Dismissed;
        }
        if key == 'q' || key == 'Q' {
            return Outcome::Quit;
        }
        let moved = dir_for_key(key).is_some_and(|dir| self.player.try_move(dir, &self.maze));
        if !moved {
            self.notice_pending = true;
            return Outcome::Blocked;
        }
        self.moves += 1;
        if self.maze.is_at_exit(self.player.position()) {
            Outcome::Won
        } else {
            Outcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn session() -> Session {
        Session::new(Maze::new(Grid::parse(&[
            "#S###", //
            "#...#", //
            "###E#",
        ])))
    }

    #[test]
    fn walking_to_the_exit_wins() {
        let mut s = session();
        let outcomes: Vec<_> = "sddS".chars().map(|k| s.handle_key(k)).collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Moved, Outcome::Moved, Outcome::Moved, Outcome::Won]
        );
        assert_eq!(s.moves(), 4);
    }

    #[test]
    fn unknown_and_blocked_keys_do_not_move() {
        let mut s = session();
        assert_eq!(s.handle_key('x'), Outcome::Blocked);
        assert_eq!(s.handle_key('s'), Outcome::Dismissed);
        assert_eq!(s.handle_key('w'), Outcome::Blocked);
        assert_eq!(s.handle_key('x'), Outcome::Dismissed);
        assert_eq!(s.player(), Pos::new(1, 0));
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn blocked_notice_swallows_the_next_key() {
        let mut s = session();
        assert_eq!(s.handle_key('a'), Outcome::Blocked);
        assert_eq!(s.handle_key('q'), Outcome::Dismissed);
        assert_eq!(Outcome::Dismissed.message(), PROMPT);
        assert_eq!(s.handle_key('s'), Outcome::Moved);
        assert_eq!(s.player(), Pos::new(1, 1));
    }

    #[test]
    fn q_quits() {
        let mut s = session();
        assert!(s.handle_key('Q').is_final());
        assert_eq!(s.player(), Pos::new(1, 0));
    }
}
