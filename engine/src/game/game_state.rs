use super::board::{Board, CELL_COUNT};
use super::outcome::evaluate;
use super::types::{Difficulty, GameStatus, Mark};

// One game of tic-tac-toe. X is always the human side and always moves
// first; in computer mode the bot plays O. Invalid move submissions are
// rejected with an error the caller is free to ignore, which a fixed
// 9-cell grid normally does.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    active: bool,
    vs_computer: bool,
    difficulty: Difficulty,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            active: false,
            vs_computer: false,
            difficulty: Difficulty::Easy,
        }
    }

    pub fn start(&mut self, vs_computer: bool, difficulty: Difficulty) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.active = true;
        self.vs_computer = vs_computer;
        self.difficulty = difficulty;
    }

    // Reset means "fresh game", not "no game": the board empties and the
    // session stays active, ready for the first move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.active = true;
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if !self.active {
            return Err("Game is not active".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell index {} is out of range", index));
        }

        if !self.board.is_empty(index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board.place(index, self.current_mark);

        if self.status() == GameStatus::InProgress {
            self.switch_turn();
        } else {
            self.active = false;
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(opponent) = self.current_mark.opponent() {
            self.current_mark = opponent;
        }
    }

    // The outcome is derived from the board on every call, never cached.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.active && self.vs_computer && self.current_mark == Mark::O
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
