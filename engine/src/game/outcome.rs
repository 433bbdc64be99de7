use super::board::Board;
use super::types::{GameStatus, Mark, WINNING_LINES};

pub fn check_win(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some(mark);
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

// Search variant: `None` means the position is non-terminal, so a full board
// with no winner still comes back as `Some(Draw)`.
pub fn evaluate_for_search(board: &Board) -> Option<GameStatus> {
    match evaluate(board) {
        GameStatus::InProgress => None,
        status => Some(status),
    }
}
