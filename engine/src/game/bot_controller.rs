use super::board::Board;
use super::game_state::GameState;
use super::outcome::evaluate_for_search;
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark, WINNING_LINES};

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            calculate_blocking_move(input).or_else(|| calculate_random_move(input, rng))
        }
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_indices();
    if available_moves.is_empty() {
        return None;
    }
    let index = rng.random_range(0..available_moves.len());
    Some(available_moves[index])
}

// Blocks an opponent line that is one move from completion, scanning lines
// in the fixed order so the result is deterministic. Never tries to win on
// its own: that restraint is what separates medium from hard.
fn calculate_blocking_move(input: &BotInput) -> Option<usize> {
    let opponent_mark = input.current_mark.opponent()?;
    let cells = input.board.cells();

    for line in WINNING_LINES {
        let opponent_count = line
            .iter()
            .filter(|&&index| cells[index] == opponent_mark)
            .count();
        let empty_index = line.iter().find(|&&index| cells[index] == Mark::Empty);

        if opponent_count == 2
            && let Some(&index) = empty_index
        {
            return Some(index);
        }
    }

    None
}

fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.current_mark;
    let available_moves = input.board.available_indices();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board.set(index, bot_mark);
        let score = minimax(&mut board, bot_mark, 0, false);
        board.set(index, Mark::Empty);

        // Strict comparison: ties stay with the lowest index.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

// Exhaustive search to the full board depth. A 3x3 board caps the tree at
// 9! positions, so no pruning or depth limit is needed. Wins are scored
// relative to depth, steering the bot toward the fastest win and the
// slowest loss.
fn minimax(board: &mut Board, bot_mark: Mark, depth: i32, is_maximizing: bool) -> i32 {
    if let Some(status) = evaluate_for_search(board) {
        return match status.winner() {
            Some(winner) if winner == bot_mark => 10 - depth,
            Some(_) => depth - 10,
            None => 0,
        };
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in board.available_indices() {
            board.set(index, bot_mark);
            best_score = best_score.max(minimax(board, bot_mark, depth + 1, false));
            board.set(index, Mark::Empty);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in board.available_indices() {
            board.set(index, opponent_mark);
            best_score = best_score.min(minimax(board, bot_mark, depth + 1, true));
            board.set(index, Mark::Empty);
        }
        best_score
    }
}
