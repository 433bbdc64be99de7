pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Board, BotInput, CELL_COUNT, Difficulty, GameSession, GameState, GameStatus, Mark, SessionRng,
    WINNING_LINES, calculate_move, check_win, evaluate, evaluate_for_search,
};
