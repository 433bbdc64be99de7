mod board;
mod bot_controller;
mod game_state;
mod outcome;
mod session;
mod session_rng;
mod types;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{BotInput, calculate_move};
pub use game_state::GameState;
pub use outcome::{check_win, evaluate, evaluate_for_search};
pub use session::{DEFAULT_BOT_DELAY_MS, GameSession};
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameStatus, Mark, WINNING_LINES};
