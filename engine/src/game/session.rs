use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;

use crate::log;

use super::bot_controller::{BotInput, calculate_move};
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{Difficulty, GameStatus, Mark};

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;

// Async facade over `GameState`. Owned by the caller; any number of
// sessions can run side by side. The bot's reply is deferred by a fixed
// delay so a UI can render the human move first. Each start or reset bumps
// the generation counter, and a deferred reply whose generation no longer
// matches is discarded instead of landing on the fresh board.
pub struct GameSession {
    state: Arc<Mutex<GameState>>,
    rng: Arc<Mutex<SessionRng>>,
    generation: Arc<AtomicU64>,
    bot_delay: Duration,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_bot_delay(Duration::from_millis(DEFAULT_BOT_DELAY_MS))
    }

    pub fn with_bot_delay(bot_delay: Duration) -> Self {
        Self::create(SessionRng::from_random(), bot_delay)
    }

    pub fn from_seed(seed: u64, bot_delay: Duration) -> Self {
        Self::create(SessionRng::new(seed), bot_delay)
    }

    fn create(rng: SessionRng, bot_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(GameState::new())),
            rng: Arc::new(Mutex::new(rng)),
            generation: Arc::new(AtomicU64::new(0)),
            bot_delay,
        }
    }

    pub async fn start_game(&self, vs_computer: bool, difficulty: Difficulty) {
        let generation = self.next_generation();
        let mut state = self.state.lock().await;
        state.start(vs_computer, difficulty);

        // X opens and is human-controlled, so this never fires today; the
        // trigger still runs so a different first-mover assignment would
        // be picked up here.
        if state.is_bot_turn() {
            drop(state);
            self.schedule_bot_move(generation);
        }
    }

    pub async fn submit_move(&self, index: usize) {
        let mut state = self.state.lock().await;
        match state.place_mark(index) {
            Ok(()) => {
                if state.is_bot_turn() {
                    let generation = self.generation.load(Ordering::SeqCst);
                    drop(state);
                    self.schedule_bot_move(generation);
                }
            }
            Err(e) => {
                log!("Rejected move at {}: {}", index, e);
            }
        }
    }

    pub async fn reset_game(&self) {
        self.next_generation();
        let mut state = self.state.lock().await;
        state.reset();
    }

    pub async fn board_state(&self) -> [Mark; 9] {
        let state = self.state.lock().await;
        *state.board().cells()
    }

    pub async fn status(&self) -> GameStatus {
        let state = self.state.lock().await;
        state.status()
    }

    pub async fn is_active(&self) -> bool {
        let state = self.state.lock().await;
        state.is_active()
    }

    pub async fn current_mark(&self) -> Mark {
        let state = self.state.lock().await;
        state.current_mark()
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn schedule_bot_move(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let rng = Arc::clone(&self.rng);
        let generation_counter = Arc::clone(&self.generation);
        let delay = self.bot_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = state.lock().await;
            if generation_counter.load(Ordering::SeqCst) != generation {
                return;
            }
            if !state.is_bot_turn() {
                return;
            }

            let input = BotInput::from_game_state(&state);
            let mut rng = rng.lock().await;
            let Some(index) = calculate_move(state.difficulty(), &input, &mut rng) else {
                return;
            };

            if let Err(e) = state.place_mark(index) {
                log!("Bot failed to place mark at {}: {}", index, e);
            }
        });
    }
}
