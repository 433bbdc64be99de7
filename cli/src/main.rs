use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tictactoe_engine::config::{GameConfig, load_config, save_config};
use tictactoe_engine::logger::init_logger;
use tictactoe_engine::{Difficulty, GameSession, GameStatus, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const BOT_POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Play against another human instead of the computer
    #[arg(long)]
    two_player: bool,

    /// Computer difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

fn render_board(cells: &[Mark; 9]) {
    println!();
    for row in 0..3 {
        let rendered: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match cells[index] {
                    Mark::Empty => index.to_string(),
                    mark => mark.to_string(),
                }
            })
            .collect();
        println!(" {} ", rendered.join(" | "));
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::XWon => "X Wins!",
        GameStatus::OWon => "O Wins!",
        GameStatus::Draw => "It's a Draw!",
        GameStatus::InProgress => "",
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => None,
    }
}

fn read_move(mark: Mark) -> Option<usize> {
    loop {
        let input = prompt(&format!("Player {}, pick a cell (0-8): ", mark))?;
        match input.parse::<usize>() {
            Ok(index) if index < 9 => return Some(index),
            _ => println!("Enter a number between 0 and 8."),
        }
    }
}

async fn wait_for_bot(session: &GameSession) {
    while session.is_active().await && session.current_mark().await == Mark::O {
        tokio::time::sleep(BOT_POLL_INTERVAL).await;
    }
}

async fn play_game(session: &GameSession, vs_computer: bool) {
    loop {
        let cells = session.board_state().await;
        render_board(&cells);

        if !session.is_active().await {
            println!("{}", status_line(session.status().await));
            return;
        }

        let current = session.current_mark().await;
        let Some(index) = read_move(current) else {
            return;
        };
        session.submit_move(index).await;

        if vs_computer {
            wait_for_bot(session).await;
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(None);

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            GameConfig::default()
        }
    };

    if let Some(ref difficulty) = args.difficulty {
        match difficulty.parse::<Difficulty>() {
            Ok(difficulty) => config.difficulty = difficulty,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        }
    }
    if let Some(delay_ms) = args.delay_ms {
        config.bot_delay_ms = delay_ms;
    }

    if let Err(e) = save_config(&config_path, &config) {
        eprintln!("{}", e);
    }

    let vs_computer = !args.two_player;
    let session = GameSession::with_bot_delay(Duration::from_millis(config.bot_delay_ms));

    if vs_computer {
        println!("You are X against the {} computer.", config.difficulty);
    } else {
        println!("Two players, X goes first.");
    }

    session.start_game(vs_computer, config.difficulty).await;

    loop {
        play_game(&session, vs_computer).await;

        match prompt("Play again? (y/n): ") {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                session.reset_game().await;
            }
            _ => break,
        }
    }
}
