use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, BotInput, Difficulty, GameStatus, Mark, SessionRng, calculate_move, evaluate};

fn bench_minimax_single_move_empty_board() {
    let input = BotInput {
        board: Board::new(),
        current_mark: Mark::O,
    };
    let mut rng = SessionRng::from_random();
    calculate_move(Difficulty::Hard, &input, &mut rng);
}

fn bench_minimax_single_move_mid_game() {
    let mut board = Board::new();
    let moves = [(0, Mark::X), (4, Mark::O), (8, Mark::X), (2, Mark::O)];
    for (index, mark) in moves {
        board.place(index, mark);
    }

    let input = BotInput {
        board,
        current_mark: Mark::X,
    };
    let mut rng = SessionRng::from_random();
    calculate_move(Difficulty::Hard, &input, &mut rng);
}

fn bench_minimax_full_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut rng = SessionRng::from_random();

    while evaluate(&board) == GameStatus::InProgress {
        let input = BotInput {
            board: board.clone(),
            current_mark,
        };
        let Some(index) = calculate_move(Difficulty::Hard, &input, &mut rng) else {
            break;
        };
        board.place(index, current_mark);
        let Some(opponent) = current_mark.opponent() else {
            break;
        };
        current_mark = opponent;
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_minimax_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
