//! Benchmarks for move generation, evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_predictor::board::{find_best_move, Board, Color, Evaluator, SearchConfig};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 0 1";

fn middlegame() -> Board {
    Board::try_from_fen(MIDDLEGAME).expect("valid fen")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(Color::White, black_box(depth)))
        });
    }

    let middlegame = middlegame();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(Color::White, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves(Color::White)))
    });

    let middlegame = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves(Color::White)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::new();
    for depth in [2, 3] {
        let config = SearchConfig::depth(depth);
        group.bench_with_input(BenchmarkId::new("pruned", depth), &config, |b, config| {
            b.iter(|| find_best_move(&board, Color::White, config, Evaluator::default()))
        });

        let config = config.without_pruning();
        group.bench_with_input(BenchmarkId::new("minimax", depth), &config, |b, config| {
            b.iter(|| find_best_move(&board, Color::White, config, Evaluator::default()))
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(&startpos).evaluate()));

    let middlegame = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(&middlegame).evaluate())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
