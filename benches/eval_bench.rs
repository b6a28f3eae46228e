//! Benchmarks for hand evaluation and equity.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poker_equity::{
    calculate_equity_with, evaluate_high, CardMask, EquityConfig, EquityRequest, GameVariant,
};

fn seven_card_benchmark(c: &mut Criterion) {
    let cards = CardMask::parse("As Kd Qh Jc 9s 3d 2c").unwrap();

    c.bench_function("evaluate_high_7_cards", |b| {
        b.iter(|| evaluate_high(black_box(cards)).unwrap())
    });
}

fn omaha_benchmark(c: &mut Criterion) {
    let hole = CardMask::parse("As 2s 3d 4d").unwrap();
    let board = CardMask::parse("5s 6s 7s 8d 9d").unwrap();

    c.bench_function("omaha8_high_and_low", |b| {
        b.iter(|| {
            let high = GameVariant::Omaha8.evaluate_high(black_box(hole), black_box(board));
            let low = GameVariant::Omaha8.evaluate_low(black_box(hole), black_box(board));
            (high.unwrap(), low.unwrap())
        })
    });
}

fn monte_carlo_benchmark(c: &mut Criterion) {
    let request =
        EquityRequest::parse(&["As Ad", "Ks Kd"], "", "", GameVariant::Holdem).unwrap();
    let config = EquityConfig::monte_carlo(10_000).with_seed(42);

    c.bench_function("holdem_heads_up_10k_trials", |b| {
        b.iter(|| calculate_equity_with(black_box(&request), &config).unwrap())
    });
}

criterion_group!(benches, seven_card_benchmark, omaha_benchmark, monte_carlo_benchmark);
criterion_main!(benches);
