use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

use holdem_eval::core::{Board, Deck, Hand, classify, compare, evaluate};

/// Deal `n` random seven card hands, each from a fresh deck.
fn random_hands(n: usize) -> Vec<Hand> {
    let mut rng = StdRng::seed_from_u64(420);
    (0..n)
        .map(|_| {
            let mut deck = Deck::new();
            let mut draw = || deck.draw(&mut rng).unwrap();
            let hole = [draw(), draw()];
            let board = Board::new([draw(), draw(), draw()], draw(), draw());
            Hand::new(hole, board).unwrap()
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let hands = random_hands(1_000);
    c.bench_function("classify_1000", |b| {
        b.iter(|| hands.iter().map(classify).count())
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for n in [1, 100, 1_000] {
        let hands = random_hands(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &hands, |b, hands| {
            b.iter(|| hands.iter().map(evaluate).max())
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let hands = random_hands(2);
    c.bench_function("compare_two", |b| b.iter(|| compare(&hands[0], &hands[1])));
}

criterion_group!(benches, bench_classify, bench_evaluate, bench_compare);
criterion_main!(benches);
