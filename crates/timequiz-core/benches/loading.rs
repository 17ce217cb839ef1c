use criterion::{black_box, criterion_group, criterion_main, Criterion};

use timequiz_core::loader::{load_problems, problems_from_rows};

fn bench_load_problems(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_problems");

    let small = "5+5,10\n7+3,10\n1+1,2\n8+3,11\n1+2,3\n";

    let quoted = {
        let mut s = String::new();
        for i in 0..200 {
            s.push_str(&format!("\"what is {i},000 + 1?\",\"  {i}001 \"\n"));
        }
        s
    };

    let large = {
        let mut s = String::new();
        for i in 0..5_000 {
            s.push_str(&format!("{i}+{i},{}\n", i * 2));
        }
        s
    };

    group.bench_function("small", |b| {
        b.iter(|| load_problems(black_box(small.as_bytes())))
    });

    group.bench_function("quoted", |b| {
        b.iter(|| load_problems(black_box(quoted.as_bytes())))
    });

    group.bench_function("large", |b| {
        b.iter(|| load_problems(black_box(large.as_bytes())))
    });

    group.finish();
}

fn bench_rows_to_problems(c: &mut Criterion) {
    let rows: Vec<Vec<String>> = (0..5_000)
        .map(|i| vec![format!("{i}*2"), format!(" {} ", i * 2)])
        .collect();

    c.bench_function("problems_from_rows", |b| {
        b.iter(|| problems_from_rows(black_box(&rows)))
    });
}

criterion_group!(benches, bench_load_problems, bench_rows_to_problems);
criterion_main!(benches);
