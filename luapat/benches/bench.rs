use criterion::{black_box, criterion_group, criterion_main, Criterion};
use luapat::Pattern;

fn bench_first_match(c: &mut Criterion) {
    let pattern = Pattern::new("(%a+)%s*=%s*(%d+)").unwrap();
    let input = b"some prefix text before answer = 42 and a tail".as_slice();

    c.bench_function("first_match", |b| {
        b.iter(|| black_box(pattern.find(black_box(input))))
    });
}

fn bench_gmatch_numbers(c: &mut Criterion) {
    let pattern = Pattern::new("%d+").unwrap();
    let input = b"abc 123 def 456 ghi 789 jkl 012 mno 345 pqr 678 stu 901".as_slice();

    c.bench_function("gmatch_numbers", |b| {
        b.iter(|| {
            let count = pattern.gmatch(black_box(input)).count();
            black_box(count)
        })
    });
}

fn bench_gsub_template(c: &mut Criterion) {
    let pattern = Pattern::new("(%w+)@(%w+)").unwrap();
    let input = b"mail test@example and admin@company plus root@localhost".as_slice();

    c.bench_function("gsub_swap", |b| {
        b.iter(|| black_box(pattern.gsub(black_box(input), b"%2@%1", None)))
    });
}

fn bench_balanced(c: &mut Criterion) {
    let pattern = Pattern::new("%b()").unwrap();
    let input = b"f(a, g(b, h(c)), (d)) + k((e))".as_slice();

    c.bench_function("balanced_parens", |b| {
        b.iter(|| black_box(pattern.find(black_box(input))))
    });
}

fn bench_bracket_classes(c: &mut Criterion) {
    let pattern = Pattern::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    let input = b"let x = 42; function_name(); var123 + y".as_slice();

    c.bench_function("bracket_class_scan", |b| {
        b.iter(|| {
            let count = pattern.gmatch(black_box(input)).count();
            black_box(count)
        })
    });
}

fn bench_backtracking(c: &mut Criterion) {
    let pattern = Pattern::new("b.-b.-b$").unwrap();
    let input = b"aabaaabaaabaaabaaabaaab".as_slice();

    c.bench_function("lazy_backtracking", |b| {
        b.iter(|| black_box(pattern.find(black_box(input))))
    });
}

criterion_group!(
    benches,
    bench_first_match,
    bench_gmatch_numbers,
    bench_gsub_template,
    bench_balanced,
    bench_bracket_classes,
    bench_backtracking,
);

criterion_main!(benches);
