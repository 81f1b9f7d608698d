use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wordform::{normalize_sentence, Normalizer};

const MIXED_PARAGRAPH: &str = "The meeting moved to July twenty fifth, two thousand twelve \
at quarter past three, when the board approved two point five billion dollars in funding. \
Attendance grew by eighteen point one four percent over the nineteen nineties baseline, \
with twenty one new offices and five dollars and fifty cents left in petty cash.";

const PLAIN_PARAGRAPH: &str = "Nothing in this paragraph resembles a spoken number, date, \
or amount, so the scanner walks every token and emits the whole input verbatim without a \
single grammar accepting any span at any position along the way.";

fn bench_sentence_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentence_scan");

    group.throughput(Throughput::Bytes(MIXED_PARAGRAPH.len() as u64));
    group.bench_function("mixed_spans", |b| {
        b.iter(|| normalize_sentence(black_box(MIXED_PARAGRAPH)))
    });

    group.throughput(Throughput::Bytes(PLAIN_PARAGRAPH.len() as u64));
    group.bench_function("no_spans", |b| {
        b.iter(|| normalize_sentence(black_box(PLAIN_PARAGRAPH)))
    });

    group.finish();
}

fn bench_expression(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    c.bench_function("expression/currency", |b| {
        b.iter(|| normalizer.normalize(black_box("two point five billion dollars")))
    });
    c.bench_function("expression/cardinal", |b| {
        b.iter(|| normalizer.normalize(black_box("one thousand two hundred thirty four")))
    });
}

criterion_group!(benches, bench_sentence_scan, bench_expression);
criterion_main!(benches);
