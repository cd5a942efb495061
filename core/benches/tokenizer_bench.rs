use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::tokenize;

const TEXT: &str = "Ontario is one of the thirteen provinces and territories of Canada. \
Located in Central Canada, it is the country's most populous province, with 38.5 percent \
of the country's population, and is the second-largest province by total area.";

fn bench_tokenize(c: &mut Criterion) {
    let text = TEXT.repeat(200);
    c.bench_function("tokenize_paragraphs", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
