use caret_insert::{MemoryTextInput, SelectionRange, insert_at_cursor, splice};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

const LARGE_LINES: usize = 20_000;

fn make_lines(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 24);
    for i in 0..lines {
        out.push_str("line ");
        out.push_str(&i.to_string());
        out.push_str(" café text\n");
    }
    out
}

fn bench_splice_middle(c: &mut Criterion) {
    let text = make_lines(LARGE_LINES);
    let mid = text.len() / 2;
    let mid = caret_insert::clamp_to_char_boundary(&text, mid);
    c.bench_function("bench_splice_middle", |b| {
        b.iter(|| {
            let out = splice(black_box(&text), SelectionRange::caret(mid), "inserted");
            black_box(out.caret);
        });
    });
}

fn bench_insert_replace_selection(c: &mut Criterion) {
    let text = make_lines(LARGE_LINES);
    let end = caret_insert::clamp_to_char_boundary(&text, text.len() / 3);
    c.bench_function("bench_insert_replace_selection", |b| {
        b.iter_batched(
            || MemoryTextInput::with_selection(text.clone(), SelectionRange::new(0, end)),
            |mut input| {
                insert_at_cursor(&mut input, black_box("replacement\n"));
                black_box(input);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_splice_middle, bench_insert_replace_selection);
criterion_main!(benches);
