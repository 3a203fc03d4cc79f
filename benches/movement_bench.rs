use criterion::{criterion_group, criterion_main, Criterion};
use jaword::buffer::api::TextSource;
use jaword::buffer::TextBuffer;
use jaword::constants::separators::DEFAULT_WORD_SEPARATORS;
use jaword::editor::Editor;
use jaword::movement::{next_word_end, prev_word_start, WordSeparators};
use jaword::position::Position;
use std::hint::black_box;

fn setup_text() -> TextBuffer {
    // Mixed-script paragraphs separated by blank lines
    let line = "今日はいい天気ですね。 word_one ＴＥＳＴ カタカナ (x + y) ".repeat(10) + "\n";
    let mut text = String::new();
    for _ in 0..100 {
        for _ in 0..10 {
            text.push_str(&line);
        }
        text.push('\n');
    }
    TextBuffer::from(text.as_str())
}

fn movement_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement_scan");
    let buf = setup_text();
    let seps = WordSeparators::new(DEFAULT_WORD_SEPARATORS);

    group.bench_function("next_word_end_1000", |b| {
        b.iter(|| {
            let mut pos = Position::origin();
            for _ in 0..1000 {
                pos = next_word_end(&buf, black_box(pos), &seps);
            }
            black_box(pos)
        })
    });

    group.bench_function("prev_word_start_1000", |b| {
        b.iter(|| {
            let mut pos = buf.end_position();
            for _ in 0..1000 {
                pos = prev_word_start(&buf, black_box(pos), &seps);
            }
            black_box(pos)
        })
    });

    group.bench_function("separators_rebuild", |b| {
        b.iter(|| black_box(WordSeparators::new(black_box(DEFAULT_WORD_SEPARATORS))))
    });

    group.finish();
}

fn movement_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement_edit");

    group.bench_function("delete_word_right_multi_cursor", |b| {
        b.iter_batched(
            || {
                let mut editor = Editor::new(setup_text());
                for line in (1..1000).step_by(10) {
                    editor.add_cursor(Position::new(line, 0)).unwrap_or(());
                }
                editor
            },
            |mut editor| {
                for _ in 0..10 {
                    black_box(editor.delete_word_right()).unwrap_or(());
                }
                editor
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, movement_scan, movement_edit);
criterion_main!(benches);
