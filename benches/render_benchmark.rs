//! Benchmarks for parsing and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pagedhtml::render::{self, RenderOptions};
use pagedhtml::{parse_text, ParseOptions, TextParser};

/// Synthetic book text with a mix of line kinds and one directive per page.
fn create_test_text(line_count: usize) -> String {
    let mut text = String::new();
    for i in 0..line_count {
        match i % 5 {
            0 => text.push_str(&format!("Chapter {} of a reasonably long heading\n", i)),
            1 => text.push_str(&format!(" quoted passage number {}\n", i)),
            2 => text.push_str("\n"),
            3 => text.push_str(&format!("Short {}\n", i)),
            _ => text.push_str(&format!("image:img{}.png,page={},after=3\n", i, i / 70 + 1)),
        }
    }
    text
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in ["Hello", " World", "A much longer line of prose text", "image:x.png"] {
                black_box(pagedhtml::parser::classify(black_box(line)));
            }
        })
    });
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_parsing");

    for line_count in [100, 1_000, 10_000] {
        let text = create_test_text(line_count);
        group.bench_function(format!("{}_lines", line_count), |b| {
            b.iter(|| {
                let parser = TextParser::with_options(text.as_str(), ParseOptions::default());
                black_box(parser.parse())
            })
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_rendering");
    let options = RenderOptions::default();

    for line_count in [100, 1_000, 10_000] {
        let Ok(doc) = parse_text(&create_test_text(line_count)) else {
            continue;
        };
        group.bench_function(format!("{}_lines", line_count), |b| {
            b.iter(|| black_box(render::to_html(&doc, &options)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_parsing, bench_rendering);
criterion_main!(benches);
