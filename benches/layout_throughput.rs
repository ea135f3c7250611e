//! Layout throughput benchmarks
//!
//! Measures word wrapping on its own and full documents rendered through a PDF backend.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio::{PdfBackend, RenderBackend, RendererConfig};
use folio_layout::wrap_words;
use folio_render_lopdf::StandardFont;
use std::hint::black_box;
use tokio::runtime::Runtime;

const WORDS: [&str; 8] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
];

fn paragraph(word_count: usize) -> String {
    (0..word_count)
        .map(|i| WORDS[i % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_wrap_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_words");

    for word_count in [10, 100, 1000] {
        let text = paragraph(word_count);
        group.bench_with_input(BenchmarkId::new("words", word_count), &text, |b, text| {
            b.iter(|| {
                wrap_words(black_box(text), 495.0, |line| {
                    StandardFont::Helvetica.text_width(line, 14.0)
                })
            });
        });
    }

    group.finish();
}

fn benchmark_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");
    let rt = Runtime::new().expect("Failed to create Tokio runtime");

    for paragraphs in [1, 10, 40] {
        group.bench_with_input(
            BenchmarkId::new("paragraphs", paragraphs),
            &paragraphs,
            |b, &paragraphs| {
                b.iter(|| {
                    let backend = PdfBackend::new(RendererConfig::default());
                    let root = backend.create_element("div", None);
                    for i in 0..paragraphs {
                        let p = backend.create_element(if i % 5 == 0 { "h2" } else { "p" }, None);
                        let text = backend.create_text(&paragraph(12));
                        backend.append_child(p, text);
                        backend.append_child(root, p);
                    }
                    rt.block_on(async {
                        backend.set_value(root, "").await.expect("Failed to lay out");
                        backend.save().await.expect("Failed to save PDF")
                    })
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_wrap_words, benchmark_render_document);
criterion_main!(benches);
