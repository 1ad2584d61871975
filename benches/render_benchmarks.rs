//! Benchmarks for glyph rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emoji_overlay::emotion::Emotion;
use emoji_overlay::render::{GlyphMode, GlyphRenderer};
use image::RgbImage;

fn benchmark_glyph_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph_modes");
    let background = RgbImage::new(640, 480);

    for mode in GlyphMode::ALL {
        let renderer = GlyphRenderer::new(mode);
        for size in [48u32, 120] {
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &size, |b, &size| {
                let mut frame = background.clone();
                let mut frame_index = 0u64;
                b.iter(|| {
                    frame_index += 1;
                    renderer.draw(
                        black_box(&mut frame),
                        black_box((320, 240)),
                        size,
                        Emotion::Happy,
                        frame_index,
                    );
                });
            });
        }
    }

    group.finish();
}

fn benchmark_emotions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cartoon_emotions");
    let renderer = GlyphRenderer::new(GlyphMode::Cartoon);
    let mut frame = RgbImage::new(320, 240);

    for emotion in Emotion::ORDER {
        group.bench_function(emotion.label(), |b| {
            b.iter(|| renderer.draw(black_box(&mut frame), (160, 120), 96, black_box(emotion), 10));
        });
    }

    group.finish();
}

fn benchmark_border_clipping(c: &mut Criterion) {
    let renderer = GlyphRenderer::new(GlyphMode::Cyberpunk);
    let mut frame = RgbImage::new(640, 480);

    c.bench_function("cyberpunk_corner_clipped", |b| {
        b.iter(|| renderer.draw(black_box(&mut frame), black_box((0, 0)), 120, Emotion::Fear, 5));
    });
}

criterion_group!(
    benches,
    benchmark_glyph_modes,
    benchmark_emotions,
    benchmark_border_clipping
);
criterion_main!(benches);
