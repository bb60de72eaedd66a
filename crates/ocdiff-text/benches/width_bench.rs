//! Benchmarks for width measurement and wrapping.
//!
//! Run with: cargo bench -p ocdiff-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ocdiff_text::{MarkedLine, display_width, marker, real_length, wrap_line};
use std::hint::black_box;

// =============================================================================
// Test Data
// =============================================================================

/// ASCII-only text of various lengths
fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// CJK text (width 2 per char)
fn cjk_text(len: usize) -> String {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Colorized text, as the terminal table holds it before padding
fn colored_text(len: usize) -> String {
    let mut out = String::new();
    for (i, word) in ascii_text(len).split(' ').enumerate() {
        if i % 3 == 0 {
            out.push_str("\x1b[1;32m");
            out.push_str(word);
            out.push_str("\x1b[m ");
        } else {
            out.push_str(word);
            out.push(' ');
        }
    }
    out
}

/// Marker-encoded line alternating equal and changed spans
fn marked_text(len: usize) -> String {
    let mut out = String::new();
    for (i, word) in ascii_text(len).split(' ').enumerate() {
        match i % 4 {
            1 => {
                out.push_str("\0+");
                out.push_str(word);
                out.push('\u{1}');
            }
            3 => {
                out.push_str("\0^");
                out.push_str(word);
                out.push('\u{1}');
            }
            _ => out.push_str(word),
        }
        out.push(' ');
    }
    out
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_display_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/display");

    for len in [10, 100, 1000, 10000] {
        let ascii = ascii_text(len);
        group.throughput(Throughput::Bytes(ascii.len() as u64));
        group.bench_with_input(BenchmarkId::new("ascii", len), &ascii, |b, text| {
            b.iter(|| black_box(display_width(text)))
        });

        let cjk = cjk_text(len);
        group.throughput(Throughput::Bytes(cjk.len() as u64));
        group.bench_with_input(BenchmarkId::new("cjk", len), &cjk, |b, text| {
            b.iter(|| black_box(display_width(text)))
        });
    }

    group.finish();
}

fn bench_real_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("width/real_length");

    for len in [100, 1000, 10000] {
        let text = colored_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(real_length(text)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker/decode");

    for len in [100, 1000, 10000] {
        let text = marked_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(marker::decode(text)))
        });
    }

    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    for len in [100, 1000, 10000] {
        let Ok(line) = marker::decode(&marked_text(len)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("marked", len), &line, |b, line| {
            b.iter(|| black_box(wrap_line(line, 30)))
        });

        let wide = MarkedLine::plain(cjk_text(len));
        group.bench_with_input(BenchmarkId::new("cjk", len), &wide, |b, line| {
            b.iter(|| black_box(wrap_line(line, 30)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_display_width,
    bench_real_length,
    bench_decode,
    bench_wrap,
);

criterion_main!(benches);
