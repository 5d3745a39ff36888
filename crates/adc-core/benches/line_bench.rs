//! Criterion benchmarks for the ADC line codec.
//!
//! Run with:
//! ```bash
//! cargo bench --package adc-core --bench line_bench
//! ```

use adc_core::{encode_reading, parse_line, AdcReading, LineDecoder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_reading", |b| {
        b.iter(|| encode_reading(black_box(AdcReading(1023))))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_line", |b| {
        b.iter(|| parse_line(black_box(b"ADC: 1023\n")))
    });
}

fn bench_decoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_decoder");
    for lines in [1usize, 16, 256] {
        let stream: Vec<u8> = (0..lines)
            .flat_map(|i| encode_reading(AdcReading((i % 1024) as i32)).into_bytes())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(lines), &stream, |b, stream| {
            b.iter(|| {
                let mut decoder = LineDecoder::new();
                decoder.push(black_box(stream));
                let mut n = 0;
                while let Some(Ok(line)) = decoder.next_line() {
                    n += parse_line(&line).is_ok() as usize;
                }
                n
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_parse, bench_decoder);
criterion_main!(benches);
