// ABOUTME: Criterion benchmarks for unit conversion, value formatting, and page rendering
// ABOUTME: Measures linear and affine conversions, unit resolution, and converter page output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the conversion engine and the converter page.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use converter_core::{format_value, ConversionTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unit_converter_server::pages::{ConversionDisplay, ConverterPage};

/// Category, from, to for each conversion benchmark
const CONVERSIONS: &[(&str, &str, &str)] = &[
    ("length", "km", "m"),
    ("length", "mile", "kilometer"),
    ("data", "GB", "Mbit"),
    ("temperature", "°C", "°F"),
    ("temperature", "fahrenheit", "rankine"),
    ("angle", "deg", "rad"),
];

fn bench_convert(c: &mut Criterion) {
    let table = ConversionTable::standard();
    let mut group = c.benchmark_group("convert");

    for (category, from, to) in CONVERSIONS {
        group.bench_with_input(
            BenchmarkId::new(*category, format!("{from}->{to}")),
            &(category, from, to),
            |b, (category, from, to)| {
                b.iter(|| {
                    table
                        .convert(category, from, to, black_box(123.456))
                        .unwrap()
                });
            },
        );
    }

    group.bench_function("same_unit", |b| {
        b.iter(|| table.convert("mass", "kg", "kg", black_box(1.5)).unwrap());
    });

    group.finish();
}

fn bench_batch_convert(c: &mut Criterion) {
    let table = ConversionTable::standard();
    let values: Vec<f64> = (0..1_000).map(|i| f64::from(i) * 0.37 - 100.0).collect();
    let mut group = c.benchmark_group("convert_batch");
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("temperature_1000", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|v| table.convert("temperature", "°C", "K", *v).unwrap())
                .sum::<f64>()
        });
    });

    group.bench_function("volume_1000", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|v| table.convert("volume", "L", "gal_US", *v).unwrap())
                .sum::<f64>()
        });
    });

    group.finish();
}

fn bench_format_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_value");
    group.bench_function("integer", |b| b.iter(|| format_value(black_box(2000.0))));
    group.bench_function("fraction", |b| {
        b.iter(|| format_value(black_box(0.264_172_052_358)));
    });
    group.finish();
}

fn bench_render_page(c: &mut Criterion) {
    let table = ConversionTable::standard();
    let landing = ConverterPage::landing(table);
    let converted = ConverterPage::converted(
        "length",
        ConversionDisplay {
            value: 2.0,
            from: "km".to_owned(),
            to: "m".to_owned(),
            result: 2000.0,
        },
    );

    let mut group = c.benchmark_group("render_page");
    group.throughput(Throughput::Bytes(landing.render(table).len() as u64));
    group.bench_function("landing", |b| b.iter(|| landing.render(black_box(table))));
    group.bench_function("converted", |b| {
        b.iter(|| converted.render(black_box(table)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_convert,
    bench_batch_convert,
    bench_format_value,
    bench_render_page
);
criterion_main!(benches);
