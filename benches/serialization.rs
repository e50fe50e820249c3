use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_star::{
    loop_block, star, to_string, to_string_with_options, to_value, FloatFormat, StarOptions, Table,
};
use std::io;

#[derive(Serialize, Clone)]
struct Particle {
    rln_coordinate_x: f64,
    rln_coordinate_y: f64,
    rln_angle_rot: f64,
    rln_micrograph_name: String,
    rln_class_number: u32,
}

#[derive(Serialize, Clone)]
struct Optics {
    rln_optics_group: u32,
    rln_optics_group_name: String,
    rln_amplitude_contrast: f64,
    rln_voltage: f64,
    rln_image_pixel_size: f64,
    rln_image_size: u32,
}

fn particles(size: u32) -> Vec<Particle> {
    (0..size)
        .map(|i| Particle {
            rln_coordinate_x: 12.5 * f64::from(i),
            rln_coordinate_y: 1024.0 - f64::from(i),
            rln_angle_rot: f64::from(i % 360),
            rln_micrograph_name: format!("MotionCorr/job002/mic_{:05}.mrc", i / 100),
            rln_class_number: i % 8 + 1,
        })
        .collect()
}

fn benchmark_table_from_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_from_records");

    for size in [100, 1_000, 10_000].iter() {
        let records = particles(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| Table::from_records(black_box(records)))
        });
    }
    group.finish();
}

fn benchmark_render_loop_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_loop_block");
    let options = StarOptions::default();

    for size in [100, 1_000, 10_000].iter() {
        let table = Table::from_records(&particles(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| {
                let mut sink = io::sink();
                for line in loop_block("particles", black_box(table), &options) {
                    io::Write::write_all(&mut sink, line.unwrap().as_bytes()).unwrap();
                }
            })
        });
    }
    group.finish();
}

fn benchmark_float_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_formats");
    let table = Table::from_records(&particles(1_000)).unwrap();

    for pattern in ["%.6f", "%.3e", "%g"].iter() {
        let options = StarOptions::new().with_float_format(pattern.parse::<FloatFormat>().unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(pattern), &options, |b, options| {
            b.iter(|| to_string_with_options(black_box(table.clone()), options.clone()))
        });
    }
    group.finish();
}

fn benchmark_key_value_block(c: &mut Criterion) {
    let optics = Optics {
        rln_optics_group: 1,
        rln_optics_group_name: "opticsGroup1".to_string(),
        rln_amplitude_contrast: 0.1,
        rln_voltage: 300.0,
        rln_image_pixel_size: 1.06,
        rln_image_size: 256,
    };

    c.bench_function("render_key_value_block", |b| {
        b.iter(|| to_string(to_value(black_box(&optics)).unwrap()))
    });
}

fn benchmark_relion_document(c: &mut Criterion) {
    let table = Table::from_records(&particles(1_000)).unwrap();

    c.bench_function("render_relion_document", |b| {
        b.iter(|| {
            let mut input = star!({
                "optics": { "rlnOpticsGroup": 1, "rlnImageSize": 256 }
            });
            if let serde_star::Value::Object(ref mut blocks) = input {
                blocks.insert(
                    "particles".to_string(),
                    serde_star::Value::Table(black_box(table.clone())),
                );
            }
            to_string(input)
        })
    });
}

criterion_group!(
    benches,
    benchmark_table_from_records,
    benchmark_render_loop_block,
    benchmark_float_formats,
    benchmark_key_value_block,
    benchmark_relion_document
);
criterion_main!(benches);
