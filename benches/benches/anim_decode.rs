//! Benchmark suite for ANIM decoding
//!
//! Measures sub-block decompression, index parsing, full animation assembly
//! and RGBA rendering over synthetic data, plus an end-to-end pass over the
//! real `ANIM.DAT` when it is present at `bin/ANIM.DAT`.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{fs, hint::black_box};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gridiron_benches::{generate_test_asset, generate_test_stream, sizes};
use gridiron_types::file::anim::decode::decompress;
use gridiron_types::file::anim::{File, decode_animation, parse_index, render};
use gridiron_types::file::{color_tables, gameplay_palette, identity_color_table};

/// Benchmark sub-block decompression across sprite sizes
fn bench_decompress_synthetic(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_decompress");

	let cases = [
		("tiny", sizes::TINY),
		("player", sizes::PLAYER),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
	];

	for (name, (width, height)) in cases {
		let pixels = usize::from(width) * usize::from(height);
		let stream = generate_test_stream(pixels);

		group.throughput(Throughput::Elements(pixels as u64));
		group.bench_with_input(BenchmarkId::new("decompress", name), &stream, |b, stream| {
			b.iter(|| {
				let out =
					decompress(black_box(stream), 0, pixels, identity_color_table());
				black_box(out)
			});
		});
	}

	group.finish();
}

/// Benchmark the cost of a non-identity substitution table
fn bench_substitution_overhead(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_substitution");

	let (width, height) = sizes::MEDIUM;
	let pixels = usize::from(width) * usize::from(height);
	let stream = generate_test_stream(pixels);

	group.throughput(Throughput::Elements(pixels as u64));
	group.bench_function("identity", |b| {
		b.iter(|| black_box(decompress(black_box(&stream), 0, pixels, identity_color_table())));
	});
	group.bench_function("home_kit", |b| {
		b.iter(|| black_box(decompress(black_box(&stream), 0, pixels, color_tables()[2])));
	});

	group.finish();
}

/// Benchmark index parsing on a synthetic blob
fn bench_index_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_index");

	let blob = generate_test_asset(64, 8, 8, sizes::TINY.0, sizes::TINY.1);

	group.bench_function("parse_index", |b| {
		b.iter(|| black_box(parse_index(black_box(&blob))));
	});

	group.finish();
}

/// Benchmark full animation assembly including dedup
fn bench_animation_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_assemble");

	let (width, height) = sizes::PLAYER;
	let blob = generate_test_asset(1, 8, 8, width, height);
	let descriptors = parse_index(&blob);
	let cells = 64u64;

	group.throughput(Throughput::Elements(cells));
	group.bench_function("decode_animation_8x8_grid", |b| {
		b.iter(|| {
			let animation =
				decode_animation(black_box(&blob), &descriptors[0], identity_color_table());
			black_box(animation)
		});
	});

	group.finish();
}

/// Benchmark RGBA rendering, normal and mirrored
fn bench_render(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_render");

	let (width, height) = sizes::MEDIUM;
	let blob = generate_test_asset(1, 1, 1, width, height);
	let descriptors = parse_index(&blob);
	let animation = decode_animation(&blob, &descriptors[0], identity_color_table())
		.expect("synthetic animation decodes");
	let sprite = animation.sprite_at(0, 0).expect("cell populated");
	let colors = gameplay_palette().as_slice();

	group.throughput(Throughput::Elements(sprite.pixel_count() as u64));
	group.bench_function("render", |b| {
		b.iter(|| black_box(render(black_box(sprite), colors, false)));
	});
	group.bench_function("render_mirrored", |b| {
		b.iter(|| black_box(render(black_box(sprite), colors, true)));
	});

	group.finish();
}

/// Full end-to-end benchmark over the real asset file
fn bench_real_asset(c: &mut Criterion) {
	let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../bin/ANIM.DAT");
	let blob = match fs::read(path) {
		Ok(blob) => blob,
		Err(_) => {
			eprintln!("Warning: Could not find real asset file: {path}");
			return;
		}
	};

	let mut group = c.benchmark_group("anim_real");
	group.throughput(Throughput::Bytes(blob.len() as u64));
	group.sample_size(20);

	group.bench_function("full_decode_pipeline", |b| {
		b.iter(|| {
			let file = File::from_bytes(black_box(blob.clone()));
			let decoded = file.decode_all(identity_color_table());
			black_box(decoded)
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_decompress_synthetic,
	bench_substitution_overhead,
	bench_index_parsing,
	bench_animation_decode,
	bench_render,
	bench_real_asset,
);

criterion_main!(benches);
