//! Benchmark helper utilities for gridiron-rs
//!
//! This module generates synthetic ANIM data so the decode benchmarks do not
//! depend on the real game asset. The generated streams mix literals and
//! back-references the way real sub-blocks do (roughly one back-reference
//! per five decisions), which keeps both decoder paths hot.
//!
//! # Real Test File
//!
//! When `bin/ANIM.DAT` is present at the workspace root the suite also runs
//! an end-to-end benchmark over the real asset; without it those benchmarks
//! are skipped with a warning.

/// One compression decision in a synthetic stream.
enum Decision {
	Literal(u8),
	/// `(distance, length)` as the decoder interprets them
	BackReference(u16, u8),
}

/// Generates a compressed sub-block stream decoding to exactly
/// `pixel_count` bytes.
///
/// # Panics
///
/// Panics when `pixel_count` is below 8; shorter streams cannot declare a
/// full flag group and are not interesting to benchmark.
pub fn generate_test_stream(pixel_count: usize) -> Vec<u8> {
	assert!(pixel_count >= 8, "benchmark streams need at least one flag group");

	let mut decisions = Vec::new();
	let mut produced = 0usize;

	while produced < pixel_count {
		let remaining = pixel_count - produced;
		if produced >= 4 && remaining >= 3 && decisions.len() % 5 == 4 {
			// Copy three bytes from four positions back.
			decisions.push(Decision::BackReference(3, 3));
			produced += 3;
		} else {
			decisions.push(Decision::Literal((produced % 251) as u8));
			produced += 1;
		}
	}

	// The stream header always declares at least one full flag group; pad
	// short streams with literals and let the decoder trim the excess.
	while decisions.len() < 8 {
		decisions.push(Decision::Literal(0));
	}

	serialize(&decisions)
}

/// Serializes decisions into the on-disk stream layout: u16 LE full-group
/// count minus one, u8 tail decisions, then flag-byte-prefixed segments.
fn serialize(decisions: &[Decision]) -> Vec<u8> {
	let full_groups = decisions.len() / 8;
	let tail = decisions.len() % 8;
	assert!(full_groups >= 1);

	let mut stream = Vec::with_capacity(3 + decisions.len() * 2);
	stream.extend_from_slice(&((full_groups - 1) as u16).to_le_bytes());
	stream.push(tail as u8);

	for chunk in decisions.chunks(8) {
		let mut flags = 0u8;
		for (bit, decision) in chunk.iter().enumerate() {
			if matches!(decision, Decision::BackReference(..)) {
				flags |= 0x80 >> bit;
			}
		}
		stream.push(flags);

		for decision in chunk {
			match decision {
				Decision::Literal(value) => stream.push(*value),
				Decision::BackReference(distance, length) => {
					let word = (distance << 4) | u16::from(length - 3);
					stream.extend_from_slice(&word.to_le_bytes());
				}
			}
		}
	}

	stream
}

/// Builds a complete synthetic ANIM blob: index header, one record per
/// animation, then cell-offset grids and compressed sub-blocks.
pub fn generate_test_asset(
	animations: usize,
	frame_count: u16,
	view_count: u16,
	width: u16,
	height: u16,
) -> Vec<u8> {
	let pixel_count = usize::from(width) * usize::from(height);
	let cells = usize::from(frame_count) * usize::from(view_count);

	let mut blob = Vec::new();
	blob.extend_from_slice(&(animations as u16).to_le_bytes());
	blob.extend_from_slice(&[0, 0]);
	blob.resize(4 + animations * 16, 0);

	for record in 0..animations {
		let grid_offset = blob.len() as u32;
		let grid_end = blob.len() + cells * 4;
		blob.resize(grid_end, 0);

		for cell in 0..cells {
			let block_offset = blob.len() as u32;
			blob.extend_from_slice(&width.to_le_bytes());
			blob.extend_from_slice(&height.to_le_bytes());
			blob.extend_from_slice(&generate_test_stream(pixel_count));

			let slot = grid_offset as usize + cell * 4;
			blob[slot..slot + 4].copy_from_slice(&block_offset.to_le_bytes());
		}

		let name = format!("BENCH{record:02}");
		let offset = 4 + record * 16;
		blob[offset..offset + name.len()].copy_from_slice(name.as_bytes());
		blob[offset + 8..offset + 10].copy_from_slice(&frame_count.to_be_bytes());
		blob[offset + 10..offset + 12].copy_from_slice(&view_count.to_le_bytes());
		blob[offset + 12..offset + 16].copy_from_slice(&grid_offset.to_le_bytes());
	}

	blob
}

/// Common sprite dimensions for synthetic benchmark data
pub mod sizes {
	/// Tiny sprite: 8x8 (64 pixels)
	pub const TINY: (u16, u16) = (8, 8);
	/// Real standing-player sprite: 16x31 (496 pixels)
	pub const PLAYER: (u16, u16) = (16, 31);
	/// Medium sprite: 32x64 (2,048 pixels)
	pub const MEDIUM: (u16, u16) = (32, 64);
	/// Large sprite: 64x128 (8,192 pixels)
	pub const LARGE: (u16, u16) = (64, 128);
}

#[cfg(test)]
mod tests {
	use super::*;
	use gridiron_types::file::identity_color_table;
	use gridiron_types::file::anim::decode::decompress;

	#[test]
	fn test_stream_decodes_to_requested_length() {
		for pixel_count in [8usize, 64, 496, 2048] {
			let stream = generate_test_stream(pixel_count);
			let out = decompress(&stream, 0, pixel_count, identity_color_table());
			assert_eq!(out.len(), pixel_count);
			// Literals dominate, so the output is not all padding.
			assert!(out.iter().any(|&b| b != 0));
		}
	}

	#[test]
	fn test_asset_parses_and_decodes() {
		use gridiron_types::file::anim::{decode_animation, parse_index};

		let blob = generate_test_asset(3, 4, 8, 8, 8);
		let descriptors = parse_index(&blob);
		assert_eq!(descriptors.len(), 3);

		for descriptor in &descriptors {
			let animation =
				decode_animation(&blob, descriptor, identity_color_table()).unwrap();
			assert_eq!(animation.refs().len(), 32);
			assert!(animation.refs().iter().all(Option::is_some));
		}
	}
}
