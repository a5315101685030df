//! Synthetic ANIM blobs for unit tests.
//!
//! Builds byte-exact asset files from in-memory cell pixel data so decoder
//! tests do not depend on the real `ANIM.DAT`. Every cell is written as its
//! own sub-block (no offset sharing), which keeps the assembler's
//! content-addressed dedup honest.

use super::constants;

/// One animation to place in a synthetic asset blob.
pub struct AnimationSpec<'a> {
	/// Animation name (ASCII, at most 8 bytes)
	pub name: &'a str,
	/// Frames in the motion cycle
	pub frame_count: u16,
	/// View directions
	pub view_count: u16,
	/// Sub-block width in pixels
	pub width: u16,
	/// Sub-block height in pixels
	pub height: u16,
	/// Per-cell pixel buffers, frame-major; `None` marks an empty cell
	pub cells: Vec<Option<Vec<u8>>>,
}

impl<'a> AnimationSpec<'a> {
	/// Creates a spec whose cells are all filled with distinct content
	/// derived from `seed`, frame and view.
	pub fn filled(
		name: &'a str,
		frame_count: u16,
		view_count: u16,
		width: u16,
		height: u16,
		seed: u8,
	) -> Self {
		let pixel_count = usize::from(width) * usize::from(height);
		let mut cells = Vec::new();
		for frame in 0..frame_count {
			for view in 0..view_count {
				let value = seed
					.wrapping_add((frame as u8).wrapping_mul(view_count as u8))
					.wrapping_add(view as u8);
				cells.push(Some(vec![value; pixel_count]));
			}
		}
		Self {
			name,
			frame_count,
			view_count,
			width,
			height,
			cells,
		}
	}
}

/// Encodes pixel bytes as an all-literal compressed stream (header included).
pub fn compress_literals(pixels: &[u8]) -> Vec<u8> {
	let full_groups = pixels.len() / constants::FLAG_GROUP_SIZE;
	let tail = pixels.len() % constants::FLAG_GROUP_SIZE;

	// At least one full group is always declared; a stream shorter than one
	// group relies on the decoder's defensive truncation.
	let groups_minus1 = full_groups.saturating_sub(1) as u16;
	let declared_tail = if full_groups == 0 {
		0
	} else {
		tail as u8
	};

	let mut stream = Vec::with_capacity(constants::STREAM_HEADER_SIZE + pixels.len() * 2);
	stream.extend_from_slice(&groups_minus1.to_le_bytes());
	stream.push(declared_tail);

	for chunk in pixels.chunks(constants::FLAG_GROUP_SIZE) {
		// Flag byte of zeroes: every decision in this segment is a literal.
		stream.push(0x00);
		stream.extend_from_slice(chunk);
	}

	stream
}

/// Builds a complete ANIM blob from animation specs.
///
/// Layout matches the decoder's expectations: index header, fixed records,
/// then per-animation cell-offset grids followed by their sub-blocks.
pub fn build_asset(specs: &[AnimationSpec<'_>]) -> Vec<u8> {
	let record_area =
		constants::INDEX_HEADER_SIZE + specs.len() * constants::INDEX_RECORD_SIZE;

	let mut blob = Vec::new();
	blob.extend_from_slice(&(specs.len() as u16).to_le_bytes());
	blob.extend_from_slice(&[0, 0]);
	blob.resize(record_area, 0);

	for (record, spec) in specs.iter().enumerate() {
		let cells = usize::from(spec.frame_count) * usize::from(spec.view_count);
		assert_eq!(spec.cells.len(), cells, "cell count mismatch in fixture");

		let grid_offset = blob.len() as u32;
		let grid_end = blob.len() + cells * constants::CELL_OFFSET_SIZE;
		blob.resize(grid_end, 0);

		for (cell, pixels) in spec.cells.iter().enumerate() {
			let entry = match pixels {
				None => constants::NO_SPRITE,
				Some(pixels) => {
					let block_offset = blob.len() as u32;
					blob.extend_from_slice(&spec.width.to_le_bytes());
					blob.extend_from_slice(&spec.height.to_le_bytes());
					blob.extend_from_slice(&compress_literals(pixels));
					block_offset
				}
			};
			let slot = grid_offset as usize + cell * constants::CELL_OFFSET_SIZE;
			blob[slot..slot + 4].copy_from_slice(&entry.to_le_bytes());
		}

		write_record(&mut blob, record, spec, grid_offset);
	}

	blob
}

fn write_record(blob: &mut [u8], record: usize, spec: &AnimationSpec<'_>, grid_offset: u32) {
	let offset = constants::INDEX_HEADER_SIZE + record * constants::INDEX_RECORD_SIZE;
	let name = spec.name.as_bytes();
	assert!(name.len() <= constants::NAME_LEN, "fixture name too long");

	blob[offset..offset + name.len()].copy_from_slice(name);
	blob[offset + 8..offset + 10].copy_from_slice(&spec.frame_count.to_be_bytes());
	blob[offset + 10..offset + 12].copy_from_slice(&spec.view_count.to_le_bytes());
	blob[offset + 12..offset + 16].copy_from_slice(&grid_offset.to_le_bytes());
}
