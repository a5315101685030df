//! Animation assembly: sub-block grids into deduplicated sprite arenas.
//!
//! Each animation's data region starts with a grid of `frame_count ×
//! view_count` u32 LE cell offsets (cell index = `frame * view_count +
//! view`; offset 0 marks an empty cell). Every referenced sub-block carries
//! its own width/height header followed by the compressed stream of
//! [`super::decode`].
//!
//! The asset file reuses identical sub-blocks heavily (a standing player
//! looks the same in most frames), so decoded sprites are stored in an
//! arena and deduplicated: cells whose compressed payloads are identical
//! share one [`SpriteId`], and decompression runs once per unique payload.

use std::collections::HashMap;

use log::{debug, warn};

use crate::file::colors::ColorSubstitutionTable;

use super::constants;
use super::decode::decompress;
use super::index::AnimationDescriptor;
use super::sprite::{DecodedSprite, SpriteId};

/// One fully decoded animation: a sprite arena plus the reference grid
/// mapping `(frame, view)` cells to sprite ids.
///
/// Immutable after assembly; the invariant `sprites.len() <= refs.len()`
/// holds because cells only ever share or skip sprites, never duplicate
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAnimation {
	frame_count: u16,
	view_count: u16,
	refs: Vec<Option<SpriteId>>,
	sprites: Vec<DecodedSprite>,
}

impl DecodedAnimation {
	/// Number of motion-cycle frames.
	#[inline]
	pub fn frame_count(&self) -> u16 {
		self.frame_count
	}

	/// Number of view directions.
	#[inline]
	pub fn view_count(&self) -> u16 {
		self.view_count
	}

	/// The reference grid, frame-major (`frame * view_count + view`).
	#[inline]
	pub fn refs(&self) -> &[Option<SpriteId>] {
		&self.refs
	}

	/// The deduplicated sprite arena.
	#[inline]
	pub fn sprites(&self) -> &[DecodedSprite] {
		&self.sprites
	}

	/// Number of distinct sprites in the arena.
	#[inline]
	pub fn sprite_count(&self) -> usize {
		self.sprites.len()
	}

	/// Looks up a sprite by arena id.
	pub fn sprite(&self, id: SpriteId) -> Option<&DecodedSprite> {
		self.sprites.get(id)
	}

	/// Returns the sprite id referenced by a grid cell.
	pub fn ref_at(&self, frame: u16, view: u16) -> Option<SpriteId> {
		if frame >= self.frame_count || view >= self.view_count {
			return None;
		}
		let cell = usize::from(frame) * usize::from(self.view_count) + usize::from(view);
		self.refs[cell]
	}

	/// Resolves a grid cell straight to its decoded sprite.
	pub fn sprite_at(&self, frame: u16, view: u16) -> Option<&DecodedSprite> {
		self.sprite(self.ref_at(frame, view)?)
	}
}

impl std::fmt::Display for DecodedAnimation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} frames × {} views, {} distinct sprites",
			self.frame_count,
			self.view_count,
			self.sprites.len()
		)
	}
}

/// Decodes one animation's full frame×view grid.
///
/// Returns `None` only when the descriptor's cell-offset grid cannot be
/// read at all. Individual damaged cells (offset outside the blob,
/// unreadable or implausible sub-block header) merely leave that cell's
/// sprite absent.
pub fn decode_animation(
	blob: &[u8],
	descriptor: &AnimationDescriptor,
	color_table: &ColorSubstitutionTable,
) -> Option<DecodedAnimation> {
	let cells = descriptor.cell_count();
	let grid_start = descriptor.source_offset() as usize;
	let grid_end = grid_start.checked_add(cells * constants::CELL_OFFSET_SIZE)?;
	let grid = blob.get(grid_start..grid_end)?;

	let mut assembler = Assembler::new(blob, color_table);
	let mut refs = Vec::with_capacity(cells);

	for entry in grid.chunks_exact(constants::CELL_OFFSET_SIZE) {
		let offset = u32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]);
		refs.push(assembler.sprite_for_cell(offset));
	}

	let sprites = assembler.finish(descriptor.name());
	Some(DecodedAnimation {
		frame_count: descriptor.frame_count(),
		view_count: descriptor.view_count(),
		refs,
		sprites,
	})
}

/// Builds the sprite arena for one animation, deduplicating as it goes.
struct Assembler<'a> {
	blob: &'a [u8],
	color_table: &'a ColorSubstitutionTable,
	sprites: Vec<DecodedSprite>,
	/// Cell offset -> arena id, the fast path for shared sub-blocks.
	by_offset: HashMap<u32, Option<SpriteId>>,
	/// Decoded content -> arena id, catching identical payloads stored at
	/// distinct offsets.
	by_content: HashMap<DecodedSprite, SpriteId>,
}

impl<'a> Assembler<'a> {
	fn new(blob: &'a [u8], color_table: &'a ColorSubstitutionTable) -> Self {
		Self {
			blob,
			color_table,
			sprites: Vec::new(),
			by_offset: HashMap::new(),
			by_content: HashMap::new(),
		}
	}

	/// Resolves one grid cell to a sprite id, decoding at most once per
	/// unique sub-block offset.
	fn sprite_for_cell(&mut self, offset: u32) -> Option<SpriteId> {
		if offset == constants::NO_SPRITE {
			return None;
		}
		if let Some(&id) = self.by_offset.get(&offset) {
			return id;
		}

		let id = self.decode_block(offset).map(|sprite| self.intern(sprite));
		self.by_offset.insert(offset, id);
		id
	}

	/// Decodes the sub-block at `offset`, or `None` when its header is
	/// unreadable or implausible.
	fn decode_block(&self, offset: u32) -> Option<DecodedSprite> {
		let start = offset as usize;
		let dims = self.blob.get(start..start + constants::BLOCK_DIM_SIZE)?;
		let width = u16::from_le_bytes([dims[0], dims[1]]);
		let height = u16::from_le_bytes([dims[2], dims[3]]);

		let pixel_count = usize::from(width) * usize::from(height);
		if pixel_count == 0
			|| usize::from(width) > constants::MAX_SPRITE_DIM
			|| usize::from(height) > constants::MAX_SPRITE_DIM
		{
			warn!("implausible sub-block header {width}×{height} at {offset:#X}");
			return None;
		}

		let pixels = decompress(
			self.blob,
			start + constants::BLOCK_DIM_SIZE,
			pixel_count,
			self.color_table,
		);
		Some(DecodedSprite::new(width, height, pixels))
	}

	/// Stores a sprite in the arena unless identical content already exists.
	fn intern(&mut self, sprite: DecodedSprite) -> SpriteId {
		if let Some(&id) = self.by_content.get(&sprite) {
			return id;
		}
		let id = self.sprites.len();
		self.sprites.push(sprite.clone());
		self.by_content.insert(sprite, id);
		id
	}

	fn finish(self, name: &str) -> Vec<DecodedSprite> {
		debug!(
			"{name}: {} unique sub-blocks, {} distinct sprites",
			self.by_offset.len(),
			self.sprites.len()
		);
		self.sprites
	}
}
