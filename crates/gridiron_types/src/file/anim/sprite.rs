//! Decoded sprites and palette-based rendering.

use crate::file::palette::{Color, Palette};

/// Arena index of a decoded sprite inside a
/// [`DecodedAnimation`](super::DecodedAnimation).
pub type SpriteId = usize;

/// One decoded, fixed-size indexed-pixel image.
///
/// Owned exclusively by the sprite arena of its animation; content-identical
/// sub-blocks share a single instance, referenced by [`SpriteId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedSprite {
	width: u16,
	height: u16,
	pixels: Vec<u8>,
}

impl DecodedSprite {
	/// Creates a sprite from decoded pixel data.
	///
	/// # Panics
	///
	/// Panics if the pixel buffer length does not match the dimensions.
	pub fn new(width: u16, height: u16, pixels: Vec<u8>) -> Self {
		assert_eq!(
			pixels.len(),
			usize::from(width) * usize::from(height),
			"pixel buffer size mismatch"
		);
		Self {
			width,
			height,
			pixels,
		}
	}

	/// Sprite width in pixels.
	#[inline]
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Sprite height in pixels.
	#[inline]
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Flat palette-index pixel buffer, row-major.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Total number of pixels.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.pixels.len()
	}

	/// Gets the palette index at the specified coordinates.
	pub fn pixel(&self, x: u16, y: u16) -> Option<u8> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let index = usize::from(y) * usize::from(self.width) + usize::from(x);
		self.pixels.get(index).copied()
	}
}

impl std::fmt::Display for DecodedSprite {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}×{} ({} pixels)", self.width, self.height, self.pixels.len())
	}
}

/// An RGBA raster produced by [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
	width: u16,
	height: u16,
	pixels: Vec<u8>,
}

impl RenderedFrame {
	/// Raster width in pixels.
	#[inline]
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Raster height in pixels.
	#[inline]
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Flat RGBA buffer, row-major, 4 bytes per pixel.
	#[inline]
	pub fn rgba(&self) -> &[u8] {
		&self.pixels
	}

	/// Gets the RGBA value at the specified coordinates.
	pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let index = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 4;
		self.pixels.get(index..index + 4).map(|p| [p[0], p[1], p[2], p[3]])
	}
}

/// Renders a decoded sprite to an RGBA raster.
///
/// Palette index 0 renders fully transparent regardless of its RGB value;
/// every other index is fully opaque. When `mirrored` is set the sprite is
/// flipped horizontally (source column `width - 1 - x`); rows are unchanged
/// and the output dimensions always equal the sprite's.
///
/// Returns `None` when fewer than [`Palette::SIZE`] colors are supplied, the
/// one recoverable precondition at this layer.
pub fn render(sprite: &DecodedSprite, colors: &[Color], mirrored: bool) -> Option<RenderedFrame> {
	if colors.len() < Palette::SIZE {
		return None;
	}

	let width = usize::from(sprite.width);
	let height = usize::from(sprite.height);
	let mut pixels = Vec::with_capacity(width * height * 4);

	for y in 0..height {
		let row = &sprite.pixels[y * width..(y + 1) * width];
		for x in 0..width {
			let source_x = if mirrored {
				width - 1 - x
			} else {
				x
			};
			let index = row[source_x];
			let color = colors[usize::from(index)];
			let alpha = if index == 0 {
				0
			} else {
				255
			};
			pixels.extend_from_slice(&[color.r, color.g, color.b, alpha]);
		}
	}

	Some(RenderedFrame {
		width: sprite.width,
		height: sprite.height,
		pixels,
	})
}
