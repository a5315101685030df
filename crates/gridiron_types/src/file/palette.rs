//! Gameplay palette support.
//!
//! The original game carried its 256-color palette inside the executable, not
//! inside `ANIM.DAT`. This module ships a built-in recreation of that palette
//! so decoded sprites can be rendered without any external palette file.
//!
//! Index 0 is reserved: whatever its RGB value, it renders fully transparent.
//! Indices 0x10-0x13 are the skin-tone region targeted by the skin
//! substitution table in [`crate::file::colors`].

use std::fmt;

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Returns the color as a 32-bit RGBA value.
	pub const fn to_rgba32(&self) -> u32 {
		((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// The 256-color gameplay palette.
///
/// Constant data, independent of any asset file. Shared freely across all
/// decode and render calls; see [`gameplay_palette`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	/// 256-color palette
	colors: [Color; 256],
}

impl Palette {
	/// Total palette size
	pub const SIZE: usize = 256;

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; 256] {
		&self.colors
	}

	/// Returns the palette as a color slice.
	///
	/// [`crate::file::anim::render`] takes a slice so callers holding a
	/// partial palette fail the length precondition instead of panicking.
	#[inline]
	pub fn as_slice(&self) -> &[Color] {
		&self.colors
	}

	/// Returns an iterator over palette colors with indices.
	pub fn iter_indexed(&self) -> impl Iterator<Item = (u8, &Color)> {
		self.colors.iter().enumerate().map(|(i, c)| (i as u8, c))
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Gameplay palette: {} colors", Self::SIZE)
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}

/// Returns the built-in gameplay palette.
///
/// The same instance backs every decode and render call; the data is
/// immutable and safe to share between threads.
pub fn gameplay_palette() -> &'static Palette {
	&GAMEPLAY_PALETTE
}

static GAMEPLAY_PALETTE: Palette = Palette {
	colors: GAMEPLAY_COLORS,
};

/// Recreated gameplay palette, grouped in 16-slot banks.
///
/// Slot 0 is the transparency sentinel and intentionally near-black so that
/// renderers ignoring the alpha channel still produce a readable image.
#[rustfmt::skip]
const GAMEPLAY_COLORS: [Color; 256] = [
	// 0x00: transparent sentinel slot plus a grey ramp
	Color::rgb(4, 4, 4), Color::rgb(16, 16, 16), Color::rgb(32, 32, 32), Color::rgb(48, 48, 48),
	Color::rgb(64, 64, 64), Color::rgb(80, 80, 80), Color::rgb(96, 96, 96), Color::rgb(112, 112, 112),
	Color::rgb(128, 128, 128), Color::rgb(144, 144, 144), Color::rgb(160, 160, 160), Color::rgb(176, 176, 176),
	Color::rgb(192, 192, 192), Color::rgb(208, 208, 208), Color::rgb(224, 224, 224), Color::rgb(240, 240, 240),
	// 0x10: skin tones
	Color::rgb(236, 188, 152), Color::rgb(206, 156, 118), Color::rgb(176, 124, 88), Color::rgb(146, 94, 62),
	// 0x14: equipment browns
	Color::rgb(96, 64, 32), Color::rgb(105, 73, 40), Color::rgb(115, 81, 48), Color::rgb(124, 90, 56),
	Color::rgb(134, 99, 64), Color::rgb(143, 108, 72), Color::rgb(153, 116, 80), Color::rgb(162, 125, 88),
	Color::rgb(172, 134, 96), Color::rgb(181, 143, 104), Color::rgb(191, 151, 112), Color::rgb(200, 160, 120),
	// 0x20: uniform bank (jersey base/shadow pairs, outline slots at 46/47)
	Color::rgb(200, 16, 16), Color::rgb(132, 8, 8), Color::rgb(16, 48, 200), Color::rgb(8, 28, 132),
	Color::rgb(252, 252, 252), Color::rgb(168, 168, 176), Color::rgb(232, 232, 16), Color::rgb(156, 152, 8),
	Color::rgb(16, 160, 64), Color::rgb(8, 104, 40), Color::rgb(236, 120, 16), Color::rgb(160, 76, 8),
	Color::rgb(120, 120, 128), Color::rgb(72, 72, 80), Color::rgb(24, 24, 40), Color::rgb(252, 252, 252),
	// 0x30: uniform accent bank (team-color substitution targets)
	Color::rgb(176, 16, 32), Color::rgb(112, 8, 20), Color::rgb(24, 72, 176), Color::rgb(12, 44, 112),
	Color::rgb(240, 240, 240), Color::rgb(150, 150, 160), Color::rgb(216, 200, 24), Color::rgb(140, 128, 12),
	Color::rgb(24, 140, 80), Color::rgb(12, 88, 48), Color::rgb(216, 112, 24), Color::rgb(140, 70, 12),
	Color::rgb(104, 112, 124), Color::rgb(60, 66, 76), Color::rgb(32, 32, 56), Color::rgb(248, 248, 248),
	// 0x40: field greens
	Color::rgb(16, 64, 16), Color::rgb(18, 68, 18), Color::rgb(21, 73, 21), Color::rgb(23, 77, 23),
	Color::rgb(25, 81, 25), Color::rgb(28, 85, 28), Color::rgb(30, 90, 30), Color::rgb(32, 94, 32),
	Color::rgb(35, 98, 35), Color::rgb(37, 102, 37), Color::rgb(39, 107, 39), Color::rgb(42, 111, 42),
	Color::rgb(44, 115, 44), Color::rgb(46, 119, 46), Color::rgb(49, 124, 49), Color::rgb(51, 128, 51),
	Color::rgb(53, 132, 53), Color::rgb(55, 136, 55), Color::rgb(58, 141, 58), Color::rgb(60, 145, 60),
	Color::rgb(62, 149, 62), Color::rgb(65, 153, 65), Color::rgb(67, 158, 67), Color::rgb(69, 162, 69),
	Color::rgb(72, 166, 72), Color::rgb(74, 170, 74), Color::rgb(76, 175, 76), Color::rgb(79, 179, 79),
	Color::rgb(81, 183, 81), Color::rgb(83, 187, 83), Color::rgb(86, 192, 86), Color::rgb(88, 196, 88),
	// 0x60: earth and track browns
	Color::rgb(60, 40, 20), Color::rgb(64, 44, 23), Color::rgb(68, 48, 26), Color::rgb(72, 52, 30),
	Color::rgb(77, 55, 33), Color::rgb(81, 59, 36), Color::rgb(85, 63, 39), Color::rgb(89, 67, 43),
	Color::rgb(93, 71, 46), Color::rgb(97, 75, 49), Color::rgb(101, 79, 52), Color::rgb(105, 83, 55),
	Color::rgb(110, 86, 59), Color::rgb(114, 90, 62), Color::rgb(118, 94, 65), Color::rgb(122, 98, 68),
	Color::rgb(126, 102, 72), Color::rgb(130, 106, 75), Color::rgb(134, 110, 78), Color::rgb(138, 114, 81),
	Color::rgb(143, 117, 85), Color::rgb(147, 121, 88), Color::rgb(151, 125, 91), Color::rgb(155, 129, 94),
	Color::rgb(159, 133, 97), Color::rgb(163, 137, 101), Color::rgb(167, 141, 104), Color::rgb(171, 145, 107),
	Color::rgb(176, 148, 110), Color::rgb(180, 152, 114), Color::rgb(184, 156, 117), Color::rgb(188, 160, 120),
	// 0x80: crowd blues
	Color::rgb(8, 8, 48), Color::rgb(12, 13, 55), Color::rgb(17, 19, 61), Color::rgb(21, 24, 68),
	Color::rgb(25, 29, 74), Color::rgb(29, 34, 81), Color::rgb(34, 40, 87), Color::rgb(38, 45, 94),
	Color::rgb(42, 50, 101), Color::rgb(46, 56, 107), Color::rgb(51, 61, 114), Color::rgb(55, 66, 120),
	Color::rgb(59, 71, 127), Color::rgb(63, 77, 134), Color::rgb(68, 82, 140), Color::rgb(72, 87, 147),
	Color::rgb(76, 93, 153), Color::rgb(80, 98, 160), Color::rgb(85, 103, 166), Color::rgb(89, 109, 173),
	Color::rgb(93, 114, 180), Color::rgb(97, 119, 186), Color::rgb(102, 124, 193), Color::rgb(106, 130, 199),
	Color::rgb(110, 135, 206), Color::rgb(114, 140, 213), Color::rgb(119, 146, 219), Color::rgb(123, 151, 226),
	Color::rgb(127, 156, 232), Color::rgb(131, 161, 239), Color::rgb(136, 167, 245), Color::rgb(140, 172, 252),
	// 0xA0: warm reds
	Color::rgb(64, 8, 8), Color::rgb(70, 13, 12), Color::rgb(76, 18, 17), Color::rgb(82, 23, 21),
	Color::rgb(88, 28, 25), Color::rgb(94, 33, 29), Color::rgb(100, 38, 34), Color::rgb(106, 43, 38),
	Color::rgb(113, 48, 42), Color::rgb(119, 53, 46), Color::rgb(125, 58, 51), Color::rgb(131, 63, 55),
	Color::rgb(137, 68, 59), Color::rgb(143, 73, 63), Color::rgb(149, 78, 68), Color::rgb(155, 83, 72),
	Color::rgb(161, 89, 76), Color::rgb(167, 94, 80), Color::rgb(173, 99, 85), Color::rgb(179, 104, 89),
	Color::rgb(185, 109, 93), Color::rgb(191, 114, 97), Color::rgb(197, 119, 102), Color::rgb(203, 124, 106),
	Color::rgb(210, 129, 110), Color::rgb(216, 134, 114), Color::rgb(222, 139, 119), Color::rgb(228, 144, 123),
	Color::rgb(234, 149, 127), Color::rgb(240, 154, 131), Color::rgb(246, 159, 136), Color::rgb(252, 164, 140),
	// 0xC0: yellows
	Color::rgb(72, 56, 8), Color::rgb(78, 62, 12), Color::rgb(84, 68, 17), Color::rgb(89, 74, 21),
	Color::rgb(95, 80, 25), Color::rgb(101, 86, 29), Color::rgb(107, 92, 34), Color::rgb(113, 98, 38),
	Color::rgb(118, 105, 42), Color::rgb(124, 111, 46), Color::rgb(130, 117, 51), Color::rgb(136, 123, 55),
	Color::rgb(142, 129, 59), Color::rgb(147, 135, 63), Color::rgb(153, 141, 68), Color::rgb(159, 147, 72),
	Color::rgb(165, 153, 76), Color::rgb(171, 159, 80), Color::rgb(177, 165, 85), Color::rgb(182, 171, 89),
	Color::rgb(188, 177, 93), Color::rgb(194, 183, 97), Color::rgb(200, 189, 102), Color::rgb(206, 195, 106),
	Color::rgb(211, 202, 110), Color::rgb(217, 208, 114), Color::rgb(223, 214, 119), Color::rgb(229, 220, 123),
	Color::rgb(235, 226, 127), Color::rgb(240, 232, 131), Color::rgb(246, 238, 136), Color::rgb(252, 244, 140),
	// 0xE0: purples
	Color::rgb(48, 8, 48), Color::rgb(54, 14, 55), Color::rgb(61, 19, 61), Color::rgb(67, 25, 68),
	Color::rgb(73, 30, 74), Color::rgb(80, 36, 81), Color::rgb(86, 41, 87), Color::rgb(92, 47, 94),
	Color::rgb(99, 52, 101), Color::rgb(105, 58, 107), Color::rgb(111, 63, 114), Color::rgb(118, 69, 120),
	Color::rgb(124, 75, 127), Color::rgb(130, 80, 134), Color::rgb(137, 86, 140), Color::rgb(143, 91, 147),
	Color::rgb(149, 97, 153), Color::rgb(155, 102, 160), Color::rgb(162, 108, 166), Color::rgb(168, 113, 173),
	Color::rgb(174, 119, 180), Color::rgb(181, 125, 186), Color::rgb(187, 130, 193), Color::rgb(193, 136, 199),
	Color::rgb(200, 141, 206), Color::rgb(206, 147, 213), Color::rgb(212, 152, 219), Color::rgb(219, 158, 226),
	Color::rgb(225, 163, 232), Color::rgb(231, 169, 239), Color::rgb(238, 174, 245), Color::rgb(244, 180, 252),];
