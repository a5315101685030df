//! Color substitution tables.
//!
//! Decoded pixel values in `0..64` pass through a 64-slot byte-to-byte remap
//! before they are stored; values `64..=255` are emitted unchanged. This is
//! how one set of compressed sprite bytes yields differently colored team
//! uniforms: the decompressor is handed a different table, never different
//! source data.
//!
//! Five tables are built in (see [`color_tables`]):
//!
//! | Index | Table    | Effect                                               |
//! |-------|----------|------------------------------------------------------|
//! | 0     | outline  | zeroes every slot except the two outline slots 46/47 |
//! | 1     | skin     | folds slots 16-19 into the palette skin-tone region  |
//! | 2     | home kit | remaps the jersey bank onto the home accent bank     |
//! | 3     | away kit | remaps the jersey bank onto the away accent bank     |
//! | 4     | identity | no-op                                                |
//!
//! Custom team colors arrive at the boundary as five RGB triples and are
//! translated into one of these 64-slot tables by [`substitution_table_for`].

use crate::file::palette::{Color, Palette};

/// A 64-slot byte-to-byte remap applied to decoded pixel values.
///
/// Constant once built; the five built-in instances are shared statics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSubstitutionTable {
	entries: [u8; Self::LEN],
}

impl ColorSubstitutionTable {
	/// Number of slots in a substitution table
	pub const LEN: usize = 64;

	/// Creates a table from raw slot entries.
	pub const fn from_entries(entries: [u8; Self::LEN]) -> Self {
		Self {
			entries,
		}
	}

	/// Creates the identity table (`i` maps to `i`).
	pub const fn identity() -> Self {
		let mut entries = [0u8; Self::LEN];
		let mut i = 0;
		while i < Self::LEN {
			entries[i] = i as u8;
			i += 1;
		}
		Self {
			entries,
		}
	}

	/// Applies the table to a decoded pixel value.
	///
	/// Values at or above [`Self::LEN`] are outside the substitutable range
	/// and pass through unchanged.
	#[inline]
	pub fn apply(&self, value: u8) -> u8 {
		if (value as usize) < Self::LEN {
			self.entries[value as usize]
		} else {
			value
		}
	}

	/// Returns a reference to the raw slot entries.
	#[inline]
	pub fn entries(&self) -> &[u8; Self::LEN] {
		&self.entries
	}

	/// Returns `true` when every slot maps to itself.
	pub fn is_identity(&self) -> bool {
		self.entries.iter().enumerate().all(|(i, &v)| i as u8 == v)
	}
}

impl Default for ColorSubstitutionTable {
	fn default() -> Self {
		Self::identity()
	}
}

/// First slot of the jersey bank inside the substitutable range.
const JERSEY_BANK_START: usize = 32;

/// Jersey slots painted by one team color: `(base, shadow)` pairs, one pair
/// per input color of a [`TeamColors`] set.
const JERSEY_SLOT_PAIRS: [(usize, usize); 5] =
	[(32, 33), (34, 35), (36, 37), (38, 39), (40, 41)];

/// Identity table: decoded bytes come out exactly as stored.
static IDENTITY_TABLE: ColorSubstitutionTable = ColorSubstitutionTable::identity();

/// Outline table: every slot zeroed except the two outline slots 46/47.
///
/// Used to draw player silhouettes (selection markers, replay ghosts) from
/// the regular sprite data.
static OUTLINE_TABLE: ColorSubstitutionTable = ColorSubstitutionTable::from_entries({
	let mut entries = [0u8; ColorSubstitutionTable::LEN];
	entries[46] = 0x2E;
	entries[47] = 0x2F;
	entries
});

/// Skin table: the four remappable slots 16-19 land in the palette's
/// skin-tone region 0x10-0x13, everything else is zeroed.
static SKIN_TABLE: ColorSubstitutionTable = ColorSubstitutionTable::from_entries({
	let mut entries = [0u8; ColorSubstitutionTable::LEN];
	let mut i = 0;
	while i < 4 {
		entries[16 + i] = (0x10 + i) as u8;
		i += 1;
	}
	entries
});

/// Default home kit: jersey bank shifted onto the first accent bank.
static HOME_KIT_TABLE: ColorSubstitutionTable = ColorSubstitutionTable::from_entries({
	let mut entries = ColorSubstitutionTable::identity().entries;
	let mut i = JERSEY_BANK_START;
	while i < JERSEY_BANK_START + 10 {
		entries[i] = (i + 16) as u8;
		i += 1;
	}
	entries
});

/// Default away kit: jersey bank mirrored onto the tail of the accent bank.
static AWAY_KIT_TABLE: ColorSubstitutionTable = ColorSubstitutionTable::from_entries({
	let mut entries = ColorSubstitutionTable::identity().entries;
	let mut i = 0;
	while i < 10 {
		entries[JERSEY_BANK_START + i] = (63 - i) as u8;
		i += 1;
	}
	entries
});

/// Returns the five built-in substitution tables.
///
/// Order: outline, skin, home kit, away kit, identity.
pub fn color_tables() -> [&'static ColorSubstitutionTable; 5] {
	[
		&OUTLINE_TABLE,
		&SKIN_TABLE,
		&HOME_KIT_TABLE,
		&AWAY_KIT_TABLE,
		&IDENTITY_TABLE,
	]
}

/// Returns the identity substitution table.
pub fn identity_color_table() -> &'static ColorSubstitutionTable {
	&IDENTITY_TABLE
}

/// One team's uniform colors as chosen in the front-end: jersey, sleeves,
/// pants, helmet and trim.
///
/// This is the boundary type for the "set team colors" entry point; it is
/// converted into a [`ColorSubstitutionTable`] before it ever reaches the
/// decompressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamColors {
	colors: [Color; 5],
}

impl TeamColors {
	/// Creates a team color set from five RGB triples.
	pub const fn new(colors: [Color; 5]) -> Self {
		Self {
			colors,
		}
	}

	/// Returns the five uniform colors.
	pub fn colors(&self) -> &[Color; 5] {
		&self.colors
	}
}

/// Translates a team color set into a 64-slot substitution table.
///
/// Each of the five input colors paints one `(base, shadow)` jersey slot
/// pair: the base slot maps to the nearest palette index for the color
/// itself, the shadow slot to the nearest index for a darkened variant. All
/// other slots keep their identity mapping, so skin, outlines and equipment
/// are untouched.
pub fn substitution_table_for(team: &TeamColors, palette: &Palette) -> ColorSubstitutionTable {
	let mut entries = ColorSubstitutionTable::identity().entries;

	for (color, &(base_slot, shadow_slot)) in team.colors.iter().zip(JERSEY_SLOT_PAIRS.iter()) {
		let shadow = Color::rgb(
			(u16::from(color.r) * 2 / 3) as u8,
			(u16::from(color.g) * 2 / 3) as u8,
			(u16::from(color.b) * 2 / 3) as u8,
		);
		entries[base_slot] = nearest_palette_index(palette, *color);
		entries[shadow_slot] = nearest_palette_index(palette, shadow);
	}

	ColorSubstitutionTable::from_entries(entries)
}

/// Translates a matchup's home and away color sets into their substitution
/// tables, home first.
pub fn kit_tables_for(
	home: &TeamColors,
	away: &TeamColors,
	palette: &Palette,
) -> (ColorSubstitutionTable, ColorSubstitutionTable) {
	(substitution_table_for(home, palette), substitution_table_for(away, palette))
}

/// Finds the palette index closest to `color` by squared RGB distance.
///
/// Index 0 is reserved for transparency and never returned.
fn nearest_palette_index(palette: &Palette, color: Color) -> u8 {
	let mut best_index = 1u8;
	let mut best_distance = u32::MAX;

	for (index, candidate) in palette.iter_indexed().skip(1) {
		let dr = i32::from(candidate.r) - i32::from(color.r);
		let dg = i32::from(candidate.g) - i32::from(color.g);
		let db = i32::from(candidate.b) - i32::from(color.b);
		let distance = (dr * dr + dg * dg + db * db) as u32;
		if distance < best_distance {
			best_distance = distance;
			best_index = index;
		}
	}

	best_index
}
