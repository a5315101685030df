//! ANIM file format support for the `gridiron-rs` project.
//!
//! `ANIM.DAT` packs every on-field sprite animation of the original game:
//! named grids of frames × fixed view directions, stored as LZ77-compressed,
//! palette-indexed pixel blocks behind a flat index table. The format was
//! reverse engineered from the original executable; there is no encoder
//! here and none is planned, the game only ever reads this file.
//!
//! # File Structure Overview
//!
//! ```text
//! Offset  Size  Region        Description
//! ------  ----  ------------  ------------------------------------------
//! 0x00    4     index header  u16 LE record count + 2 reserved bytes
//! 0x04    16×N  index table   One fixed record per animation
//! ...     ...   data area     Cell-offset grids and compressed sub-blocks
//! ```
//!
//! ## Index Record (16 bytes)
//!
//! ```text
//! Offset  Size  Field          Description
//! ------  ----  -------------  ---------------------------------------
//! +0x00   8     name           NUL-padded ASCII identifier
//! +0x08   2     frame_count    u16 big-endian (the format's one BE field)
//! +0x0A   2     view_count     u16 LE, 1 or 8
//! +0x0C   4     source_offset  u32 LE position of the cell-offset grid
//! ```
//!
//! ## Sub-block Grid and Blocks
//!
//! At `source_offset`: `frame_count × view_count` u32 LE offsets, frame
//! major (`frame * view_count + view`); 0 marks a cell with no sprite. Each
//! referenced sub-block is a u16 LE width, u16 LE height, then the
//! compressed stream documented in [`decode`].
//!
//! # Decode Pipeline
//!
//! [`parse_index`] → [`decode_animation`] per descriptor →
//! [`render`] on demand. [`AnimationDatabase`] wraps the whole pipeline
//! behind a name-keyed lookup with a rendered-image cache.
//!
//! # Usage Examples
//!
//! ```no_run
//! use gridiron_types::file::anim::File;
//! use gridiron_types::file::identity_color_table;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anim = File::open("ANIM.DAT")?;
//! println!("{} animations", anim.descriptors().len());
//!
//! if let Some(animation) = anim.decode("SKRUN", identity_color_table()) {
//!     println!("SKRUN: {animation}");
//! }
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use crate::file::AssetError;
use crate::file::colors::ColorSubstitutionTable;

pub mod constants;
pub mod decode;
pub mod names;

mod animation;
mod database;
#[cfg(test)]
pub(crate) mod fixture;
mod index;
mod sprite;

pub use animation::{DecodedAnimation, decode_animation};
pub use database::{AnimationDatabase, ColorSetId};
pub use index::{AnimationDescriptor, parse_index};
pub use sprite::{DecodedSprite, RenderedFrame, SpriteId, render};

/// An ANIM asset file: the raw blob plus its parsed index table.
///
/// Parsing the index never fails, so a structurally empty file simply has
/// no descriptors; only I/O can error here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	/// Complete file data
	raw: Vec<u8>,

	/// Parsed index records, in file order
	descriptors: Vec<AnimationDescriptor>,
}

impl File {
	/// Opens an ANIM file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error only when the file cannot be opened or read.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, AssetError> {
		let raw = std::fs::read(path)?;
		Ok(Self::from_bytes(raw))
	}

	/// Builds an ANIM file from an in-memory blob.
	pub fn from_bytes(raw: impl Into<Vec<u8>>) -> Self {
		let raw = raw.into();
		let descriptors = parse_index(&raw);
		Self {
			raw,
			descriptors,
		}
	}

	/// Builds an ANIM file from any reader.
	///
	/// The whole blob is read up front; decoding needs random access.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, AssetError> {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		Ok(Self::from_bytes(raw))
	}

	/// Returns the raw file data.
	pub fn raw(&self) -> &[u8] {
		&self.raw
	}

	/// Returns the parsed index records in file order.
	pub fn descriptors(&self) -> &[AnimationDescriptor] {
		&self.descriptors
	}

	/// Looks up a descriptor by animation name.
	pub fn descriptor(&self, name: &str) -> Option<&AnimationDescriptor> {
		self.descriptors.iter().find(|d| d.name() == name)
	}

	/// Decodes one animation by name.
	///
	/// Returns `None` when the name is unknown or the animation's grid is
	/// unreadable; see [`decode_animation`] for per-cell degradation.
	pub fn decode(
		&self,
		name: &str,
		color_table: &ColorSubstitutionTable,
	) -> Option<DecodedAnimation> {
		decode_animation(&self.raw, self.descriptor(name)?, color_table)
	}

	/// Like [`Self::decode`], but with a typed error for callers that treat
	/// a missing animation as fatal.
	///
	/// Index records whose grids do not fit the blob are dropped at parse
	/// time, so an indexed name always decodes and the only failure here is
	/// an unknown name.
	pub fn decode_required(
		&self,
		name: &str,
		color_table: &ColorSubstitutionTable,
	) -> Result<DecodedAnimation, AssetError> {
		self.decode(name, color_table).ok_or_else(|| AssetError::AnimationNotFound {
			name: name.to_owned(),
		})
	}

	/// Decodes every indexed animation, skipping ones that fail.
	pub fn decode_all(
		&self,
		color_table: &ColorSubstitutionTable,
	) -> Vec<(String, DecodedAnimation)> {
		self.descriptors
			.iter()
			.filter_map(|descriptor| {
				decode_animation(&self.raw, descriptor, color_table)
					.map(|animation| (descriptor.name().to_owned(), animation))
			})
			.collect()
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ANIM File: {} animations, {} bytes", self.descriptors.len(), self.raw.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file::colors::identity_color_table;
	use super::fixture::AnimationSpec;

	#[test]
	fn test_empty_blob_has_no_descriptors() {
		let file = File::from_bytes(Vec::new());
		assert!(file.descriptors().is_empty());
		assert!(file.decode("SKRUN", identity_color_table()).is_none());
	}

	#[test]
	fn test_descriptor_lookup_and_decode() {
		let blob = fixture::build_asset(&[
			AnimationSpec::filled("RCSTAND", 1, 8, 4, 4, 1),
			AnimationSpec::filled("KICK", 6, 1, 4, 4, 30),
		]);
		let file = File::from_bytes(blob);

		assert_eq!(file.descriptors().len(), 2);
		assert!(file.descriptor("KICK").is_some());
		assert!(file.descriptor("QBBULIT").is_none());

		let animation = file.decode("KICK", identity_color_table()).expect("decode");
		assert_eq!(animation.frame_count(), 6);
		assert_eq!(animation.view_count(), 1);
	}

	#[test]
	fn test_decode_required_reports_unknown_names() {
		let blob = fixture::build_asset(&[AnimationSpec::filled("QBSTAND", 1, 8, 2, 2, 7)]);
		let file = File::from_bytes(blob);

		assert!(file.decode_required("QBSTAND", identity_color_table()).is_ok());
		assert!(matches!(
			file.decode_required("SKRUN", identity_color_table()),
			Err(AssetError::AnimationNotFound { .. })
		));
	}

	#[test]
	fn test_decode_all_covers_every_entry() {
		let blob = fixture::build_asset(&[
			AnimationSpec::filled("LMSTAND", 1, 8, 2, 2, 1),
			AnimationSpec::filled("RBRNWB", 8, 8, 2, 2, 9),
		]);
		let file = File::from_bytes(blob);

		let decoded = file.decode_all(identity_color_table());
		assert_eq!(decoded.len(), 2);
		let names: Vec<&str> = decoded.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(names, vec!["LMSTAND", "RBRNWB"]);
	}
}
