//! Index table parsing for ANIM files.
//!
//! The index table sits at the front of the file: a 4-byte header carrying a
//! little-endian record count, then one fixed 16-byte record per animation.
//! Parsing never fails; damaged or unresolvable records are skipped so a
//! long file with one bad entry still yields every other entry.

use log::warn;
use serde::Serialize;

use super::constants;

/// Metadata for one named animation in the index table.
///
/// Immutable once parsed; the offsets it carries are only meaningful against
/// the blob it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationDescriptor {
	name: String,
	frame_count: u16,
	view_count: u16,
	source_offset: u32,
}

impl AnimationDescriptor {
	/// Short ASCII identifier, unique within a file.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of motion-cycle frames (always at least 1).
	pub fn frame_count(&self) -> u16 {
		self.frame_count
	}

	/// Number of view directions (1 for effects, 8 for player animations).
	pub fn view_count(&self) -> u16 {
		self.view_count
	}

	/// Byte position of this animation's frame×view sub-block grid.
	pub fn source_offset(&self) -> u32 {
		self.source_offset
	}

	/// Total number of grid cells (`frame_count × view_count`).
	pub fn cell_count(&self) -> usize {
		usize::from(self.frame_count) * usize::from(self.view_count)
	}
}

impl std::fmt::Display for AnimationDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}: {} frames × {} views @ {:#010X}",
			self.name, self.frame_count, self.view_count, self.source_offset
		)
	}
}

/// Parses the index table of an ANIM blob.
///
/// Returns the descriptors in file order. A blob too short to contain even
/// one record yields an empty vector; individual records are skipped (with a
/// warning) when their name is not printable ASCII, their frame count is
/// zero, or their sub-block grid is not recoverable from the offset field.
pub fn parse_index(blob: &[u8]) -> Vec<AnimationDescriptor> {
	if blob.len() < constants::INDEX_HEADER_SIZE + constants::INDEX_RECORD_SIZE {
		return Vec::new();
	}

	let declared = usize::from(u16::from_le_bytes([blob[0], blob[1]]));
	let available = (blob.len() - constants::INDEX_HEADER_SIZE) / constants::INDEX_RECORD_SIZE;
	let count = declared.min(available);

	let mut descriptors = Vec::with_capacity(count);
	for record in 0..count {
		let offset = constants::INDEX_HEADER_SIZE + record * constants::INDEX_RECORD_SIZE;
		match parse_record(blob, offset) {
			Some(descriptor) => descriptors.push(descriptor),
			None => warn!("skipping damaged index record {record} at offset {offset:#X}"),
		}
	}

	descriptors
}

/// Parses one 16-byte index record, validating that its sub-block grid lies
/// inside the blob.
fn parse_record(blob: &[u8], offset: usize) -> Option<AnimationDescriptor> {
	let record = &blob[offset..offset + constants::INDEX_RECORD_SIZE];

	let name = parse_name(&record[..constants::NAME_LEN])?;

	// Frame count is the one big-endian field in the format.
	let frame_count = u16::from_be_bytes([record[8], record[9]]);
	let view_count = u16::from_le_bytes([record[10], record[11]]);
	let source_offset = u32::from_le_bytes([record[12], record[13], record[14], record[15]]);

	if frame_count == 0 || view_count == 0 {
		return None;
	}

	let cells = usize::from(frame_count) * usize::from(view_count);
	let grid_end = (source_offset as usize).checked_add(cells * constants::CELL_OFFSET_SIZE)?;
	if grid_end > blob.len() {
		return None;
	}

	Some(AnimationDescriptor {
		name,
		frame_count,
		view_count,
		source_offset,
	})
}

/// Decodes a NUL-padded ASCII name field.
///
/// Returns `None` for an empty name or any non-printable byte before the
/// padding.
fn parse_name(field: &[u8]) -> Option<String> {
	let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
	let bytes = &field[..end];

	if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_graphic) {
		return None;
	}

	Some(String::from_utf8_lossy(bytes).into_owned())
}
