//! ANIM sub-block decompression.
//!
//! ## Stream format
//!
//! Each sub-block's compressed stream, discovered through reverse
//! engineering of the original executable, is laid out as:
//!
//! | Offset | Size | Field           | Description                              |
//! |--------|------|-----------------|------------------------------------------|
//! | 0x00   | 2    | `groups_minus1` | u16 LE; full 8-decision groups = value+1 |
//! | 0x02   | 1    | `tail_bits`     | Extra decisions (0-7) after full groups  |
//! | 0x03   | ..   | decision stream | Flag-byte-prefixed segments              |
//!
//! Every group (and the tail segment, when `tail_bits` is non-zero) starts
//! with one flag byte read MSB-first. A `0` bit means the next decision is a
//! literal: one raw input byte is emitted. A `1` bit means a back-reference:
//! a u16 LE word follows whose low nibble is `length - 3` and whose high 12
//! bits are the distance. The copy source is `output_len - distance - 1` and
//! bytes are copied one at a time from there forward, so a source range that
//! overlaps the growing destination repeats itself, exactly as in classic
//! LZ77 sliding-window copies.
//!
//! ## Color substitution
//!
//! Every emitted byte below 64, literal or copied, passes through the
//! supplied [`ColorSubstitutionTable`] before it is stored. Back-references
//! therefore copy already-substituted output bytes; with the tables the game
//! ships this is indistinguishable from a post-pass because the built-in
//! tables never map a substitutable value onto a differently-substituted
//! slot, but it matches the single-pass structure of the original decoder.
//!
//! ## Defensive truncation
//!
//! Streams in the wild are occasionally short. Running out of input mid
//! group stops decoding; the result is trimmed or zero-padded to the length
//! the caller expects instead of erroring out.

use crate::file::colors::ColorSubstitutionTable;

use super::constants;

/// Decompresses one sub-block stream starting at `offset`.
///
/// `expected_len` is the pixel count declared by the sub-block header
/// (`width * height`); it sizes the output arena up front and is the exact
/// length of the returned buffer, padded with zeroes or trimmed as needed.
/// This function never fails: unreadable input degrades to a zero-filled
/// buffer of the expected length.
pub fn decompress(
	blob: &[u8],
	offset: usize,
	expected_len: usize,
	color_table: &ColorSubstitutionTable,
) -> Vec<u8> {
	let mut decoder = BlockDecoder::new(blob, offset, expected_len, color_table);
	decoder.run();
	decoder.finish()
}

/// State for one sub-block decode.
///
/// Owns the output buffer exclusively until [`Self::finish`] hands it back.
struct BlockDecoder<'a> {
	input: &'a [u8],
	read_offset: usize,
	output: Vec<u8>,
	expected_len: usize,
	color_table: &'a ColorSubstitutionTable,
}

impl<'a> BlockDecoder<'a> {
	fn new(
		input: &'a [u8],
		offset: usize,
		expected_len: usize,
		color_table: &'a ColorSubstitutionTable,
	) -> Self {
		Self {
			input,
			read_offset: offset,
			output: Vec::with_capacity(expected_len),
			expected_len,
			color_table,
		}
	}

	/// Reads the stream header and walks every decision segment.
	fn run(&mut self) {
		let Some(low) = self.next_byte() else {
			return;
		};
		let Some(high) = self.next_byte() else {
			return;
		};
		let Some(tail_bits) = self.next_byte() else {
			return;
		};

		let full_groups = usize::from(u16::from_le_bytes([low, high])) + 1;
		let tail = usize::from(tail_bits) % constants::FLAG_GROUP_SIZE;

		for _ in 0..full_groups {
			if !self.run_segment(constants::FLAG_GROUP_SIZE) {
				return;
			}
		}
		if tail > 0 {
			self.run_segment(tail);
		}
	}

	/// Processes one flag byte worth of decisions.
	///
	/// Returns `false` when the input ran out, which ends the decode.
	fn run_segment(&mut self, decisions: usize) -> bool {
		let Some(flags) = self.next_byte() else {
			return false;
		};

		for bit in 0..decisions {
			// MSB first
			let is_back_reference = flags & (0x80 >> bit) != 0;
			let ok = if is_back_reference {
				self.back_reference()
			} else {
				self.literal()
			};
			if !ok {
				return false;
			}
		}

		true
	}

	/// Emits one literal byte from the input.
	fn literal(&mut self) -> bool {
		match self.next_byte() {
			Some(value) => {
				self.emit(value);
				true
			}
			None => false,
		}
	}

	/// Decodes a back-reference word and copies its run.
	fn back_reference(&mut self) -> bool {
		let Some(low) = self.next_byte() else {
			return false;
		};
		let Some(high) = self.next_byte() else {
			return false;
		};

		let word = u16::from_le_bytes([low, high]);
		let length = usize::from(word & 0x000F) + constants::MIN_MATCH_LEN;
		let distance = usize::from(word >> 4);

		let Some(mut source) = self.output.len().checked_sub(distance + 1) else {
			// Distance reaches before the start of the output: corrupt
			// stream, stop here and let finish() pad.
			return false;
		};

		// Byte-at-a-time so the source may overlap the growing destination.
		for _ in 0..length {
			let value = self.output[source];
			self.output.push(value);
			source += 1;
		}

		true
	}

	/// Stores one output byte, remapping substitutable values.
	///
	/// Copied bytes were substituted when first emitted and re-applying the
	/// table to them would double-substitute, so only [`Self::literal`]
	/// routes through here; [`Self::back_reference`] pushes raw.
	#[inline]
	fn emit(&mut self, value: u8) {
		self.output.push(self.color_table.apply(value));
	}

	fn next_byte(&mut self) -> Option<u8> {
		let value = self.input.get(self.read_offset).copied()?;
		self.read_offset += 1;
		Some(value)
	}

	/// Normalizes the output to the expected length.
	fn finish(mut self) -> Vec<u8> {
		self.output.resize(self.expected_len, 0);
		self.output
	}
}
