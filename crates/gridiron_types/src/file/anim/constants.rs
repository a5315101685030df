//! ANIM file format constants.
//!
//! This module contains all constant values used in the ANIM (sprite
//! animation) container format: index table layout, sub-block headers and
//! compressed stream parameters.

/// Size of the index table header (u16 record count + 2 reserved bytes)
pub const INDEX_HEADER_SIZE: usize = 4;

/// Size of each fixed index record in bytes
pub const INDEX_RECORD_SIZE: usize = 16;

/// Length of the NUL-padded ASCII animation name inside an index record
pub const NAME_LEN: usize = 8;

/// Size of one cell-offset entry in a sub-block grid (u32 LE)
pub const CELL_OFFSET_SIZE: usize = 4;

/// Cell offset value marking a cell with no sprite
pub const NO_SPRITE: u32 = 0;

/// Size of a sub-block dimension header (u16 LE width + u16 LE height)
pub const BLOCK_DIM_SIZE: usize = 4;

/// Size of a compressed stream header (u16 LE `groups_minus1` + u8 `tail_bits`)
pub const STREAM_HEADER_SIZE: usize = 3;

/// Number of decisions carried by one flag byte
pub const FLAG_GROUP_SIZE: usize = 8;

/// Minimum back-reference copy length (length nibble is stored as `len - 3`)
pub const MIN_MATCH_LEN: usize = 3;

/// Largest sub-block dimension the assembler accepts
///
/// Sprites in the asset file top out well below this; anything larger is a
/// corrupt header.
pub const MAX_SPRITE_DIM: usize = 512;
