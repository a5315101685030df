//! Prelude module for `gridiron_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use gridiron_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Now you can use all common types directly
//! let anim = AnimFile::open("ANIM.DAT")?;
//! let palette = gameplay_palette();
//! let table = identity_color_table();
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// ANIM types
	AnimFile,
	AnimationDatabase,
	AnimationDescriptor,

	AssetError,

	// Constant color data
	Color,
	ColorSubstitutionTable,

	DecodedAnimation,
	DecodedSprite,

	Palette,
	RenderedFrame,
	SpriteId,
	TeamColors,

	color_tables,
	decode_animation,
	gameplay_palette,
	identity_color_table,
	kit_tables_for,
	parse_index,
	render,
	substitution_table_for,
};

// Name resolution helpers
#[doc(inline)]
pub use crate::file::anim::names::{PlayerAction, PlayerRole, animation_name};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
