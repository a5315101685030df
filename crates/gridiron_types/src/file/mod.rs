//! File type support for the `gridiron-rs` project.

mod error;

pub mod anim;
pub mod colors;
pub mod palette;

// Re-export unified error type
pub use error::AssetError;

// Re-export main file types
pub use anim::{
	AnimationDatabase, AnimationDescriptor, DecodedAnimation, DecodedSprite, File as AnimFile,
	RenderedFrame, SpriteId, decode::decompress, decode_animation, parse_index, render,
};
pub use colors::{
	ColorSubstitutionTable, TeamColors, color_tables, identity_color_table, kit_tables_for,
	substitution_table_for,
};
pub use palette::{Color, Palette, gameplay_palette};
