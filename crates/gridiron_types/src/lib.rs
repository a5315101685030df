//! This crate provides core data types and file format support for the `gridiron-rs` project.
//!
//! # File Formats
//!
//! - **ANIM**: Sprite animation container packing named frame×view grids of
//!   LZ77-compressed, palette-indexed pixel blocks behind a flat index table
//!
//! # Constant Data
//!
//! - A built-in recreation of the original 256-color gameplay palette
//! - Five 64-slot color substitution tables used to recolor team uniforms
//!   at decode time without touching the compressed source bytes
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use gridiron_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Decode every animation in the asset file
//! let anim = AnimFile::open("ANIM.DAT")?;
//! for descriptor in anim.descriptors() {
//!     println!("{}: {} frames", descriptor.name(), descriptor.frame_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use gridiron_types::file::anim::AnimationDatabase;
//!
//! let db = AnimationDatabase::new("ANIM.DAT");
//! db.load();
//! assert!(db.is_available() || db.animation_names().is_empty());
//! ```

pub mod file;

/// `use gridiron_types::prelude::*;` to import commonly used items.
pub mod prelude;
