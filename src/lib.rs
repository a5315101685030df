#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gridiron-rs` is a project that aims to revive an old American football
//! game and bring it to modern platforms using Rust.
//!
//! This facade crate re-exports the asset-format support from
//! [`gridiron_types`]; see that crate for the format documentation.
//!
//! ```no_run
//! use gridiron_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anim = AnimFile::open("ANIM.DAT")?;
//! for descriptor in anim.descriptors() {
//!     println!("{descriptor}");
//! }
//! # Ok(())
//! # }
//! ```

pub use gridiron_types::*;
