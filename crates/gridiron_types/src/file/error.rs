//! Error types for file format parsing and manipulation.
//!
//! Almost every decode path in this crate degrades instead of failing: short
//! index tables yield empty results, corrupt sub-blocks yield absent sprites,
//! a missing asset file leaves the database unavailable. `AssetError` exists
//! for the few boundaries where an error is still the right answer, namely
//! file I/O and explicit by-name lookups.

use thiserror::Error;

/// Errors that can occur when loading or querying asset files
#[derive(Debug, Error)]
pub enum AssetError {
	/// Animation name not present in the index table
	#[error("Animation {name:?} not found in index table")]
	AnimationNotFound {
		/// Name that was requested
		name: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
