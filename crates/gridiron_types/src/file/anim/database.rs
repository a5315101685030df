//! The animation database: decoded asset data behind a name-keyed lookup.
//!
//! The original engine kept this behind a process-wide singleton; here it is
//! an explicitly constructed service object owning (a) the immutable decode
//! result and (b) a separately synchronized rendered-image cache.
//!
//! A load either fully succeeds, leaving every named animation present, or
//! the database is marked unavailable; callers never observe partial state
//! and are expected to fall back to stock art when `is_available()` is
//! false. Decoding runs synchronously inside `load()` with a single
//! critical section around the state transition, so concurrent callers
//! cannot restart a load that already happened.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use log::{debug, warn};

use crate::file::colors::{ColorSubstitutionTable, color_tables};
use crate::file::palette::gameplay_palette;

use super::File;
use super::animation::DecodedAnimation;
use super::sprite::{RenderedFrame, render};

/// Index into [`color_tables`] selecting the substitution table a database
/// decodes with. Part of the rendered-image cache key.
pub type ColorSetId = u8;

/// Load lifecycle of the database.
#[derive(Debug, Clone)]
enum LoadState {
	/// `load()` has not been called (or `reset()` was).
	NotLoaded,
	/// Decode succeeded; all named animations are present.
	Loaded(Arc<HashMap<String, DecodedAnimation>>),
	/// The asset file was missing or unreadable.
	Unavailable,
}

/// Rendered-image cache key: animation, cell, mirror flag, color set.
type CacheKey = (String, u16, u16, bool, ColorSetId);

/// Name-keyed store of every decoded animation in one asset file.
///
/// After a successful load the descriptor/sprite/reference data is
/// immutable and shared via [`Arc`], safe for unsynchronized concurrent
/// reads. The rendered-image cache is the only mutable resource and is
/// guarded separately so renders never block loads.
#[derive(Debug)]
pub struct AnimationDatabase {
	asset_path: PathBuf,
	color_set: ColorSetId,
	state: Mutex<LoadState>,
	image_cache: RwLock<HashMap<CacheKey, Arc<RenderedFrame>>>,
}

impl AnimationDatabase {
	/// Index of the identity table inside [`color_tables`].
	const IDENTITY_COLOR_SET: ColorSetId = 4;

	/// Creates a database reading from `path`, decoding through the
	/// identity color table. Nothing is read until [`Self::load`].
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self::with_color_set(path, Self::IDENTITY_COLOR_SET)
	}

	/// Creates a database decoding through the built-in substitution table
	/// at `color_set` (an index into [`color_tables`]).
	pub fn with_color_set(path: impl AsRef<Path>, color_set: ColorSetId) -> Self {
		Self {
			asset_path: path.as_ref().to_path_buf(),
			color_set,
			state: Mutex::new(LoadState::NotLoaded),
			image_cache: RwLock::new(HashMap::new()),
		}
	}

	/// Path of the asset file this database reads.
	pub fn asset_path(&self) -> &Path {
		&self.asset_path
	}

	/// Loads and decodes the asset file.
	///
	/// Idempotent: once the database is loaded (or marked unavailable) a
	/// second call returns without redecoding; [`Self::reset`] is the only
	/// way back. Failure to read or fully decode the file leaves the
	/// database unavailable with no partially populated animations.
	pub fn load(&self) {
		let mut state = self.state.lock().expect("animation database state poisoned");
		if !matches!(*state, LoadState::NotLoaded) {
			return;
		}

		*state = match self.decode_asset() {
			Some(animations) => LoadState::Loaded(Arc::new(animations)),
			None => LoadState::Unavailable,
		};
	}

	/// Reads the asset file and decodes every indexed animation.
	///
	/// Returns `None` when the file cannot be read or any named animation
	/// fails to decode; partial results are discarded.
	fn decode_asset(&self) -> Option<HashMap<String, DecodedAnimation>> {
		let blob = match std::fs::read(&self.asset_path) {
			Ok(blob) => blob,
			Err(err) => {
				warn!("cannot read asset file {}: {err}", self.asset_path.display());
				return None;
			}
		};

		let file = File::from_bytes(blob);
		let table = self.color_table();
		let mut animations = HashMap::with_capacity(file.descriptors().len());

		for descriptor in file.descriptors() {
			match super::decode_animation(file.raw(), descriptor, table) {
				Some(animation) => {
					animations.insert(descriptor.name().to_owned(), animation);
				}
				None => {
					warn!("animation {} failed to decode, marking database unavailable",
						descriptor.name());
					return None;
				}
			}
		}

		let total: usize = animations.values().map(DecodedAnimation::sprite_count).sum();
		debug!("loaded {} animations, {total} distinct sprites", animations.len());
		Some(animations)
	}

	fn color_table(&self) -> &'static ColorSubstitutionTable {
		let tables = color_tables();
		tables[usize::from(self.color_set) % tables.len()]
	}

	/// Returns `true` when a load succeeded and data is queryable.
	pub fn is_available(&self) -> bool {
		matches!(
			*self.state.lock().expect("animation database state poisoned"),
			LoadState::Loaded(_)
		)
	}

	/// Snapshot of the decoded animation map, if loaded.
	fn animations(&self) -> Option<Arc<HashMap<String, DecodedAnimation>>> {
		match &*self.state.lock().expect("animation database state poisoned") {
			LoadState::Loaded(animations) => Some(Arc::clone(animations)),
			_ => None,
		}
	}

	/// Sorted names of every loaded animation.
	pub fn animation_names(&self) -> Vec<String> {
		let Some(animations) = self.animations() else {
			return Vec::new();
		};
		let mut names: Vec<String> = animations.keys().cloned().collect();
		names.sort();
		names
	}

	/// Frame and view counts for a named animation.
	pub fn animation_info(&self, name: &str) -> Option<(u16, u16)> {
		let animations = self.animations()?;
		let animation = animations.get(name)?;
		Some((animation.frame_count(), animation.view_count()))
	}

	/// Renders (or fetches from cache) the sprite for one grid cell.
	///
	/// Resolves ref → sprite → raster against the built-in gameplay
	/// palette. Rendered frames are cached by
	/// `(name, frame, view, mirrored, color set)`; concurrent requests for
	/// the same key may render twice but the first inserted frame wins, so
	/// every caller observes one consistent raster.
	pub fn sprite(
		&self,
		name: &str,
		frame: u16,
		view: u16,
		mirrored: bool,
	) -> Option<Arc<RenderedFrame>> {
		let key: CacheKey = (name.to_owned(), frame, view, mirrored, self.color_set);

		if let Some(cached) = self
			.image_cache
			.read()
			.expect("animation image cache poisoned")
			.get(&key)
		{
			return Some(Arc::clone(cached));
		}

		let animations = self.animations()?;
		let sprite = animations.get(name)?.sprite_at(frame, view)?;
		let rendered = Arc::new(render(sprite, gameplay_palette().as_slice(), mirrored)?);

		let mut cache = self.image_cache.write().expect("animation image cache poisoned");
		let entry = cache.entry(key).or_insert(rendered);
		Some(Arc::clone(entry))
	}

	/// Number of rendered frames currently cached.
	pub fn cached_image_count(&self) -> usize {
		self.image_cache.read().expect("animation image cache poisoned").len()
	}

	/// Evicts every cached rendered image, leaving decoded sprite data
	/// intact. Concurrent readers observe either the full cache or the
	/// empty one, never a partial clear.
	pub fn clear_image_cache(&self) {
		self.image_cache.write().expect("animation image cache poisoned").clear();
	}

	/// Returns the database to the not-loaded state and drops the image
	/// cache, allowing a subsequent [`Self::load`] to redecode.
	pub fn reset(&self) {
		let mut state = self.state.lock().expect("animation database state poisoned");
		*state = LoadState::NotLoaded;
		drop(state);
		self.clear_image_cache();
	}
}
