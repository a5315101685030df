//! ANIM inspection utility.
//!
//! Provides three subcommands:
//! - `list`: print the index table of an `ANIM.DAT` file, optionally as JSON.
//! - `info`: decode a single animation and report its grid and sprite arena.
//! - `export`: decode an animation and write every frame×view cell as a PNG.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gridiron_rs::prelude::{
	AnimFile, DecodedAnimation, color_tables, gameplay_palette, identity_color_table, render,
};
use image::{ImageBuffer, RgbaImage};
use serde::Serialize;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::List(opts) => run_list(opts),
		Command::Info(opts) => run_info(opts),
		Command::Export(opts) => run_export(opts),
	}
}

#[derive(Parser)]
#[command(name = "anim_utils")]
#[command(author = "gridiron-rs project")]
#[command(version)]
#[command(about = "Inspect and export animations from ANIM.DAT", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the index table of an ANIM.DAT file
	List(ListArgs),
	/// Decode one animation and report its structure
	Info(InfoArgs),
	/// Decode one animation and export every cell as a PNG
	Export(ExportArgs),
}

#[derive(Args)]
struct ListArgs {
	/// Path to ANIM.DAT
	#[arg(value_name = "FILE", default_value = "bin/ANIM.DAT")]
	file: PathBuf,

	/// Emit the index table as JSON instead of a text table
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct InfoArgs {
	/// Path to ANIM.DAT
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Animation name, e.g. SKRUN
	#[arg(value_name = "NAME")]
	name: String,
}

#[derive(Args)]
struct ExportArgs {
	/// Path to ANIM.DAT
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Animation name, e.g. SKRUN
	#[arg(value_name = "NAME")]
	name: String,

	/// Output directory for the PNG files
	#[arg(short, long, value_name = "DIR", default_value = "bin/anim_export")]
	out_dir: PathBuf,

	/// Color substitution table index (0-4, 4 = identity)
	#[arg(short, long, value_name = "SET", default_value_t = 4)]
	color_set: usize,

	/// Mirror every frame horizontally
	#[arg(short, long, default_value_t = false)]
	mirror: bool,
}

#[derive(Serialize)]
struct IndexEntry<'a> {
	name: &'a str,
	frame_count: u16,
	view_count: u16,
	source_offset: u32,
}

fn run_list(args: ListArgs) -> Result<()> {
	let anim = open_file(&args.file)?;

	if args.json {
		let entries: Vec<IndexEntry<'_>> = anim
			.descriptors()
			.iter()
			.map(|d| IndexEntry {
				name: d.name(),
				frame_count: d.frame_count(),
				view_count: d.view_count(),
				source_offset: d.source_offset(),
			})
			.collect();
		println!("{}", serde_json::to_string_pretty(&entries)?);
		return Ok(());
	}

	println!("{:<10} {:>6} {:>5} {:>10}", "NAME", "FRAMES", "VIEWS", "OFFSET");
	for descriptor in anim.descriptors() {
		println!(
			"{:<10} {:>6} {:>5} {:>10}",
			descriptor.name(),
			descriptor.frame_count(),
			descriptor.view_count(),
			format!("{:#X}", descriptor.source_offset())
		);
	}
	println!("\n{} animations total", anim.descriptors().len());

	Ok(())
}

fn run_info(args: InfoArgs) -> Result<()> {
	let anim = open_file(&args.file)?;
	let animation = decode_or_bail(&anim, &args.name, 4)?;

	let populated = animation.refs().iter().filter(|r| r.is_some()).count();
	println!("{}: {animation}", args.name);
	println!(
		"  cells: {} populated of {}",
		populated,
		animation.refs().len()
	);

	for (id, sprite) in animation.sprites().iter().enumerate() {
		let uses = animation.refs().iter().filter(|r| **r == Some(id)).count();
		println!("  sprite {id:3}: {sprite}, referenced by {uses} cells");
	}

	Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
	let tables = color_tables();
	if args.color_set >= tables.len() {
		bail!("Color set {} out of range (max {})", args.color_set, tables.len() - 1);
	}

	let anim = open_file(&args.file)?;
	let animation = decode_or_bail(&anim, &args.name, args.color_set)?;

	fs::create_dir_all(&args.out_dir)
		.with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

	let colors = gameplay_palette().as_slice();
	let mut written = 0usize;

	for frame in 0..animation.frame_count() {
		for view in 0..animation.view_count() {
			let Some(sprite) = animation.sprite_at(frame, view) else {
				continue;
			};
			let Some(rendered) = render(sprite, colors, args.mirror) else {
				continue;
			};

			let img: RgbaImage = ImageBuffer::from_raw(
				u32::from(rendered.width()),
				u32::from(rendered.height()),
				rendered.rgba().to_vec(),
			)
			.context("Failed to build image buffer")?;

			let path =
				args.out_dir.join(format!("{}_f{frame:02}_v{view}.png", args.name));
			img.save(&path).with_context(|| format!("Failed to write {}", path.display()))?;
			written += 1;
		}
	}

	println!("Exported {written} frames to {}", args.out_dir.display());
	Ok(())
}

fn open_file(path: &PathBuf) -> Result<AnimFile> {
	AnimFile::open(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn decode_or_bail(anim: &AnimFile, name: &str, color_set: usize) -> Result<DecodedAnimation> {
	let table = if color_set == 4 {
		identity_color_table()
	} else {
		color_tables()[color_set]
	};

	anim.decode_required(name, table)
		.with_context(|| format!("Failed to decode animation {name}"))
}
