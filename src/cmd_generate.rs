use std::path::Path;

use anyhow::Result;
use humansize::DECIMAL;
use log::info;

use aoe_player_colors::palettes::write_palette_files;

use crate::commands::GenerateArgs;
use crate::common::*;

pub(crate) fn palettes_generate(args: &GenerateArgs, config_path: &Path) -> Result<()> {
	let config = load_config(config_path)?;

	let colors = if let Some(colors) = &args.colors {
		color_set(colors)?
	} else {
		let store = open_store(&config)?;
		let index = match &args.preset {
			Some(reference) => resolve_preset(&store, reference)?,
			None => config.active_color_palette_preset,
		};
		let preset = store.get(index)?;
		info!("Using preset \"{}\"", preset.name);
		preset.colors
	};

	let mode = args.mode.unwrap_or(config.active_interpolation_mode);
	let line_ending = args.line_ending.unwrap_or(config.line_ending());
	let folder = args.output.clone().unwrap_or_else(|| config.palette_folder());

	let summary = write_palette_files(&folder, &colors, mode, line_ending)?;

	let size = humansize::format_size(summary.bytes, DECIMAL);
	println!("Wrote {} palette files ({size}) to {} using {mode} interpolation", summary.written.len(), folder.display());

	Ok(())
}
