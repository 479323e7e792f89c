use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::info;

use aoe_player_colors::palettes::locate_game_palette_folder;

use crate::commands::ConfigCommands;
use crate::common::*;

pub(crate) fn config(command: &ConfigCommands, config_path: &Path) -> Result<()> {
	let mut config = load_config(config_path)?;

	match command {
		ConfigCommands::Show => {
			println!("{}", config_path.display().to_string().bold());
			println!("  palette folder:     {}", config.palette_folder().display());
			println!("  preset file:        {}", config.preset_file().display());
			println!("  active preset:      {}", config.active_color_palette_preset);
			println!("  interpolation mode: {}", config.active_interpolation_mode);
			println!("  built-in presets:   {}", config.unchangeable_preset_count);
			println!("  line ending:        {}", config.line_ending());
			return Ok(());
		}
		ConfigCommands::SetFolder { folder } => {
			config.palette_folder_location = Some(folder.clone());
		}
		ConfigCommands::Locate => {
			let Some(folder) = locate_game_palette_folder() else {
				anyhow::bail!("The game's palette folder wasn't found in any of the usual locations, use set-folder instead");
			};
			info!("Palette folder found at {}", folder.display());
			config.palette_folder_location = Some(folder);
		}
		ConfigCommands::SetMode { mode } => {
			config.active_interpolation_mode = *mode;
		}
		ConfigCommands::SetActive { preset } => {
			let store = open_store(&config)?;
			config.active_color_palette_preset = resolve_preset(&store, preset)?;
		}
	}

	save_config(&config, config_path)?;
	info!("Config saved to {}", config_path.display());
	Ok(())
}
