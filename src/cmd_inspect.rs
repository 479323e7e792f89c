use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use aoe_player_colors::colors::PlayerColor;
use aoe_player_colors::palettes::read_installed_colors;

use crate::commands::InspectArgs;
use crate::common::{load_config, swatch};

pub(crate) fn palettes_inspect(args: &InspectArgs, config_path: &Path) -> Result<()> {
	let folder = match &args.folder {
		Some(folder) => folder.clone(),
		None => load_config(config_path)?.palette_folder(),
	};

	if !folder.is_dir() {
		anyhow::bail!("{} is not a folder", folder.display());
	}

	let colors = read_installed_colors(&folder)
		.with_context(|| format!("Can't read palettes in {}", folder.display()))?;

	println!("{}", folder.display().to_string().bold());
	for player in PlayerColor::ALL {
		match colors[player.index()] {
			Some(color) => println!("  {:<7} {} {color}", player.to_string(), swatch(&color)),
			None => println!("  {:<7} {}", player.to_string(), "not installed".dimmed()),
		}
	}

	Ok(())
}
