use std::path::Path;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use aoe_player_colors::colors::{Color, PlayerColorSet};
use aoe_player_colors::config::Config;
use aoe_player_colors::presets::PresetStore;

pub(crate) fn load_config(path: &Path) -> Result<Config> {
	Config::load(path).with_context(|| format!("Can't load config {}", path.display()))
}

pub(crate) fn save_config(config: &Config, path: &Path) -> Result<()> {
	config.save(path).with_context(|| format!("Can't save config {}", path.display()))
}

/// Opens the preset store the config points at, creating it on first run.
pub(crate) fn open_store(config: &Config) -> Result<PresetStore> {
	let path = config.preset_file();
	PresetStore::load(&path, config.unchangeable_preset_count)
		.with_context(|| format!("Can't load presets from {}", path.display()))
}

/// Resolves a preset given by name or by index.
pub(crate) fn resolve_preset(store: &PresetStore, reference: &str) -> Result<usize> {
	store.resolve(reference).ok_or_else(|| match reference.trim().parse::<usize>() {
		Ok(index) => anyhow!("There is no preset called \"{reference}\" or with index {index} ({} presets)", store.len()),
		Err(_) => anyhow!("There is no preset called \"{reference}\""),
	})
}

pub(crate) fn color_set(colors: &[Color]) -> Result<PlayerColorSet> {
	Ok(PlayerColorSet::from_slice(colors)?)
}

pub(crate) fn swatch(color: &Color) -> String {
	let [r, g, b] = color.to_rgb8();
	format!("{}", "  ".on_truecolor(r, g, b))
}

pub(crate) fn format_swatches(colors: &PlayerColorSet) -> String {
	colors.iter().map(|(_, c)| swatch(c)).collect::<Vec<String>>().join(" ")
}

pub(crate) fn print_color_set(colors: &PlayerColorSet) {
	for (player, color) in colors.iter() {
		println!("  {:<7} {} {color}", player.to_string(), swatch(color));
	}
}
