use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use log::info;

use aoe_player_colors::presets::{Preset, PresetStore};

use crate::commands::{PresetAddArgs, PresetCommands};
use crate::common::*;

fn presets_list(store: &PresetStore, active: usize) {
	for (i, preset) in store.presets().iter().enumerate() {
		let marker = if i == active { "*" } else { " " };
		let lock = if store.is_built_in(i) { "built-in".dimmed().to_string() } else { String::new() };
		println!("{marker}{i:>3} {} {:<24} {lock}", format_swatches(&preset.colors), preset.name);
	}
}

fn presets_add(store: &mut PresetStore, args: &PresetAddArgs) -> Result<()> {
	let colors = match (&args.colors, &args.from) {
		(Some(colors), _) => color_set(colors)?,
		(None, Some(reference)) => {
			let index = resolve_preset(store, reference)?;
			store.get(index)?.colors
		}
		(None, None) => anyhow::bail!("Either --colors or --from is required"),
	};

	if store.find_by_name(&args.name).is_some() {
		log::warn!("A preset called \"{}\" already exists", args.name);
	}

	let index = store.add(Preset::new(args.name.trim(), colors))?;
	store.save()?;
	info!("Preset \"{}\" added at index {index}", args.name.trim());
	Ok(())
}

pub(crate) fn presets(command: &PresetCommands, config_path: &Path) -> Result<()> {
	let config = load_config(config_path)?;
	let mut store = open_store(&config)?;

	match command {
		PresetCommands::List => {
			presets_list(&store, config.active_color_palette_preset);
		}
		PresetCommands::Show { preset } => {
			let index = resolve_preset(&store, preset)?;
			let preset = store.get(index)?;
			println!("{} {}", format!("[{index}]").dimmed(), preset.name.bold());
			print_color_set(&preset.colors);
		}
		PresetCommands::Add(args) => {
			presets_add(&mut store, args)?;
		}
		PresetCommands::Update { preset, colors, player, color } => {
			let index = resolve_preset(&store, preset)?;

			let new_colors = match (colors, player, color) {
				(Some(colors), _, _) => color_set(colors)?,
				(None, Some(player), Some(color)) => {
					let mut new_colors = store.get(index)?.colors;
					new_colors[*player] = *color;
					new_colors
				}
				_ => anyhow::bail!("Either --colors or --player with --color is required"),
			};

			store.replace_colors_at(index, new_colors)?;
			store.save()?;
			info!("Preset \"{}\" updated", store.get(index)?.name);
		}
		PresetCommands::Remove { preset } => {
			let index = resolve_preset(&store, preset)?;
			let removed = store.remove_at(index)?;
			store.save()?;
			info!("Preset \"{}\" removed", removed.name);

			// keep the active preset pointing at the same preset, or the first one if it was removed
			if config.active_color_palette_preset >= index {
				let mut config = config.clone();
				config.active_color_palette_preset = if config.active_color_palette_preset == index {
					0
				} else {
					config.active_color_palette_preset - 1
				};
				save_config(&config, config_path)?;
			}
		}
	}

	Ok(())
}
