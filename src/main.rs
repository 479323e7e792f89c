use std::process::ExitCode;

use clap::Parser;

use aoe_player_colors::config::Config;

use crate::cmd_config::config;
use crate::cmd_generate::palettes_generate;
use crate::cmd_inspect::palettes_inspect;
use crate::cmd_presets::presets;
use crate::cmd_preview::palettes_preview;
use crate::commands::{Cli, Commands};
use crate::logging::setup_logging;

mod cmd_config;
mod cmd_generate;
mod cmd_inspect;
mod cmd_presets;
mod cmd_preview;
mod commands;
mod common;
mod logging;

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Err(e) = setup_logging(cli.debug, cli.quiet) {
		eprintln!("Can't set up logging: {e}");
	}

	let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

	let result = match &cli.command {
		Commands::Generate(args) => palettes_generate(args, &config_path),
		Commands::Preview(args) => palettes_preview(args),
		Commands::Inspect(args) => palettes_inspect(args, &config_path),
		Commands::Presets(command) => presets(command, &config_path),
		Commands::Config(command) => config(command, &config_path),
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
