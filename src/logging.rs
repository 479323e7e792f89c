use anyhow::Result;
use colored::Colorize;
use log::{Level, LevelFilter};

pub(crate) fn setup_logging(debug: bool, quiet: bool) -> Result<()> {
	let level = if debug {
		LevelFilter::Debug
	} else if quiet {
		LevelFilter::Warn
	} else {
		LevelFilter::Info
	};

	fern::Dispatch::new()
		.format(|out, message, record| {
			let level = match record.level() {
				Level::Error => "error".red(),
				Level::Warn => "warning".yellow(),
				Level::Info => "info".green(),
				Level::Debug => "debug".blue(),
				Level::Trace => "trace".dimmed(),
			};
			out.finish(format_args!("{level}: {message}"))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()?;

	Ok(())
}
