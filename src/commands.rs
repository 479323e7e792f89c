use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use const_format::formatcp;

use aoe_player_colors::colors::{Color, ColorParseError, PlayerColor};
use aoe_player_colors::palettes::{InterpolationMode, LineEnding};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

fn parse_color(s: &str) -> Result<Color, ColorParseError> {
	Color::parse(s)
}

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Creates player color palettes for Age of Empires: Definitive Edition")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Commands,

	#[arg(long, global = true, help = "The config file. (defaults to UserPreferences.json in the working directory)")]
	pub config: Option<PathBuf>,

	#[arg(long, global = true, help = "Prints debug output.")]
	pub debug: bool,
	#[arg(short, long, global = true, conflicts_with = "debug", help = "Only prints warnings and errors.")]
	pub quiet: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct GenerateArgs {
	#[arg(short, long, group = "source", help = "The preset to use, by name or index. (defaults to the active preset)")]
	pub preset: Option<String>,
	#[arg(short, long, group = "source", num_args = 8, value_parser = parse_color,
	help = "Eight player colors, Blue to Teal. Format #RRGGBB or R,G,B.")]
	pub colors: Option<Vec<Color>>,

	#[arg(short, long, value_enum, help = "The interpolation mode. (defaults to the configured mode)")]
	pub mode: Option<InterpolationMode>,
	#[arg(short, long, help = "The palette folder. (defaults to the configured folder)")]
	pub output: Option<PathBuf>,
	#[arg(long, value_enum, help = "The line terminator used in palette files. (defaults to the platform's)")]
	pub line_ending: Option<LineEnding>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PreviewArgs {
	#[arg(value_parser = parse_color, help = "The player color. Format #RRGGBB or R,G,B.")]
	pub color: Color,

	#[arg(short, long, value_enum, help = "The interpolation mode.", default_value_t = InterpolationMode::default())]
	pub mode: InterpolationMode,
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(0..8),
	help = "Only prints the 16 rows shaded toward this target. (0 = black … 7 = brown)")]
	pub target: Option<u8>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct InspectArgs {
	#[arg(help = "The palette folder. (defaults to the configured folder)")]
	pub folder: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["colors", "from"])))]
pub(crate) struct PresetAddArgs {
	#[arg(help = "The new preset's name.")]
	pub name: String,
	#[arg(short, long, num_args = 8, value_parser = parse_color, help = "Eight player colors, Blue to Teal.")]
	pub colors: Option<Vec<Color>>,
	#[arg(short, long, help = "Copies the colors of an existing preset, by name or index.")]
	pub from: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum PresetCommands {
	#[command(about = "Lists all presets")]
	List,

	#[command(about = "Shows the colors of one preset")]
	Show {
		#[arg(help = "The preset, by name or index. Names are matched first.")]
		preset: String,
	},

	#[command(about = "Adds a new preset")]
	Add(PresetAddArgs),

	#[command(about = "Changes the colors of a preset")]
	Update {
		#[arg(help = "The preset, by name or index. Names are matched first.")]
		preset: String,
		#[arg(short, long, num_args = 8, value_parser = parse_color, conflicts_with_all = ["player", "color"],
		help = "Eight player colors, Blue to Teal.")]
		colors: Option<Vec<Color>>,
		#[arg(short, long, value_enum, requires = "color", help = "Changes a single player's color.")]
		player: Option<PlayerColor>,
		#[arg(long, value_parser = parse_color, requires = "player", help = "The new color for --player.")]
		color: Option<Color>,
	},

	#[command(about = "Removes a preset")]
	Remove {
		#[arg(help = "The preset, by name or index. Names are matched first.")]
		preset: String,
	},
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum ConfigCommands {
	#[command(about = "Prints the current configuration")]
	Show,

	#[command(about = "Sets the folder palette files are written to")]
	SetFolder {
		folder: PathBuf,
	},

	#[command(about = "Looks for the game's palette folder in the usual Steam locations")]
	Locate,

	#[command(about = "Sets the default interpolation mode")]
	SetMode {
		#[arg(value_enum)]
		mode: InterpolationMode,
	},

	#[command(about = "Sets the preset used when generating without --preset")]
	SetActive {
		#[arg(help = "The preset, by name or index. Names are matched first.")]
		preset: String,
	},
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Writes all eight player color palettes")]
	Generate(GenerateArgs),

	#[command(about = "Prints the palette generated for a single color")]
	Preview(PreviewArgs),

	#[command(about = "Prints the player colors of the installed palettes")]
	Inspect(InspectArgs),

	#[command(about = "Manages color presets", subcommand)]
	Presets(PresetCommands),

	#[command(about = "Manages the configuration", subcommand)]
	Config(ConfigCommands),
}
