use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fs::write_atomic;
use crate::palettes::{InterpolationMode, LineEnding};
use crate::presets::DEFAULT_UNCHANGEABLE_COUNT;

pub const CONFIG_FILE_NAME: &str = "UserPreferences.json";
pub const PRESET_FILE_NAME: &str = "PlayerColorPresets.json";
pub const PALETTE_FOLDER_NAME: &str = "Palettes";

/// User preferences, stored as JSON next to the program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
	pub palette_folder_location: Option<PathBuf>,
	pub active_color_palette_preset: usize,
	pub active_interpolation_mode: InterpolationMode,
	pub preset_file_location: Option<PathBuf>,
	pub unchangeable_preset_count: usize,
	pub line_ending: Option<LineEnding>,

	/// Keys this tool doesn't use, such as the window geometry the GUI stores.
	/// They are written back unchanged on save.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			palette_folder_location: None,
			active_color_palette_preset: 0,
			active_interpolation_mode: InterpolationMode::default(),
			preset_file_location: None,
			unchangeable_preset_count: DEFAULT_UNCHANGEABLE_COUNT,
			line_ending: None,
			extra: Map::new(),
		}
	}
}

fn working_dir() -> PathBuf {
	env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

impl Config {
	pub fn default_path() -> PathBuf {
		working_dir().join(CONFIG_FILE_NAME)
	}

	/// Loads the config from `path`, falling back to defaults if the file doesn't exist.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
		let path = path.as_ref();
		if !path.exists() {
			debug!("No config file at {}, using defaults", path.display());
			return Ok(Config::default());
		}

		let text = fs::read_to_string(path)?;
		let config = serde_json::from_str(&text)?;
		debug!("Config loaded from {}", path.display());
		Ok(config)
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
		let text = serde_json::to_string_pretty(self)?;
		write_atomic(path.as_ref(), text)?;
		debug!("Config saved to {}", path.as_ref().display());
		Ok(())
	}

	pub fn palette_folder(&self) -> PathBuf {
		self.palette_folder_location.clone()
			.unwrap_or_else(|| working_dir().join(PALETTE_FOLDER_NAME))
	}

	pub fn preset_file(&self) -> PathBuf {
		self.preset_file_location.clone()
			.unwrap_or_else(|| working_dir().join(PRESET_FILE_NAME))
	}

	pub fn line_ending(&self) -> LineEnding {
		self.line_ending.unwrap_or_default()
	}
}

#[derive(Debug)]
pub enum ConfigError {
	Malformed(serde_json::Error),
	IoErr(std::io::Error),
}

impl Display for ConfigError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigError::Malformed(e) => write!(f, "Malformed config file: {e}"),
			ConfigError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for ConfigError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ConfigError::Malformed(e) => Some(e),
			ConfigError::IoErr(e) => Some(e),
		}
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(e: std::io::Error) -> Self {
		ConfigError::IoErr(e)
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(e: serde_json::Error) -> Self {
		ConfigError::Malformed(e)
	}
}
