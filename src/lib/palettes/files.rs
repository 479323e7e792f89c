use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::colors::{Color, PLAYER_COUNT, PlayerColor, PlayerColorSet};
use crate::palettes::generator::{generate_palette, InterpolationMode, LineEnding};
use crate::palettes::palette::{PalFile, PaletteError};

/// Where Steam usually installs the game's palette folder.
pub const EXPECTED_PALETTE_FOLDER_LOCATIONS: [&str; 5] = [
	r"C:\Program Files (x86)\Steam\steamapps\common\AoEDE\Assets\Palettes",
	r"C:\SteamLibrary\steamapps\common\AoEDE\Assets\Palettes",
	r"D:\SteamLibrary\steamapps\common\AoEDE\Assets\Palettes",
	r"E:\SteamLibrary\steamapps\common\AoEDE\Assets\Palettes",
	r"F:\SteamLibrary\steamapps\common\AoEDE\Assets\Palettes",
];

#[derive(Clone, Default, Debug, PartialEq)]
pub struct WriteSummary {
	pub written: Vec<PathBuf>,
	pub removed: Vec<PathBuf>,
	pub bytes: u64,
}

/// Returns the first known game palette folder that exists on this machine.
pub fn locate_game_palette_folder() -> Option<PathBuf> {
	EXPECTED_PALETTE_FOLDER_LOCATIONS.iter()
		.map(PathBuf::from)
		.find(|p| p.is_dir())
}

fn remove_existing_palettes(dir: &Path) -> Result<Vec<PathBuf>, PaletteError> {
	let mut removed = Vec::new();

	for player in PlayerColor::ALL {
		let path = dir.join(player.palette_file_name());
		match fs::remove_file(&path) {
			Ok(()) => removed.push(path),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
			Err(err) => return Err(PaletteError::CantDelete { path, err }),
		}
	}

	Ok(removed)
}

/// Writes all eight player color palettes into `dir`.
///
/// A missing folder is created. Otherwise every existing player palette is
/// deleted before anything is written, and a failed delete aborts the whole
/// operation. Writing stops at the first failure; files written up to that
/// point stay on disk.
pub fn write_palette_files<P: AsRef<Path>>(
	dir: P,
	colors: &PlayerColorSet,
	mode: InterpolationMode,
	line_ending: LineEnding,
) -> Result<WriteSummary, PaletteError> {
	let dir = dir.as_ref();
	let mut removed = Vec::new();

	if dir.is_dir() {
		removed = remove_existing_palettes(dir)?;
		debug!("Removed {} previous player color palettes", removed.len());
	} else {
		fs::create_dir_all(dir)
			.map_err(|err| PaletteError::CantCreateFolder { path: dir.to_path_buf(), err })?;
		info!("No player color palette folder found, created {}", dir.display());
	}

	let summary = WriteSummary { removed, ..write_palettes(dir, colors, mode, line_ending)? };
	info!("All {} player color palettes created in {}", summary.written.len(), dir.display());
	Ok(summary)
}

/// Writes the eight palettes into the existing folder `dir`, in player order,
/// without touching other files. Stops at the first failed write.
pub fn write_palettes<P: AsRef<Path>>(
	dir: P,
	colors: &PlayerColorSet,
	mode: InterpolationMode,
	line_ending: LineEnding,
) -> Result<WriteSummary, PaletteError> {
	let dir = dir.as_ref();
	let mut summary = WriteSummary::default();

	for (player, color) in colors.iter() {
		let path = dir.join(player.palette_file_name());
		let text = generate_palette(color, mode, line_ending);

		fs::write(&path, &text)
			.map_err(|err| PaletteError::CantWrite { path: path.clone(), err })?;

		debug!("Wrote {} ({color}, {mode})", path.display());
		summary.bytes += text.len() as u64;
		summary.written.push(path);
	}

	Ok(summary)
}

/// Same as [write_palette_files], reduced to success or failure.
/// The error is logged rather than returned.
pub fn write_player_color_palette_files<P: AsRef<Path>>(
	dir: P,
	colors: &PlayerColorSet,
	mode: InterpolationMode,
	line_ending: LineEnding,
) -> bool {
	match write_palette_files(dir, colors, mode, line_ending) {
		Ok(_) => true,
		Err(e) => {
			error!("Writing player color palettes failed: {e}");
			false
		}
	}
}

/// Reads back the player colors of the palettes currently in `dir`.
/// Players without a palette file get `None`.
pub fn read_installed_colors<P: AsRef<Path>>(dir: P) -> Result<[Option<Color>; PLAYER_COUNT], PaletteError> {
	let dir = dir.as_ref();
	let mut colors = [None; PLAYER_COUNT];

	for player in PlayerColor::ALL {
		let path = dir.join(player.palette_file_name());
		if !path.is_file() {
			continue;
		}

		let pal = PalFile::from_pal_file(&path)?;
		colors[player.index()] = pal.base_color();
	}

	Ok(colors)
}
