use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::colors::Color;
use crate::palettes::generator::{ROWS_PER_TARGET, SHADE_TARGETS};

/// Index of the first row of the `(64, 64, 64)` block. Every interpolation
/// mode writes the untouched player color there.
const BASE_COLOR_ROW: usize = 2 * ROWS_PER_TARGET;

/// The color rows of a JASC-PAL file, header excluded.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct PalFile {
	pub rows: Vec<Color>,
	pub declared_colors: usize,
}

impl PalFile {
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Recovers the player color a generated palette was built from.
	pub fn base_color(&self) -> Option<Color> {
		if self.rows.len() < SHADE_TARGETS.len() * ROWS_PER_TARGET {
			return None;
		}

		self.rows.get(BASE_COLOR_ROW).copied()
	}
}

#[derive(Debug)]
pub enum PaletteError {
	TooManyColors,
	InvalidTextLine { line: usize, msg: String },
	CantDelete { path: PathBuf, err: std::io::Error },
	CantCreateFolder { path: PathBuf, err: std::io::Error },
	CantWrite { path: PathBuf, err: std::io::Error },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::TooManyColors => write!(f, "The palette file contains more than 256 colors"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::CantDelete { path, err } => write!(f, "Can't delete existing palette file {}: {err}", path.display()),
			PaletteError::CantCreateFolder { path, err } => write!(f, "Can't create palette folder {}: {err}", path.display()),
			PaletteError::CantWrite { path, err } => write!(f, "Can't write palette file {}: {err}", path.display()),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::CantDelete { err, .. }
			| PaletteError::CantCreateFolder { err, .. }
			| PaletteError::CantWrite { err, .. }
			| PaletteError::IoErr(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
