use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use regex::{Captures, Regex};

use crate::colors::Color;
use crate::palettes::palette::{PalFile, PaletteError};
use crate::palettes::{MAX_PALETTE_COLORS, PAL_MAGIC, PAL_VERSION};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/pal_file.cpp

impl PalFile {
	fn from_pal_internal<R: Read + BufRead>(reader: &mut R) -> Result<PalFile, PaletteError> {
		// channels written in only-main-color mode aren't rounded, so decimals are allowed
		let re = Regex::new(r"^(?P<r>-?\d+(?:\.\d+)?)\s+(?P<g>-?\d+(?:\.\d+)?)\s+(?P<b>-?\d+(?:\.\d+)?)$")
			.map_err(|e| PaletteError::InvalidTextLine { line: 0, msg: e.to_string() })?;

		let mut pal = PalFile::default();

		let mut magic = String::new();
		reader.read_line(&mut magic)?;
		if magic.trim() != PAL_MAGIC {
			return Err(PaletteError::InvalidTextLine {
				line: 1,
				msg: format!("Invalid magic sequence: {}", magic.trim()),
			});
		}

		let mut version = String::new();
		reader.read_line(&mut version)?;
		if version.trim() != PAL_VERSION {
			return Err(PaletteError::InvalidTextLine {
				line: 2,
				msg: format!("Invalid version: {}", version.trim()),
			});
		}

		let mut count = String::new();
		reader.read_line(&mut count)?;
		pal.declared_colors = count.trim().parse::<usize>()
			.map_err(|_| PaletteError::InvalidTextLine { line: 3, msg: format!("Invalid color count: {}", count.trim()) })?;

		for (i, line) in reader.lines().enumerate() {
			let line_number = i + 4;
			let trimmed_line = line?.trim().to_owned();
			if trimmed_line.is_empty() || trimmed_line.starts_with("#") {
				continue;
			}

			let groups: Captures = match re.captures(&trimmed_line) {
				None => {
					return Err(PaletteError::InvalidTextLine {
						line: line_number,
						msg: "Malformed line".to_string(),
					});
				}
				Some(captures) => captures
			};

			let channel = |name: &str, label: &str| -> Result<f32, PaletteError> {
				groups[name].parse::<f32>()
					.map_err(|_| PaletteError::InvalidTextLine { line: line_number, msg: format!("Invalid {label} value") })
			};

			pal.rows.push(Color::new(channel("r", "red")?, channel("g", "green")?, channel("b", "blue")?));

			if pal.len() > MAX_PALETTE_COLORS {
				return Err(PaletteError::TooManyColors);
			}
		}

		Ok(pal)
	}

	pub fn from_pal_file<P: AsRef<Path>>(path: P) -> Result<PalFile, PaletteError> {
		let f = File::open(path)?;
		let mut reader = BufReader::new(f);
		Self::from_pal_internal(&mut reader)
	}

	pub fn from_pal_string<S: Into<String>>(s: S) -> Result<PalFile, PaletteError> {
		let s = s.into();
		let mut reader = BufReader::new(s.as_bytes());
		Self::from_pal_internal(&mut reader)
	}
}
