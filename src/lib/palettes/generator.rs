use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::palettes::{MAX_PALETTE_COLORS, PAL_MAGIC, PAL_VERSION};

/// Number of steps between a player color and a shade target.
/// Each target produces `INTERPOLATION_STEPS + 1` rows, both ends included.
pub const INTERPOLATION_STEPS: u32 = 15;

pub const ROWS_PER_TARGET: usize = INTERPOLATION_STEPS as usize + 1;

/// Colors every player color gets shaded into, in file order.
pub const SHADE_TARGETS: [Color; 8] = [
	Color::new(0.0, 0.0, 0.0), // black
	Color::new(32.0, 32.0, 32.0),
	Color::new(64.0, 64.0, 64.0),
	Color::new(128.0, 128.0, 128.0),
	Color::new(192.0, 192.0, 192.0),
	Color::new(224.0, 224.0, 224.0),
	Color::new(255.0, 255.0, 255.0), // white
	Color::new(128.0, 96.0, 64.0), // brown
];

pub const SHADE_ROWS: usize = SHADE_TARGETS.len() * ROWS_PER_TARGET;

/// Targets at or below this channel sum get the reversed curve in [InterpolationMode::Glowing].
const GLOW_DARKNESS_THRESHOLD: f32 = 100.0;

const PADDING_ROW: &str = "0 0 0";

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InterpolationMode {
	/// Same shading as the game's own palettes.
	#[default]
	Default,
	/// Every row is the player color itself.
	OnlyMainColor,
	/// Default shading, but the darkest targets keep the player color glowing.
	Glowing,
}

impl From<InterpolationMode> for u8 {
	fn from(mode: InterpolationMode) -> Self {
		match mode {
			InterpolationMode::Default => 0,
			InterpolationMode::OnlyMainColor => 1,
			InterpolationMode::Glowing => 2,
		}
	}
}

impl TryFrom<u8> for InterpolationMode {
	type Error = String;

	fn try_from(v: u8) -> Result<Self, Self::Error> {
		match v {
			0 => Ok(InterpolationMode::Default),
			1 => Ok(InterpolationMode::OnlyMainColor),
			2 => Ok(InterpolationMode::Glowing),
			_ => Err(format!("unknown interpolation mode {v}")),
		}
	}
}

impl Display for InterpolationMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			InterpolationMode::Default => write!(f, "default"),
			InterpolationMode::OnlyMainColor => write!(f, "only-main-color"),
			InterpolationMode::Glowing => write!(f, "glowing"),
		}
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
	Lf,
	#[value(name = "crlf")]
	CrLf,
}

impl LineEnding {
	pub fn platform() -> Self {
		if cfg!(windows) { LineEnding::CrLf } else { LineEnding::Lf }
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			LineEnding::Lf => "\n",
			LineEnding::CrLf => "\r\n",
		}
	}
}

impl Default for LineEnding {
	fn default() -> Self {
		Self::platform()
	}
}

impl Display for LineEnding {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			LineEnding::Lf => write!(f, "lf"),
			LineEnding::CrLf => write!(f, "crlf"),
		}
	}
}

/// One `R G B` row of a palette file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadeRow {
	/// Interpolated channels, rounded half to even.
	Rounded([i64; 3]),
	/// The player color written as-is, without rounding.
	Raw(Color),
}

impl Display for ShadeRow {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ShadeRow::Rounded([r, g, b]) => write!(f, "{r} {g} {b}"),
			ShadeRow::Raw(c) => write!(f, "{} {} {}", c.r, c.g, c.b),
		}
	}
}

fn round_channels(c: Color) -> ShadeRow {
	ShadeRow::Rounded([c.r, c.g, c.b].map(|v| v.round_ties_even() as i64))
}

fn interpolate_linearly(base: &Color, target: &Color, step: u32) -> Color {
	let t = step as f32 / INTERPOLATION_STEPS as f32;
	base.lerp(target, t)
}

fn interpolate_for_glow(base: &Color, target: &Color, step: u32) -> Color {
	if target.sum() > GLOW_DARKNESS_THRESHOLD {
		return interpolate_linearly(base, target, step);
	}

	let scalar = (INTERPOLATION_STEPS - step) as f32 / INTERPOLATION_STEPS as f32;
	base.lerp(target, scalar)
}

/// Computes the row for `step` (`0..=INTERPOLATION_STEPS`) from `base` toward `target`.
///
/// # Panics
///
/// Panics if `step` is past [INTERPOLATION_STEPS].
pub fn shade(base: &Color, target: &Color, step: u32, mode: InterpolationMode) -> ShadeRow {
	assert!(step <= INTERPOLATION_STEPS, "interpolation step {step} is past {INTERPOLATION_STEPS}");

	match mode {
		InterpolationMode::Default => round_channels(interpolate_linearly(base, target, step)),
		InterpolationMode::OnlyMainColor => ShadeRow::Raw(*base),
		InterpolationMode::Glowing => round_channels(interpolate_for_glow(base, target, step)),
	}
}

/// All 128 shade rows for `base`, target by target.
pub fn shade_rows(base: &Color, mode: InterpolationMode) -> Vec<ShadeRow> {
	SHADE_TARGETS.iter()
		.flat_map(|target| (0..=INTERPOLATION_STEPS).map(move |step| shade(base, target, step, mode)))
		.collect()
}

/// Builds the full text of a player color palette file.
///
/// Layout: the three header lines, 128 shade rows, 128 `0 0 0` rows and a
/// trailing empty line, every line separated by `line_ending`.
pub fn generate_palette(base: &Color, mode: InterpolationMode, line_ending: LineEnding) -> String {
	let nl = line_ending.as_str();
	let mut text = format!("{PAL_MAGIC}{nl}{PAL_VERSION}{nl}{MAX_PALETTE_COLORS}");

	for row in shade_rows(base, mode) {
		// writing into a String can't fail
		let _ = write!(text, "{nl}{row}");
	}

	for _ in SHADE_ROWS..MAX_PALETTE_COLORS {
		text.push_str(nl);
		text.push_str(PADDING_ROW);
	}

	// the game's own palette files end with an empty line
	text.push_str(nl);
	text
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn glow_threshold_splits_targets() {
		let dark = SHADE_TARGETS.iter().filter(|t| t.sum() <= GLOW_DARKNESS_THRESHOLD).count();
		assert_eq!(dark, 2);
	}

	#[test]
	fn rounding_is_half_to_even() {
		let row = round_channels(Color::new(0.5, 1.5, 2.5));
		assert_eq!(row, ShadeRow::Rounded([0, 2, 2]));
	}

	#[test]
	fn mode_discriminants() {
		assert_eq!(u8::from(InterpolationMode::Glowing), 2);
		assert_eq!(InterpolationMode::try_from(1), Ok(InterpolationMode::OnlyMainColor));
		assert!(InterpolationMode::try_from(3).is_err());
	}
}
