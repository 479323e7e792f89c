use std::fmt::{Display, Formatter};

use regex::Regex;

/// An RGB color with floating-point channels.
///
/// Channels are nominally in `0..=255` but are never clamped here; palette
/// generation writes whatever values it is given.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
}

impl Color {
	pub const fn new(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b }
	}

	pub fn sum(&self) -> f32 {
		self.r + self.g + self.b
	}

	/// Linear interpolation, `self * (1 - t) + other * t` per channel.
	pub fn lerp(&self, other: &Color, t: f32) -> Color {
		Color {
			r: self.r * (1.0 - t) + other.r * t,
			g: self.g * (1.0 - t) + other.g * t,
			b: self.b * (1.0 - t) + other.b * t,
		}
	}

	/// Converts to the integer triple stored in preset files.
	/// Channels are truncated toward zero and saturated into `0..=255`.
	pub fn to_rgb8(&self) -> [u8; 3] {
		[self.r as u8, self.g as u8, self.b as u8]
	}

	/// Parses `#RRGGBB`, `0xRRGGBB`, `RRGGBB` or a `R,G,B` / `R G B` triple.
	pub fn parse<S: AsRef<str>>(s: S) -> Result<Color, ColorParseError> {
		let trimmed = s.as_ref().trim();
		if trimmed.is_empty() {
			return Err(ColorParseError::Empty);
		}

		let re = Regex::new(r"^(?P<r>\d{1,3})\s*[,\s]\s*(?P<g>\d{1,3})\s*[,\s]\s*(?P<b>\d{1,3})$")
			.map_err(|e| ColorParseError::Invalid(e.to_string()))?;

		if let Some(groups) = re.captures(trimmed) {
			let channel = |name: &str| -> Result<u8, ColorParseError> {
				groups[name].parse::<u8>()
					.map_err(|_| ColorParseError::ChannelOutOfRange(groups[name].to_string()))
			};

			return Ok(Color::from([channel("r")?, channel("g")?, channel("b")?]));
		}

		// remove common hexadecimal prefixes from the string prior to parsing
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(ColorParseError::Invalid(trimmed.to_string()));
		}

		u32::from_str_radix(stripped, 16)
			.map(Color::from)
			.map_err(|_| ColorParseError::Invalid(trimmed.to_string()))
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0] as f32,
			g: v[1] as f32,
			b: v[2] as f32,
		}
	}
}

impl From<[f32; 3]> for Color {
	fn from(v: [f32; 3]) -> Self {
		Self { r: v[0], g: v[1], b: v[2] }
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Color::from([
			((v >> 16) & 0xFF) as u8,
			((v >> 8) & 0xFF) as u8,
			(v & 0xFF) as u8,
		])
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let [r, g, b] = [self.r, self.g, self.b].map(|c| c.round_ties_even() as u8);
		let mut rgb = r as u32;
		rgb = (rgb << 8) | g as u32;
		rgb = (rgb << 8) | b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorParseError {
	Empty,
	Invalid(String),
	ChannelOutOfRange(String),
}

impl Display for ColorParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColorParseError::Empty => write!(f, "Empty color string"),
			ColorParseError::Invalid(s) => write!(f, "\"{s}\" is not a valid color (expected #RRGGBB or R,G,B)"),
			ColorParseError::ChannelOutOfRange(s) => write!(f, "Channel value {s} is outside of 0-255"),
		}
	}
}

impl std::error::Error for ColorParseError {}
