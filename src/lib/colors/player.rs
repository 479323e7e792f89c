use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::colors::Color;

pub const PLAYER_COUNT: usize = 8;

/// The eight player color slots, in the order every consumer relies on.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
	Blue,
	Red,
	Yellow,
	Brown,
	Orange,
	Green,
	Purple,
	Teal,
}

impl PlayerColor {
	pub const ALL: [PlayerColor; PLAYER_COUNT] = [
		PlayerColor::Blue,
		PlayerColor::Red,
		PlayerColor::Yellow,
		PlayerColor::Brown,
		PlayerColor::Orange,
		PlayerColor::Green,
		PlayerColor::Purple,
		PlayerColor::Teal,
	];

	pub fn index(&self) -> usize {
		*self as usize
	}

	pub fn from_index(index: usize) -> Option<PlayerColor> {
		Self::ALL.get(index).copied()
	}

	pub fn name(&self) -> &'static str {
		match self {
			PlayerColor::Blue => "blue",
			PlayerColor::Red => "red",
			PlayerColor::Yellow => "yellow",
			PlayerColor::Brown => "brown",
			PlayerColor::Orange => "orange",
			PlayerColor::Green => "green",
			PlayerColor::Purple => "purple",
			PlayerColor::Teal => "teal",
		}
	}

	/// The file the game reads this player's palette from.
	pub fn palette_file_name(&self) -> String {
		format!("playercolor_{}.pal", self.name())
	}
}

impl Display for PlayerColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Exactly eight colors, positionally bound to [PlayerColor::ALL].
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct PlayerColorSet(pub [Color; PLAYER_COUNT]);

impl PlayerColorSet {
	pub fn new(colors: [Color; PLAYER_COUNT]) -> Self {
		Self(colors)
	}

	pub fn from_slice(colors: &[Color]) -> Result<Self, WrongColorCount> {
		let colors: [Color; PLAYER_COUNT] = colors.try_into()
			.map_err(|_| WrongColorCount(colors.len()))?;
		Ok(Self(colors))
	}

	pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &Color)> {
		PlayerColor::ALL.into_iter().zip(self.0.iter())
	}

	pub fn colors(&self) -> &[Color; PLAYER_COUNT] {
		&self.0
	}
}

impl Index<PlayerColor> for PlayerColorSet {
	type Output = Color;

	fn index(&self, player: PlayerColor) -> &Color {
		&self.0[player.index()]
	}
}

impl IndexMut<PlayerColor> for PlayerColorSet {
	fn index_mut(&mut self, player: PlayerColor) -> &mut Color {
		&mut self.0[player.index()]
	}
}

impl Index<usize> for PlayerColorSet {
	type Output = Color;

	fn index(&self, index: usize) -> &Color {
		&self.0[index]
	}
}

impl From<[[u8; 3]; PLAYER_COUNT]> for PlayerColorSet {
	fn from(v: [[u8; 3]; PLAYER_COUNT]) -> Self {
		Self(v.map(Color::from))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongColorCount(pub usize);

impl Display for WrongColorCount {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Expected {PLAYER_COUNT} player colors, got {}", self.0)
	}
}

impl std::error::Error for WrongColorCount {}
