use serde::{Deserialize, Serialize};

use crate::colors::{PlayerColor, PlayerColorSet};

#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
	pub name: String,
	pub colors: PlayerColorSet,
}

impl Preset {
	pub fn new<S: Into<String>>(name: S, colors: PlayerColorSet) -> Self {
		Self { name: name.into(), colors }
	}
}

/// A preset as stored in `PlayerColorPresets.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PresetRecord {
	pub preset_name: String,
	pub blue_player_color: [u8; 3],
	pub red_player_color: [u8; 3],
	pub yellow_player_color: [u8; 3],
	pub brown_player_color: [u8; 3],
	pub orange_player_color: [u8; 3],
	pub green_player_color: [u8; 3],
	pub purple_player_color: [u8; 3],
	pub teal_player_color: [u8; 3],
}

impl From<&Preset> for PresetRecord {
	fn from(p: &Preset) -> Self {
		let c = |player: PlayerColor| p.colors[player].to_rgb8();
		Self {
			preset_name: p.name.clone(),
			blue_player_color: c(PlayerColor::Blue),
			red_player_color: c(PlayerColor::Red),
			yellow_player_color: c(PlayerColor::Yellow),
			brown_player_color: c(PlayerColor::Brown),
			orange_player_color: c(PlayerColor::Orange),
			green_player_color: c(PlayerColor::Green),
			purple_player_color: c(PlayerColor::Purple),
			teal_player_color: c(PlayerColor::Teal),
		}
	}
}

impl From<PresetRecord> for Preset {
	fn from(r: PresetRecord) -> Self {
		Preset::new(r.preset_name, PlayerColorSet::from([
			r.blue_player_color,
			r.red_player_color,
			r.yellow_player_color,
			r.brown_player_color,
			r.orange_player_color,
			r.green_player_color,
			r.purple_player_color,
			r.teal_player_color,
		]))
	}
}
