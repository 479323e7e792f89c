pub mod color;
pub mod player;

pub use color::{Color, ColorParseError};
pub use player::{PLAYER_COUNT, PlayerColor, PlayerColorSet, WrongColorCount};
