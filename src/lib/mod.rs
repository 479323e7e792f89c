pub mod colors;
pub mod config;
pub mod fs;
pub mod palettes;
pub mod presets;
