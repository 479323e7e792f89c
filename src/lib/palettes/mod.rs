pub mod files;
pub mod generator;
pub(crate) mod pal_pal;
pub mod palette;

pub use files::{locate_game_palette_folder, read_installed_colors, write_palette_files, write_palettes, write_player_color_palette_files, WriteSummary};
pub use generator::{generate_palette, shade, shade_rows, InterpolationMode, LineEnding, ShadeRow};
pub use palette::{PalFile, PaletteError};

pub const PAL_MAGIC: &str = "JASC-PAL";
pub const PAL_VERSION: &str = "0100";
pub const MAX_PALETTE_COLORS: usize = 256;
