pub mod defaults;
pub mod preset;
pub mod store;

pub use defaults::{default_presets, DEFAULT_UNCHANGEABLE_COUNT};
pub use preset::{Preset, PresetRecord};
pub use store::{parse_presets, serialize_presets, PresetError, PresetStore};
