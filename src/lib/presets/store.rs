use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::colors::PlayerColorSet;
use crate::fs::write_atomic;
use crate::presets::{default_presets, Preset, PresetRecord};

/// The named presets backed by a JSON file.
///
/// Mutations only change the in-memory list. Callers are expected to call
/// [PresetStore::save] after every mutation they want persisted.
#[derive(Clone, Debug)]
pub struct PresetStore {
	path: PathBuf,
	unchangeable_count: usize,
	presets: Vec<Preset>,
}

impl PresetStore {
	/// Loads presets from `path`. A missing file is created with the built-in presets.
	pub fn load<P: AsRef<Path>>(path: P, unchangeable_count: usize) -> Result<PresetStore, PresetError> {
		let path = path.as_ref().to_path_buf();

		if path.exists() {
			let text = fs::read_to_string(&path)?;
			let presets = parse_presets(&text)?;
			debug!("Preset file found, {} presets loaded from {}", presets.len(), path.display());

			return Ok(PresetStore { path, unchangeable_count, presets });
		}

		let store = PresetStore { path, unchangeable_count, presets: default_presets() };
		store.save()?;
		debug!("No preset file found, created {} with the default presets", store.path.display());

		Ok(store)
	}

	/// Writes the whole collection, replacing the file atomically.
	pub fn save(&self) -> Result<(), PresetError> {
		let text = serialize_presets(&self.presets)?;
		write_atomic(&self.path, text)?;
		debug!("{} presets saved to {}", self.presets.len(), self.path.display());
		Ok(())
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn unchangeable_count(&self) -> usize {
		self.unchangeable_count
	}

	pub fn presets(&self) -> &[Preset] {
		&self.presets
	}

	pub fn len(&self) -> usize {
		self.presets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.presets.is_empty()
	}

	pub fn names(&self) -> Vec<&str> {
		self.presets.iter().map(|p| p.name.as_str()).collect()
	}

	pub fn get(&self, index: usize) -> Result<&Preset, PresetError> {
		self.presets.get(index)
			.ok_or(PresetError::IndexOutOfRange { index, len: self.presets.len() })
	}

	/// Index of the first preset called `name`, ignoring case.
	pub fn find_by_name(&self, name: &str) -> Option<usize> {
		self.presets.iter().position(|p| p.name.eq_ignore_ascii_case(name))
	}

	/// Resolves a preset given by name or by index. Names are matched first,
	/// so a preset called "2024" stays reachable.
	pub fn resolve(&self, reference: &str) -> Option<usize> {
		let reference = reference.trim();
		self.find_by_name(reference).or_else(|| {
			reference.parse::<usize>().ok().filter(|&index| index < self.len())
		})
	}

	pub fn is_built_in(&self, index: usize) -> bool {
		index < self.unchangeable_count
	}

	/// Appends `preset` and returns its index.
	pub fn add(&mut self, preset: Preset) -> Result<usize, PresetError> {
		if preset.name.trim().is_empty() {
			return Err(PresetError::EmptyName);
		}

		self.presets.push(preset);
		Ok(self.presets.len() - 1)
	}

	pub fn remove_at(&mut self, index: usize) -> Result<Preset, PresetError> {
		self.check_editable(index)?;
		Ok(self.presets.remove(index))
	}

	/// Replaces the colors of the preset at `index`, keeping its name.
	pub fn replace_colors_at(&mut self, index: usize, colors: PlayerColorSet) -> Result<(), PresetError> {
		self.check_editable(index)?;
		let old = &self.presets[index];
		self.presets[index] = Preset::new(old.name.clone(), colors);
		Ok(())
	}

	fn check_editable(&self, index: usize) -> Result<(), PresetError> {
		if index >= self.presets.len() {
			return Err(PresetError::IndexOutOfRange { index, len: self.presets.len() });
		}
		if self.is_built_in(index) {
			return Err(PresetError::BuiltInPreset { index, name: self.presets[index].name.clone() });
		}
		Ok(())
	}
}

/// Parses a preset file. Accepts a JSON array as well as the older format
/// of JSON objects written back to back.
pub fn parse_presets(text: &str) -> Result<Vec<Preset>, PresetError> {
	if text.trim_start().starts_with('[') {
		let records: Vec<PresetRecord> = serde_json::from_str(text)?;
		return Ok(records.into_iter().map(Preset::from).collect());
	}

	serde_json::Deserializer::from_str(text)
		.into_iter::<PresetRecord>()
		.map(|r| r.map(Preset::from).map_err(PresetError::from))
		.collect()
}

pub fn serialize_presets(presets: &[Preset]) -> Result<String, PresetError> {
	let records = presets.iter().map(PresetRecord::from).collect::<Vec<PresetRecord>>();
	Ok(serde_json::to_string_pretty(&records)?)
}

#[derive(Debug)]
pub enum PresetError {
	IndexOutOfRange { index: usize, len: usize },
	BuiltInPreset { index: usize, name: String },
	EmptyName,
	Malformed(serde_json::Error),
	IoErr(std::io::Error),
}

impl Display for PresetError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PresetError::IndexOutOfRange { index, len } => write!(f, "Preset index {index} is out of range ({len} presets)"),
			PresetError::BuiltInPreset { index, name } => write!(f, "Preset {index} (\"{name}\") is built in and can't be changed"),
			PresetError::EmptyName => write!(f, "Preset names can't be empty"),
			PresetError::Malformed(e) => write!(f, "Malformed preset file: {e}"),
			PresetError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PresetError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PresetError::Malformed(e) => Some(e),
			PresetError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PresetError {
	fn from(e: std::io::Error) -> Self {
		PresetError::IoErr(e)
	}
}

impl From<serde_json::Error> for PresetError {
	fn from(e: serde_json::Error) -> Self {
		PresetError::Malformed(e)
	}
}
