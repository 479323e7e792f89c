use std::fs;

use aoe_player_colors::colors::{Color, PlayerColor, PlayerColorSet};
use aoe_player_colors::presets::{default_presets, parse_presets, Preset, PresetError, PresetStore};

fn custom_preset(name: &str) -> Preset {
	Preset::new(name, PlayerColorSet::from([
		[1, 2, 3],
		[4, 5, 6],
		[7, 8, 9],
		[10, 11, 12],
		[13, 14, 15],
		[16, 17, 18],
		[19, 20, 21],
		[22, 23, 24],
	]))
}

#[test]
fn first_load_writes_defaults() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("PlayerColorPresets.json");

	let store = PresetStore::load(&path, 3).unwrap();
	assert_eq!(store.names(), vec!["Editor Default", "AOE:DE Default", "High Contrast"]);
	assert!(path.exists());

	let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
	let records = json.as_array().unwrap();
	assert_eq!(records.len(), 3);
	assert_eq!(records[0]["PresetName"], "Editor Default");
	assert_eq!(records[0]["BluePlayerColor"], serde_json::json!([15, 70, 245]));
	assert_eq!(records[1]["OrangePlayerColor"], serde_json::json!([255, 150, 5]));
	assert_eq!(records[2]["TealPlayerColor"], serde_json::json!([126, 241, 184]));

	let reloaded = PresetStore::load(&path, 3).unwrap();
	assert_eq!(reloaded.presets(), default_presets().as_slice());
}

#[test]
fn save_load_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("presets.json");

	let mut store = PresetStore::load(&path, 3).unwrap();
	store.add(custom_preset("Mine")).unwrap();
	store.add(custom_preset("Also mine")).unwrap();
	store.save().unwrap();

	let reloaded = PresetStore::load(&path, 3).unwrap();
	assert_eq!(reloaded.presets(), store.presets());
	assert_eq!(reloaded.find_by_name("also MINE"), Some(4));
}

#[test]
fn legacy_concatenated_objects() {
	let text = r#"{
  "PresetName": "Old",
  "BluePlayerColor": [1, 2, 3],
  "RedPlayerColor": [4, 5, 6],
  "YellowPlayerColor": [7, 8, 9],
  "BrownPlayerColor": [10, 11, 12],
  "OrangePlayerColor": [13, 14, 15],
  "GreenPlayerColor": [16, 17, 18],
  "PurplePlayerColor": [19, 20, 21],
  "TealPlayerColor": [22, 23, 24]
}{
  "PresetName": "Older",
  "BluePlayerColor": [1, 2, 3],
  "RedPlayerColor": [4, 5, 6],
  "YellowPlayerColor": [7, 8, 9],
  "BrownPlayerColor": [10, 11, 12],
  "OrangePlayerColor": [13, 14, 15],
  "GreenPlayerColor": [16, 17, 18],
  "PurplePlayerColor": [19, 20, 21],
  "TealPlayerColor": [22, 23, 24]
}"#;

	let presets = parse_presets(text).unwrap();
	assert_eq!(presets, vec![custom_preset("Old"), custom_preset("Older")]);

	// the store rewrites the legacy format as an array on the next save
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("presets.json");
	fs::write(&path, text).unwrap();

	let store = PresetStore::load(&path, 0).unwrap();
	store.save().unwrap();
	assert!(fs::read_to_string(&path).unwrap().trim_start().starts_with('['));
	assert_eq!(PresetStore::load(&path, 0).unwrap().presets(), presets.as_slice());
}

#[test]
fn remove_respects_built_ins() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("presets.json");

	let mut store = PresetStore::load(&path, 3).unwrap();
	store.add(custom_preset("Mine")).unwrap();

	assert!(matches!(store.remove_at(0), Err(PresetError::BuiltInPreset { index: 0, .. })));
	assert!(matches!(store.remove_at(2), Err(PresetError::BuiltInPreset { index: 2, .. })));
	assert!(matches!(store.remove_at(4), Err(PresetError::IndexOutOfRange { index: 4, len: 4 })));

	let removed = store.remove_at(3).unwrap();
	assert_eq!(removed.name, "Mine");
	assert_eq!(store.len(), 3);
	store.save().unwrap();

	assert_eq!(PresetStore::load(&path, 3).unwrap().len(), 3);
}

#[test]
fn unchangeable_count_is_configurable() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("presets.json");

	let mut store = PresetStore::load(&path, 2).unwrap();
	assert!(store.is_built_in(1));
	assert!(!store.is_built_in(2));

	let removed = store.remove_at(2).unwrap();
	assert_eq!(removed.name, "High Contrast");
}

#[test]
fn replace_colors_keeps_name() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("presets.json");

	let mut store = PresetStore::load(&path, 3).unwrap();
	let index = store.add(custom_preset("Mine")).unwrap();

	let mut colors = store.get(index).unwrap().colors;
	colors[PlayerColor::Red] = Color::from([255, 0, 0]);
	store.replace_colors_at(index, colors).unwrap();
	store.save().unwrap();

	let reloaded = PresetStore::load(&path, 3).unwrap();
	let preset = reloaded.get(index).unwrap();
	assert_eq!(preset.name, "Mine");
	assert_eq!(preset.colors[PlayerColor::Red], Color::from([255, 0, 0]));
	assert_eq!(preset.colors[PlayerColor::Blue], Color::from([1, 2, 3]));

	assert!(matches!(store.replace_colors_at(1, colors), Err(PresetError::BuiltInPreset { .. })));
	assert!(matches!(store.replace_colors_at(9, colors), Err(PresetError::IndexOutOfRange { .. })));
}

#[test]
fn empty_names_are_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let mut store = PresetStore::load(dir.path().join("presets.json"), 3).unwrap();

	assert!(matches!(store.add(custom_preset("  ")), Err(PresetError::EmptyName)));
	assert_eq!(store.len(), 3);
}

#[test]
fn malformed_files_fail_to_load() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("presets.json");

	for text in [
		"not json",
		r#"[{"PresetName": "Missing colors"}]"#,
		r#"[{"PresetName": "Out of range", "BluePlayerColor": [300, 0, 0], "RedPlayerColor": [0, 0, 0],
			"YellowPlayerColor": [0, 0, 0], "BrownPlayerColor": [0, 0, 0], "OrangePlayerColor": [0, 0, 0],
			"GreenPlayerColor": [0, 0, 0], "PurplePlayerColor": [0, 0, 0], "TealPlayerColor": [0, 0, 0]}]"#,
	] {
		fs::write(&path, text).unwrap();
		assert!(matches!(PresetStore::load(&path, 3), Err(PresetError::Malformed(_))), "{text}");
	}
}

#[test]
fn resolve_by_name_or_index() {
	let dir = tempfile::tempdir().unwrap();
	let mut store = PresetStore::load(dir.path().join("PlayerColorPresets.json"), 3).unwrap();
	let season = store.add(custom_preset("2024")).unwrap();
	let shadowing = store.add(custom_preset("1")).unwrap();

	assert_eq!(store.resolve("high contrast"), Some(2));
	assert_eq!(store.resolve(" 0 "), Some(0));
	assert_eq!(store.resolve("2024"), Some(season));
	assert_eq!(store.resolve("1"), Some(shadowing));
	assert_eq!(store.resolve("AOE:DE Default"), Some(1));
	assert_eq!(store.resolve("5"), None);
	assert_eq!(store.resolve("Nope"), None);
}
