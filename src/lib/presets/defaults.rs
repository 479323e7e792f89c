use crate::colors::PlayerColorSet;
use crate::presets::Preset;

/// Presets at indices below this are shipped with the program and read-only.
pub const DEFAULT_UNCHANGEABLE_COUNT: usize = 3;

/// The presets written on first run, Blue to Teal.
pub fn default_presets() -> Vec<Preset> {
	vec![
		Preset::new("Editor Default", PlayerColorSet::from([
			[15, 70, 245],
			[220, 35, 35],
			[215, 215, 30],
			[115, 60, 0],
			[245, 135, 25],
			[4, 165, 20],
			[210, 55, 200],
			[126, 242, 225],
		])),
		Preset::new("AOE:DE Default", PlayerColorSet::from([
			[45, 45, 245],
			[210, 40, 40],
			[215, 215, 30],
			[142, 91, 0],
			[255, 150, 5],
			[4, 165, 20],
			[150, 15, 250],
			[126, 242, 225],
		])),
		Preset::new("High Contrast", PlayerColorSet::from([
			[43, 63, 247],
			[224, 27, 27],
			[230, 234, 53],
			[96, 43, 11],
			[234, 128, 21],
			[30, 165, 5],
			[218, 3, 186],
			[126, 241, 184],
		])),
	]
}
