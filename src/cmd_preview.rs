use anyhow::Result;

use aoe_player_colors::palettes::generator::{shade, INTERPOLATION_STEPS, SHADE_TARGETS};
use aoe_player_colors::palettes::{generate_palette, LineEnding};

use crate::commands::PreviewArgs;
use crate::common::swatch;

pub(crate) fn palettes_preview(args: &PreviewArgs) -> Result<()> {
	let Some(target_index) = args.target else {
		print!("{}", generate_palette(&args.color, args.mode, LineEnding::Lf));
		return Ok(());
	};

	let target = &SHADE_TARGETS[target_index as usize];
	println!("{} {} → {} {} ({})", swatch(&args.color), args.color, swatch(target), target, args.mode);

	for step in 0..=INTERPOLATION_STEPS {
		println!("{step:>2}: {}", shade(&args.color, target, step, args.mode));
	}

	Ok(())
}
