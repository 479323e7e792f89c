use aoe_player_colors::colors::Color;
use aoe_player_colors::palettes::generator::{shade, shade_rows, INTERPOLATION_STEPS, SHADE_TARGETS};
use aoe_player_colors::palettes::{generate_palette, InterpolationMode, LineEnding, PalFile, ShadeRow};

const MODES: [InterpolationMode; 3] = [InterpolationMode::Default, InterpolationMode::OnlyMainColor, InterpolationMode::Glowing];

fn base_colors() -> Vec<Color> {
	vec![
		Color::from([15, 70, 245]),
		Color::from([220, 35, 35]),
		Color::from([0, 0, 0]),
		Color::from([255, 255, 255]),
		Color::from([126, 242, 225]),
	]
}

fn rounded(c: &Color) -> ShadeRow {
	ShadeRow::Rounded([c.r, c.g, c.b].map(|v| v.round_ties_even() as i64))
}

#[test]
fn default_mode_endpoints() {
	for base in base_colors() {
		for target in SHADE_TARGETS {
			assert_eq!(shade(&base, &target, 0, InterpolationMode::Default), rounded(&base));
			assert_eq!(shade(&base, &target, INTERPOLATION_STEPS, InterpolationMode::Default), rounded(&target));
		}
	}
}

#[test]
fn default_mode_midpoint() {
	let base = Color::from([15, 70, 245]);
	let black = SHADE_TARGETS[0];

	assert_eq!(shade(&base, &black, 0, InterpolationMode::Default).to_string(), "15 70 245");
	assert_eq!(shade(&base, &black, 8, InterpolationMode::Default).to_string(), "7 33 114");
	assert_eq!(shade(&base, &black, 15, InterpolationMode::Default).to_string(), "0 0 0");
}

#[test]
fn only_main_color_is_unrounded_and_constant() {
	let base = Color::new(15.5, 70.25, 245.0);
	let rows = shade_rows(&base, InterpolationMode::OnlyMainColor);

	assert_eq!(rows.len(), 128);
	assert!(rows.iter().all(|r| *r == ShadeRow::Raw(base)));
	assert!(rows.iter().all(|r| r.to_string() == "15.5 70.25 245"));
}

#[test]
fn glowing_matches_default_on_light_targets() {
	for base in base_colors() {
		for target in SHADE_TARGETS.iter().filter(|t| t.sum() > 100.0) {
			for step in 0..=INTERPOLATION_STEPS {
				assert_eq!(
					shade(&base, target, step, InterpolationMode::Glowing),
					shade(&base, target, step, InterpolationMode::Default),
				);
			}
		}
	}
}

#[test]
fn glowing_reverses_dark_targets() {
	let base = Color::from([15, 70, 245]);

	for target in SHADE_TARGETS.iter().filter(|t| t.sum() <= 100.0) {
		assert_eq!(shade(&base, target, 0, InterpolationMode::Glowing), rounded(target));
		assert_eq!(shade(&base, target, INTERPOLATION_STEPS, InterpolationMode::Glowing), rounded(&base));
	}
}

#[test]
fn palette_layout() {
	for base in base_colors() {
		for mode in MODES {
			let text = generate_palette(&base, mode, LineEnding::Lf);
			let lines = text.split('\n').collect::<Vec<&str>>();

			assert_eq!(lines.len(), 260);
			assert_eq!(&lines[..3], &["JASC-PAL", "0100", "256"]);

			let rows = shade_rows(&base, mode).iter().map(|r| r.to_string()).collect::<Vec<String>>();
			assert_eq!(&lines[3..131], rows.as_slice());

			assert!(lines[131..259].iter().all(|l| *l == "0 0 0"));
			assert_eq!(lines[259], "");
		}
	}
}

#[test]
fn palette_crlf_layout() {
	let text = generate_palette(&Color::from([45, 45, 245]), InterpolationMode::Default, LineEnding::CrLf);

	assert!(text.starts_with("JASC-PAL\r\n0100\r\n256\r\n45 45 245\r\n"));
	assert!(text.ends_with("0 0 0\r\n"));
	assert_eq!(text.split("\r\n").count(), 260);
	assert_eq!(text.matches('\n').count(), 259);
}

#[test]
fn palette_parsing_recovers_base_color() {
	let mut bases = base_colors();
	bases.push(Color::new(15.5, 70.25, 245.0));

	for base in bases {
		for mode in MODES {
			if mode != InterpolationMode::OnlyMainColor && base.r.fract() != 0.0 {
				continue;
			}

			let pal = PalFile::from_pal_string(generate_palette(&base, mode, LineEnding::CrLf)).unwrap();
			assert_eq!(pal.declared_colors, 256);
			assert_eq!(pal.len(), 256);
			assert_eq!(pal.base_color(), Some(base), "{mode} {base}");
		}
	}
}

#[test]
fn palette_parsing_short_file_has_no_base_color() {
	let pal = PalFile::from_pal_string("JASC-PAL\n0100\n2\n1 2 3\n4 5 6\n").unwrap();
	assert_eq!(pal.rows, vec![Color::from([1, 2, 3]), Color::from([4, 5, 6])]);
	assert_eq!(pal.base_color(), None);
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 5, msg: \"Malformed line\" }")]
fn palette_parsing_broken_row() {
	PalFile::from_pal_string("JASC-PAL\n0100\n256\n1 2 3\n1 2\n").unwrap();
}

#[test]
#[should_panic(expected = "InvalidTextLine { line: 1, msg: \"Invalid magic sequence: GIMP Palette\" }")]
fn palette_parsing_broken_magic() {
	PalFile::from_pal_string("GIMP Palette\n0100\n256\n").unwrap();
}

#[test]
#[should_panic(expected = "TooManyColors")]
fn palette_parsing_too_many_colors() {
	let mut text = "JASC-PAL\n0100\n256\n".to_string();
	for _ in 0..257 {
		text.push_str("1 2 3\n");
	}
	PalFile::from_pal_string(text).unwrap();
}

#[test]
#[should_panic(expected = "interpolation step 16 is past 15")]
fn shade_past_last_step() {
	let base = Color::from([15u8, 70, 245]);
	let _ = shade(&base, &Color::from([255u8, 255, 255]), INTERPOLATION_STEPS + 1, InterpolationMode::Default);
}
