use super::raster::Canvas;
use crate::color::Color;
use crate::config::{BigSplatterParams, SplatterParams};
use crate::geom::Point;
use crate::random::RandomSource;
use glam::{vec2, Vec2};

/// Scatters `params.max_dots` small dots around `center`. Returns the number of dots drawn.
///
/// Each dot lands at a uniform angle and a uniform distance in `[0, max_radius]`, with a
/// uniform radius in `[0, max_dot_radius)`. Dots are independent of each other.
pub fn splatter(
	canvas: &mut impl Canvas,
	random: &mut impl RandomSource,
	center: Point,
	params: &SplatterParams,
	color: Color,
) -> u32 {
	for _ in 0..params.max_dots {
		let angle = random.angle();
		let distance = random.uniform(0.0, params.max_radius);
		let radius = random.uniform(0.0, params.max_dot_radius);
		canvas.fill_circle(center + Vec2::from_angle(angle) * distance, radius, color);
	}
	params.max_dots
}

/// Drops between one and `params.max_blots` large elliptical blots near `center`, as paint
/// pooling under a brush that stopped moving. Returns the number of blots drawn.
pub fn big_splatter(
	canvas: &mut impl Canvas,
	random: &mut impl RandomSource,
	center: Point,
	params: &BigSplatterParams,
	color: Color,
) -> u32 {
	let count = random.count(params.max_blots);
	for _ in 0..count {
		let angle = random.angle();
		let offset = random.uniform(0.0, params.max_offset);
		let radii = vec2(
			random.uniform(params.min_radius_x, params.max_radius_x),
			random.uniform(params.min_radius_y, params.max_radius_y),
		);
		// The blot leans the way it was flung.
		canvas.fill_ellipse(center + Vec2::from_angle(angle) * offset, radii, angle, color);
	}
	count
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::{DrawOp, RecordingCanvas, ScriptedRandom};
	use approx::assert_abs_diff_eq;
	use std::f32::consts::PI;

	#[test]
	fn splatter_draws_exactly_max_dots() {
		let mut canvas = RecordingCanvas::default();
		let mut random = fastrand::Rng::with_seed(7);
		for max_dots in [0, 1, 2, 10] {
			canvas.ops.clear();
			let params = SplatterParams::new(max_dots, 25.0);
			let drawn = splatter(&mut canvas, &mut random, vec2(0.0, 0.0), &params, Color::BLACK);
			assert_eq!(drawn, max_dots);
			assert_eq!(canvas.circles().count(), max_dots as usize);
		}
	}

	#[test]
	fn dots_stay_within_radius() {
		let mut canvas = RecordingCanvas::default();
		let mut random = fastrand::Rng::with_seed(0x13371337);
		let center = vec2(100.0, 40.0);
		let params = SplatterParams::new(200, 50.0);
		splatter(&mut canvas, &mut random, center, &params, Color::BLACK);
		for (dot, radius) in canvas.circles() {
			assert!(dot.distance(center) <= 50.0 + 1e-3);
			assert!((0.0..3.0).contains(&radius));
		}
	}

	#[test]
	fn scripted_random_places_dots_exactly() {
		let mut canvas = RecordingCanvas::default();
		// angle = 0.25 turn, distance = 0.5 * 10, radius = 0.5 * 3
		let mut random = ScriptedRandom::new([0.25, 0.5, 0.5]);
		let params = SplatterParams::new(1, 10.0);
		splatter(&mut canvas, &mut random, vec2(10.0, 10.0), &params, Color::WHITE);
		let (center, radius) = canvas.circles().next().unwrap();
		assert_abs_diff_eq!(center.x, 10.0, epsilon = 1e-4);
		assert_abs_diff_eq!(center.y, 15.0, epsilon = 1e-4);
		assert_abs_diff_eq!(radius, 1.5);
		assert_eq!(
			canvas.ops[0],
			DrawOp::Circle {
				center,
				radius,
				color: Color::WHITE
			}
		);
	}

	#[test]
	fn big_splatter_draws_one_to_four_ellipses() {
		let mut random = fastrand::Rng::with_seed(42);
		let params = BigSplatterParams::default();
		let center = vec2(50.0, 50.0);
		for _ in 0..100 {
			let mut canvas = RecordingCanvas::default();
			let drawn = big_splatter(&mut canvas, &mut random, center, &params, Color::BLACK);
			assert!((1..=4).contains(&drawn));
			assert_eq!(canvas.ellipses().count(), drawn as usize);
			for (blot, radii, _) in canvas.ellipses() {
				assert!(blot.distance(center) <= 10.0 + 1e-3);
				assert!((20.0..50.0).contains(&radii.x));
				assert!((10.0..30.0).contains(&radii.y));
			}
		}
	}

	#[test]
	fn big_splatter_rotates_with_angle() {
		let mut canvas = RecordingCanvas::default();
		// count = 1, angle = half turn, offset = 0, radii at their minimums
		let mut random = ScriptedRandom::new([0.0, 0.5, 0.0, 0.0, 0.0]);
		let params = BigSplatterParams::default();
		big_splatter(&mut canvas, &mut random, vec2(0.0, 0.0), &params, Color::BLACK);
		let (center, radii, rotation) = canvas.ellipses().next().unwrap();
		assert_eq!(center, vec2(0.0, 0.0));
		assert_eq!(radii, vec2(20.0, 10.0));
		assert_abs_diff_eq!(rotation, PI);
	}
}
