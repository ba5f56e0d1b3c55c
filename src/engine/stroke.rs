use crate::config::BrushConfig;
use crate::geom::Point;

/// What the width model makes of one movement sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidthSample {
	/// The brush moved; the stroke should be this wide.
	Moving(f32),
	/// The brush barely moved. Paint pools: full width, and a blot.
	Dwell(f32),
}

impl WidthSample {
	pub fn width(self) -> f32 {
		match self {
			WidthSample::Moving(width) | WidthSample::Dwell(width) => width,
		}
	}

	pub fn is_dwell(self) -> bool {
		matches!(self, WidthSample::Dwell(_))
	}
}

/// Width of the stroke between two consecutive samples. Faster (longer) moves are thinner.
///
/// `clamp(max_width - distance * distance_scale, min_width, max_width)`, or a dwell at
/// `max_width` when the distance is under `dwell_epsilon`.
pub fn stroke_width(a: Point, b: Point, config: &BrushConfig) -> WidthSample {
	let distance = a.distance(b);
	if distance < config.dwell_epsilon {
		return WidthSample::Dwell(config.max_width);
	}
	let width = config.max_width - distance * config.distance_scale;
	WidthSample::Moving(width.clamp(config.min_width, config.max_width))
}

/// Blends the previous segment's width into the new one so that width changes stay gradual.
pub fn smoothed_width(last_width: f32, width: f32, config: &BrushConfig) -> f32 {
	let history = config.history_weight;
	let blended = (last_width * history + width) / (history + 1.0);
	blended.clamp(config.min_width, config.max_width)
}

/// Direction of travel from `a` to `b`, in `(-π, π]`.
pub fn heading(a: Point, b: Point) -> f32 {
	let d = b - a;
	d.y.atan2(d.x)
}

/// The unsigned angle between two headings, in `[0, π]`.
pub fn turn_angle(previous: f32, current: f32) -> f32 {
	use std::f32::consts::{PI, TAU};
	let difference = (current - previous).rem_euclid(TAU);
	if difference > PI {
		TAU - difference
	} else {
		difference
	}
}
