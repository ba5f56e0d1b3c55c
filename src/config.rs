use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	#[error("{name} must be finite and positive, got {value}")]
	NotPositive { name: &'static str, value: f32 },
	#[error("min width {min} exceeds max width {max}")]
	InvertedWidthRange { min: f32, max: f32 },
	#[error("initial width {initial} is outside [{min}, {max}]")]
	InitialWidthOutOfRange { initial: f32, min: f32, max: f32 },
	#[error("{name} must be finite and non-negative, got {value}")]
	Negative { name: &'static str, value: f32 },
	#[error("{name} range is inverted: {min} exceeds {max}")]
	InvertedRange {
		name: &'static str,
		min: f32,
		max: f32,
	},
	#[error("a dwell must drop at least one blot")]
	NoBlots,
}
use ConfigError::*;

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Parameters of one dot splatter burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplatterParams {
	/// Number of dots drawn.
	pub max_dots: u32,
	/// Dots land uniformly within this distance of the center.
	pub max_radius: f32,
	/// Each dot's own radius is uniform in `[0, max_dot_radius)`.
	pub max_dot_radius: f32,
}

impl SplatterParams {
	pub const fn new(max_dots: u32, max_radius: f32) -> Self {
		Self {
			max_dots,
			max_radius,
			max_dot_radius: 3.0,
		}
	}
}

/// Parameters of the ellipse blots dropped when the brush dwells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BigSplatterParams {
	/// Between 1 and `max_blots` blots are drawn.
	pub max_blots: u32,
	pub max_offset: f32,
	pub min_radius_x: f32,
	pub max_radius_x: f32,
	pub min_radius_y: f32,
	pub max_radius_y: f32,
}

impl Default for BigSplatterParams {
	fn default() -> Self {
		Self {
			max_blots: 4,
			max_offset: 10.0,
			min_radius_x: 20.0,
			max_radius_x: 50.0,
			min_radius_y: 10.0,
			max_radius_y: 30.0,
		}
	}
}

/// Everything that shapes the brush.
///
/// The defaults reproduce the drip brush: a 5 to 40 pixel stroke that thins linearly with speed,
/// averaged with the previous segment's width, splattering on sharp turns, thin strokes, dwells,
/// and release.
#[derive(Clone, Copy, Debug, PartialEq, bon::Builder)]
pub struct BrushConfig {
	#[builder(default = 40.0)]
	pub max_width: f32,
	#[builder(default = 5.0)]
	pub min_width: f32,
	/// Width assumed for the (virtual) segment before the first one of a gesture.
	#[builder(default = 20.0)]
	pub initial_width: f32,
	/// Width lost per pixel travelled between samples.
	#[builder(default = 1.0)]
	pub distance_scale: f32,
	/// Weight of the previous width when smoothing; `0` disables smoothing.
	#[builder(default = 1.0)]
	pub history_weight: f32,
	/// Movements shorter than this are dwells.
	#[builder(default = 1.0)]
	pub dwell_epsilon: f32,
	/// Direction change, in radians, above which a turn splatters. `f32::INFINITY` disables it.
	#[builder(default = 1.0)]
	pub sharp_turn_threshold: f32,
	/// Applied widths below this splatter.
	#[builder(default = 15.0)]
	pub thin_stroke_width: f32,
	#[builder(default = SplatterParams::new(10, 50.0))]
	pub end_splatter: SplatterParams,
	#[builder(default = SplatterParams::new(4, 25.0))]
	pub sharp_turn_splatter: SplatterParams,
	#[builder(default = SplatterParams::new(2, 10.0))]
	pub thin_stroke_splatter: SplatterParams,
	#[builder(default)]
	pub big_splatter: BigSplatterParams,
}

impl Default for BrushConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl BrushConfig {
	/// A wider, heavier brush: up to 50 pixels, thinning more slowly, with width changes damped
	/// 3:1 toward the previous segment and no turn splatter.
	pub fn broad() -> Self {
		Self::builder()
			.max_width(50.0)
			.initial_width(30.0)
			.distance_scale(1.0 / 1.5)
			.history_weight(3.0)
			.sharp_turn_threshold(f32::INFINITY)
			.build()
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		let positive = |name, value: f32| {
			if value.is_finite() && value > 0.0 {
				Ok(())
			} else {
				Err(NotPositive { name, value })
			}
		};
		let non_negative = |name, value: f32| {
			if value.is_finite() && value >= 0.0 {
				Ok(())
			} else {
				Err(Negative { name, value })
			}
		};

		positive("max_width", self.max_width)?;
		positive("min_width", self.min_width)?;
		if self.min_width > self.max_width {
			Err(InvertedWidthRange {
				min: self.min_width,
				max: self.max_width,
			})?;
		}
		if !(self.min_width..=self.max_width).contains(&self.initial_width) {
			Err(InitialWidthOutOfRange {
				initial: self.initial_width,
				min: self.min_width,
				max: self.max_width,
			})?;
		}
		non_negative("distance_scale", self.distance_scale)?;
		non_negative("history_weight", self.history_weight)?;
		non_negative("dwell_epsilon", self.dwell_epsilon)?;
		if self.sharp_turn_threshold.is_nan() || self.sharp_turn_threshold < 0.0 {
			Err(Negative {
				name: "sharp_turn_threshold",
				value: self.sharp_turn_threshold,
			})?;
		}
		non_negative("thin_stroke_width", self.thin_stroke_width)?;
		for (name, params) in [
			("end_splatter.max_radius", self.end_splatter),
			("sharp_turn_splatter.max_radius", self.sharp_turn_splatter),
			("thin_stroke_splatter.max_radius", self.thin_stroke_splatter),
		] {
			non_negative(name, params.max_radius)?;
			non_negative("max_dot_radius", params.max_dot_radius)?;
		}
		let big = &self.big_splatter;
		if big.max_blots == 0 {
			Err(NoBlots)?;
		}
		non_negative("big_splatter.max_offset", big.max_offset)?;
		for (name, min, max) in [
			("big_splatter.radius_x", big.min_radius_x, big.max_radius_x),
			("big_splatter.radius_y", big.min_radius_y, big.max_radius_y),
		] {
			positive(name, min)?;
			positive(name, max)?;
			if min > max {
				Err(InvertedRange { name, min, max })?;
			}
		}
		Ok(())
	}
}
