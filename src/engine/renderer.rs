use super::raster::Canvas;
use super::splatter::{big_splatter, splatter};
use super::stroke::{heading, smoothed_width, stroke_width, turn_angle};
use crate::color::Color;
use crate::config::{BrushConfig, ConfigError};
use crate::geom::Point;
use crate::random::RandomSource;

/// State carried from one movement sample to the next within a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
	/// The most recently rasterized point, or the pointer-down point.
	pub last_point: Point,
	/// Applied width of the previous segment.
	pub last_width: f32,
	/// Heading of the previous segment. Unknown until the brush has actually moved.
	pub last_heading: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, derive_more::Display)]
pub enum Session {
	#[display("idle")]
	Idle,
	#[display("painting")]
	Painting(Gesture),
}

/// What one movement sample drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStep {
	pub from: Point,
	pub to: Point,
	/// Width the speed alone asks for.
	pub target_width: f32,
	/// Width the segment was drawn with, after smoothing.
	pub applied_width: f32,
	/// Blots dropped because the brush dwelled. Zero when it moved.
	pub dwell_blots: u32,
	pub sharp_turn_dots: u32,
	pub thin_stroke_dots: u32,
}

impl StrokeStep {
	pub fn is_dwell(&self) -> bool {
		self.dwell_blots > 0
	}

	pub fn splatter_dots(&self) -> u32 {
		self.sharp_turn_dots + self.thin_stroke_dots
	}
}

/// The splatter that closed a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEnd {
	pub point: Point,
	pub dots: u32,
}

/// Turns pointer events into brush strokes and splatters.
///
/// Idle until a pointer goes down; every move while painting draws one segment from the last
/// point, plus whatever splatter the move calls for; the pointer going up flicks a final
/// splatter off the brush and returns to idle. Moves while idle draw nothing.
pub struct StrokeRenderer<R = fastrand::Rng> {
	config: BrushConfig,
	random: R,
	session: Session,
}

impl StrokeRenderer {
	pub fn new(config: BrushConfig) -> Result<Self, ConfigError> {
		Self::with_random(config, fastrand::Rng::new())
	}

	pub fn with_seed(config: BrushConfig, seed: u64) -> Result<Self, ConfigError> {
		Self::with_random(config, fastrand::Rng::with_seed(seed))
	}
}

impl<R: RandomSource> StrokeRenderer<R> {
	/// Fails if `config` does not pass [`BrushConfig::validate`].
	pub fn with_random(config: BrushConfig, random: R) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			config,
			random,
			session: Session::Idle,
		})
	}

	pub fn config(&self) -> &BrushConfig {
		&self.config
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn is_painting(&self) -> bool {
		matches!(self.session, Session::Painting(_))
	}

	/// Starts a gesture at `point`.
	///
	/// A gesture already in progress (its pointer-up was lost) is abandoned without a final
	/// splatter.
	pub fn pointer_down(&mut self, point: Point) {
		if self.is_painting() {
			tracing::debug!(?point, "restarting gesture without pointer up");
		} else {
			tracing::debug!(?point, "gesture start");
		}
		self.session = Session::Painting(Gesture {
			last_point: point,
			last_width: self.config.initial_width,
			last_heading: None,
		});
	}

	pub fn pointer_move(
		&mut self,
		canvas: &mut impl Canvas,
		point: Point,
		color: Color,
	) -> Option<StrokeStep> {
		let Session::Painting(gesture) = &mut self.session else {
			return None;
		};
		let config = &self.config;
		let random = &mut self.random;

		let sample = stroke_width(gesture.last_point, point, config);
		let dwell_blots = if sample.is_dwell() {
			let blots = big_splatter(canvas, random, point, &config.big_splatter, color);
			tracing::debug!(?point, blots, "dwell");
			blots
		} else {
			0
		};

		let applied_width = smoothed_width(gesture.last_width, sample.width(), config);
		canvas.stroke_segment(gesture.last_point, point, applied_width, color);
		tracing::trace!(from = ?gesture.last_point, to = ?point, applied_width, "segment");

		// A dwell has no direction, so it neither turns nor resets the heading.
		let current_heading = (!sample.is_dwell()).then(|| heading(gesture.last_point, point));
		let turned = match (gesture.last_heading, current_heading) {
			(Some(previous), Some(current)) => {
				turn_angle(previous, current) > config.sharp_turn_threshold
			}
			_ => false,
		};
		let sharp_turn_dots = if turned {
			tracing::debug!(?point, "sharp turn");
			splatter(canvas, random, point, &config.sharp_turn_splatter, color)
		} else {
			0
		};

		let thin_stroke_dots = if applied_width < config.thin_stroke_width {
			splatter(canvas, random, point, &config.thin_stroke_splatter, color)
		} else {
			0
		};

		let step = StrokeStep {
			from: gesture.last_point,
			to: point,
			target_width: sample.width(),
			applied_width,
			dwell_blots,
			sharp_turn_dots,
			thin_stroke_dots,
		};

		gesture.last_point = point;
		gesture.last_width = applied_width;
		if current_heading.is_some() {
			gesture.last_heading = current_heading;
		}
		Some(step)
	}

	/// Ends the gesture with a splatter at its last point. Does nothing when idle.
	pub fn pointer_up(&mut self, canvas: &mut impl Canvas, color: Color) -> Option<GestureEnd> {
		let Session::Painting(gesture) = std::mem::replace(&mut self.session, Session::Idle) else {
			return None;
		};
		let point = gesture.last_point;
		let dots = splatter(
			canvas,
			&mut self.random,
			point,
			&self.config.end_splatter,
			color,
		);
		tracing::debug!(?point, dots, "gesture end");
		Some(GestureEnd { point, dots })
	}
}
