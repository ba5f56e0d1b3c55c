use super::renderer::{GestureEnd, StrokeRenderer, StrokeStep};
use super::surface::Surface;
use crate::color::Color;
use crate::config::{BrushConfig, ConfigError};
use crate::geom::Point;
use crate::random::RandomSource;

/// One canvas and everything needed to paint on it: the surface, the brush session, and the
/// selected color.
pub struct Painting<R = fastrand::Rng> {
	surface: Surface,
	renderer: StrokeRenderer<R>,
	color: Color,
}

impl Painting {
	/// A transparent `width` by `height` painting with an unseeded brush.
	pub fn new(width: u32, height: u32, config: BrushConfig) -> Result<Self, ConfigError> {
		Ok(Self::with_renderer(
			Surface::new(width, height),
			StrokeRenderer::new(config)?,
		))
	}
}

impl<R: RandomSource> Painting<R> {
	pub fn with_renderer(surface: Surface, renderer: StrokeRenderer<R>) -> Self {
		Self {
			surface,
			renderer,
			color: Color::default(),
		}
	}

	pub fn surface(&self) -> &Surface {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut Surface {
		&mut self.surface
	}

	pub fn renderer(&self) -> &StrokeRenderer<R> {
		&self.renderer
	}

	pub fn color(&self) -> Color {
		self.color
	}

	/// Takes effect from the next thing drawn, even mid-gesture.
	pub fn set_color(&mut self, color: Color) {
		self.color = color;
	}

	pub fn pointer_down(&mut self, point: Point) {
		self.renderer.pointer_down(point)
	}

	pub fn pointer_move(&mut self, point: Point) -> Option<StrokeStep> {
		self.renderer.pointer_move(&mut self.surface, point, self.color)
	}

	pub fn pointer_up(&mut self) -> Option<GestureEnd> {
		self.renderer.pointer_up(&mut self.surface, self.color)
	}

	/// Wipes the surface. A gesture in progress carries on from where it was.
	pub fn clear(&mut self) {
		tracing::debug!("clear");
		self.surface.clear();
	}

	pub fn into_surface(self) -> Surface {
		self.surface
	}
}
