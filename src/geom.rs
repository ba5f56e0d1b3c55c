use glam::Vec2;

/// A position in surface coordinates (device pixels, y down).
pub type Point = Vec2;

/// Axis-aligned bounds in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

/// A half-open range of pixel indices, `x0..x1` by `y0..y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
	pub x0: u32,
	pub y0: u32,
	pub x1: u32,
	pub y1: u32,
}

impl PixelRect {
	pub fn is_empty(&self) -> bool {
		self.x0 >= self.x1 || self.y0 >= self.y1
	}

	pub fn width(&self) -> u32 {
		self.x1.saturating_sub(self.x0)
	}

	pub fn height(&self) -> u32 {
		self.y1.saturating_sub(self.y0)
	}
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	/// The square of half-size `radius` around `center`.
	pub fn around(center: Vec2, radius: f32) -> Self {
		Self::new(center - radius, center + radius)
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn union(self, other: Self) -> Self {
		if other.is_empty() {
			return self;
		}
		if self.is_empty() {
			return other;
		}
		Self::new(self.min.min(other.min), self.max.max(other.max))
	}

	/// Grows the box by `amount` on every side.
	pub fn inflated(self, amount: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - amount, self.max + amount)
	}

	pub fn contains(&self, point: Vec2) -> bool {
		point.x < self.max.x
			&& point.y < self.max.y
			&& !(point.x < self.min.x)
			&& !(point.y < self.min.y)
	}

	/// The pixels whose area intersects the box, clipped to a `width` by `height` raster.
	pub fn pixel_rect(&self, width: u32, height: u32) -> PixelRect {
		if self.is_empty() || !self.min.is_finite() || !self.max.is_finite() {
			return PixelRect {
				x0: 0,
				y0: 0,
				x1: 0,
				y1: 0,
			};
		}
		let clip = |v: f32, limit: u32| v.clamp(0.0, limit as f32) as u32;
		PixelRect {
			x0: clip(self.min.x.floor(), width),
			y0: clip(self.min.y.floor(), height),
			x1: clip(self.max.x.ceil(), width),
			y1: clip(self.max.y.ceil(), height),
		}
	}
}
