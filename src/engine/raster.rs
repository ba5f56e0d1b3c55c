//! Rasterization targets and the analytic coverage of the shapes the brush draws.
//!
//! Every shape is described by a signed distance to its edge (negative inside). A pixel's
//! coverage is that distance, measured at the pixel center, ramped over one pixel. This gives
//! anti-aliased edges without a scanline rasterizer, which is plenty for round strokes and blots.

use crate::color::Color;
use crate::geom::{AABox, Point};
use glam::{vec2, Vec2};

/// Something the brush can paint on.
///
/// `Surface` is the real implementation; tests record the calls instead.
pub trait Canvas {
	/// A round-capped line of total thickness `width`. A zero-length segment is a disc.
	fn stroke_segment(&mut self, from: Point, to: Point, width: f32, color: Color);

	fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

	/// An ellipse with semi-axes `radii`, rotated by `rotation` radians.
	fn fill_ellipse(&mut self, center: Point, radii: Vec2, rotation: f32, color: Color);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
	fn stroke_segment(&mut self, from: Point, to: Point, width: f32, color: Color) {
		(**self).stroke_segment(from, to, width, color)
	}

	fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
		(**self).fill_circle(center, radius, color)
	}

	fn fill_ellipse(&mut self, center: Point, radii: Vec2, rotation: f32, color: Color) {
		(**self).fill_ellipse(center, radii, rotation, color)
	}
}

/// Converts a signed distance at a pixel center into coverage in `[0, 1]`.
pub fn coverage(signed_distance: f32) -> f32 {
	(0.5 - signed_distance).clamp(0.0, 1.0)
}

/// A filled shape with a signed distance function.
pub trait Shape {
	fn bounds(&self) -> AABox;
	fn signed_distance(&self, p: Vec2) -> f32;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
	pub from: Vec2,
	pub to: Vec2,
	pub radius: f32,
}

impl Shape for Capsule {
	fn bounds(&self) -> AABox {
		AABox::containing([self.from, self.to].into_iter()).inflated(self.radius)
	}

	fn signed_distance(&self, p: Vec2) -> f32 {
		let pa = p - self.from;
		let ba = self.to - self.from;
		let length_squared = ba.length_squared();
		let h = if length_squared > 0.0 {
			(pa.dot(ba) / length_squared).clamp(0.0, 1.0)
		} else {
			0.0
		};
		(pa - ba * h).length() - self.radius
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
	pub center: Vec2,
	pub radius: f32,
}

impl Shape for Circle {
	fn bounds(&self) -> AABox {
		AABox::around(self.center, self.radius)
	}

	fn signed_distance(&self, p: Vec2) -> f32 {
		(p - self.center).length() - self.radius
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
	pub center: Vec2,
	pub radii: Vec2,
	pub rotation: f32,
}

impl Shape for Ellipse {
	fn bounds(&self) -> AABox {
		// Conservative: the circumscribed circle of the rotated ellipse.
		AABox::around(self.center, self.radii.max_element())
	}

	fn signed_distance(&self, p: Vec2) -> f32 {
		if self.radii.min_element() <= 0.0 {
			return f32::INFINITY;
		}
		// Into the ellipse's own frame.
		let local = Vec2::from_angle(-self.rotation).rotate(p - self.center);
		let k0 = (local / self.radii).length();
		let k1 = (local / (self.radii * self.radii)).length();
		if k1 == 0.0 {
			return -self.radii.min_element();
		}
		k0 * (k0 - 1.0) / k1
	}
}

/// Visits the pixels of a `width` by `height` raster touched by `shape`, with their coverage.
pub fn rasterize(
	shape: &impl Shape,
	width: u32,
	height: u32,
	mut visit: impl FnMut(u32, u32, f32),
) {
	// Half a pixel of slack so the anti-aliasing ramp is not cut off.
	let rect = shape.bounds().inflated(0.5).pixel_rect(width, height);
	for y in rect.y0..rect.y1 {
		for x in rect.x0..rect.x1 {
			let center = vec2(x as f32 + 0.5, y as f32 + 0.5);
			let cover = coverage(shape.signed_distance(center));
			if cover > 0.0 {
				visit(x, y, cover);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use std::f32::consts::FRAC_PI_2;

	#[test]
	fn coverage_ramps_over_one_pixel() {
		assert_eq!(coverage(-3.0), 1.0);
		assert_eq!(coverage(3.0), 0.0);
		assert_abs_diff_eq!(coverage(0.0), 0.5);
	}

	#[test]
	fn capsule_distance() {
		let capsule = Capsule {
			from: vec2(0.0, 0.0),
			to: vec2(10.0, 0.0),
			radius: 2.0,
		};
		assert_abs_diff_eq!(capsule.signed_distance(vec2(5.0, 0.0)), -2.0);
		assert_abs_diff_eq!(capsule.signed_distance(vec2(5.0, 3.0)), 1.0);
		// Round caps.
		assert_abs_diff_eq!(capsule.signed_distance(vec2(13.0, 4.0)), 3.0);
		assert_abs_diff_eq!(capsule.signed_distance(vec2(-2.0, 0.0)), 0.0);
	}

	#[test]
	fn degenerate_capsule_is_a_disc() {
		let capsule = Capsule {
			from: vec2(4.0, 4.0),
			to: vec2(4.0, 4.0),
			radius: 2.0,
		};
		assert_abs_diff_eq!(capsule.signed_distance(vec2(4.0, 7.0)), 1.0);
	}

	#[test]
	fn ellipse_distance_on_axes() {
		let ellipse = Ellipse {
			center: vec2(0.0, 0.0),
			radii: vec2(4.0, 2.0),
			rotation: 0.0,
		};
		assert_abs_diff_eq!(ellipse.signed_distance(vec2(4.0, 0.0)), 0.0, epsilon = 1e-5);
		assert_abs_diff_eq!(ellipse.signed_distance(vec2(0.0, 2.0)), 0.0, epsilon = 1e-5);
		assert!(ellipse.signed_distance(vec2(0.0, 0.0)) < 0.0);
		assert!(ellipse.signed_distance(vec2(0.0, 3.0)) > 0.0);

		let rotated = Ellipse {
			rotation: FRAC_PI_2,
			..ellipse
		};
		assert_abs_diff_eq!(rotated.signed_distance(vec2(0.0, 4.0)), 0.0, epsilon = 1e-4);
		assert!(rotated.signed_distance(vec2(3.0, 0.0)) > 0.0);
	}

	#[test]
	fn rasterize_is_clipped() {
		let circle = Circle {
			center: vec2(0.0, 0.0),
			radius: 3.0,
		};
		let mut pixels = Vec::new();
		rasterize(&circle, 8, 8, |x, y, _| pixels.push((x, y)));
		assert!(!pixels.is_empty());
		assert!(pixels.iter().all(|&(x, y)| x < 8 && y < 8));
		assert!(pixels.contains(&(0, 0)));
		assert!(!pixels.contains(&(4, 4)));
	}
}
