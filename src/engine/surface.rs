use super::raster::{self, Canvas, Capsule, Circle, Ellipse, Shape};
use crate::color::Color;
use crate::geom::{AABox, Point};
use glam::Vec2;

/// The painting: a single RGBA8 raster that everything is composited onto.
///
/// Pixels are stored non-premultiplied, row-major, top row first. Shapes are blended
/// source-over with anti-aliased coverage and clipped to the raster; nothing drawn is ever
/// undone short of [`Surface::clear`].
#[derive(Clone, Debug)]
pub struct Surface {
	width: u32,
	height: u32,
	pixels: Vec<[u8; 4]>,
	damage: AABox,
}

impl Surface {
	/// A fully transparent surface.
	pub fn new(width: u32, height: u32) -> Self {
		Self::filled(width, height, Color::TRANSPARENT)
	}

	pub fn filled(width: u32, height: u32, color: Color) -> Self {
		Self {
			width,
			height,
			pixels: vec![color.to_array(); width as usize * height as usize],
			damage: AABox::empty(),
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn pixels(&self) -> &[[u8; 4]] {
		&self.pixels
	}

	/// The raster as tightly packed RGBA bytes.
	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.pixels)
	}

	/// An owned copy of the complete raster.
	pub fn snapshot(&self) -> Vec<u8> {
		self.as_bytes().to_vec()
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}
		Some(self.pixels[self.index(x, y)].into())
	}

	pub fn clear(&mut self) {
		self.fill(Color::TRANSPARENT);
	}

	pub fn fill(&mut self, color: Color) {
		self.pixels.fill(color.to_array());
		self.damage = AABox::new(Vec2::ZERO, Vec2::new(self.width as f32, self.height as f32));
	}

	/// Returns the region touched since the last call and resets it.
	///
	/// Hosts that mirror the surface elsewhere only need to copy this region.
	pub fn take_damage(&mut self) -> AABox {
		std::mem::replace(&mut self.damage, AABox::empty())
	}

	/// Number of pixels with any opacity.
	pub fn painted_pixel_count(&self) -> usize {
		self.pixels.iter().filter(|p| p[3] > 0).count()
	}

	fn index(&self, x: u32, y: u32) -> usize {
		y as usize * self.width as usize + x as usize
	}

	fn paint(&mut self, shape: &impl Shape, color: Color) {
		if color.a == 0 {
			return;
		}
		self.damage = self.damage.union(shape.bounds().inflated(0.5));
		let (width, height) = (self.width, self.height);
		let pixels = &mut self.pixels;
		raster::rasterize(shape, width, height, |x, y, cover| {
			let index = y as usize * width as usize + x as usize;
			pixels[index] = blend_over(pixels[index], color, cover);
		});
	}
}

/// Source-over compositing of `color` at `cover` onto a non-premultiplied pixel.
fn blend_over(dst: [u8; 4], color: Color, cover: f32) -> [u8; 4] {
	let to_unit = |v: u8| v as f32 / 255.0;
	let src_a = to_unit(color.a) * cover;
	let dst_a = to_unit(dst[3]);
	let out_a = src_a + dst_a * (1.0 - src_a);
	if out_a <= 0.0 {
		return [0, 0, 0, 0];
	}
	let channel = |s: u8, d: u8| {
		let c = (to_unit(s) * src_a + to_unit(d) * dst_a * (1.0 - src_a)) / out_a;
		(c * 255.0).round().clamp(0.0, 255.0) as u8
	};
	[
		channel(color.r, dst[0]),
		channel(color.g, dst[1]),
		channel(color.b, dst[2]),
		(out_a * 255.0).round().clamp(0.0, 255.0) as u8,
	]
}

impl Canvas for Surface {
	fn stroke_segment(&mut self, from: Point, to: Point, width: f32, color: Color) {
		self.paint(
			&Capsule {
				from,
				to,
				radius: 0.5 * width,
			},
			color,
		);
	}

	fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
		self.paint(&Circle { center, radius }, color);
	}

	fn fill_ellipse(&mut self, center: Point, radii: Vec2, rotation: f32, color: Color) {
		self.paint(
			&Ellipse {
				center,
				radii,
				rotation,
			},
			color,
		);
	}
}
