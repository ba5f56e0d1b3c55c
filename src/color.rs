use std::str::FromStr;

/// A non-premultiplied 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{r:02x}{g:02x}{b:02x}{a:02x}")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::rgba(r, g, b, 255)
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

// Canvas 2D contexts start with black stroke and fill styles.
impl Default for Color {
	fn default() -> Self {
		Self::BLACK
	}
}

impl From<[u8; 4]> for Color {
	fn from([r, g, b, a]: [u8; 4]) -> Self {
		Self { r, g, b, a }
	}
}

impl FromStr for Color {
	type Err = csscolorparser::ParseColorError;

	/// Accepts anything CSS does: `#f80`, `#ff8800`, `rgb(255 136 0)`, `orange`, ...
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(csscolorparser::parse(s)?.to_rgba8().into())
	}
}
