//! Getting a painting out: image encoding and the strings the download, print and share buttons
//! need.

use crate::engine::Surface;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("cannot encode an empty {width}x{height} surface")]
	EmptySurface { width: u32, height: u32 },
	#[error(transparent)]
	Png(#[from] png::EncodingError),
}

static_assertions::assert_impl_all!(ExportError: std::error::Error, Send, Sync);

pub const DEFAULT_FILE_NAME: &str = "myPainting.png";

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Writes the surface as an 8-bit RGBA PNG.
pub fn write_png(surface: &Surface, out: impl Write) -> Result<(), ExportError> {
	let (width, height) = (surface.width(), surface.height());
	if width == 0 || height == 0 {
		return Err(ExportError::EmptySurface { width, height });
	}
	let mut encoder = png::Encoder::new(out, width, height);
	encoder.set_color(png::ColorType::Rgba);
	encoder.set_depth(png::BitDepth::Eight);
	encoder.set_srgb(png::SrgbRenderingIntent::AbsoluteColorimetric);
	encoder.set_compression(png::Compression::Best);
	let mut writer = encoder.write_header()?;
	writer.write_image_data(surface.as_bytes())?;
	writer.finish()?;
	Ok(())
}

pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
	let mut png_data = Vec::new();
	write_png(surface, &mut png_data)?;
	Ok(png_data)
}

pub fn encode_data_url(data: &[u8], mediatype: Option<&str>) -> String {
	use base64::engine::*;
	let mediatype = mediatype.unwrap_or("");
	let data = general_purpose::STANDARD.encode(data);
	format!("data:{mediatype};base64,{data}")
}

/// The surface as a `data:image/png;base64,...` URL.
pub fn surface_data_url(surface: &Surface) -> Result<String, ExportError> {
	Ok(encode_data_url(&encode_png(surface)?, Some("image/png")))
}

/// File name for a download. `None` (the name prompt was dismissed) or a blank name falls back
/// to [`DEFAULT_FILE_NAME`].
pub fn download_file_name(name: Option<&str>) -> String {
	match name.map(str::trim) {
		Some(name) if !name.is_empty() => format!("{name}.png"),
		_ => DEFAULT_FILE_NAME.to_owned(),
	}
}

/// A page that shows just the image, for a print window.
pub fn print_document(image_url: &str) -> String {
	let mut document = String::from("<!DOCTYPE html>");
	document.push_str("<html lang=\"en\">");
	document.push_str("<head><title>Print canvas</title></head>");
	document.push_str("<body>");
	document.push_str(&format!("<img alt=\"Painting\" src=\"{image_url}\">"));
	document.push_str("</body>");
	document.push_str("</html>");
	document
}

/// What a share button posts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareTarget {
	pub text: String,
	pub url: String,
	pub via: String,
	pub hashtags: String,
}

/// A tweet-intent link for `target`, every parameter percent-encoded.
pub fn share_url(target: &ShareTarget) -> String {
	let text = urlencoding::encode(&target.text);
	let url = urlencoding::encode(&target.url);
	let via = urlencoding::encode(&target.via);
	let hashtags = urlencoding::encode(&target.hashtags);
	format!("{TWEET_INTENT_URL}?text={text}&url={url}&via={via}&hashtags={hashtags}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::color::Color;
	use crate::engine::Canvas;
	use glam::vec2;

	#[test]
	fn png_round_trips_pixels() -> anyhow::Result<()> {
		let mut surface = Surface::new(16, 8);
		surface.fill_circle(vec2(8.0, 4.0), 3.0, Color::rgb(200, 10, 10));
		let png_data = encode_png(&surface)?;
		assert_eq!(&png_data[..8], b"\x89PNG\r\n\x1a\n");

		let mut reader = png::Decoder::new(png_data.as_slice()).read_info()?;
		let mut decoded = vec![0; reader.output_buffer_size()];
		let info = reader.next_frame(&mut decoded)?;
		assert_eq!((info.width, info.height), (16, 8));
		assert_eq!(&decoded[..info.buffer_size()], surface.as_bytes());
		Ok(())
	}

	#[test]
	fn empty_surface_is_an_error() {
		assert!(matches!(
			encode_png(&Surface::new(0, 10)),
			Err(ExportError::EmptySurface {
				width: 0,
				height: 10
			})
		));
	}

	#[test]
	fn data_url() {
		assert_eq!(
			encode_data_url(b"hello", Some("text/plain")),
			"data:text/plain;base64,aGVsbG8="
		);
		assert_eq!(encode_data_url(b"", None), "data:;base64,");
		let url = surface_data_url(&Surface::new(2, 2)).unwrap();
		assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
	}

	#[test]
	fn download_names() {
		assert_eq!(download_file_name(None), "myPainting.png");
		assert_eq!(download_file_name(Some("   ")), "myPainting.png");
		assert_eq!(download_file_name(Some("Lavender Mist")), "Lavender Mist.png");
	}

	#[test]
	fn print_document_embeds_the_image() {
		let document = print_document("data:image/png;base64,AAAA");
		assert!(document.starts_with("<!DOCTYPE html>"));
		assert!(document.contains("<img alt=\"Painting\" src=\"data:image/png;base64,AAAA\">"));
		assert!(document.ends_with("</html>"));
	}

	#[test]
	fn share_url_is_encoded() {
		let target = ShareTarget {
			text: "Check out my painting!".to_owned(),
			url: "https://example.com/drip/".to_owned(),
			via: "someone".to_owned(),
			hashtags: "drip painting".to_owned(),
		};
		assert_eq!(
			share_url(&target),
			"https://twitter.com/intent/tweet?text=Check%20out%20my%20painting%21\
			&url=https%3A%2F%2Fexample.com%2Fdrip%2F&via=someone&hashtags=drip%20painting"
		);
	}
}
