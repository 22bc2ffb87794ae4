use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};

use crate::imaging::{ImagingError, ImagingResult};

/// Serializes an in-memory raster to lossless PNG and base64-encodes the
/// bytes for embedding in a request payload. No resizing, no format
/// negotiation.
pub fn encode_png_base64(image: &DynamicImage) -> ImagingResult<String> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|err| ImagingError::Encode(err.to_string()))?;
    Ok(STANDARD.encode(buffer.into_inner()))
}

/// Wraps a base64 PNG payload in a data URI with its media-type declaration.
pub fn png_data_uri(encoded: &str) -> String {
    format!("data:image/png;base64,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn sample_image() -> DynamicImage {
        let raster = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 128]));
        DynamicImage::ImageRgb8(raster)
    }

    #[test]
    fn encode_round_trips_through_png() {
        let original = sample_image();
        let encoded = encode_png_base64(&original).unwrap();

        let bytes = STANDARD.decode(&encoded).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.to_rgb8().as_raw(), original.to_rgb8().as_raw());
    }

    #[test]
    fn data_uri_carries_media_type_prefix() {
        let uri = png_data_uri("QUJD");
        assert_eq!(uri, "data:image/png;base64,QUJD");
    }
}
