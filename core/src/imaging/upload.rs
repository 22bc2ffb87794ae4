use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::DynamicImage;

use crate::imaging::{ImagingError, ImagingResult};

/// Decodes uploaded PNG/JPEG bytes into an in-memory raster. Corrupt uploads
/// are hard errors that propagate to the caller; they are never masked behind
/// the analysis fallback.
pub fn load_upload(bytes: &[u8]) -> ImagingResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(|err| ImagingError::Decode(err.to_string()))
}

/// Decodes a base64 upload payload as received by the HTTP bridge.
pub fn decode_base64_upload(payload: &str) -> ImagingResult<DynamicImage> {
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|err| ImagingError::Base64(err.to_string()))?;
    load_upload(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::encode::encode_png_base64;
    use image::{Rgb, RgbImage};

    #[test]
    fn base64_upload_decodes_to_original_dimensions() {
        let raster = RgbImage::from_pixel(5, 7, Rgb([10, 20, 30]));
        let encoded = encode_png_base64(&DynamicImage::ImageRgb8(raster)).unwrap();

        let decoded = decode_base64_upload(&encoded).unwrap();
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 7);
    }

    #[test]
    fn corrupt_bytes_are_rejected() {
        assert!(matches!(
            load_upload(&[0x00, 0x01, 0x02]),
            Err(ImagingError::Decode(_))
        ));
        assert!(matches!(
            decode_base64_upload("not valid base64!!"),
            Err(ImagingError::Base64(_))
        ));
    }
}
