pub mod encode;
pub mod upload;

pub use encode::{encode_png_base64, png_data_uri};
pub use upload::{decode_base64_upload, load_upload};

/// Common error type for imaging operations.
#[derive(thiserror::Error, Debug)]
pub enum ImagingError {
    #[error("png encoding failed: {0}")]
    Encode(String),
    #[error("image decoding failed: {0}")]
    Decode(String),
    #[error("invalid base64 payload: {0}")]
    Base64(String),
}

pub type ImagingResult<T> = Result<T, ImagingError>;
