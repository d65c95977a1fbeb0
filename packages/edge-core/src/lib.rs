pub mod constants;
pub mod errors;
pub mod params;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{
    CACHE_MAX_AGE_SECS, DEFAULT_PNG_COMPRESSION, MAX_DIMENSION, MAX_INPUT_BYTES, MAX_OUTPUT_BYTES,
    MAX_QUALITY,
};
pub use errors::{StorageError, TransformError, ValidationError};
pub use params::{parse_query, to_int, ImageExt, ParsedParams};
pub use transform::{
    auto_orient, decode_image, encode_animation, encode_image, fit_inside, png_compression_level,
    resize_image, DecodedImage,
};
pub use validation::derive_object_key;
