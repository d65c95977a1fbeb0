pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod orientation;
pub mod resize;

pub use decode::{decode_image, DecodedImage};
pub use dimensions::fit_inside;
pub use encode::{encode_animation, encode_image, png_compression_level};
pub use orientation::auto_orient;
pub use resize::resize_image;
