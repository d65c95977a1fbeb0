use crate::errors::TransformError;
use crate::params::ImageExt;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, Frame, ImageReader};
use std::io::Cursor;

/// デコード結果
///
/// アニメーション対応デコードを要求するのは GIF のみ。それ以外は
/// 常に静止画として扱う。
pub enum DecodedImage {
    Static(DynamicImage),
    Animated(Vec<Frame>),
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodedImage::Static(img) => f.debug_tuple("Static").field(img).finish(),
            DecodedImage::Animated(frames) => f
                .debug_tuple("Animated")
                .field(&format_args!("{} frames", frames.len()))
                .finish(),
        }
    }
}

/// バイト列を画像としてデコードする
///
/// 内容から検出したフォーマットが要求拡張子と一致しない場合は
/// FormatMismatch（jpg と jpeg は同一視）。
pub fn decode_image(data: &[u8], ext: ImageExt) -> Result<DecodedImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to sniff format: {e}")))?;

    let detected = reader
        .format()
        .ok_or_else(|| TransformError::ProcessingFailed("unrecognized image data".to_string()))?;

    if !ext.matches(detected) {
        return Err(TransformError::FormatMismatch {
            requested: ext.as_str(),
            detected: format!("{detected:?}").to_lowercase(),
        });
    }

    if ext == ImageExt::Gif {
        return decode_gif(data);
    }

    let img = reader
        .decode()
        .map_err(|e| TransformError::ProcessingFailed(format!("decode failed: {e}")))?;

    Ok(DecodedImage::Static(img))
}

/// GIF をアニメーション対応でデコードする
///
/// 1フレームしかなければ静止画として返す。
fn decode_gif(data: &[u8]) -> Result<DecodedImage, TransformError> {
    let decoder = GifDecoder::new(Cursor::new(data))
        .map_err(|e| TransformError::ProcessingFailed(format!("gif decode failed: {e}")))?;

    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| TransformError::ProcessingFailed(format!("gif decode failed: {e}")))?;

    if frames.len() > 1 {
        return Ok(DecodedImage::Animated(frames));
    }

    let frame = frames
        .into_iter()
        .next()
        .ok_or_else(|| TransformError::ProcessingFailed("gif has no frames".to_string()))?;

    Ok(DecodedImage::Static(DynamicImage::ImageRgba8(
        frame.into_buffer(),
    )))
}
