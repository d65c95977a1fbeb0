use crate::constants::DEFAULT_PNG_COMPRESSION;
use crate::errors::TransformError;
use crate::params::ImageExt;
use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, Frame};
use std::io::Cursor;

/// quality (1-100) を PNG 圧縮レベル (0-9) に変換する
///
/// 逆スケール: quality が高いほど圧縮レベルは低い。未指定時はレベル6。
/// `level = clamp(round((100 - quality) / 11), 0, 9)`
pub fn png_compression_level(quality: Option<u8>) -> u8 {
    match quality {
        Some(q) => {
            let level = (f64::from(100 - i32::from(q).min(100)) / 11.0).round() as i32;
            level.clamp(0, 9) as u8
        }
        None => DEFAULT_PNG_COMPRESSION,
    }
}

/// 圧縮レベル (0-9) をエンコーダの3段階に割り当てる
///
/// image クレートの PNG エンコーダは3段階しか公開していないため、
/// 近い段階に丸める。
fn compression_type(level: u8) -> CompressionType {
    match level {
        0..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

/// 静止画をエンコードする
///
/// quality は jpg と png で意味を持つ。webp はロスレスのみ、gif は
/// quality を受け付けない。
pub fn encode_image(
    img: &DynamicImage,
    ext: ImageExt,
    quality: Option<u8>,
) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    match ext {
        ImageExt::Jpeg => {
            // quality 未指定時はエンコーダのデフォルトに任せる
            let encoder = match quality {
                Some(q) => JpegEncoder::new_with_quality(&mut buf, q),
                None => JpegEncoder::new(&mut buf),
            };
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| TransformError::ProcessingFailed(format!("JPEG encode failed: {e}")))?;
        }
        ImageExt::Png => {
            let level = png_compression_level(quality);
            let encoder = PngEncoder::new_with_quality(
                &mut buf,
                compression_type(level),
                PngFilterType::Adaptive,
            );
            img.write_with_encoder(encoder)
                .map_err(|e| TransformError::ProcessingFailed(format!("PNG encode failed: {e}")))?;
        }
        ImageExt::WebP => {
            // image クレートの WebP エンコーダはロスレスのみ対応（quality は無視）
            let encoder = WebPEncoder::new_lossless(&mut buf);
            img.write_with_encoder(encoder)
                .map_err(|e| TransformError::ProcessingFailed(format!("WebP encode failed: {e}")))?;
        }
        ImageExt::Gif => {
            let mut encoder = GifEncoder::new(&mut buf);
            encoder
                .encode_frame(Frame::new(img.to_rgba8()))
                .map_err(|e| TransformError::ProcessingFailed(format!("GIF encode failed: {e}")))?;
        }
    }

    Ok(buf.into_inner())
}

/// アニメーション GIF を再エンコードする
pub fn encode_animation(frames: Vec<Frame>) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    {
        let mut encoder = GifEncoder::new(&mut buf);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| TransformError::ProcessingFailed(format!("GIF encode failed: {e}")))?;
        encoder
            .encode_frames(frames)
            .map_err(|e| TransformError::ProcessingFailed(format!("GIF encode failed: {e}")))?;
    }

    Ok(buf.into_inner())
}
