use bytes::Bytes;
use image::{DynamicImage, Frame};

use edge_core::constants::MAX_OUTPUT_BYTES;
use edge_core::errors::TransformError;
use edge_core::params::{ImageExt, ParsedParams};
use edge_core::transform::{
    auto_orient, decode_image, encode_animation, encode_image, fit_inside, resize_image,
    DecodedImage,
};

/// パラメータに従って画像バイト列を変換する
///
/// デコード時に要求拡張子と実フォーマットの一致を検査し、リサイズは
/// inside フィット・拡大なし。エンコード後の出力が 1MB を超える場合は
/// 品質を落とした再試行はせず終端エラーにする。
pub fn transform(
    input: &Bytes,
    ext: ImageExt,
    params: &ParsedParams,
) -> Result<Bytes, TransformError> {
    let decoded = decode_image(input, ext)?;

    let output = match decoded {
        DecodedImage::Static(img) => {
            // EXIF の向きをピクセルに反映（再エンコードでタグは消える）
            let img = auto_orient(input, img);
            let img = resize_if_requested(img, params)?;
            encode_image(&img, ext, params.quality)?
        }
        DecodedImage::Animated(frames) => transform_animation(frames, params)?,
    };

    if output.len() > MAX_OUTPUT_BYTES {
        return Err(TransformError::OutputTooLarge {
            size: output.len(),
            max: MAX_OUTPUT_BYTES,
        });
    }

    Ok(Bytes::from(output))
}

fn resize_if_requested(
    img: DynamicImage,
    params: &ParsedParams,
) -> Result<DynamicImage, TransformError> {
    if params.width.is_none() && params.height.is_none() {
        return Ok(img);
    }

    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) = fit_inside(src_w, src_h, params.width, params.height);
    if (dst_w, dst_h) == (src_w, src_h) {
        return Ok(img);
    }

    resize_image(&img, dst_w, dst_h)
}

/// アニメーション GIF を全フレームリサイズして再エンコードする
fn transform_animation(
    frames: Vec<Frame>,
    params: &ParsedParams,
) -> Result<Vec<u8>, TransformError> {
    let first = frames
        .first()
        .ok_or_else(|| TransformError::ProcessingFailed("gif has no frames".to_string()))?;
    let (src_w, src_h) = (first.buffer().width(), first.buffer().height());

    if params.width.is_none() && params.height.is_none() {
        return encode_animation(frames);
    }

    let (dst_w, dst_h) = fit_inside(src_w, src_h, params.width, params.height);
    if (dst_w, dst_h) == (src_w, src_h) {
        return encode_animation(frames);
    }

    let mut resized_frames = Vec::with_capacity(frames.len());
    for frame in frames {
        let delay = frame.delay();
        let img = DynamicImage::ImageRgba8(frame.into_buffer());
        let resized = resize_image(&img, dst_w, dst_h)?.into_rgba8();
        resized_frames.push(Frame::from_parts(resized, 0, 0, delay));
    }

    encode_animation(resized_frames)
}
