use crate::errors::TransformError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

/// 画像をリサイズする
///
/// fast_image_resize の Lanczos3 フィルタを使用。透過を保持するため
/// RGBA8 で処理する。
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    let src_image = Image::from_vec_u8(width, height, rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized = image::RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| {
            TransformError::ProcessingFailed("failed to convert resized image".to_string())
        })?;

    Ok(DynamicImage::ImageRgba8(resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_image() {
        let img = DynamicImage::new_rgb8(1000, 1000);
        let resized = resize_image(&img, 500, 500).unwrap();
        assert_eq!(resized.width(), 500);
        assert_eq!(resized.height(), 500);
    }

    #[test]
    fn test_resize_preserves_alpha_channel() {
        let img = DynamicImage::new_rgba8(100, 100);
        let resized = resize_image(&img, 50, 50).unwrap();
        assert!(resized.color().has_alpha());
    }
}
