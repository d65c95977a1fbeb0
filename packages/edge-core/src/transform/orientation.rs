use image::DynamicImage;

/// EXIF Orientation を読み取り、画像に適用する
///
/// 再エンコードで EXIF タグは失われるため、向きはピクセルに焼き込む。
/// タグが無い・読めない場合はそのまま返す。
pub fn auto_orient(data: &[u8], img: DynamicImage) -> DynamicImage {
    let Some(orientation) = read_orientation(data) else {
        return img;
    };

    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

fn read_orientation(data: &[u8]) -> Option<u32> {
    let mut cursor = std::io::Cursor::new(data);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    field.value.get_uint(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    #[test]
    fn test_no_exif_keeps_image() {
        let img = DynamicImage::new_rgb8(10, 20);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();

        let result = auto_orient(&buf.into_inner(), img);
        assert_eq!(result.width(), 10);
        assert_eq!(result.height(), 20);
    }
}
