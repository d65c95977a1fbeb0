/// inside フィットの出力寸法を計算する
///
/// アスペクト比を維持したまま指定領域に収まる最大の寸法を返す。
/// 拡大はしない: 要求寸法が元画像を超えても倍率は最大1.0。
pub fn fit_inside(
    src_w: u32,
    src_h: u32,
    target_w: Option<u32>,
    target_h: Option<u32>,
) -> (u32, u32) {
    let scale_w = target_w.map(|w| f64::from(w) / f64::from(src_w));
    let scale_h = target_h.map(|h| f64::from(h) / f64::from(src_h));

    let scale = match (scale_w, scale_h) {
        // 両方指定時は小さい方の倍率で両軸に収める
        (Some(w), Some(h)) => w.min(h),
        (Some(w), None) => w,
        (None, Some(h)) => h,
        (None, None) => 1.0,
    }
    .min(1.0); // 拡大防止

    let new_w = (f64::from(src_w) * scale).round() as u32;
    let new_h = (f64::from(src_h) * scale).round() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_both_dimensions() {
        // 横長画像を正方形領域に収める
        assert_eq!(fit_inside(1000, 500, Some(400), Some(400)), (400, 200));
        // 縦長画像を正方形領域に収める
        assert_eq!(fit_inside(500, 1000, Some(400), Some(400)), (200, 400));
        assert_eq!(fit_inside(1920, 1080, Some(800), Some(600)), (800, 450));
    }

    #[test]
    fn test_width_only() {
        assert_eq!(fit_inside(1000, 500, Some(400), None), (400, 200));
        assert_eq!(fit_inside(800, 600, Some(200), None), (200, 150));
    }

    #[test]
    fn test_height_only() {
        assert_eq!(fit_inside(1920, 1080, None, Some(600)), (1067, 600));
    }

    #[test]
    fn test_never_enlarges() {
        // 要求寸法が元画像を超えても元の寸法のまま
        assert_eq!(fit_inside(100, 100, Some(500), None), (100, 100));
        assert_eq!(fit_inside(100, 50, Some(200), Some(200)), (100, 50));
        assert_eq!(fit_inside(100, 50, None, Some(100)), (100, 50));
    }

    #[test]
    fn test_no_targets_keeps_source() {
        assert_eq!(fit_inside(1920, 1080, None, None), (1920, 1080));
    }

    #[test]
    fn test_minimum_one_pixel() {
        assert_eq!(fit_inside(1000, 10, Some(10), None), (10, 1));
    }
}
