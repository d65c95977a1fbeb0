use crate::constants::{MAX_DIMENSION, MAX_QUALITY};
use image::ImageFormat;

/// 出力フォーマット（URI 拡張子のホワイトリストと同一）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageExt {
    Jpeg,
    Png,
    WebP,
    Gif,
}

impl ImageExt {
    /// 拡張子トークンから作成（jpg と jpeg は同一視、大文字小文字を無視）
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// URI 末尾の `.<token>` から抽出する
    ///
    /// 拡張子が無い、またはホワイトリスト外の場合は None（未指定扱い）。
    pub fn from_uri(uri: &str) -> Option<Self> {
        let (_, token) = uri.rsplit_once('.')?;
        if token.contains('/') {
            return None;
        }
        Self::from_token(token)
    }

    /// Content-Type を取得
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Gif => "gif",
        }
    }

    /// デコード時に検出されたフォーマットと一致するか
    pub fn matches(&self, format: ImageFormat) -> bool {
        matches!(
            (*self, format),
            (Self::Jpeg, ImageFormat::Jpeg)
                | (Self::Png, ImageFormat::Png)
                | (Self::WebP, ImageFormat::WebP)
                | (Self::Gif, ImageFormat::Gif)
        )
    }
}

/// クエリ文字列から導出した変換パラメータ
///
/// すべて任意。未指定であること自体に意味がある（パススルーや
/// エンコーダデフォルトの採用）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Option<u8>,
}

impl ParsedParams {
    /// w / h / q のいずれかが指定されているか
    pub fn has_any(&self) -> bool {
        self.width.is_some() || self.height.is_some() || self.quality.is_some()
    }
}

/// 整数パラメータを解析する
///
/// 10進整数として解析し、成功時は [min, max] にクランプする。
/// 解析失敗・空文字は「未指定」扱い（0 やエラーにしない）。
pub fn to_int(raw: &str, min: i64, max: i64) -> Option<u32> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(value.clamp(min, max) as u32)
}

/// クエリ文字列を `key=value&...` として解析する
///
/// 重複キーは最後の出現が勝つ。
pub fn parse_query(querystring: &str) -> ParsedParams {
    let mut params = ParsedParams::default();

    for pair in querystring.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let Ok(value) = urlencoding::decode(value) else {
            continue;
        };

        match key {
            "w" => params.width = to_int(&value, 1, i64::from(MAX_DIMENSION)),
            "h" => params.height = to_int(&value, 1, i64::from(MAX_DIMENSION)),
            "q" => params.quality = to_int(&value, 1, i64::from(MAX_QUALITY)).map(|q| q as u8),
            _ => {}
        }
    }

    params
}
