/// 画像の最大寸法（幅・高さ）
pub const MAX_DIMENSION: u32 = 8192;

/// quality の最大値
pub const MAX_QUALITY: u32 = 100;

/// 取得する元画像の最大バイト数（50MB）
pub const MAX_INPUT_BYTES: u64 = 50_000_000;

/// 変換後画像の最大バイト数（1MB）
pub const MAX_OUTPUT_BYTES: usize = 1_000_000;

/// 成功レスポンスのキャッシュ保持期間（30日）
pub const CACHE_MAX_AGE_SECS: u32 = 30 * 24 * 60 * 60;

/// quality 未指定時の PNG 圧縮レベル
pub const DEFAULT_PNG_COMPRESSION: u8 = 6;
