use thiserror::Error;

/// リクエスト検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported or missing image extension")]
    UnsupportedExtension,

    #[error("object key is empty")]
    EmptyKey,

    #[error("path traversal detected")]
    Traversal,

    #[error("invalid URL encoding")]
    Encoding,
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("object is too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("storage error: {0}")]
    Internal(String),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("mismatched image format (requested {requested}, detected {detected})")]
    FormatMismatch {
        requested: &'static str,
        detected: String,
    },

    #[error("transformed image exceeds size limit ({size} bytes, max {max})")]
    OutputTooLarge { size: usize, max: usize },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
