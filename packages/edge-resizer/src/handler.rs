use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use std::collections::HashMap;

use edge_core::constants::CACHE_MAX_AGE_SECS;
use edge_core::errors::{StorageError, TransformError, ValidationError};
use edge_core::params::{parse_query, ImageExt};
use edge_core::validation::derive_object_key;

use crate::envelope::{CloudFrontRequest, CloudFrontResponse, EdgeResult, HeaderValue};
use crate::storage::ObjectFetcher;

/// リクエスト1件の終端結果
///
/// パススルー・エラー・成功のいずれか1つだけが生成される。
#[derive(Debug)]
pub enum Outcome {
    Passthrough,
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    ServerError(String),
    Success(Bytes, ImageExt),
}

/// リクエストを処理して結果のエンベロープを返す
///
/// パイプライン: 解析 → ゲート → 取得 → 変換 → レスポンス生成。
/// 内部リトライはなく、各段の失敗は即座に終端する。
pub async fn handle(fetcher: &dyn ObjectFetcher, request: CloudFrontRequest) -> EdgeResult {
    run_pipeline(fetcher, &request).await.into_result(request)
}

async fn run_pipeline(fetcher: &dyn ObjectFetcher, request: &CloudFrontRequest) -> Outcome {
    let params = parse_query(&request.querystring);

    // 変換パラメータが無ければ変換せず元リクエストを通す（拡張子不問）
    if !params.has_any() {
        return Outcome::Passthrough;
    }

    let Some(ext) = ImageExt::from_uri(&request.uri) else {
        tracing::warn!(uri = %request.uri, "unsupported or missing image extension");
        return ValidationError::UnsupportedExtension.into();
    };

    let key = match derive_object_key(&request.uri) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(uri = %request.uri, error = %err, "invalid object key");
            return err.into();
        }
    };

    tracing::info!(key = %key, "fetching original object");
    let original = match fetcher.fetch(&key).await {
        Ok(bytes) => bytes,
        Err(err) => return err.into(),
    };

    tracing::info!(
        key = %key,
        w = ?params.width,
        h = ?params.height,
        q = ?params.quality,
        "transforming image"
    );
    match crate::transform::transform(&original, ext, &params) {
        Ok(output) => Outcome::Success(output, ext),
        Err(err) => err.into(),
    }
}

impl From<ValidationError> for Outcome {
    fn from(err: ValidationError) -> Self {
        Outcome::BadRequest(err.to_string())
    }
}

impl From<StorageError> for Outcome {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { key } => {
                tracing::warn!(key = %key, "object not found");
                Outcome::NotFound("object not found".to_string())
            }
            StorageError::TooLarge { size, max } => {
                tracing::warn!(size = %size, max = %max, "original object exceeds fetch ceiling");
                Outcome::PayloadTooLarge("original image is too large".to_string())
            }
            StorageError::Internal(msg) => {
                tracing::error!(error = %msg, "storage error");
                Outcome::ServerError("storage error".to_string())
            }
        }
    }
}

impl From<TransformError> for Outcome {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::FormatMismatch {
                requested,
                detected,
            } => {
                tracing::warn!(requested = %requested, detected = %detected, "mismatched image format");
                Outcome::BadRequest("Mismatched image format".to_string())
            }
            TransformError::OutputTooLarge { size, max } => {
                tracing::warn!(size = %size, max = %max, "transformed image exceeds size limit");
                Outcome::PayloadTooLarge("transformed image exceeds size limit".to_string())
            }
            TransformError::ProcessingFailed(msg) => {
                tracing::error!(error = %msg, "image processing failed");
                Outcome::ServerError("image processing failed".to_string())
            }
        }
    }
}

impl Outcome {
    /// 終端結果を最終エンベロープに変換する
    fn into_result(self, request: CloudFrontRequest) -> EdgeResult {
        match self {
            Outcome::Passthrough => EdgeResult::Request(request),
            Outcome::BadRequest(msg) => {
                EdgeResult::Response(error_response("400", "Bad Request", msg))
            }
            Outcome::NotFound(msg) => EdgeResult::Response(error_response("404", "Not Found", msg)),
            Outcome::PayloadTooLarge(msg) => {
                EdgeResult::Response(error_response("413", "Payload Too Large", msg))
            }
            Outcome::ServerError(msg) => {
                EdgeResult::Response(error_response("500", "Server Error", msg))
            }
            Outcome::Success(bytes, ext) => EdgeResult::Response(success_response(&bytes, ext)),
        }
    }
}

fn header(value: &str) -> Vec<HeaderValue> {
    vec![HeaderValue {
        value: value.to_string(),
    }]
}

fn error_response(status: &str, description: &str, message: String) -> CloudFrontResponse {
    let mut headers = HashMap::new();
    headers.insert(
        "content-type".to_string(),
        header("text/plain; charset=utf-8"),
    );

    CloudFrontResponse {
        status: status.to_string(),
        status_description: description.to_string(),
        headers,
        body: Some(message),
        body_encoding: Some("text".to_string()),
    }
}

fn success_response(bytes: &Bytes, ext: ImageExt) -> CloudFrontResponse {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), header(ext.content_type()));
    headers.insert(
        "cache-control".to_string(),
        header(&format!("public, max-age={CACHE_MAX_AGE_SECS}, immutable")),
    );
    headers.insert("vary".to_string(), header("Accept,Accept-Encoding"));

    CloudFrontResponse {
        status: "200".to_string(),
        status_description: "OK".to_string(),
        headers,
        body: Some(BASE64.encode(bytes)),
        body_encoding: Some("base64".to_string()),
    }
}
