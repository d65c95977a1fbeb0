use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// CloudFront origin-request イベント
#[derive(Debug, Clone, Deserialize)]
pub struct CloudFrontEvent {
    #[serde(rename = "Records")]
    pub records: Vec<CloudFrontRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudFrontRecord {
    pub cf: CloudFrontDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudFrontDetail {
    pub request: CloudFrontRequest,
}

impl CloudFrontEvent {
    /// 先頭レコードのリクエストを取り出す
    pub fn into_request(self) -> Option<CloudFrontRequest> {
        self.records.into_iter().next().map(|record| record.cf.request)
    }
}

/// エッジネットワークから渡されるリクエスト
///
/// 変換で参照するのは uri と querystring のみ。headers / method / origin
/// などはパススルー時に欠落しないよう flatten で保持し、そのまま返す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontRequest {
    pub uri: String,
    pub querystring: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// ヘッダ値（CloudFront は名前ごとに値オブジェクトのリストを要求する）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderValue {
    pub value: String,
}

/// エッジネットワークへ返すレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontResponse {
    /// CloudFront の契約上、ステータスコードは文字列
    pub status: String,
    #[serde(rename = "statusDescription")]
    pub status_description: String,
    pub headers: HashMap<String, Vec<HeaderValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "bodyEncoding", skip_serializing_if = "Option::is_none")]
    pub body_encoding: Option<String>,
}

/// ハンドラの終端結果
///
/// 元リクエストのパススルー、または生成したレスポンスのどちらか一方。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EdgeResult {
    Request(CloudFrontRequest),
    Response(CloudFrontResponse),
}
