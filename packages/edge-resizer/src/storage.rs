use async_trait::async_trait;
use aws_sdk_s3::Client;
use bytes::Bytes;

use edge_core::constants::MAX_INPUT_BYTES;
use edge_core::errors::StorageError;

/// オブジェクト取得の抽象
///
/// ハンドラは具体的なストレージ実装に依存しない。テストでは
/// インメモリ実装を注入する。
#[async_trait]
pub trait ObjectFetcher: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Bytes, StorageError>;
}

/// S3 バケットからオブジェクトを取得するクライアント
///
/// クライアントはプロセス起動時に一度だけ構築し、全呼び出しで再利用する。
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectFetcher for S3ObjectStore {
    async fn fetch(&self, key: &str) -> Result<Bytes, StorageError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    return Err(StorageError::NotFound {
                        key: key.to_string(),
                    });
                }
                tracing::error!(key = %key, error = %service_err, "unexpected response from S3");
                return Err(StorageError::Internal(service_err.to_string()));
            }
        };

        // ボディを読む前に申告サイズで拒否する
        if let Some(len) = output.content_length()
            && len > 0
            && len as u64 > MAX_INPUT_BYTES
        {
            return Err(StorageError::TooLarge {
                size: len as u64,
                max: MAX_INPUT_BYTES,
            });
        }

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Internal(e.to_string()))?
            .into_bytes();

        // 読み込み後にも実サイズを確認
        if data.len() as u64 > MAX_INPUT_BYTES {
            return Err(StorageError::TooLarge {
                size: data.len() as u64,
                max: MAX_INPUT_BYTES,
            });
        }

        Ok(data)
    }
}
