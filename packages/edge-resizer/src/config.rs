/// デプロイ構成
///
/// バケット名とリージョンは固定の構成値。起動時に一度だけ読み込む。
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub region: String,
}

impl Config {
    /// 環境変数から Config を作成する
    ///
    /// 必須の環境変数:
    /// - BUCKET
    /// - AWS_REGION
    pub fn from_env() -> Result<Self, String> {
        let bucket = std::env::var("BUCKET").map_err(|_| "BUCKET is not set".to_string())?;
        let region =
            std::env::var("AWS_REGION").map_err(|_| "AWS_REGION is not set".to_string())?;

        Ok(Self { bucket, region })
    }
}
