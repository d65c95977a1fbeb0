use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

mod config;
mod envelope;
mod handler;
mod storage;
mod transform;

use config::Config;
use envelope::{CloudFrontEvent, EdgeResult};
use storage::S3ObjectStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .init();

    let config = Config::from_env().map_err(Error::from)?;

    // S3 クライアントはプロセスで一度だけ構築し、全呼び出しで共有する
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config), config.bucket.clone());
    let store_ref = &store;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<CloudFrontEvent>| async move {
            let request = event
                .payload
                .into_request()
                .ok_or_else(|| Error::from("event contains no CloudFront record"))?;
            Ok::<EdgeResult, Error>(handler::handle(store_ref, request).await)
        },
    ))
    .await
}
