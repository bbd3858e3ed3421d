use hello_lambda::handler::handle;
use lambda_runtime::service_fn;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // CloudWatch records ingestion time and function name on its own.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    info!("Starting greeting function...");
    lambda_runtime::run(service_fn(handle)).await
}
