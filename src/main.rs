use airtable_client::prelude::*;
use airtable_client::version::full_version;

#[tokio::main]
async fn main() -> AirtableResult<()> {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, Layer};

    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
    tracing::debug!("running airtable-client {}", full_version());

    let config = StepConfig::from_env()?;
    let records = get_records(&config).await?;

    let rendered = serde_json::to_string(&records)?;
    println!("{rendered}");

    Ok(())
}
