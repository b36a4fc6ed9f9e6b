//! labelkit - bucket CORS/metadata and Label Studio reporting

use clap::Parser;
use labelkit_cli::{labeling, Args, Dispatcher, S3BucketStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    if let Err(e) = args.validate() {
        e.exit();
    }

    // Setup logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("labelkit_cli={0},labelkit_client={0}", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let actions = args.actions();
    let config = args.into_config();
    tracing::debug!(?config, ?actions, "starting");

    let storage = S3BucketStore::new(&config.storage);
    let studio = if actions.needs_labeling() {
        Some(labeling::connect(&config)?)
    } else {
        None
    };

    let mut dispatcher = Dispatcher::new(&config, &storage);
    if let Some(client) = &studio {
        dispatcher = dispatcher.with_labeling(client);
    }

    let mut out = std::io::stdout().lock();
    dispatcher.run(actions, &mut out).await?;

    Ok(())
}
