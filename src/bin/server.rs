use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use name_registry::{
    api::{self, ApiConfig, ApiState},
    config::Config,
    storage::{MySqlStore, NameStore},
};
use tracing::{error, level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// HTTP listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,
}

fn init() {
    dotenv::dotenv().ok();

    let filter = filter::Targets::new().with_targets(vec![
        ("name_registry", LevelFilter::TRACE),
        ("namereg", LevelFilter::TRACE),
        ("tower_http", LevelFilter::DEBUG),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    let mut config = Config::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let store = MySqlStore::connect(&config.database).await?;
    store
        .ensure_schema()
        .await
        .inspect_err(|e| error!("startup aborted: {e}"))?;

    let state = ApiState::new(Arc::new(store));

    let api_config = ApiConfig {
        bind_addr: SocketAddr::from(([0, 0, 0, 0], config.http.port)),
        enable_cors: true,
    };

    api::serve(api_config, state).await
}
