use clap::Parser;
use nutrihelp_core::{application::create_service, domain::common::NutrihelpConfig};
use tracing_subscriber::EnvFilter;

use crate::{application::terminal::Terminal, args::Args};

mod application;
mod args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = NutrihelpConfig::from(args);
    let service = create_service(config)?;

    Terminal::start(service).await.run().await
}

fn init_tracing(json: bool) {
    // quiet by default so log lines do not interleave with the conversation
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
