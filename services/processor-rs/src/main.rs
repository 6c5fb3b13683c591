use dotenvy::dotenv;
use rand::{rngs::StdRng, SeedableRng};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod clock;
mod error;
mod report;
mod sample;
mod sampler;

use crate::clock::SystemClock;
use crate::report::CONTAINER_NAME;
use crate::sample::{VALUE_MAX, VALUE_MIN};
use crate::sampler::{Sampler, INTERVAL};

#[tokio::main]
async fn main() {
    dotenv().ok();
    // stdout belongs to the sample report, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(
        container = CONTAINER_NAME,
        interval = ?INTERVAL,
        value_min = VALUE_MIN,
        value_max = VALUE_MAX,
        "processor up"
    );

    let mut sampler = Sampler::new(SystemClock, StdRng::from_entropy(), std::io::stdout());

    // Nothing cancels this: the process runs until the host stops it.
    let token = CancellationToken::new();
    if let Err(e) = sampler.run(token).await {
        error!("processor stopped: {}", e);
        std::process::exit(1);
    }
}
