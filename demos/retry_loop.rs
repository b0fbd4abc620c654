//! Reconnect loop driven by an exponential backoff.
//!
//! Run: cargo run --example retry_loop

use std::time::Duration;

use retry_backoff::{Backoff, ExponentialBackoff};

/// Pretend endpoint that comes up on the fifth attempt.
async fn connect(attempt: u32) -> Result<(), &'static str> {
    if attempt < 5 {
        Err("connection refused")
    } else {
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,retry_backoff=trace"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut backoff = ExponentialBackoff::new(
        Duration::from_millis(100),
        Duration::from_secs(2),
        0.15,
        2.0,
    );

    let mut attempt = 0;
    loop {
        attempt += 1;
        match connect(attempt).await {
            Ok(()) => {
                tracing::info!(attempt, "connected");
                backoff.reset();
                break;
            }
            Err(err) => {
                let delay = backoff.duration();
                tracing::info!(attempt, ?delay, error = err, "connect failed, backing off");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
