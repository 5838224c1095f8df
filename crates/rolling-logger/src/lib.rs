//! Rolling Logger
//!
//! Installs a global `tracing` subscriber whose only layer keeps the most
//! recent lines in memory and forwards each one to a caller-supplied sink
//! (the browser console, stderr, ...). Records from the `log` crate are
//! bridged through tracing-subscriber's `tracing-log` support.

mod layer;
mod ring;

use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer as _;

pub use layer::{RingLayer, Sink};
pub use ring::LogRing;

/// Logger settings
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    /// Number of lines kept in the ring
    pub capacity: usize,
    /// Most verbose level recorded
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            level: Level::INFO,
        }
    }
}

/// Install the global subscriber.
///
/// Returns the ring shared with the installed layer. Fails if a global
/// subscriber is already set.
pub fn init<F>(config: LoggerConfig, sink: F) -> Result<LogRing, TryInitError>
where
    F: Fn(Level, &str) + Send + Sync + 'static,
{
    let ring = LogRing::new(config.capacity);
    let layer = RingLayer::new(ring.clone(), Arc::new(sink))
        .with_filter(LevelFilter::from_level(config.level));

    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(ring)
}
