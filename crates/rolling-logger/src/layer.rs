//! Ring Layer
//!
//! `tracing-subscriber` layer that formats each event into one line,
//! stores it in a [`LogRing`] and hands it to a sink.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::ring::LogRing;

/// Receives every formatted line together with its level
pub type Sink = Arc<dyn Fn(Level, &str) + Send + Sync>;

pub struct RingLayer {
    ring: LogRing,
    sink: Sink,
}

impl RingLayer {
    pub fn new(ring: LogRing, sink: Sink) -> Self {
        Self { ring, sink }
    }

    /// Layer that only fills the ring
    pub fn silent(ring: LogRing) -> Self {
        Self::new(ring, Arc::new(|_, _| {}))
    }
}

impl<S: Subscriber> Layer<S> for RingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} {:>5} {}: {}{}",
            Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            visitor.message,
            visitor.fields,
        );
        (self.sink)(*meta.level(), &line);
        self.ring.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_event_lands_in_ring() {
        let ring = LogRing::new(8);
        let subscriber = tracing_subscriber::registry().with(RingLayer::silent(ring.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 3, "loaded items");
        });

        let lines = ring.snapshot();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" INFO "));
        assert!(lines[0].ends_with("loaded items count=3"));
    }

    #[test]
    fn test_sink_receives_level() {
        let seen: Arc<Mutex<Vec<Level>>> = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let sink: Sink = Arc::new(move |level, _line| recorder.lock().unwrap().push(level));
        let subscriber = tracing_subscriber::registry().with(RingLayer::new(LogRing::new(8), sink));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("storage unreadable");
            tracing::error!("write refused");
        });

        assert_eq!(*seen.lock().unwrap(), vec![Level::WARN, Level::ERROR]);
    }

    #[test]
    fn test_string_fields_are_unquoted() {
        let ring = LogRing::new(8);
        let subscriber = tracing_subscriber::registry().with(RingLayer::silent(ring.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(label = "Eggs", "added");
        });

        assert!(ring.snapshot()[0].ends_with("added label=Eggs"));
    }
}
