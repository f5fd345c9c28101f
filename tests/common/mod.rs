//! Common test utilities for integration tests.
//!
//! Tests run on a paused tokio clock (`#[tokio::test(start_paused = true)]`)
//! so connect delays, the session clock and billing settle instantly and
//! deterministically.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use soulstream::adapters::{InMemoryStore, MockGenerator};
use soulstream::app::{App, AppDeps};
use soulstream::capture::{SimulatedCaptureDevice, UnavailableCaptureDevice};
use soulstream::config::AppConfig;
use soulstream::traits::{CaptureDevice, KeyValueStore};

pub const CONNECT_DELAY: Duration = Duration::from_millis(1500);
pub const BILLING_DELAY: Duration = Duration::from_millis(2000);

/// Builder for test App instances.
pub struct TestAppBuilder {
    generator: MockGenerator,
    capture: Arc<dyn CaptureDevice>,
    store: Arc<InMemoryStore>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            generator: MockGenerator::new(),
            capture: Arc::new(SimulatedCaptureDevice),
            store: Arc::new(InMemoryStore::new()),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(mut self, generator: MockGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn without_capture(mut self) -> Self {
        self.capture = Arc::new(UnavailableCaptureDevice);
        self
    }

    pub fn with_capture(mut self, device: Arc<dyn CaptureDevice>) -> Self {
        self.capture = device;
        self
    }

    pub fn with_store(mut self, store: Arc<InMemoryStore>) -> Self {
        self.store = store;
        self
    }

    pub fn build(self) -> App {
        let config = AppConfig::new()
            .with_connect_delay(CONNECT_DELAY)
            .with_billing_delay(BILLING_DELAY);
        let store: Arc<dyn KeyValueStore> = self.store;
        let deps = AppDeps {
            generator: Arc::new(self.generator),
            capture: self.capture,
            store,
        };
        App::with_deps(config, deps)
    }
}

/// Let spawned tasks run, then feed every queued message to the app.
pub async fn drain(app: &mut App) {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
    let mut rx = app.message_rx.take().expect("message receiver already taken");
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}

/// Advance the paused clock by `duration` and process the resulting messages.
pub async fn advance(app: &mut App, duration: Duration) {
    tokio::time::sleep(duration).await;
    drain(app).await;
}

/// Wait out the connect delay.
pub async fn connect(app: &mut App) {
    advance(app, CONNECT_DELAY).await;
    assert!(
        app.session.as_ref().is_some_and(|s| s.is_active()),
        "session did not connect"
    );
}

/// Run the live session clock until it reads `secs`.
pub async fn run_for(app: &mut App, secs: u64) {
    for _ in 0..secs * 2 {
        let elapsed = app.session.as_ref().map(|s| s.elapsed_secs()).unwrap_or(0);
        if elapsed >= secs {
            break;
        }
        advance(app, Duration::from_secs(1)).await;
    }
    assert_eq!(app.session.as_ref().map(|s| s.elapsed_secs()), Some(secs));
}
