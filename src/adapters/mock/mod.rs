//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - In-memory key-value store
//! - [`MockGenerator`] - Text generator with scripted replies
//! - [`RecordingCaptureDevice`] - Simulated capture that counts releases

pub mod capture;
pub mod generator;
pub mod http;
pub mod store;

pub use capture::RecordingCaptureDevice;
pub use generator::MockGenerator;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use store::InMemoryStore;
