//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - JSON-file key-value store under the data directory
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryStore`] - In-memory key-value store
//! - [`mock::MockGenerator`] - Scripted text generator with failure injection
//! - [`mock::RecordingCaptureDevice`] - Simulated capture that counts releases

pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileStore;
pub use mock::{InMemoryStore, MockGenerator, MockHttpClient, RecordingCaptureDevice};
pub use reqwest_http::ReqwestHttpClient;
