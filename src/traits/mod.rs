//! Trait abstractions at the external seams.
//!
//! Each external collaborator sits behind a trait so the app can be driven
//! against mocks in tests:
//!
//! - [`HttpClient`] - request/response HTTP used by the text-generation client
//! - [`CaptureDevice`] - best-effort camera/microphone acquisition
//! - [`KeyValueStore`] - the two-key preference store

pub mod capture;
pub mod http;
pub mod storage;

pub use capture::{CaptureDevice, CaptureError};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{KeyValueStore, StorageError};
