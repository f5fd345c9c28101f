//! SoulStream - a terminal client for browsing healers, running guided
//! sessions and managing a wallet.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod billing;
pub mod capture;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod models;
pub mod preferences;
pub mod reviews;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod wallet;
