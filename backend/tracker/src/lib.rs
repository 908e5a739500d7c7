//! # Tracker
//!
//! Persistence and orchestration layer of the donation tracker. Stores
//! projects and donations in SQLite and runs one [`fundmatch`] allocation
//! pass per created entity, inside a single transaction, behind a gate that
//! serializes passes.
//!
//! Transport (HTTP routing, auth) is deliberately absent: callers embed
//! [`Tracker`] and drive it directly. The crate owns everything between the
//! caller and the database file — configuration, schema migrations, the
//! open-set queries the engine depends on, and the project lifecycle rules.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod service;

pub use config::Config;
pub use errors::{Result, TrackerError};
pub use service::Tracker;
