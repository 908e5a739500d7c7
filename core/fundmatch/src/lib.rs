//! # Fundmatch
//!
//! Domain model and allocation engine of the donation tracker. Money given
//! by donors is matched against fundraising projects automatically: every
//! time a project or a donation is created, one allocation pass spreads the
//! newcomer's capacity over the open entities of the opposite kind, oldest
//! first, closing whatever reaches its target.
//!
//! | Concern    | Where                                          |
//! |------------|------------------------------------------------|
//! | Entities   | [`Project`], [`Donation`], the [`Investable`] trait |
//! | Allocation | [`distribute`], [`AllocationReport`]           |
//! | Failures   | [`Error`], [`Result`]                          |
//!
//! ## Architecture
//!
//! This crate is deliberately free of I/O: no store, no clock, no runtime.
//! The backend crate owns persistence and calls [`distribute`] with the open
//! set it selected and the timestamp it chose, then commits the touched
//! entities atomically. Projects and donations are related only through the
//! money moved by passes — there is no pairwise link between a donation and
//! the projects it ended up funding.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_lifecycle;

pub use engine::{distribute, AllocationReport};
pub use error::{Error, Result};
pub use types::{
    validate_description, validate_name, Donation, Investable, Project, MAX_NAME_LEN,
};
