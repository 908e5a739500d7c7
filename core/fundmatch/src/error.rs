//! Domain error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("target amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("project name must be 1 to 100 characters and not blank")]
    InvalidName,

    #[error("project description must not be blank")]
    InvalidDescription,

    /// The entity handed to the engine as "new" already carries investment.
    /// Allocation passes run exactly once, at creation time.
    #[error("new entity already carries investment ({invested} of {full})")]
    AlreadyInvested { invested: i64, full: i64 },

    /// The open set handed to the engine contains a closed entity.
    /// The open-set query must filter on `fully_invested = false`.
    #[error("closed entity at position {index} of the open set")]
    ClosedEntityInOpenSet { index: usize },

    /// A numeric invariant broke mid-pass. Never expected under correct
    /// input; surfaced instead of being silently tolerated.
    #[error("allocation invariant broken: {0}")]
    InvariantBroken(String),
}

pub type Result<T> = std::result::Result<T, Error>;
