//! # Types
//!
//! Shared data structures of the fund-matching domain.
//!
//! ## Design decisions
//!
//! ### One trait, two variants
//!
//! [`Project`] (a fundraising campaign with a target) and [`Donation`] (an
//! incoming sum waiting to be spent) share the same funding mechanics: a
//! target amount, an accumulated amount, and a one-way open → closed
//! lifecycle. The [`Investable`] trait captures exactly that surface; the
//! allocation engine operates only through it and never inspects which
//! variant it is holding.
//!
//! ### Lifecycle as a two-state machine
//!
//! ```text
//! Open ──► Closed
//! ```
//!
//! `Open` means `invested_amount < full_amount`; `Closed` means the two are
//! equal. The transition happens exactly once, stamps `close_date`, and is
//! never reversed. There are no other states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum length of a project name, matching the `name` column width.
pub const MAX_NAME_LEN: usize = 100;

/// Common surface of every entity that takes part in fund matching.
///
/// The engine needs read access to the five shared fields and exactly two
/// mutations: crediting an amount and closing. Implementors keep their
/// variant-specific fields (name, comment, ...) to themselves.
pub trait Investable {
    /// Target amount. Positive, immutable after creation.
    fn full_amount(&self) -> i64;

    /// Amount accumulated so far. Never exceeds [`full_amount`](Self::full_amount).
    fn invested_amount(&self) -> i64;

    /// True iff `invested_amount == full_amount`.
    fn fully_invested(&self) -> bool;

    /// Creation timestamp. Immutable; orders the open set oldest-first.
    fn create_date(&self) -> DateTime<Utc>;

    /// Closure timestamp. Present iff the entity is fully invested.
    fn close_date(&self) -> Option<DateTime<Utc>>;

    /// Credit `amount` toward the target.
    fn add_investment(&mut self, amount: i64);

    /// Transition to Closed, stamping `at` as the close date.
    fn close(&mut self, at: DateTime<Utc>);

    /// How much this entity can still absorb.
    fn available(&self) -> i64 {
        self.full_amount() - self.invested_amount()
    }

    /// True while the entity can still take part in allocation.
    fn is_open(&self) -> bool {
        !self.fully_invested()
    }
}

/// A fundraising campaign with a monetary target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier.
    pub id: i64,
    /// Unique human-readable name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Target amount.
    pub full_amount: i64,
    /// Amount collected so far.
    pub invested_amount: i64,
    /// Closure flag; true iff the target is reached.
    pub fully_invested: bool,
    pub create_date: DateTime<Utc>,
    pub close_date: Option<DateTime<Utc>>,
}

impl Project {
    /// Build a freshly created, open project.
    ///
    /// Rejects a non-positive target, a blank or over-long name, and a
    /// blank description.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        full_amount: i64,
        create_date: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        validate_amount(full_amount)?;
        validate_name(&name)?;
        validate_description(&description)?;
        Ok(Self {
            id,
            name,
            description,
            full_amount,
            invested_amount: 0,
            fully_invested: false,
            create_date,
            close_date: None,
        })
    }
}

impl Investable for Project {
    fn full_amount(&self) -> i64 {
        self.full_amount
    }

    fn invested_amount(&self) -> i64 {
        self.invested_amount
    }

    fn fully_invested(&self) -> bool {
        self.fully_invested
    }

    fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    fn close_date(&self) -> Option<DateTime<Utc>> {
        self.close_date
    }

    fn add_investment(&mut self, amount: i64) {
        self.invested_amount += amount;
    }

    fn close(&mut self, at: DateTime<Utc>) {
        self.fully_invested = true;
        self.close_date = Some(at);
    }
}

/// An incoming donation waiting to be matched against projects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    /// Store-assigned identifier.
    pub id: i64,
    /// Optional donor comment.
    pub comment: Option<String>,
    /// Donated sum (the donation's own target: it closes once the whole
    /// sum has been spent on projects).
    pub full_amount: i64,
    /// Portion already spent on projects.
    pub invested_amount: i64,
    /// Closure flag; true iff the whole sum has been spent.
    pub fully_invested: bool,
    pub create_date: DateTime<Utc>,
    pub close_date: Option<DateTime<Utc>>,
}

impl Donation {
    /// Build a freshly created, open donation. Rejects a non-positive sum.
    pub fn new(
        id: i64,
        comment: Option<String>,
        full_amount: i64,
        create_date: DateTime<Utc>,
    ) -> Result<Self> {
        validate_amount(full_amount)?;
        Ok(Self {
            id,
            comment,
            full_amount,
            invested_amount: 0,
            fully_invested: false,
            create_date,
            close_date: None,
        })
    }
}

impl Investable for Donation {
    fn full_amount(&self) -> i64 {
        self.full_amount
    }

    fn invested_amount(&self) -> i64 {
        self.invested_amount
    }

    fn fully_invested(&self) -> bool {
        self.fully_invested
    }

    fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    fn close_date(&self) -> Option<DateTime<Utc>> {
        self.close_date
    }

    fn add_investment(&mut self, amount: i64) {
        self.invested_amount += amount;
    }

    fn close(&mut self, at: DateTime<Utc>) {
        self.fully_invested = true;
        self.close_date = Some(at);
    }
}

fn validate_amount(full_amount: i64) -> Result<()> {
    if full_amount <= 0 {
        return Err(Error::NonPositiveAmount(full_amount));
    }
    Ok(())
}

/// Check a project name: non-blank, at most [`MAX_NAME_LEN`] characters.
/// Also applied when an existing project is renamed.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(Error::InvalidName);
    }
    Ok(())
}

/// Check a project description: non-blank.
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::InvalidDescription);
    }
    Ok(())
}
