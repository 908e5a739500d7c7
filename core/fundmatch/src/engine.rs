//! The allocation pass: greedy, single sweep, oldest entity first.
//!
//! One pass runs per created entity. A new donation is spread over open
//! projects; a new project drains open donations. Both directions are the
//! same procedure, so [`distribute`] is generic over the new entity and the
//! open set and never looks at which variant it received — the caller picks
//! the opposite-kind open set.
//!
//! The pass is a pure mutation over its arguments. It holds no state, does
//! no I/O, and takes the clock as a parameter; selecting the open set
//! (oldest `create_date` first, closed entities excluded) and committing
//! every touched entity atomically are the caller's responsibility.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::types::Investable;

/// What one allocation pass did, for the caller to persist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocationReport {
    /// Total amount moved from the new entity's capacity into the open set.
    pub transferred: i64,
    /// Indices (into the open slice) of entities that received money.
    /// Always a prefix of the open set: allocation never skips ahead.
    pub touched: Vec<usize>,
}

impl AllocationReport {
    /// True when the pass moved no money (empty or absent open set).
    pub fn is_noop(&self) -> bool {
        self.transferred == 0
    }
}

/// Run one allocation pass.
///
/// `new_entity` was created moments ago and must be untouched: zero
/// invested, open. `open` holds every open entity of the opposite kind,
/// oldest `create_date` first. `now` stamps every closure in this pass.
///
/// Walks the open set oldest-first, moving `min(available, remaining)` into
/// each entity until the new entity's capacity runs out or the set is
/// exhausted. Entities that reach their target close on the spot; the new
/// entity closes after the sweep if its own target was met. Entities past
/// the stopping point are left untouched.
///
/// # Errors
///
/// [`Error::AlreadyInvested`] or [`Error::ClosedEntityInOpenSet`] when a
/// precondition is violated (nothing is mutated in that case), and
/// [`Error::InvariantBroken`] if the arithmetic ever leaves the legal range
/// mid-pass.
pub fn distribute<N, O>(
    new_entity: &mut N,
    open: &mut [O],
    now: DateTime<Utc>,
) -> Result<AllocationReport>
where
    N: Investable + ?Sized,
    O: Investable,
{
    if new_entity.invested_amount() != 0 || new_entity.fully_invested() {
        return Err(Error::AlreadyInvested {
            invested: new_entity.invested_amount(),
            full: new_entity.full_amount(),
        });
    }
    for (index, entity) in open.iter().enumerate() {
        if entity.fully_invested() || entity.available() <= 0 {
            return Err(Error::ClosedEntityInOpenSet { index });
        }
    }
    debug_assert!(
        open.windows(2).all(|w| w[0].create_date() <= w[1].create_date()),
        "open set must be ordered oldest-first"
    );

    let mut remaining = new_entity.full_amount() - new_entity.invested_amount();
    let mut report = AllocationReport::default();

    for (index, entity) in open.iter_mut().enumerate() {
        if remaining <= 0 {
            break;
        }

        let available = entity.available();
        let amount = available.min(remaining);

        entity.add_investment(amount);
        new_entity.add_investment(amount);

        if entity.invested_amount() == entity.full_amount() {
            entity.close(now);
        }

        remaining -= amount;
        report.transferred += amount;
        report.touched.push(index);

        if entity.invested_amount() > entity.full_amount() || remaining < 0 {
            return Err(Error::InvariantBroken(format!(
                "entity {} over target or remaining negative after step ({} of {}, remaining {})",
                index,
                entity.invested_amount(),
                entity.full_amount(),
                remaining,
            )));
        }
    }

    if new_entity.invested_amount() == new_entity.full_amount() {
        new_entity.close(now);
    }

    Ok(report)
}
