#![allow(dead_code)]

//! Assertion helpers shared by the test modules. Each checks one invariant
//! of the allocation pass and panics with a labelled message on violation.

use crate::types::Investable;

/// INV-1: invested_amount never exceeds full_amount.
pub fn assert_no_overshoot<T: Investable>(entity: &T, label: &str) {
    assert!(
        entity.invested_amount() <= entity.full_amount(),
        "INV-1 violated: {} holds {} over its target {}",
        label,
        entity.invested_amount(),
        entity.full_amount()
    );
}

/// INV-2: invested_amount is never negative.
pub fn assert_non_negative<T: Investable>(entity: &T, label: &str) {
    assert!(
        entity.invested_amount() >= 0,
        "INV-2 violated: {} holds negative amount {}",
        label,
        entity.invested_amount()
    );
}

/// INV-3: fully_invested holds exactly when the target is reached, and
/// close_date is stamped exactly when fully_invested holds.
pub fn assert_closure_consistent<T: Investable>(entity: &T, label: &str) {
    assert_eq!(
        entity.fully_invested(),
        entity.invested_amount() == entity.full_amount(),
        "INV-3 violated: {} flag disagrees with amounts ({} of {})",
        label,
        entity.invested_amount(),
        entity.full_amount()
    );
    assert_eq!(
        entity.close_date().is_some(),
        entity.fully_invested(),
        "INV-3 violated: {} close_date presence disagrees with flag",
        label
    );
}

/// INV-4: conservation — the sum credited to the open set equals the sum
/// debited from the new entity's capacity, which equals the reported total.
pub fn assert_conservation(open_before: i64, open_after: i64, new_invested: i64, reported: i64) {
    assert_eq!(
        open_after - open_before,
        reported,
        "INV-4 violated: open set grew by {} but pass reported {}",
        open_after - open_before,
        reported
    );
    assert_eq!(
        new_invested, reported,
        "INV-4 violated: new entity absorbed {} but pass reported {}",
        new_invested, reported
    );
}

/// INV-5: fields the pass must not touch — target and creation timestamp.
pub fn assert_immutable_fields<T: Investable>(before: &T, after: &T, label: &str) {
    assert_eq!(
        before.full_amount(),
        after.full_amount(),
        "INV-5 violated: {} target changed",
        label
    );
    assert_eq!(
        before.create_date(),
        after.create_date(),
        "INV-5 violated: {} create_date changed",
        label
    );
}

/// INV-6: invested_amount is monotonically non-decreasing across a pass.
pub fn assert_monotonic<T: Investable>(before: &T, after: &T, label: &str) {
    assert!(
        after.invested_amount() >= before.invested_amount(),
        "INV-6 violated: {} shrank from {} to {}",
        label,
        before.invested_amount(),
        after.invested_amount()
    );
}

/// Run every stateless invariant over one entity.
pub fn assert_entity_invariants<T: Investable>(entity: &T, label: &str) {
    assert_no_overshoot(entity, label);
    assert_non_negative(entity, label);
    assert_closure_consistent(entity, label);
}
