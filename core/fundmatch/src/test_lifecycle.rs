use chrono::{DateTime, TimeZone, Utc};

use crate::{Donation, Error, Investable, Project, MAX_NAME_LEN};

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn test_new_project_starts_open_and_empty() {
    let project = Project::new(1, "water well", "dig a well", 5_000, ts(10)).unwrap();

    assert_eq!(project.invested_amount, 0);
    assert!(!project.fully_invested);
    assert_eq!(project.close_date, None);
    assert!(project.is_open());
    assert_eq!(project.available(), 5_000);
}

#[test]
fn test_project_rejects_non_positive_target() {
    let err = Project::new(1, "x", "y", 0, ts(10)).unwrap_err();
    assert_eq!(err, Error::NonPositiveAmount(0));

    let err = Project::new(1, "x", "y", -5, ts(10)).unwrap_err();
    assert_eq!(err, Error::NonPositiveAmount(-5));
}

#[test]
fn test_project_rejects_blank_or_overlong_name() {
    assert_eq!(
        Project::new(1, "   ", "desc", 100, ts(10)).unwrap_err(),
        Error::InvalidName
    );
    assert_eq!(
        Project::new(1, "", "desc", 100, ts(10)).unwrap_err(),
        Error::InvalidName
    );
    let long = "n".repeat(MAX_NAME_LEN + 1);
    assert_eq!(
        Project::new(1, long, "desc", 100, ts(10)).unwrap_err(),
        Error::InvalidName
    );
    // Exactly at the limit is fine.
    let edge = "n".repeat(MAX_NAME_LEN);
    assert!(Project::new(1, edge, "desc", 100, ts(10)).is_ok());
}

#[test]
fn test_project_rejects_blank_description() {
    assert_eq!(
        Project::new(1, "name", "  \t ", 100, ts(10)).unwrap_err(),
        Error::InvalidDescription
    );
}

#[test]
fn test_donation_rejects_non_positive_sum() {
    assert_eq!(
        Donation::new(1, None, 0, ts(10)).unwrap_err(),
        Error::NonPositiveAmount(0)
    );
}

#[test]
fn test_donation_comment_is_optional() {
    let with = Donation::new(1, Some("for the kittens".into()), 50, ts(10)).unwrap();
    let without = Donation::new(2, None, 50, ts(10)).unwrap();
    assert_eq!(with.comment.as_deref(), Some("for the kittens"));
    assert_eq!(without.comment, None);
}

#[test]
fn test_close_stamps_date_and_flag() {
    let mut donation = Donation::new(1, None, 50, ts(10)).unwrap();
    donation.add_investment(50);
    donation.close(ts(99));

    assert!(donation.fully_invested);
    assert_eq!(donation.close_date, Some(ts(99)));
    assert!(!donation.is_open());
    assert_eq!(donation.available(), 0);
}

#[test]
fn test_add_investment_reduces_availability() {
    let mut project = Project::new(1, "books", "school library", 300, ts(10)).unwrap();
    project.add_investment(120);
    assert_eq!(project.invested_amount, 120);
    assert_eq!(project.available(), 180);
    assert!(project.is_open());
}

#[test]
fn test_project_serializes_with_expected_fields() {
    let project = Project::new(3, "vaccines", "vaccinate strays", 700, ts(10)).unwrap();
    let value = serde_json::to_value(&project).unwrap();

    assert_eq!(value["id"], 3);
    assert_eq!(value["name"], "vaccines");
    assert_eq!(value["full_amount"], 700);
    assert_eq!(value["invested_amount"], 0);
    assert_eq!(value["fully_invested"], false);
    assert!(value["close_date"].is_null());
}
