//! Row types stored in / read from the database, the creation inputs, and
//! conversions to and from the domain types the engine operates on.

use chrono::{DateTime, Utc};
use fundmatch::{Donation, Project};
use serde::{Deserialize, Serialize};

/// A project row as stored in / read from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub full_amount: i64,
    pub invested_amount: i64,
    pub fully_invested: bool,
    pub create_date: DateTime<Utc>,
    pub close_date: Option<DateTime<Utc>>,
}

/// A donation row as stored in / read from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DonationRecord {
    pub id: i64,
    pub comment: Option<String>,
    pub full_amount: i64,
    pub invested_amount: i64,
    pub fully_invested: bool,
    pub create_date: DateTime<Utc>,
    pub close_date: Option<DateTime<Utc>>,
}

/// Input for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub full_amount: i64,
}

/// Input for creating a donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDonation {
    pub comment: Option<String>,
    pub full_amount: i64,
}

/// Partial update of a project; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub full_amount: Option<i64>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Project {
            id: record.id,
            name: record.name,
            description: record.description,
            full_amount: record.full_amount,
            invested_amount: record.invested_amount,
            fully_invested: record.fully_invested,
            create_date: record.create_date,
            close_date: record.close_date,
        }
    }
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        ProjectRecord {
            id: project.id,
            name: project.name,
            description: project.description,
            full_amount: project.full_amount,
            invested_amount: project.invested_amount,
            fully_invested: project.fully_invested,
            create_date: project.create_date,
            close_date: project.close_date,
        }
    }
}

impl From<DonationRecord> for Donation {
    fn from(record: DonationRecord) -> Self {
        Donation {
            id: record.id,
            comment: record.comment,
            full_amount: record.full_amount,
            invested_amount: record.invested_amount,
            fully_invested: record.fully_invested,
            create_date: record.create_date,
            close_date: record.close_date,
        }
    }
}

impl From<Donation> for DonationRecord {
    fn from(donation: Donation) -> Self {
        DonationRecord {
            id: donation.id,
            comment: donation.comment,
            full_amount: donation.full_amount,
            invested_amount: donation.invested_amount,
            fully_invested: donation.fully_invested,
            create_date: donation.create_date,
            close_date: donation.close_date,
        }
    }
}
