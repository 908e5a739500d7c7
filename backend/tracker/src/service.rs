//! Creation and lifecycle flows. Every created entity triggers exactly one
//! allocation pass; the pass and the creation commit or roll back together.

use chrono::Utc;
use fundmatch::{distribute, validate_description, validate_name, Donation, Project};
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::db;
use crate::errors::{Result, TrackerError};
use crate::models::{DonationRecord, NewDonation, NewProject, ProjectPatch, ProjectRecord};

/// Handle to the tracker: a connection pool plus the allocation gate.
///
/// Two concurrent passes could read the same open set and both spend the
/// same capacity, so passes are serialized: the gate is held across the
/// whole create→allocate→commit sequence, and the sequence runs on a single
/// transaction. The gate is process-local — the deployment model is one
/// writer per database file.
pub struct Tracker {
    pool: SqlitePool,
    allocation_gate: Mutex<()>,
}

impl Tracker {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            allocation_gate: Mutex::new(()),
        }
    }

    /// Open the pool described by `config`, run migrations, and wrap it.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let pool = db::init_pool(config).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ─────────────────────────────────────────────────────────
    // Creation (each runs one allocation pass)
    // ─────────────────────────────────────────────────────────

    /// Create a project and immediately run an allocation pass that drains
    /// open donations into it, oldest donation first.
    pub async fn create_project(&self, new: NewProject) -> Result<ProjectRecord> {
        let _gate = self.allocation_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        if db::project_id_by_name(&mut *tx, &new.name).await?.is_some() {
            return Err(TrackerError::DuplicateName(new.name));
        }

        let now = Utc::now();
        let mut project = Project::new(0, new.name, new.description, new.full_amount, now)?;

        let mut open: Vec<Donation> = db::open_donations(&mut *tx)
            .await?
            .into_iter()
            .map(Donation::from)
            .collect();
        let report = distribute(&mut project, &mut open, now)?;

        for index in report.touched.iter().copied() {
            db::update_donation(&mut *tx, &DonationRecord::from(open[index].clone())).await?;
        }

        let mut record = ProjectRecord::from(project);
        record.id = db::insert_project(&mut *tx, &record).await?;
        tx.commit().await?;

        if report.is_noop() {
            debug!(project_id = record.id, "project created, no open donations");
        } else {
            info!(
                project_id = record.id,
                transferred = report.transferred,
                closed = record.fully_invested,
                "project created and funded from open donations"
            );
        }
        Ok(record)
    }

    /// Create a donation and immediately run an allocation pass that spreads
    /// it over open projects, oldest project first.
    pub async fn create_donation(&self, new: NewDonation) -> Result<DonationRecord> {
        let _gate = self.allocation_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let now = Utc::now();
        let mut donation = Donation::new(0, new.comment, new.full_amount, now)?;

        let mut open: Vec<Project> = db::open_projects(&mut *tx)
            .await?
            .into_iter()
            .map(Project::from)
            .collect();
        let report = distribute(&mut donation, &mut open, now)?;

        for index in report.touched.iter().copied() {
            db::update_project(&mut *tx, &ProjectRecord::from(open[index].clone())).await?;
        }

        let mut record = DonationRecord::from(donation);
        record.id = db::insert_donation(&mut *tx, &record).await?;
        tx.commit().await?;

        if report.is_noop() {
            debug!(donation_id = record.id, "donation created, no open projects");
        } else {
            info!(
                donation_id = record.id,
                transferred = report.transferred,
                spent = record.fully_invested,
                "donation created and spread over open projects"
            );
        }
        Ok(record)
    }

    // ─────────────────────────────────────────────────────────
    // Project lifecycle
    // ─────────────────────────────────────────────────────────

    /// Edit an open project. A closed project is immutable; the target can
    /// never drop below what has already been collected. Lowering the target
    /// to exactly the collected amount closes the project on the spot.
    pub async fn update_project(&self, id: i64, patch: ProjectPatch) -> Result<ProjectRecord> {
        // Closing via the target change mutates funding state, so updates
        // take the same gate as allocation passes.
        let _gate = self.allocation_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let mut record = db::get_project(&mut *tx, id)
            .await?
            .ok_or(TrackerError::ProjectNotFound(id))?;
        if record.fully_invested {
            return Err(TrackerError::ProjectClosed(id));
        }

        if let Some(name) = patch.name {
            validate_name(&name)?;
            match db::project_id_by_name(&mut *tx, &name).await? {
                Some(other) if other != id => return Err(TrackerError::DuplicateName(name)),
                _ => {}
            }
            record.name = name;
        }
        if let Some(description) = patch.description {
            validate_description(&description)?;
            record.description = description;
        }
        if let Some(full_amount) = patch.full_amount {
            if full_amount <= 0 {
                return Err(fundmatch::Error::NonPositiveAmount(full_amount).into());
            }
            if full_amount < record.invested_amount {
                return Err(TrackerError::FullAmountBelowInvested {
                    requested: full_amount,
                    invested: record.invested_amount,
                });
            }
            record.full_amount = full_amount;
            if record.invested_amount == record.full_amount {
                record.fully_invested = true;
                record.close_date = Some(Utc::now());
                info!(project_id = id, "project closed by target reduction");
            }
        }

        db::update_project(&mut *tx, &record).await?;
        tx.commit().await?;
        Ok(record)
    }

    /// Delete a project that has not received any money yet. A funded
    /// project can only run to closure, never disappear.
    pub async fn delete_project(&self, id: i64) -> Result<ProjectRecord> {
        let _gate = self.allocation_gate.lock().await;
        let mut tx = self.pool.begin().await?;

        let record = db::get_project(&mut *tx, id)
            .await?
            .ok_or(TrackerError::ProjectNotFound(id))?;
        if record.invested_amount > 0 {
            return Err(TrackerError::ProjectAlreadyFunded(id));
        }

        db::delete_project(&mut *tx, id).await?;
        tx.commit().await?;
        info!(project_id = id, "project deleted");
        Ok(record)
    }

    // ─────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────

    pub async fn get_project(&self, id: i64) -> Result<ProjectRecord> {
        let mut conn = self.pool.acquire().await?;
        db::get_project(&mut *conn, id)
            .await?
            .ok_or(TrackerError::ProjectNotFound(id))
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
        let mut conn = self.pool.acquire().await?;
        db::list_projects(&mut *conn).await
    }

    pub async fn list_donations(&self) -> Result<Vec<DonationRecord>> {
        let mut conn = self.pool.acquire().await?;
        db::list_donations(&mut *conn).await
    }
}
