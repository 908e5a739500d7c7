//! Database layer — migrations and queries.
//!
//! Every query that takes part in an allocation pass accepts a
//! `&mut SqliteConnection` so the caller can run the whole pass — open-set
//! read, inserts, touched-row writebacks — on one transaction.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::config::Config;
use crate::errors::Result;
use crate::models::{DonationRecord, ProjectRecord};

/// Establish a SQLite connection pool and run pending migrations.
pub async fn init_pool(config: &Config) -> Result<SqlitePool> {
    // Make sure the file is created if it doesn't exist yet.
    let url = if config.database_url.starts_with("sqlite:") {
        config.database_url.clone()
    } else {
        format!("sqlite:{}", config.database_url)
    };
    let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied successfully");
    Ok(pool)
}

// ─────────────────────────────────────────────────────────
// Open-set queries (the engine's view of the store)
// ─────────────────────────────────────────────────────────

/// Every open project, oldest first. Insertion id breaks create_date ties
/// so first-come-first-served stays deterministic.
pub async fn open_projects(conn: &mut SqliteConnection) -> Result<Vec<ProjectRecord>> {
    let rows = sqlx::query_as::<_, ProjectRecord>(
        r#"
        SELECT id, name, description, full_amount, invested_amount,
               fully_invested, create_date, close_date
        FROM   project
        WHERE  fully_invested = 0
        ORDER  BY create_date ASC, id ASC
        "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Every open donation, oldest first.
pub async fn open_donations(conn: &mut SqliteConnection) -> Result<Vec<DonationRecord>> {
    let rows = sqlx::query_as::<_, DonationRecord>(
        r#"
        SELECT id, comment, full_amount, invested_amount,
               fully_invested, create_date, close_date
        FROM   donation
        WHERE  fully_invested = 0
        ORDER  BY create_date ASC, id ASC
        "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

// ─────────────────────────────────────────────────────────
// Writes
// ─────────────────────────────────────────────────────────

/// Insert a project row and return its assigned id.
pub async fn insert_project(
    conn: &mut SqliteConnection,
    record: &ProjectRecord,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO project
            (name, description, full_amount, invested_amount, fully_invested,
             create_date, close_date)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
    )
    .bind(&record.name)
    .bind(&record.description)
    .bind(record.full_amount)
    .bind(record.invested_amount)
    .bind(record.fully_invested)
    .bind(record.create_date)
    .bind(record.close_date)
    .execute(conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a donation row and return its assigned id.
pub async fn insert_donation(
    conn: &mut SqliteConnection,
    record: &DonationRecord,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO donation
            (comment, full_amount, invested_amount, fully_invested,
             create_date, close_date)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&record.comment)
    .bind(record.full_amount)
    .bind(record.invested_amount)
    .bind(record.fully_invested)
    .bind(record.create_date)
    .bind(record.close_date)
    .execute(conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Write back every mutable field of a project row.
pub async fn update_project(conn: &mut SqliteConnection, record: &ProjectRecord) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE project
        SET    name = ?2, description = ?3, full_amount = ?4,
               invested_amount = ?5, fully_invested = ?6, close_date = ?7
        WHERE  id = ?1
        "#,
    )
    .bind(record.id)
    .bind(&record.name)
    .bind(&record.description)
    .bind(record.full_amount)
    .bind(record.invested_amount)
    .bind(record.fully_invested)
    .bind(record.close_date)
    .execute(conn)
    .await?;
    Ok(())
}

/// Write back every mutable field of a donation row.
pub async fn update_donation(conn: &mut SqliteConnection, record: &DonationRecord) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE donation
        SET    comment = ?2, invested_amount = ?3, fully_invested = ?4,
               close_date = ?5
        WHERE  id = ?1
        "#,
    )
    .bind(record.id)
    .bind(&record.comment)
    .bind(record.invested_amount)
    .bind(record.fully_invested)
    .bind(record.close_date)
    .execute(conn)
    .await?;
    Ok(())
}

/// Delete a project row.
pub async fn delete_project(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM project WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Reads
// ─────────────────────────────────────────────────────────

/// Fetch one project by id.
pub async fn get_project(conn: &mut SqliteConnection, id: i64) -> Result<Option<ProjectRecord>> {
    let row = sqlx::query_as::<_, ProjectRecord>(
        r#"
        SELECT id, name, description, full_amount, invested_amount,
               fully_invested, create_date, close_date
        FROM   project
        WHERE  id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}

/// Look up a project id by its unique name.
pub async fn project_id_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<i64>> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM project WHERE name = ?1")
        .bind(name)
        .fetch_optional(conn)
        .await?;
    Ok(row.map(|(id,)| id))
}

/// Every project, in creation order.
pub async fn list_projects(conn: &mut SqliteConnection) -> Result<Vec<ProjectRecord>> {
    let rows = sqlx::query_as::<_, ProjectRecord>(
        r#"
        SELECT id, name, description, full_amount, invested_amount,
               fully_invested, create_date, close_date
        FROM   project
        ORDER  BY id ASC
        "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Every donation, in creation order.
pub async fn list_donations(conn: &mut SqliteConnection) -> Result<Vec<DonationRecord>> {
    let rows = sqlx::query_as::<_, DonationRecord>(
        r#"
        SELECT id, comment, full_amount, invested_amount,
               fully_invested, create_date, close_date
        FROM   donation
        ORDER  BY id ASC
        "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
