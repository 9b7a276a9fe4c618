//! Repository for the `contacts` table.

use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact};
use crate::repositories::{clamp_limit, clamp_offset};

const COLUMNS: &str = "id, name, email, message, created_at";

/// Provides create/list operations for visitor contact messages.
///
/// Contacts are append-only: the exposed interface neither mutates nor
/// deletes them.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact. `created_at` is assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List contacts newest-first within an offset/limit window.
    pub async fn list(
        pool: &PgPool,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC OFFSET $1 LIMIT $2"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(clamp_offset(offset))
            .bind(clamp_limit(limit))
            .fetch_all(pool)
            .await
    }
}
