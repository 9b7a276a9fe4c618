//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A portfolio entry row from the `projects` table.
///
/// `image_path` is relative to the static asset root (e.g.
/// `uploads/logo.png`, served at `/static/uploads/logo.png`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub image_path: String,
}
