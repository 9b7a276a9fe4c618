//! First-run sample data.
//!
//! A fresh deployment renders an empty public page, which looks broken.
//! Seed a few placeholder portfolio entries once, only if the projects table
//! has never been written to.

use sqlx::PgPool;

use crate::models::project::CreateProject;
use crate::repositories::ProjectRepo;

/// Insert sample projects if the table is empty. Idempotent.
pub async fn seed_initial_projects(pool: &PgPool) -> Result<(), sqlx::Error> {
    if ProjectRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let samples = [
        CreateProject {
            title: "Cafe branding".into(),
            description: "Logo and visual identity".into(),
            image_path: "uploads/project1.jpg".into(),
        },
        CreateProject {
            title: "Corporate website".into(),
            description: "Web design and development".into(),
            image_path: "uploads/project2.jpg".into(),
        },
        CreateProject {
            title: "Mobile application".into(),
            description: "UI/UX design".into(),
            image_path: "uploads/project3.jpg".into(),
        },
    ];

    for sample in &samples {
        ProjectRepo::create(pool, sample).await?;
    }
    tracing::info!(count = samples.len(), "Seeded sample projects");
    Ok(())
}
