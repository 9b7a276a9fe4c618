//! Admin project mutation: image upload + create, and delete.

use axum::extract::{Multipart, Path, State};
use axum::response::Response;
use folio_core::flash::FlashMessage;
use folio_core::types::DbId;
use folio_core::uploads::{sanitize_filename, validate_image_extension};
use folio_db::models::project::CreateProject;
use folio_db::repositories::ProjectRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::flash::redirect_with_flash;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// POST /admin/projects
///
/// Accepts a multipart form with required `title`, `description`, and `image`
/// fields. The upload is sequenced write-temp -> insert -> rename so a failed
/// insert leaves no visible file and a failed rename leaves no dangling row.
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "description" => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let title = title.ok_or_else(|| AppError::BadRequest("Missing required 'title' field".into()))?;
    let description = description
        .ok_or_else(|| AppError::BadRequest("Missing required 'description' field".into()))?;
    let (original_filename, data) =
        image.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    let filename = destination_filename(&original_filename)?;

    let uploads_dir = state.config.uploads_dir();
    tokio::fs::create_dir_all(&uploads_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    // Stage the payload under a temp name so a failed insert never leaves a
    // file the rendered page could reference.
    let temp_path = uploads_dir.join(format!(".tmp-{}", Uuid::new_v4()));
    tokio::fs::write(&temp_path, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let input = CreateProject {
        title,
        description,
        image_path: format!("uploads/{filename}"),
    };

    let project = match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => project,
        Err(err) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
    };

    let final_path = uploads_dir.join(&filename);
    if let Err(err) = tokio::fs::rename(&temp_path, &final_path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        let _ = ProjectRepo::delete(&state.pool, project.id).await;
        return Err(AppError::InternalError(err.to_string()));
    }

    tracing::info!(
        project_id = project.id,
        title = %project.title,
        image = %project.image_path,
        admin = %admin.0,
        "Project created",
    );

    Ok(redirect_with_flash(
        "/admin",
        &FlashMessage::success("Project created"),
    ))
}

/// GET /admin/delete_project/{id}
///
/// Delete a project by id and redirect to the dashboard. A nonexistent id is
/// a no-op. The stored image file is intentionally left in place.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;

    let flash = if deleted {
        tracing::info!(project_id = id, admin = %admin.0, "Project deleted");
        FlashMessage::success("Project deleted")
    } else {
        FlashMessage::error("Project not found")
    };

    Ok(redirect_with_flash("/admin", &flash))
}

/// Derive the on-disk filename from the client-supplied one.
///
/// The extension must be a supported image format; a filename that sanitizes
/// to nothing but its extension gets a random stem.
fn destination_filename(original: &str) -> Result<String, AppError> {
    let basename = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let ext = validate_image_extension(basename).map_err(AppError::Core)?;

    let raw_stem = basename.rsplit_once('.').map(|(stem, _)| stem).unwrap_or("");
    let stem = sanitize_filename(raw_stem);
    if stem.is_empty() {
        Ok(format!("{}.{ext}", Uuid::new_v4()))
    } else {
        Ok(format!("{stem}.{ext}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_keeps_sanitized_name() {
        assert_eq!(destination_filename("logo.PNG").unwrap(), "logo.png");
        assert_eq!(
            destination_filename("../evil dir/shot.jpg").unwrap(),
            "shot.jpg"
        );
    }

    #[test]
    fn destination_rejects_bad_extension() {
        assert!(destination_filename("payload.exe").is_err());
        assert!(destination_filename("noextension").is_err());
    }

    #[test]
    fn empty_stem_gets_random_name() {
        let name = destination_filename(".png").unwrap();
        assert!(name.ends_with(".png"));
        assert!(name.len() > ".png".len());
    }
}
