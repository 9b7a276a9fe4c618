pub mod health;

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::{contact, pages, project};
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                           public project listing
/// POST /submit_contact             create contact, redirect to /
/// GET  /admin                      admin dashboard (basic auth)
/// POST /admin/projects             create project + store image (basic auth)
/// GET  /admin/delete_project/{id}  delete project (basic auth)
/// GET  /health                     liveness probe
/// GET  /static/*                   static assets, incl. uploaded images
/// ```
///
/// `static_dir` is the on-disk root served under `/static`; uploaded project
/// images live in its `uploads/` subdirectory.
pub fn app_routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/submit_contact", post(contact::submit))
        .route("/admin", get(pages::admin_dashboard))
        .route("/admin/projects", post(project::create))
        .route("/admin/delete_project/{id}", get(project::delete))
        .merge(health::router())
        .nest_service("/static", ServeDir::new(static_dir))
}
