//! Read-only page handlers: the public listing and the admin dashboard.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use folio_db::repositories::{ContactRepo, ProjectRepo};

use crate::error::AppResult;
use crate::flash::{clear_flash, read_flash};
use crate::middleware::auth::AdminUser;
use crate::query::PaginationParams;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// Render the public project listing. Reading the page consumes any pending
/// flash cookie.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let projects = ProjectRepo::list(&state.pool, params.offset, params.limit).await?;

    let flash = read_flash(&headers);
    let mut response = Html(views::index_page(&projects, flash.as_ref())).into_response();
    if flash.is_some() {
        clear_flash(&mut response);
    }
    Ok(response)
}

/// GET /admin
///
/// Render the admin dashboard: all projects with delete controls plus all
/// contacts newest-first.
pub async fn admin_dashboard(
    admin: AdminUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let projects = ProjectRepo::list(&state.pool, params.offset, params.limit).await?;
    let contacts = ContactRepo::list(&state.pool, params.offset, params.limit).await?;
    tracing::debug!(admin = %admin.0, projects = projects.len(), contacts = contacts.len(), "Rendering admin dashboard");

    let flash = read_flash(&headers);
    let mut response =
        Html(views::admin_page(&projects, &contacts, flash.as_ref())).into_response();
    if flash.is_some() {
        clear_flash(&mut response);
    }
    Ok(response)
}
