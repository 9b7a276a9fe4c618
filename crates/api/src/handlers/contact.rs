//! Public contact submission.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use folio_core::flash::FlashMessage;
use folio_db::models::contact::CreateContact;
use folio_db::repositories::ContactRepo;

use crate::flash::redirect_with_flash;
use crate::state::AppState;

/// POST /submit_contact
///
/// Persist a visitor message and redirect to the public page. A persistence
/// failure is logged and reported via an error flash instead of propagating;
/// the visitor always lands back on `/`. Missing form fields are rejected by
/// the `Form` extractor before this handler runs.
pub async fn submit(State(state): State<AppState>, Form(input): Form<CreateContact>) -> Response {
    match ContactRepo::create(&state.pool, &input).await {
        Ok(contact) => {
            tracing::info!(contact_id = contact.id, name = %contact.name, "Contact message received");
            redirect_with_flash("/", &FlashMessage::success("Message sent!"))
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to store contact message");
            redirect_with_flash("/", &FlashMessage::error("Could not send message"))
        }
    }
}
