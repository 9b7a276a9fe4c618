//! HTTP Basic authentication extractor for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use folio_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated administrator, extracted from `Authorization: Basic` credentials.
///
/// There is no session state: every request presenting this extractor
/// re-runs the constant-time credential gate against the configured pair.
///
/// ```ignore
/// async fn my_handler(admin: AdminUser) -> AppResult<Html<String>> {
///     tracing::info!(admin = %admin.0, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminUser(pub String);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let (username, password) = decode_basic(auth_header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Basic <credentials>".into(),
            ))
        })?;

        let identity = state.config.admin.verify(&username, &password)?;
        Ok(AdminUser(identity))
    }
}

/// Decode a `Basic <base64(user:pass)>` header value into its parts.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_header() {
        // "admin:password"
        let header = format!("Basic {}", STANDARD.encode("admin:password"));
        let (user, pass) = decode_basic(&header).unwrap();
        assert_eq!(user, "admin");
        assert_eq!(pass, "password");
    }

    #[test]
    fn password_may_contain_colons() {
        let header = format!("Basic {}", STANDARD.encode("admin:pa:ss"));
        let (user, pass) = decode_basic(&header).unwrap();
        assert_eq!(user, "admin");
        assert_eq!(pass, "pa:ss");
    }

    #[test]
    fn rejects_non_basic_schemes() {
        assert!(decode_basic("Bearer abc123").is_none());
        assert!(decode_basic("Basic not-base64!").is_none());
    }
}
