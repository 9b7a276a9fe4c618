//! Upload filename sanitization and extension validation.

use crate::error::CoreError;

/// Image extensions accepted for project uploads.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Reduce a client-supplied filename to a safe basename.
///
/// Strips any path components (both `/` and `\` separators), then keeps only
/// ASCII alphanumerics, `.`, `-`, and `_`; everything else becomes `_`.
/// Leading dots are dropped so the result is never a hidden file or a
/// traversal fragment.
pub fn sanitize_filename(original: &str) -> String {
    let basename = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}

/// Validate that `filename` carries a supported image extension.
///
/// Returns the lowercased extension on success.
pub fn validate_image_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported image format '.{ext}'. Supported: {SUPPORTED_IMAGE_EXTENSIONS:?}"
        )))
    }
}
