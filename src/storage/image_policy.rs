//! Upload acceptance policy for images
//!
//! Pure checks over the declared media type and byte size. No I/O; the
//! asset store is only reached once a file has passed this gate.

use crate::domain::{FieldError, UploadedFile};

/// Maximum accepted upload size: 2 MiB.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

const ACCEPTED_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Validate an uploaded image against the acceptance policy.
///
/// `field` names the form input the error should be keyed to.
pub fn validate_image(
    field: &'static str,
    file: Option<&UploadedFile>,
) -> Result<(), FieldError> {
    let file = match file {
        Some(f) if !f.is_empty() => f,
        _ => return Err(FieldError::new(field, "Please provide a file")),
    };

    if !ACCEPTED_TYPES.contains(&file.content_type.as_str()) {
        return Err(FieldError::new(field, "Content type must be png or jpeg"));
    }

    if file.len() > MAX_IMAGE_BYTES {
        return Err(FieldError::new(field, "File size must be less than 2MB"));
    }

    Ok(())
}
