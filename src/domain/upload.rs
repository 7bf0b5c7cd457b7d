//! Uploaded file input shape
//!
//! Carries what the HTTP layer extracted from a multipart field. The
//! original file name is only ever used to recover the extension; the
//! stored name is always generated by the asset store.

/// An uploaded file as received from a caller.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name (untrusted, used for its extension only)
    pub file_name: String,
    /// Declared media type, e.g. `image/png`
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
