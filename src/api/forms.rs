//! Multipart form extraction
//!
//! Reads an entire multipart request into memory: text fields by name,
//! file fields as [`UploadedFile`]s. Uploads are small (the image
//! policy caps them at 2 MiB) so buffering is fine.

use axum::extract::Multipart;

use crate::domain::UploadedFile;

#[derive(Debug, Default)]
pub struct FormData {
    fields: Vec<(String, String)>,
    files: Vec<(String, UploadedFile)>,
}

impl FormData {
    pub async fn read(multipart: &mut Multipart) -> Result<Self, String> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| format!("Malformed multipart request: {}", e))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name() {
                let file_name = file_name.to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read upload: {}", e))?;

                // Browsers send an empty part for an untouched file input
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }

                form.files.push((
                    name,
                    UploadedFile::new(file_name, content_type, bytes.to_vec()),
                ));
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read field: {}", e))?;
                form.fields.push((name, value));
            }
        }

        Ok(form)
    }

    /// Text field value; empty string when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    /// Text field value, `None` when absent or blank.
    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// First file uploaded under `name`.
    pub fn file(&self, name: &str) -> Option<UploadedFile> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.clone())
    }

    /// All files uploaded under `name`, in request order.
    pub fn files(&self, name: &str) -> Vec<UploadedFile> {
        self.files
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, f)| f.clone())
            .collect()
    }
}
