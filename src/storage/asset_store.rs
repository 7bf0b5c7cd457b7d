//! Content-directory asset store
//!
//! Uploaded files are written under `root/<folder>/` with a generated
//! UUID base name; only the extension of the client-supplied name is
//! kept. The returned name is the opaque reference entities persist.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::ServiceError;

/// Folder for slider images, relative to the content root.
pub const SLIDER_FOLDER: &str = "sliders";
/// Folder for book images, relative to the content root.
pub const BOOK_FOLDER: &str = "books";

/// File store rooted at the configured content directory.
///
/// Passed explicitly into services; never looked up through globals.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a stored asset.
    pub fn path_of(&self, folder: &str, asset_ref: &str) -> PathBuf {
        self.root.join(folder).join(asset_ref)
    }

    pub fn exists(&self, folder: &str, asset_ref: &str) -> bool {
        self.path_of(folder, asset_ref).exists()
    }

    /// Write `bytes` under `folder` and return the generated reference.
    ///
    /// The base name of `original_name` is discarded (collision and path
    /// traversal safety); only its extension survives, lowercased. Any
    /// I/O failure is an error: the caller must not persist a reference
    /// to a file that was never written.
    pub fn save(
        &self,
        folder: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, ServiceError> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let asset_ref = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let dir = self.root.join(folder);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(&asset_ref), bytes)?;

        tracing::debug!("Stored asset {}/{} ({} bytes)", folder, asset_ref, bytes.len());
        Ok(asset_ref)
    }

    /// Remove a stored asset. Idempotent and best-effort: a missing file
    /// is a no-op, and an I/O failure is logged but never surfaced, so
    /// deletion can't abort the entity mutation it accompanies.
    pub fn delete(&self, folder: &str, asset_ref: &str) {
        let path = self.path_of(folder, asset_ref);
        if !path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("Failed to delete asset {}/{}: {}", folder, asset_ref, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> AssetStore {
        let root = std::env::temp_dir().join(format!("bookstall-assets-{}", Uuid::new_v4()));
        AssetStore::new(root)
    }

    #[test]
    fn save_generates_fresh_name_and_keeps_extension() {
        let store = temp_store();
        let asset_ref = store.save(SLIDER_FOLDER, "Summer Sale.PNG", b"png-bytes").unwrap();

        assert!(asset_ref.ends_with(".png"));
        assert!(!asset_ref.contains("Summer"));
        assert!(store.exists(SLIDER_FOLDER, &asset_ref));
        assert_eq!(
            fs::read(store.path_of(SLIDER_FOLDER, &asset_ref)).unwrap(),
            b"png-bytes"
        );
    }

    #[test]
    fn save_without_extension_still_stores() {
        let store = temp_store();
        let asset_ref = store.save(BOOK_FOLDER, "cover", b"data").unwrap();
        assert!(!asset_ref.contains('.'));
        assert!(store.exists(BOOK_FOLDER, &asset_ref));
    }

    #[test]
    fn saves_never_collide() {
        let store = temp_store();
        let a = store.save(SLIDER_FOLDER, "img.png", b"a").unwrap();
        let b = store.save(SLIDER_FOLDER, "img.png", b"b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn save_then_delete_round_trip() {
        let store = temp_store();
        let asset_ref = store.save(SLIDER_FOLDER, "banner.jpg", b"jpeg").unwrap();
        assert!(store.exists(SLIDER_FOLDER, &asset_ref));

        store.delete(SLIDER_FOLDER, &asset_ref);
        assert!(!store.exists(SLIDER_FOLDER, &asset_ref));
    }

    #[test]
    fn delete_of_missing_file_is_a_no_op() {
        let store = temp_store();
        // Must not panic or error
        store.delete(SLIDER_FOLDER, "does-not-exist.png");
    }
}
