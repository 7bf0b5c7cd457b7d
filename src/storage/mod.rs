//! File-backed asset storage and upload policy

pub mod asset_store;
pub mod image_policy;

pub use asset_store::{AssetStore, BOOK_FOLDER, SLIDER_FOLDER};
pub use image_policy::{validate_image, MAX_IMAGE_BYTES};
