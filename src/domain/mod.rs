//! Domain layer - Pure business abstractions
//!
//! No framework dependencies beyond error conversions. Holds the service
//! error taxonomy, the entity lifecycle state machine and the upload
//! input shape shared by the storage and service layers.

pub mod errors;
pub mod lifecycle;
pub mod upload;

pub use errors::{FieldError, FieldErrors, ServiceError};
pub use lifecycle::LifecycleState;
pub use upload::UploadedFile;
