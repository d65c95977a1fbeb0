mod types;

pub use types::{StorageError, TransformError, ValidationError};
