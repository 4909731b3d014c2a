pub mod types;
pub mod classification;

pub use types::AuditError;
pub use classification::{ErrorClassification, EXIT_INPUT, EXIT_INTERNAL, EXIT_USAGE};
