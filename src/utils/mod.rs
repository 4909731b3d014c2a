pub mod fs;

pub use fs::{atomic_write, read_json_report};
