pub mod counterexample;
pub mod summary;
pub mod verdict;

pub use counterexample::*;
pub use summary::*;
pub use verdict::*;
