//! CI gates for smart-contract audit tooling.
//!
//! `counterexample-gate` fails a build when an Echidna report carries
//! counterexamples; `findings-summary` tallies a Slither report by severity and
//! type and fails the build on high-severity findings.

pub mod cli;
pub mod echidna;
pub mod errors;
pub mod models;
pub mod reporting;
pub mod slither;
pub mod utils;
