//! Drill argument structs.
//!
//! - `exercises` — ciphers, validators, algorithms and data structures
//! - `projects` — formatter, shapes, probability, time and budget

pub mod exercises;
pub mod projects;
