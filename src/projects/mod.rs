//! Larger certification-style projects.
//!
//! - `arithmetic` — vertical arithmetic formatter
//! - `budget` — category ledger and spend chart
//! - `expenses` — interactive expense tracker
//! - `probability` — hat-drawing experiment
//! - `time_calc` — 12-hour clock arithmetic

pub mod arithmetic;
pub mod budget;
pub mod expenses;
pub mod probability;
pub mod time_calc;
