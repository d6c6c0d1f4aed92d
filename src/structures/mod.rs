//! Data-structure drills.
//!
//! - `bst` — binary search tree
//! - `vector` — 2D/3D vector algebra

pub mod bst;
pub mod vector;
