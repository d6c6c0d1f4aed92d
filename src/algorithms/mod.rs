//! Algorithm drills.
//!
//! - `graph` — Dijkstra shortest path
//! - `hanoi` — recursive Tower of Hanoi
//! - `sort` — merge sort
//! - `sudoku` — backtracking Sudoku solver

pub mod graph;
pub mod hanoi;
pub mod sort;
pub mod sudoku;
