//! drillbook Library
//!
//! Small, self-contained algorithm, data-structure and text-processing drills,
//! each exposed as a library function and as a typed [`drill::Drill`] for the
//! command line front end.

pub mod algorithms;
pub mod cli;
pub mod config_file;
pub mod drill;
pub mod drills;
pub mod error;
pub mod math;
pub mod projects;
pub mod structures;
pub mod text;
pub mod types;

// Re-export main types for convenience
pub use config_file::DrillConfig;
pub use drill::Drill;
pub use error::{DrillError, Result};
pub use types::{CipherDirection, Concavity, EquationKind, Extremum, Meridian, Operator, Peg, Weekday};

pub use algorithms::graph::{Graph, ShortestPaths};
pub use algorithms::hanoi::{HanoiRun, Towers, solve_hanoi};
pub use algorithms::sort::{merge_sort, merge_sorted};
pub use algorithms::sudoku::{Board, solve_sudoku};
pub use math::equation::{Equation, LinearEquation, QuadraticEquation, solver_report};
pub use math::projectile::{Projectile, TrajectoryGraph};
pub use math::shapes::{Rectangle, Shape, Square};
pub use projects::arithmetic::{ArrangeError, arithmetic_arranger};
pub use projects::budget::{Category, create_spend_chart};
pub use projects::expenses::ExpenseTracker;
pub use projects::probability::{Hat, experiment};
pub use projects::time_calc::add_time;
pub use structures::bst::BinarySearchTree;
pub use structures::vector::{AnyVector, R2Vector, R3Vector, Vector};
pub use text::password::{PasswordPolicy, generate_password};
