//! Typed arguments for the standalone exercises.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithms::graph::Graph;
use crate::algorithms::hanoi::solve_hanoi;
use crate::algorithms::sort::merge_sorted;
use crate::algorithms::sudoku::{Board, solve_sudoku};
use crate::drill::Drill;
use crate::error::Result;
use crate::math::equation::{from_coefficients, solver_report};
use crate::math::projectile::{Projectile, TrajectoryGraph};
use crate::projects::expenses::{ExpenseTracker, run_interactive};
use crate::structures::bst::BinarySearchTree;
use crate::structures::vector::{AnyVector, R3Vector, Vector};
use crate::text::case::to_snake_case;
use crate::text::cipher::{caesar, vigenere};
use crate::text::luhn::verify_card_number;
use crate::text::password::{PasswordPolicy, generate_password, generate_password_default};
use crate::types::CipherDirection;

/// Keys inserted by the BST demo
pub const DEMO_BST_KEYS: [i64; 13] = [2, 89, 50, 30, 20, 40, 70, 4, 67, 100, 60, 80, 500];

/// `[a, b, c]` using each item's `Display`
pub(crate) fn bracketed<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Caesar shift of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarArgs {
    pub message: String,
    pub offset: i32,
}

impl Drill for CaesarArgs {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn run(&self) -> Result<String> {
        Ok(caesar(&self.message, self.offset))
    }
}

/// Vigenère encryption or decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereArgs {
    pub message: String,
    pub key: String,
    pub direction: CipherDirection,
}

impl Drill for VigenereArgs {
    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn run(&self) -> Result<String> {
        vigenere(&self.message, &self.key, self.direction)
    }
}

/// Luhn check of a card number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuhnArgs {
    pub card_number: String,
}

impl Drill for LuhnArgs {
    fn name(&self) -> &'static str {
        "luhn"
    }

    fn run(&self) -> Result<String> {
        let verdict = if verify_card_number(&self.card_number)? { "VALID!" } else { "INVALID!" };
        Ok(verdict.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeCaseArgs {
    pub input: String,
}

impl Drill for SnakeCaseArgs {
    fn name(&self) -> &'static str {
        "snake-case"
    }

    fn run(&self) -> Result<String> {
        Ok(to_snake_case(&self.input))
    }
}

/// Password generation, reproducible when seeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordArgs {
    pub policy: PasswordPolicy,
    pub seed: Option<u64>,
}

impl Drill for PasswordArgs {
    fn name(&self) -> &'static str {
        "password"
    }

    fn run(&self) -> Result<String> {
        match self.seed {
            Some(seed) => generate_password(&self.policy, &mut StdRng::seed_from_u64(seed)),
            None => generate_password_default(&self.policy),
        }
    }
}

/// Interactive expense tracker on stdin/stdout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpensesArgs {
    /// Ledger loaded before and saved after the session
    pub ledger: Option<PathBuf>,
}

impl Drill for ExpensesArgs {
    fn name(&self) -> &'static str {
        "expenses"
    }

    fn run(&self) -> Result<String> {
        let mut tracker = match &self.ledger {
            Some(path) => ExpenseTracker::load_from_file(path)?,
            None => ExpenseTracker::new(),
        };

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_interactive(&mut tracker, stdin.lock(), &mut stdout)?;
        stdout.flush()?;

        match &self.ledger {
            Some(path) => {
                tracker.save_to_file(path)?;
                Ok(format!("Saved {} expenses to {}", tracker.expenses.len(), path.display()))
            }
            None => Ok(String::new()),
        }
    }
}

/// Dijkstra over the demo graph or a JSON graph file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathArgs {
    pub graph: Option<PathBuf>,
    pub start: String,
    pub target: Option<String>,
}

impl Drill for ShortestPathArgs {
    fn name(&self) -> &'static str {
        "shortest-path"
    }

    fn run(&self) -> Result<String> {
        let graph = match &self.graph {
            Some(path) => Graph::load_from_file(path)?,
            None => Graph::demo(),
        };
        let paths = graph.shortest_path(&self.start)?;
        paths.report(self.target.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanoiArgs {
    pub disks: u32,
}

impl Drill for HanoiArgs {
    fn name(&self) -> &'static str {
        "hanoi"
    }

    fn run(&self) -> Result<String> {
        let run = solve_hanoi(self.disks)?;
        let mut out = String::new();
        for (step, snapshot) in run.moves.iter().zip(&run.snapshots) {
            let _ = writeln!(out, "{:<16}{}", step.to_string(), snapshot);
        }
        let _ = write!(out, "Solved {} disks in {} moves", self.disks, run.moves.len());
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeSortArgs {
    pub values: Vec<f64>,
}

impl Drill for MergeSortArgs {
    fn name(&self) -> &'static str {
        "merge-sort"
    }

    fn run(&self) -> Result<String> {
        Ok(bracketed(merge_sorted(self.values.clone())))
    }
}

/// Solve a puzzle file, or the built-in puzzle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SudokuArgs {
    pub puzzle: Option<PathBuf>,
}

impl Drill for SudokuArgs {
    fn name(&self) -> &'static str {
        "sudoku"
    }

    fn run(&self) -> Result<String> {
        let board: Board = match &self.puzzle {
            Some(path) => fs::read_to_string(path)?.parse()?,
            None => Board::demo(),
        };
        let solved = solve_sudoku(&board)?;
        Ok(format!("Puzzle to solve:\n{}\nSolved puzzle:\n{}", board, solved))
    }
}

/// Build a tree, then search and delete keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BstArgs {
    pub keys: Vec<i64>,
    pub search: Vec<i64>,
    pub delete: Vec<i64>,
}

impl Default for BstArgs {
    fn default() -> Self {
        Self {
            keys: DEMO_BST_KEYS.to_vec(),
            search: vec![80],
            delete: vec![67],
        }
    }
}

impl Drill for BstArgs {
    fn name(&self) -> &'static str {
        "bst"
    }

    fn run(&self) -> Result<String> {
        let mut tree: BinarySearchTree<i64> = self.keys.iter().copied().collect();
        let mut out = String::new();

        let search_line = |tree: &BinarySearchTree<i64>, key: &i64| match tree.search(key) {
            Some(node) => format!("Search for {}: {}", key, node),
            None => format!("Search for {}: None", key),
        };

        for key in &self.search {
            let _ = writeln!(out, "{}", search_line(&tree, key));
        }
        let _ = write!(out, "In-order traversal: {}", bracketed(tree.inorder_traversal()));

        for key in &self.delete {
            if !tree.delete(key) {
                tracing::debug!(key, "key not in tree");
            }
            let _ = write!(out, "\n{}", search_line(&tree, key));
            let _ = write!(
                out,
                "\nIn-order traversal after deleting {}: {}",
                key,
                bracketed(tree.inorder_traversal())
            );
        }
        Ok(out)
    }
}

/// Vector algebra on two vectors and a scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorArgs {
    pub first: AnyVector,
    pub second: AnyVector,
    pub scalar: f64,
}

fn describe<V>(v: V, w: V, scalar: f64) -> String
where
    V: Vector + fmt::Display + PartialEq,
    V: std::ops::Add<Output = V> + std::ops::Sub<Output = V> + std::ops::Mul<Output = f64>,
    V: std::ops::Mul<f64, Output = V>,
{
    let mut out = String::new();
    let _ = writeln!(out, "v = {}    {}", v, v.repr());
    let _ = writeln!(out, "w = {}    {}", w, w.repr());
    let _ = writeln!(out, "|v| = {:.3}, |w| = {:.3}", v.norm(), w.norm());
    let _ = writeln!(out, "v == w: {}", v == w);
    let ordering = match v.cmp_norm(&w) {
        Some(std::cmp::Ordering::Less) => "shorter than",
        Some(std::cmp::Ordering::Greater) => "longer than",
        Some(std::cmp::Ordering::Equal) => "as long as",
        None => "incomparable with",
    };
    let _ = writeln!(out, "v is {} w", ordering);
    let _ = writeln!(out, "v + w = {}", v + w);
    let _ = writeln!(out, "v - w = {}", v - w);
    let _ = writeln!(out, "v * w = {}", v * w);
    let _ = write!(out, "v * {} = {}", scalar, v * scalar);
    out
}

impl Drill for VectorArgs {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn run(&self) -> Result<String> {
        let out = match (self.first, self.second) {
            (AnyVector::R2(v), AnyVector::R2(w)) => describe(v, w, self.scalar),
            (first, second) => {
                // Mixed dimensions are compared in R³.
                let lift = |a: AnyVector| match a {
                    AnyVector::R2(v) => R3Vector::from(v),
                    AnyVector::R3(v) => v,
                };
                let (v, w) = (lift(first), lift(second));
                format!("{}\nv x w = {}", describe(v, w, self.scalar), v.cross(&w))
            }
        };
        Ok(out)
    }
}

/// Solve a linear or quadratic equation from its coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct EquationArgs {
    pub coefficients: Vec<f64>,
}

impl Drill for EquationArgs {
    fn name(&self) -> &'static str {
        "equation"
    }

    fn run(&self) -> Result<String> {
        let equation = from_coefficients(&self.coefficients)?;
        Ok(solver_report(equation.as_ref()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileArgs {
    pub speed: f64,
    pub height: f64,
    pub angle: f64,
}

impl Drill for ProjectileArgs {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn run(&self) -> Result<String> {
        let projectile = Projectile::new(self.speed, self.height, self.angle)?;
        if !projectile.fits_plot() {
            tracing::debug!(displacement = projectile.displacement(), "trajectory too large to plot");
            return Ok(format!("{}\nToo big for table and plot.", projectile));
        }
        let graph = TrajectoryGraph::new(projectile.coordinates()?);
        Ok(format!(
            "{}{}{}",
            projectile,
            graph.coordinates_table(),
            graph.trajectory()
        ))
    }
}
