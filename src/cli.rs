use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::algorithms::hanoi::MAX_DISKS;
use crate::structures::vector::AnyVector;
use crate::types::CipherDirection;

/// drillbook - Algorithm and string-processing drills
#[derive(Parser)]
#[command(name = "drillbook")]
#[command(about = "Run small algorithm, data-structure and text-processing drills")]
#[command(version)]
pub struct Cli {
    /// JSON file with drill defaults (see `validate`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a drill defaults file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Standalone exercises
    Exercise {
        #[command(subcommand)]
        exercise: ExerciseCommands,
    },
    /// Larger projects
    Project {
        #[command(subcommand)]
        project: ProjectCommands,
    },
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// Caesar or Vigenère cipher
    Cipher {
        #[command(subcommand)]
        cipher: CipherCommands,
    },
    /// Check a card number with the Luhn algorithm
    Luhn {
        /// Card number, dashes and spaces allowed
        card_number: String,
    },
    /// Convert camelCase or PascalCase to snake_case
    SnakeCase {
        input: String,
    },
    /// Generate a random password
    Password {
        /// Total length (default from config)
        #[arg(short, long)]
        length: Option<usize>,
        /// Minimum digits
        #[arg(long)]
        digits: Option<usize>,
        /// Minimum punctuation characters
        #[arg(long)]
        symbols: Option<usize>,
        /// Minimum uppercase letters
        #[arg(long)]
        uppercase: Option<usize>,
        /// Minimum lowercase letters
        #[arg(long)]
        lowercase: Option<usize>,
        /// Seed for a reproducible password
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive expense tracker
    Expenses {
        /// JSON ledger to load and save (default from config)
        #[arg(short, long)]
        ledger: Option<PathBuf>,
    },
    /// Dijkstra shortest paths
    ShortestPath {
        /// JSON graph file; the built-in graph when omitted
        #[arg(short, long)]
        graph: Option<PathBuf>,
        /// Start node
        #[arg(short, long, default_value = "A")]
        start: String,
        /// Only report this node
        #[arg(short, long)]
        target: Option<String>,
    },
    /// Tower of Hanoi
    Hanoi {
        /// Number of disks (default from config)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_DISKS as i64))]
        disks: Option<u32>,
    },
    /// Merge sort a list of numbers
    MergeSort {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Backtracking Sudoku solver
    Sudoku {
        /// Puzzle file (81 cells, 0 . or * for blanks); the built-in puzzle when omitted
        puzzle: Option<PathBuf>,
    },
    /// Binary search tree insert, search and delete
    Bst {
        /// Keys to insert; the demo keys when omitted
        #[arg(allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Keys to look up
        #[arg(short, long, allow_negative_numbers = true)]
        search: Vec<i64>,
        /// Keys to delete
        #[arg(short, long, allow_negative_numbers = true)]
        delete: Vec<i64>,
    },
    /// R² / R³ vector algebra
    Vector {
        /// First vector, e.g. "2,3" or "5,7,-8"
        #[arg(allow_hyphen_values = true)]
        first: AnyVector,
        /// Second vector
        #[arg(allow_hyphen_values = true)]
        second: AnyVector,
        /// Scalar multiplier
        #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
        scalar: f64,
    },
    /// Solve a linear (a b) or quadratic (a b c) equation
    Equation {
        #[arg(required = true, num_args = 2..=3, allow_negative_numbers = true)]
        coefficients: Vec<f64>,
    },
    /// Projectile trajectory table and plot
    Projectile {
        /// Initial speed in m/s (default from config)
        #[arg(long)]
        speed: Option<f64>,
        /// Initial height in m (default from config)
        #[arg(long)]
        height: Option<f64>,
        /// Launch angle in degrees (default from config)
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<f64>,
    },
}

#[derive(Subcommand)]
pub enum CipherCommands {
    /// Shift every letter by a fixed offset
    Caesar {
        message: String,
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Shift letters by a repeating key
    Vigenere {
        message: String,
        #[arg(short, long)]
        key: String,
        /// encrypt or decrypt
        #[arg(short, long, default_value = "encrypt")]
        direction: CipherDirection,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Arrange arithmetic problems vertically
    Arithmetic {
        /// Problems such as "32 + 698"
        #[arg(required = true)]
        problems: Vec<String>,
        /// Show the answer row
        #[arg(short = 'a', long)]
        show_answers: bool,
    },
    /// Rectangle and square calculator
    Shapes {
        #[arg(long, default_value_t = 10)]
        width: u32,
        #[arg(long, default_value_t = 5)]
        height: u32,
        #[arg(long, default_value_t = 3)]
        side: u32,
    },
    /// Hat-drawing probability experiment
    Probability {
        /// Balls in the hat as color=count; the sample hat when omitted
        #[arg(long = "ball", value_parser = parse_color_count)]
        balls: Vec<(String, usize)>,
        /// Expected balls as color=count
        #[arg(long = "expect", value_parser = parse_color_count)]
        expected: Vec<(String, usize)>,
        /// Balls drawn per experiment
        #[arg(long, default_value_t = 7)]
        draws: usize,
        /// Number of experiments (default from config)
        #[arg(long)]
        experiments: Option<usize>,
        /// RNG seed (default from config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Add a duration to a 12-hour clock time
    Time {
        /// Start time, e.g. "3:30 PM"
        start: String,
        /// Duration, e.g. "2:12"
        duration: String,
        /// Starting weekday
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Budget ledger and spend chart
    Budget {
        /// JSON list of categories; the sample categories when omitted
        #[arg(short, long)]
        ledger: Option<PathBuf>,
        /// Save the categories to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
}

/// Parse `red=3` into a color and a count
pub fn parse_color_count(s: &str) -> Result<(String, usize), String> {
    let (color, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLOR=COUNT, got '{}'", s))?;
    let color = color.trim();
    if color.is_empty() {
        return Err(format!("missing color in '{}'", s));
    }
    let count = count
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid count in '{}': {}", s, e))?;
    Ok((color.to_string(), count))
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
