//! Typed arguments for the larger projects.

use std::fmt::Write as _;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::drill::Drill;
use crate::error::Result;
use crate::math::shapes::{Rectangle, Shape, Square};
use crate::projects::arithmetic::arithmetic_arranger;
use crate::projects::budget::{create_spend_chart, demo_categories, load_categories, save_categories};
use crate::projects::probability::{Hat, experiment};
use crate::projects::time_calc::add_time;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticArgs {
    pub problems: Vec<String>,
    pub show_answers: bool,
}

impl Drill for ArithmeticArgs {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn run(&self) -> Result<String> {
        Ok(arithmetic_arranger(&self.problems, self.show_answers)?)
    }
}

/// Measure a rectangle and a square, and how often one fits in the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapesArgs {
    pub width: u32,
    pub height: u32,
    pub side: u32,
}

fn measurements(shape: &dyn Shape) -> String {
    format!(
        "area: {}\nperimeter: {}\ndiagonal: {:.3}\n{}",
        shape.area(),
        shape.perimeter(),
        shape.diagonal(),
        shape.picture()
    )
}

impl Drill for ShapesArgs {
    fn name(&self) -> &'static str {
        "shapes"
    }

    fn run(&self) -> Result<String> {
        let rect = Rectangle::new(self.width, self.height);
        let square = Square::new(self.side);

        let mut out = String::new();
        let _ = writeln!(out, "{}\n{}", rect, measurements(&rect).trim_end());
        let _ = writeln!(out, "{}\n{}", square, measurements(&square).trim_end());
        let _ = write!(out, "{} fits {} time(s) in {}", square, rect.amount_inside(&square), rect);
        Ok(out)
    }
}

/// Monte Carlo estimate for drawing balls from a hat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityArgs {
    pub hat: Vec<(String, usize)>,
    pub expected: Vec<(String, usize)>,
    pub draws: usize,
    pub experiments: usize,
    pub seed: Option<u64>,
}

impl Default for ProbabilityArgs {
    fn default() -> Self {
        Self {
            hat: vec![("black".into(), 5), ("red".into(), 7), ("green".into(), 6)],
            expected: vec![("red".into(), 3), ("green".into(), 4)],
            draws: 7,
            experiments: 2000,
            seed: None,
        }
    }
}

impl Drill for ProbabilityArgs {
    fn name(&self) -> &'static str {
        "probability"
    }

    fn run(&self) -> Result<String> {
        let hat = Hat::new(&self.hat)?;
        let probability = match self.seed {
            Some(seed) => experiment(
                &hat,
                &self.expected,
                self.draws,
                self.experiments,
                &mut StdRng::seed_from_u64(seed),
            )?,
            None => experiment(&hat, &self.expected, self.draws, self.experiments, &mut rand::rng())?,
        };
        Ok(format!("Probability: {}", probability))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeArgs {
    pub start: String,
    pub duration: String,
    pub day: Option<String>,
}

impl Drill for TimeArgs {
    fn name(&self) -> &'static str {
        "time"
    }

    fn run(&self) -> Result<String> {
        add_time(&self.start, &self.duration, self.day.as_deref())
    }
}

/// Print budget categories and their spend chart
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetArgs {
    /// Categories to load; the demo categories when unset
    pub ledger: Option<PathBuf>,
    /// Where to write the categories that were shown
    pub save: Option<PathBuf>,
}

impl Drill for BudgetArgs {
    fn name(&self) -> &'static str {
        "budget"
    }

    fn run(&self) -> Result<String> {
        let categories = match &self.ledger {
            Some(path) => load_categories(path)?,
            None => demo_categories(),
        };

        let mut out = String::new();
        for category in &categories {
            let _ = writeln!(out, "{}\n", category);
        }
        out.push_str(&create_spend_chart(&categories)?);

        if let Some(path) = &self.save {
            save_categories(path, &categories)?;
            tracing::info!(path = %path.display(), "budget saved");
        }
        Ok(out)
    }
}
