//! Monte Carlo estimate of drawing given balls from a hat.

use std::collections::HashMap;

use rand::Rng;

use crate::error::{DrillError, Result};

/// Most balls a single hat may hold
pub const MAX_HAT_BALLS: usize = 10_000;

/// A hat full of colored balls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hat {
    contents: Vec<String>,
}

impl Hat {
    /// Fill a hat from `(color, count)` pairs. The hat must not be empty.
    pub fn new<S: AsRef<str>>(balls: &[(S, usize)]) -> Result<Self> {
        let total = balls
            .iter()
            .try_fold(0usize, |sum, (_, count)| sum.checked_add(*count))
            .filter(|total| *total <= MAX_HAT_BALLS);
        if total.is_none() {
            return Err(DrillError::validation(format!(
                "a hat holds at most {} balls",
                MAX_HAT_BALLS
            )));
        }

        let contents: Vec<String> = balls
            .iter()
            .flat_map(|(color, count)| std::iter::repeat_n(color.as_ref().to_string(), *count))
            .collect();

        if contents.is_empty() {
            return Err(DrillError::validation("a hat needs at least one ball"));
        }
        Ok(Self { contents })
    }

    /// Balls still in the hat
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Remove `count` balls at random. Asking for at least as many balls as
    /// the hat holds empties it.
    pub fn draw<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<String> {
        if count >= self.contents.len() {
            return std::mem::take(&mut self.contents);
        }

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = rng.random_range(0..self.contents.len());
            drawn.push(self.contents.remove(index));
        }
        drawn
    }
}

/// Fraction of `experiments` runs in which drawing `draws` balls from a
/// fresh copy of `hat` yields at least the `expected` count of every color.
pub fn experiment<S, R>(
    hat: &Hat,
    expected: &[(S, usize)],
    draws: usize,
    experiments: usize,
    rng: &mut R,
) -> Result<f64>
where
    S: AsRef<str>,
    R: Rng,
{
    if experiments == 0 {
        return Err(DrillError::validation("experiments must be at least 1"));
    }

    let mut successes = 0usize;
    for _ in 0..experiments {
        let mut trial = hat.clone();
        let drawn = trial.draw(draws, rng);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for ball in &drawn {
            *counts.entry(ball.as_str()).or_insert(0) += 1;
        }

        let hit = expected
            .iter()
            .all(|(color, want)| counts.get(color.as_ref()).copied().unwrap_or(0) >= *want);
        if hit {
            successes += 1;
        }
    }

    let probability = successes as f64 / experiments as f64;
    tracing::debug!(experiments, successes, "probability experiment finished");
    Ok(probability)
}
