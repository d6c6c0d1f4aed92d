//! Random password generation with per-class minimums.
//!
//! Each class contributes its minimum number of characters, the rest are
//! drawn uniformly from letters, digits and ASCII punctuation, and the result
//! is shuffled.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

/// Upper bound on generated password length
pub const MAX_PASSWORD_LENGTH: usize = 1024;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Length and minimum character-class counts for a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub length: usize,
    pub digits: usize,
    pub symbols: usize,
    pub uppercase: usize,
    pub lowercase: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            digits: 1,
            symbols: 1,
            uppercase: 1,
            lowercase: 1,
        }
    }
}

impl PasswordPolicy {
    /// Reject policies that can never be satisfied.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(DrillError::validation("password length must be at least 1"));
        }
        if self.length > MAX_PASSWORD_LENGTH {
            return Err(DrillError::validation(format!(
                "password length must be at most {}",
                MAX_PASSWORD_LENGTH
            )));
        }
        let required = [self.digits, self.symbols, self.uppercase, self.lowercase]
            .iter()
            .try_fold(0usize, |sum, n| sum.checked_add(*n));
        let Some(required) = required.filter(|r| *r <= self.length) else {
            return Err(DrillError::validation(format!(
                "policy requires more classified characters than the length of {}",
                self.length
            )));
        };
        tracing::trace!(required, "password policy accepted");
        Ok(())
    }

    /// Whether a candidate meets every minimum
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        let count = |pred: fn(&char) -> bool| password.chars().filter(pred).count();

        count(char::is_ascii_digit) >= self.digits
            && count(char::is_ascii_punctuation) >= self.symbols
            && count(char::is_ascii_uppercase) >= self.uppercase
            && count(char::is_ascii_lowercase) >= self.lowercase
    }
}

/// Generate a password for `policy` using the given random source.
pub fn generate_password<R: Rng>(policy: &PasswordPolicy, rng: &mut R) -> Result<String> {
    policy.validate()?;

    let alphabet: Vec<char> = LOWERCASE
        .chars()
        .chain(UPPERCASE.chars())
        .chain(DIGITS.chars())
        .chain(SYMBOLS.chars())
        .collect();
    let classes = [
        (DIGITS, policy.digits),
        (SYMBOLS, policy.symbols),
        (UPPERCASE, policy.uppercase),
        (LOWERCASE, policy.lowercase),
    ];

    let mut chars: Vec<char> = Vec::with_capacity(policy.length);
    for (class, minimum) in classes {
        let class: Vec<char> = class.chars().collect();
        chars.extend((0..minimum).map(|_| class[rng.random_range(0..class.len())]));
    }
    while chars.len() < policy.length {
        chars.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
    chars.shuffle(rng);

    let password: String = chars.into_iter().collect();
    tracing::debug!(length = policy.length, "password generated");
    Ok(password)
}

/// Generate a password with the thread-local random source.
pub fn generate_password_default(policy: &PasswordPolicy) -> Result<String> {
    generate_password(policy, &mut rand::rng())
}
