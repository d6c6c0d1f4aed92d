//! Arithmetic formatter: stacks addition and subtraction problems side by
//! side, the way they are written on paper.

use std::str::FromStr;

use thiserror::Error;

use crate::types::Operator;

/// Most problems arranged at once
pub const MAX_PROBLEMS: usize = 5;
/// Most digits in a single operand
pub const MAX_DIGITS: usize = 4;

const SEPARATOR: &str = "    ";

/// Formatter errors. The messages are printed verbatim to users.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeError {
    #[error("Error: Too many problems.")]
    TooManyProblems,

    #[error("Error: Invalid problem format")]
    InvalidFormat,

    #[error("Error: Operator must be '+' or '-'.")]
    InvalidOperator,

    #[error("Error: Numbers must only contain digits.")]
    NonDigit,

    #[error("Error: Numbers cannot be more than four digits.")]
    TooManyDigits,
}

/// One validated problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub first: String,
    pub operator: Operator,
    pub second: String,
}

impl Problem {
    /// Column width: the longest operand plus operator and space
    pub fn width(&self) -> usize {
        self.first.len().max(self.second.len()) + 2
    }

    pub fn answer(&self) -> i64 {
        // Both operands are at most four ASCII digits.
        let first = self.first.parse().unwrap_or(0);
        let second = self.second.parse().unwrap_or(0);
        self.operator.apply(first, second)
    }
}

impl FromStr for Problem {
    type Err = ArrangeError;

    fn from_str(s: &str) -> Result<Self, ArrangeError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [first, operator, second] = parts[..] else {
            return Err(ArrangeError::InvalidFormat);
        };

        let operator = Operator::from_str(operator).map_err(|_| ArrangeError::InvalidOperator)?;

        let is_number = |n: &str| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit());
        if !is_number(first) || !is_number(second) {
            return Err(ArrangeError::NonDigit);
        }
        if first.len() > MAX_DIGITS || second.len() > MAX_DIGITS {
            return Err(ArrangeError::TooManyDigits);
        }

        Ok(Self {
            first: first.to_string(),
            operator,
            second: second.to_string(),
        })
    }
}

/// Arrange up to five problems vertically, optionally with their answers.
///
/// The result has no trailing newline.
pub fn arithmetic_arranger<S: AsRef<str>>(problems: &[S], show_answers: bool) -> Result<String, ArrangeError> {
    if problems.len() > MAX_PROBLEMS {
        return Err(ArrangeError::TooManyProblems);
    }

    let parsed = problems
        .iter()
        .map(|p| p.as_ref().parse::<Problem>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut top = Vec::with_capacity(parsed.len());
    let mut bottom = Vec::with_capacity(parsed.len());
    let mut dashes = Vec::with_capacity(parsed.len());
    let mut answers = Vec::with_capacity(parsed.len());

    for problem in &parsed {
        let width = problem.width();
        top.push(format!("{:>width$}", problem.first));
        bottom.push(format!("{} {:>w$}", problem.operator, problem.second, w = width - 2));
        dashes.push("-".repeat(width));
        answers.push(format!("{:>width$}", problem.answer()));
    }

    let mut rows = vec![top.join(SEPARATOR), bottom.join(SEPARATOR), dashes.join(SEPARATOR)];
    if show_answers {
        rows.push(answers.join(SEPARATOR));
    }
    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_problems() {
        assert_eq!(
            arithmetic_arranger(&["3801 - 2", "123 + 49"], false).unwrap(),
            "  3801      123\n-    2    +  49\n------    -----"
        );
    }

    #[test]
    fn test_long_second_operand() {
        assert_eq!(
            arithmetic_arranger(&["1 + 2", "1 - 9380"], false).unwrap(),
            "  1         1\n+ 2    - 9380\n---    ------"
        );
    }

    #[test]
    fn test_four_problems() {
        assert_eq!(
            arithmetic_arranger(&["3 + 855", "3801 - 2", "45 + 43", "123 + 49"], false).unwrap(),
            "    3      3801      45      123\n+ 855    -    2    + 43    +  49\n-----    ------    ----    -----"
        );
    }

    #[test]
    fn test_five_problems() {
        assert_eq!(
            arithmetic_arranger(&["11 + 4", "3801 - 2999", "1 + 2", "123 + 49", "1 - 9380"], false).unwrap(),
            "  11      3801      1      123         1\n+  4    - 2999    + 2    +  49    - 9380\n----    ------    ---    -----    ------"
        );
    }

    #[test]
    fn test_too_many_problems() {
        let problems = ["44 + 815", "909 - 2", "45 + 43", "123 + 49", "888 + 40", "653 + 87"];
        let err = arithmetic_arranger(&problems, true).unwrap_err();
        assert_eq!(err.to_string(), "Error: Too many problems.");
    }

    #[test]
    fn test_too_many_digits() {
        let err = arithmetic_arranger(&["24 + 85215", "3801 - 2", "45 + 43", "123 + 49"], true).unwrap_err();
        assert_eq!(err.to_string(), "Error: Numbers cannot be more than four digits.");
    }

    #[test]
    fn test_only_digits() {
        let err = arithmetic_arranger(&["98 + 3g5", "3801 - 2", "45 + 43", "123 + 49"], true).unwrap_err();
        assert_eq!(err.to_string(), "Error: Numbers must only contain digits.");
    }

    #[test]
    fn test_invalid_operator_and_format() {
        let err = arithmetic_arranger(&["3 / 855"], true).unwrap_err();
        assert_eq!(err.to_string(), "Error: Operator must be '+' or '-'.");
        assert_eq!(arithmetic_arranger(&["3 + "], true), Err(ArrangeError::InvalidFormat));
        assert_eq!(arithmetic_arranger(&["3 + 4 + 5"], true), Err(ArrangeError::InvalidFormat));
    }

    #[test]
    fn test_with_answers() {
        assert_eq!(
            arithmetic_arranger(&["3 + 855", "988 + 40"], true).unwrap(),
            "    3      988\n+ 855    +  40\n-----    -----\n  858     1028"
        );
    }

    #[test]
    fn test_negative_answers() {
        assert_eq!(
            arithmetic_arranger(&["32 - 698", "1 - 3801", "45 + 43", "123 + 49", "988 + 40"], true).unwrap(),
            "   32         1      45      123      988\n- 698    - 3801    + 43    +  49    +  40\n-----    ------    ----    -----    -----\n -666     -3800      88      172     1028"
        );
    }
}
