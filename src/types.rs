//! Shared enums for drillbook
//!
//! Small closed sets of values (weekdays, pegs, cipher directions) are modeled
//! as enums so that the CLI and the drills share one parser and one display
//! format instead of comparing strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Direction of a Vigenère shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CipherDirection {
    #[default]
    Encrypt,
    Decrypt,
}

impl CipherDirection {
    /// Multiplier applied to the key offset
    pub fn sign(self) -> i32 {
        match self {
            Self::Encrypt => 1,
            Self::Decrypt => -1,
        }
    }
}

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Position in the week, Sunday = 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day reached after `days` days have passed
    pub fn advance(self, days: u64) -> Self {
        let offset = usize::try_from(days % 7).unwrap_or(0);
        let target = (self.index() + offset) % 7;
        Self::iter().nth(target).unwrap_or(self)
    }
}

/// Half of a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Meridian {
    Am,
    Pm,
}

/// Tower of Hanoi peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// Index into a `[_; 3]` peg array
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

/// Kind of polynomial equation handled by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum EquationKind {
    #[strum(to_string = "Linear Equation", serialize = "linear")]
    Linear,
    #[strum(to_string = "Quadratic Equation", serialize = "quadratic")]
    Quadratic,
}

impl EquationKind {
    /// Polynomial degree of this kind
    pub fn degree(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Quadratic => 2,
        }
    }
}

/// Direction a parabola opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Concavity {
    Upwards,
    Downwards,
}

/// Kind of parabola vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Extremum {
    Min,
    Max,
}

/// Operator accepted by the arithmetic formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
}

impl Operator {
    /// Apply the operator to two operands
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_weekday_parsing_is_case_insensitive() {
        assert_eq!(Weekday::from_str("saturDay").unwrap(), Weekday::Saturday);
        assert_eq!(Weekday::from_str("tuesday").unwrap(), Weekday::Tuesday);
        assert!(Weekday::from_str("Caturday").is_err());
    }

    #[test]
    fn test_weekday_advance_wraps() {
        assert_eq!(Weekday::Saturday.advance(1), Weekday::Sunday);
        assert_eq!(Weekday::Tuesday.advance(20), Weekday::Monday);
        assert_eq!(Weekday::Wednesday.advance(0), Weekday::Wednesday);
    }

    #[test]
    fn test_meridian_display() {
        assert_eq!(Meridian::Am.to_string(), "AM");
        assert_eq!(Meridian::Pm.to_string(), "PM");
        assert_eq!(Meridian::from_str("pm").unwrap(), Meridian::Pm);
    }

    #[test]
    fn test_equation_kind_display() {
        assert_eq!(EquationKind::Linear.to_string(), "Linear Equation");
        assert_eq!(EquationKind::from_str("quadratic").unwrap(), EquationKind::Quadratic);
        assert_eq!(EquationKind::Quadratic.degree(), 2);
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!(Operator::from_str("+").unwrap(), Operator::Add);
        assert_eq!(Operator::from_str("-").unwrap(), Operator::Subtract);
        assert!(Operator::from_str("*").is_err());
        assert_eq!(Operator::Subtract.apply(1, 3801), -3800);
    }

    #[test]
    fn test_cipher_direction_sign() {
        assert_eq!(CipherDirection::Encrypt.sign(), 1);
        assert_eq!(CipherDirection::Decrypt.sign(), -1);
        assert_eq!(CipherDirection::default(), CipherDirection::Encrypt);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = Peg::C;
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Peg = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
