//! Linear and quadratic equation solver.
//!
//! Both equation kinds implement [`Equation`]. Coefficients are stored
//! highest degree first, so `[2.0, 3.0]` is `2x + 3 = 0`.

use std::fmt;

use crate::error::{DrillError, Result};
use crate::types::{Concavity, EquationKind, Extremum};

/// Width of the solver report
const REPORT_WIDTH: usize = 24;

/// Shape information for an equation's graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Analysis {
    Linear {
        slope: f64,
        y_intercept: f64,
    },
    Quadratic {
        x: f64,
        y: f64,
        concavity: Concavity,
        extremum: Extremum,
    },
}

/// A polynomial equation of the form `p(x) = 0`
pub trait Equation {
    fn kind(&self) -> EquationKind;

    /// Coefficients, highest degree first
    fn coefficients(&self) -> &[f64];

    /// Real roots in ascending order of the `±` branch
    fn solve(&self) -> Vec<f64>;

    fn analyze(&self) -> Analysis;

    fn degree(&self) -> usize {
        self.kind().degree()
    }

    /// `2x +3 = 0` style rendering. Zero terms are skipped and unit
    /// coefficients drop the `1`.
    fn render(&self) -> String {
        let coefficients = self.coefficients();
        let degree = coefficients.len().saturating_sub(1);
        let terms: Vec<String> = coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, c)| format_term(*c, degree - i))
            .collect();

        let joined = terms.join(" ");
        format!("{} = 0", joined.strip_prefix('+').unwrap_or(&joined))
    }
}

fn format_term(coefficient: f64, power: usize) -> String {
    let number = if power > 0 && coefficient.abs() == 1.0 {
        if coefficient < 0.0 { "-".to_string() } else { "+".to_string() }
    } else {
        format!("{:+}", coefficient)
    };

    match power {
        0 => number,
        1 => format!("{}x", number),
        n => format!("{}x**{}", number, n),
    }
}

fn check_coefficients(kind: EquationKind, coefficients: &[f64]) -> Result<()> {
    if let Some(bad) = coefficients.iter().find(|c| !c.is_finite()) {
        return Err(DrillError::validation(format!(
            "{} coefficients must be finite numbers, got {}",
            kind, bad
        )));
    }
    if coefficients.first().copied().unwrap_or(0.0) == 0.0 {
        return Err(DrillError::validation(format!(
            "Coefficient of degree {} cannot be zero.",
            kind.degree()
        )));
    }
    Ok(())
}

/// `ax + b = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation {
    coefficients: [f64; 2],
}

impl LinearEquation {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let coefficients = [a, b];
        check_coefficients(EquationKind::Linear, &coefficients)?;
        Ok(Self { coefficients })
    }
}

impl Equation for LinearEquation {
    fn kind(&self) -> EquationKind {
        EquationKind::Linear
    }

    fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn solve(&self) -> Vec<f64> {
        let [a, b] = self.coefficients;
        vec![-b / a]
    }

    fn analyze(&self) -> Analysis {
        let [slope, y_intercept] = self.coefficients;
        Analysis::Linear { slope, y_intercept }
    }
}

/// `ax² + bx + c = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticEquation {
    coefficients: [f64; 3],
    delta: f64,
}

impl QuadraticEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let coefficients = [a, b, c];
        check_coefficients(EquationKind::Quadratic, &coefficients)?;
        Ok(Self {
            coefficients,
            delta: b * b - 4.0 * a * c,
        })
    }

    /// The discriminant `b² - 4ac`
    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Equation for QuadraticEquation {
    fn kind(&self) -> EquationKind {
        EquationKind::Quadratic
    }

    fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn solve(&self) -> Vec<f64> {
        let [a, b, _] = self.coefficients;
        if self.delta < 0.0 {
            return Vec::new();
        }
        if self.delta == 0.0 {
            return vec![-b / (2.0 * a)];
        }

        let root = self.delta.sqrt();
        vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
    }

    fn analyze(&self) -> Analysis {
        let [a, b, c] = self.coefficients;
        let x = -b / (2.0 * a);
        let y = a * x * x + b * x + c;
        let (concavity, extremum) = if a > 0.0 {
            (Concavity::Upwards, Extremum::Min)
        } else {
            (Concavity::Downwards, Extremum::Max)
        };
        Analysis::Quadratic {
            x,
            y,
            concavity,
            extremum,
        }
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for QuadraticEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pick the equation kind from the number of coefficients (2 or 3).
pub fn from_coefficients(coefficients: &[f64]) -> Result<Box<dyn Equation>> {
    match *coefficients {
        [a, b] => Ok(Box::new(LinearEquation::new(a, b)?)),
        [a, b, c] => Ok(Box::new(QuadraticEquation::new(a, b, c)?)),
        _ => Err(DrillError::validation(format!(
            "expected 2 (linear) or 3 (quadratic) coefficients, got {}",
            coefficients.len()
        ))),
    }
}

/// Render the boxed solver report: equation, roots and graph details.
pub fn solver_report(equation: &dyn Equation) -> String {
    let width = REPORT_WIDTH;
    let mut out = format!("\n{:-^width$}", equation.kind().to_string());
    out.push_str(&format!("\n\n{:^width$}\n\n", equation.render()));
    out.push_str(&format!("{:-^width$}\n\n", "Solutions"));

    let results = equation.solve();
    let lines: Vec<String> = match results.as_slice() {
        [] => vec!["No real roots".to_string()],
        [x] => vec![format!("x = {:+.3}", x)],
        roots => roots
            .iter()
            .enumerate()
            .map(|(i, x)| format!("x{} = {:+.3}", i + 1, x))
            .collect(),
    };
    for line in lines {
        out.push_str(&format!("{:^width$}\n", line));
    }

    out.push_str(&format!("\n{:-^width$}\n\n", "Details"));
    let details = match equation.analyze() {
        Analysis::Linear { slope, y_intercept } => vec![
            format!("slope =  {:>15.3}", slope),
            format!("y-intercept = {:>10.3}", y_intercept),
        ],
        Analysis::Quadratic {
            x,
            y,
            concavity,
            extremum,
        } => {
            let coordinate = format!("({:.3}, {:.3})", x, y);
            vec![
                format!("concavity = {:>12}", concavity.to_string()),
                format!("{} = {:>18}", extremum, coordinate),
            ]
        }
    };
    for detail in details {
        out.push_str(&detail);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(LinearEquation::new(2.0, 3.0).unwrap().to_string(), "2x +3 = 0");
        assert_eq!(
            QuadraticEquation::new(-11.0, -1.0, 1.0).unwrap().to_string(),
            "-11x**2 -x +1 = 0"
        );
        assert_eq!(QuadraticEquation::new(1.0, 0.0, -4.0).unwrap().to_string(), "x**2 -4 = 0");
        assert_eq!(LinearEquation::new(0.5, 0.0).unwrap().to_string(), "0.5x = 0");
    }

    #[test]
    fn test_linear_solution() {
        let eq = LinearEquation::new(2.0, 3.0).unwrap();
        assert_eq!(eq.solve(), vec![-1.5]);
        assert_eq!(eq.degree(), 1);
        assert_eq!(
            eq.analyze(),
            Analysis::Linear {
                slope: 2.0,
                y_intercept: 3.0
            }
        );
    }

    #[test]
    fn test_quadratic_roots() {
        let two = QuadraticEquation::new(1.0, -3.0, 2.0).unwrap();
        assert_eq!(two.solve(), vec![2.0, 1.0]);

        let one = QuadraticEquation::new(1.0, -2.0, 1.0).unwrap();
        assert_eq!(one.delta(), 0.0);
        assert_eq!(one.solve(), vec![1.0]);

        let none = QuadraticEquation::new(1.0, 0.0, 1.0).unwrap();
        assert!(none.solve().is_empty());
    }

    #[test]
    fn test_quadratic_analysis() {
        match QuadraticEquation::new(1.0, -2.0, 1.0).unwrap().analyze() {
            Analysis::Quadratic {
                x,
                y,
                concavity,
                extremum,
            } => {
                assert_eq!((x, y), (1.0, 0.0));
                assert_eq!(concavity, Concavity::Upwards);
                assert_eq!(extremum, Extremum::Min);
            }
            other => panic!("unexpected analysis {:?}", other),
        }
    }

    #[test]
    fn test_construction_rejects_bad_coefficients() {
        assert!(LinearEquation::new(0.0, 1.0).is_err());
        assert!(QuadraticEquation::new(0.0, 1.0, 1.0).is_err());
        assert!(QuadraticEquation::new(1.0, f64::NAN, 1.0).is_err());
        assert!(from_coefficients(&[1.0]).is_err());
        assert!(from_coefficients(&[1.0, 2.0, 3.0, 4.0]).is_err());
        assert_eq!(from_coefficients(&[1.0, 2.0, 3.0]).unwrap().kind(), EquationKind::Quadratic);
    }

    #[test]
    fn test_linear_report() {
        let eq = LinearEquation::new(2.0, 3.0).unwrap();
        assert_eq!(
            solver_report(&eq),
            "\n----Linear Equation-----\n\n       2x +3 = 0        \n\n-------Solutions--------\n\n       x = -1.500       \n\n--------Details---------\n\nslope =            2.000\ny-intercept =      3.000\n"
        );
    }

    #[test]
    fn test_quadratic_report() {
        let eq = QuadraticEquation::new(-11.0, -1.0, 1.0).unwrap();
        assert_eq!(
            solver_report(&eq),
            "\n---Quadratic Equation---\n\n   -11x**2 -x +1 = 0    \n\n-------Solutions--------\n\n      x1 = -0.350       \n      x2 = +0.259       \n\n--------Details---------\n\nconcavity =    downwards\nmax =    (-0.045, 1.023)\n"
        );
    }

    #[test]
    fn test_report_without_roots() {
        let eq = QuadraticEquation::new(1.0, 0.0, 1.0).unwrap();
        assert!(solver_report(&eq).contains("     No real roots      \n"));
    }
}
