//! Euclidean vectors in two and three dimensions.
//!
//! `v + w` and `v - w` are component-wise, `v * k` scales, `v * w` is the dot
//! product. Equality compares components; magnitude ordering is a separate
//! method because it cannot agree with component equality.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

/// Behaviour shared by both vector types
pub trait Vector: Copy {
    /// Components in axis order
    fn components(&self) -> Vec<f64>;

    /// Type name used by `repr`
    fn type_name(&self) -> &'static str;

    /// Euclidean length
    fn norm(&self) -> f64 {
        self.components().iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Compare magnitudes
    fn cmp_norm(&self, other: &Self) -> Option<Ordering> {
        self.norm().partial_cmp(&other.norm())
    }

    /// Constructor-style rendering, e.g. `R2Vector(x=2, y=3)`
    fn repr(&self) -> String {
        let args: Vec<String> = ["x", "y", "z"]
            .iter()
            .zip(self.components())
            .map(|(axis, value)| format!("{}={}", axis, value))
            .collect();
        format!("{}({})", self.type_name(), args.join(", "))
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    let parts: Vec<String> = components.iter().map(|c| c.to_string()).collect();
    write!(f, "({})", parts.join(", "))
}

/// Vector in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct R2Vector {
    pub x: f64,
    pub y: f64,
}

impl R2Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Vector for R2Vector {
    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }

    fn type_name(&self) -> &'static str {
        "R2Vector"
    }
}

/// Vector in space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct R3Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl R3Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cross product `self × other`
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vector for R3Vector {
    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    fn type_name(&self) -> &'static str {
        "R3Vector"
    }
}

impl From<R2Vector> for R3Vector {
    fn from(v: R2Vector) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl fmt::Display for R2Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.components())
    }
}

impl fmt::Display for R3Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.components())
    }
}

// Operator impls are identical for both types apart from the field list.
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = $ty;
            fn add(self, other: $ty) -> $ty {
                $ty { $($field: self.$field + other.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            fn sub(self, other: $ty) -> $ty {
                $ty { $($field: self.$field - other.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl Mul<f64> for $ty {
            type Output = $ty;
            fn mul(self, scalar: f64) -> $ty {
                $ty { $($field: self.$field * scalar),+ }
            }
        }

        impl Mul<$ty> for f64 {
            type Output = $ty;
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        /// Dot product
        impl Mul for $ty {
            type Output = f64;
            fn mul(self, other: $ty) -> f64 {
                0.0 $(+ self.$field * other.$field)+
            }
        }
    };
}

impl_vector_ops!(R2Vector { x, y });
impl_vector_ops!(R3Vector { x, y, z });

/// Either vector type, as parsed from a comma-separated list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector {
    R2(R2Vector),
    R3(R3Vector),
}

impl std::str::FromStr for AnyVector {
    type Err = DrillError;

    /// Parse `"5,7,-8"` or `"2, 3"`
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| DrillError::parse(format!("invalid component '{}': {}", part.trim(), e)))
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.iter().any(|v| !v.is_finite()) {
            return Err(DrillError::validation("vector components must be finite"));
        }

        match values.as_slice() {
            [x, y] => Ok(Self::R2(R2Vector::new(*x, *y))),
            [x, y, z] => Ok(Self::R3(R3Vector::new(*x, *y, *z))),
            other => Err(DrillError::parse(format!(
                "expected 2 or 3 components, got {}",
                other.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r2_arithmetic() {
        let v = R2Vector::new(2.0, 3.0);
        let w = R2Vector::new(0.5, 1.25);
        assert_eq!(v + w, R2Vector::new(2.5, 4.25));
        assert_eq!(v - w, R2Vector::new(1.5, 1.75));
        assert_eq!(v * w, 4.75);
        assert_eq!(v * 2.0, R2Vector::new(4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);
    }

    #[test]
    fn test_r3_cross() {
        let v = R3Vector::new(5.0, 7.0, -8.0);
        let w = R3Vector::new(1.0, 0.0, 2.0);
        let c = v.cross(&w);
        assert_eq!(c, R3Vector::new(14.0, -18.0, -7.0));
        // cross product is orthogonal to both inputs
        assert_eq!(c * v, 0.0);
        assert_eq!(c * w, 0.0);
    }

    #[test]
    fn test_norm_and_ordering() {
        let v = R2Vector::new(3.0, 4.0);
        assert_eq!(v.norm(), 5.0);
        let w = R2Vector::new(1.0, 1.0);
        assert_eq!(v.cmp_norm(&w), Some(Ordering::Greater));
        assert_eq!(R2Vector::new(0.0, 5.0).cmp_norm(&v), Some(Ordering::Equal));
        assert_ne!(R2Vector::new(0.0, 5.0), v);
    }

    #[test]
    fn test_display_and_repr() {
        let v = R3Vector::new(5.0, 7.0, -8.0);
        assert_eq!(v.to_string(), "(5, 7, -8)");
        assert_eq!(v.repr(), "R3Vector(x=5, y=7, z=-8)");
        assert_eq!(R2Vector::new(3.4, 1.25).repr(), "R2Vector(x=3.4, y=1.25)");
    }

    #[test]
    fn test_embed_r2_in_r3() {
        let v: R3Vector = R2Vector::new(1.0, 2.0).into();
        assert_eq!(v, R3Vector::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_parse_any_vector() {
        assert_eq!("2, 3".parse::<AnyVector>().unwrap(), AnyVector::R2(R2Vector::new(2.0, 3.0)));
        assert!(matches!("1,2,3".parse::<AnyVector>().unwrap(), AnyVector::R3(_)));
        assert!("1".parse::<AnyVector>().is_err());
        assert!("1,a".parse::<AnyVector>().is_err());
        assert!("1,inf".parse::<AnyVector>().is_err());
    }
}
