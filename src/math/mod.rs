//! Numeric drills: equations, projectile motion and shape geometry.

pub mod equation;
pub mod projectile;
pub mod shapes;
