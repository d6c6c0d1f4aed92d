//! Projectile trajectory calculator with a text plot.

use std::fmt;

use crate::error::{DrillError, Result};

/// Gravitational acceleration in m/s²
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.81;

/// Largest horizontal or vertical extent, in metres, that gets tabulated and plotted
pub const MAX_PLOT_SPAN: u32 = 500;

const PROJECTILE: char = '∙';
const X_AXIS_TICK: char = 'T';
const Y_AXIS_TICK: char = '⊣';

/// A throw described by initial speed, height and angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    speed: f64,
    height: f64,
    /// Radians
    angle: f64,
}

impl Projectile {
    /// `speed` in m/s, `height` in m, `angle` in degrees.
    pub fn new(speed: f64, height: f64, angle: f64) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(DrillError::validation(format!("speed must be positive, got {}", speed)));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(DrillError::validation(format!("height cannot be negative, got {}", height)));
        }
        if !angle.is_finite() || angle <= -90.0 || angle >= 90.0 {
            return Err(DrillError::validation(format!(
                "angle must be strictly between -90 and 90 degrees, got {}",
                angle
            )));
        }
        Ok(Self {
            speed,
            height,
            angle: angle.to_radians(),
        })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Angle in whole degrees
    pub fn angle(&self) -> i64 {
        self.angle.to_degrees().round() as i64
    }

    /// Horizontal distance travelled before hitting the ground
    pub fn displacement(&self) -> f64 {
        let horizontal = self.speed * self.angle.cos();
        let vertical = self.speed * self.angle.sin();
        let root = (vertical.powi(2) + 2.0 * GRAVITATIONAL_ACCELERATION * self.height).sqrt();
        horizontal * (vertical + root) / GRAVITATIONAL_ACCELERATION
    }

    /// Height of the projectile at horizontal position `x`
    pub fn y_at(&self, x: f64) -> f64 {
        let drop = GRAVITATIONAL_ACCELERATION * x.powi(2)
            / (2.0 * self.speed.powi(2) * self.angle.cos().powi(2));
        self.height + x * self.angle.tan() - drop
    }

    /// Highest point of the flight
    pub fn peak(&self) -> f64 {
        let vertical = self.speed * self.angle.sin();
        if vertical > 0.0 {
            self.height + vertical.powi(2) / (2.0 * GRAVITATIONAL_ACCELERATION)
        } else {
            self.height
        }
    }

    /// Whether the flight stays within [`MAX_PLOT_SPAN`] in both directions
    pub fn fits_plot(&self) -> bool {
        let span = f64::from(MAX_PLOT_SPAN);
        self.displacement() <= span && self.peak() <= span
    }

    /// `(x, y)` for every whole metre before the landing point
    pub fn coordinates(&self) -> Result<Vec<(u32, f64)>> {
        if !self.fits_plot() {
            return Err(DrillError::validation(format!(
                "trajectory spans more than {} m",
                MAX_PLOT_SPAN
            )));
        }
        let end = self.displacement().ceil().max(0.0) as u32;
        Ok((0..end).map(|x| (x, self.y_at(f64::from(x)))).collect())
    }
}

impl fmt::Display for Projectile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Projectile details:")?;
        writeln!(f, "speed: {} m/s", self.speed)?;
        writeln!(f, "height: {} m", self.height)?;
        writeln!(f, "angle: {}°", self.angle())?;
        writeln!(f, "displacement: {:.1} m", self.displacement())
    }
}

/// Table and plot of a list of trajectory points
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryGraph {
    coordinates: Vec<(u32, f64)>,
}

impl TrajectoryGraph {
    pub fn new(coordinates: Vec<(u32, f64)>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates_table(&self) -> String {
        let mut table = String::from("\n  x      y\n");
        for (x, y) in &self.coordinates {
            table.push_str(&format!("{:>3}{:>7.2}\n", x, y));
        }
        table
    }

    /// Plot the points with `y` rounded to whole metres, highest row first.
    pub fn trajectory(&self) -> String {
        let rounded: Vec<(usize, i64)> = self
            .coordinates
            .iter()
            .map(|(x, y)| (*x as usize, y.round() as i64))
            .collect();

        let x_max = rounded.iter().map(|(x, _)| *x).max().unwrap_or(0);
        let y_max = rounded.iter().map(|(_, y)| *y).max().unwrap_or(0).max(0);
        let span = MAX_PLOT_SPAN as usize;
        if x_max > span || y_max as usize > span {
            return String::from("\nToo big for plot.\n");
        }

        let mut grid = vec![vec![' '; x_max + 1]; y_max as usize + 1];
        for (x, y) in rounded {
            if (0..=y_max).contains(&y) {
                grid[(y_max - y) as usize][x] = PROJECTILE;
            }
        }

        let mut out = String::from("\n");
        for row in &grid {
            out.push(Y_AXIS_TICK);
            out.extend(row.iter());
            out.push('\n');
        }
        out.push(' ');
        out.extend(std::iter::repeat_n(X_AXIS_TICK, x_max + 1));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details() {
        let ball = Projectile::new(45.0, 8.0, 7.0).unwrap();
        assert_eq!(
            ball.to_string(),
            "\nProjectile details:\nspeed: 45 m/s\nheight: 8 m\nangle: 7°\ndisplacement: 87.2 m\n"
        );
        assert_eq!(ball.coordinates().unwrap().len(), 88);
    }

    #[test]
    fn test_y_at() {
        let ball = Projectile::new(10.0, 3.0, 45.0).unwrap();
        assert!((ball.y_at(0.0) - 3.0).abs() < 1e-9);
        assert!((ball.y_at(1.0) - 3.9019).abs() < 1e-9);
        assert!((ball.y_at(5.0) - 5.5475).abs() < 1e-9);
    }

    #[test]
    fn test_coordinates_table() {
        let ball = Projectile::new(45.0, 8.0, 7.0).unwrap();
        let table = TrajectoryGraph::new(ball.coordinates().unwrap()).coordinates_table();
        assert!(table.starts_with("\n  x      y\n  0   8.00\n  1   8.12\n  2   8.24\n"));
    }

    #[test]
    fn test_trajectory_plot() {
        let ball = Projectile::new(10.0, 3.0, 45.0).unwrap();
        let plot = TrajectoryGraph::new(ball.coordinates().unwrap()).trajectory();
        let expected = "\n\
            ⊣     ∙       \n\
            ⊣  ∙∙∙ ∙∙∙    \n\
            ⊣ ∙       ∙   \n\
            ⊣∙         ∙  \n\
            ⊣           ∙ \n\
            ⊣            ∙\n\
            ⊣             \n \
            TTTTTTTTTTTTT\n";
        assert_eq!(plot, expected);
    }

    #[test]
    fn test_long_throws_are_not_plotted() {
        let ball = Projectile::new(1000.0, 0.0, 45.0).unwrap();
        assert!(!ball.fits_plot());
        assert!(matches!(ball.coordinates(), Err(DrillError::Validation(_))));

        let far = Projectile::new(1e10, 0.0, 45.0).unwrap();
        assert!(far.coordinates().is_err());

        let wide = TrajectoryGraph::new(vec![(0, 0.0), (u32::MAX, 1.0)]);
        assert_eq!(wide.trajectory(), "\nToo big for plot.\n");

        let short = Projectile::new(45.0, 8.0, 7.0).unwrap();
        assert!(short.fits_plot());
        assert!((short.peak() - 9.5).abs() < 0.1);
    }

    #[test]
    fn test_rejects_invalid_throws() {
        assert!(Projectile::new(0.0, 1.0, 10.0).is_err());
        assert!(Projectile::new(10.0, -1.0, 10.0).is_err());
        assert!(Projectile::new(10.0, 1.0, 90.0).is_err());
        assert!(Projectile::new(f64::NAN, 1.0, 10.0).is_err());
    }
}
