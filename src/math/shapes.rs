//! Rectangle and square area calculator.

use std::fmt;

/// Sides longer than this are not drawn
pub const MAX_PICTURE_SIDE: u32 = 50;

/// An axis-aligned shape with integer sides
pub trait Shape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    fn perimeter(&self) -> u64 {
        2 * u64::from(self.width()) + 2 * u64::from(self.height())
    }

    fn diagonal(&self) -> f64 {
        f64::from(self.width()).hypot(f64::from(self.height()))
    }

    /// Rows of `*`, one line per unit of height
    fn picture(&self) -> String {
        if self.width() > MAX_PICTURE_SIDE || self.height() > MAX_PICTURE_SIDE {
            return "Too big for picture.".to_string();
        }
        let row = "*".repeat(self.width() as usize);
        let mut out = String::with_capacity((row.len() + 1) * self.height() as usize);
        for _ in 0..self.height() {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    /// How many copies of `other` fit inside without rotation
    fn amount_inside(&self, other: &dyn Shape) -> u64 {
        if other.width() == 0 || other.height() == 0 {
            return 0;
        }
        u64::from(self.width() / other.width()) * u64::from(self.height() / other.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(width={}, height={})", self.width, self.height)
    }
}

/// A rectangle whose sides always match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    inner: Rectangle,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self {
            inner: Rectangle::new(side, side),
        }
    }

    pub fn side(&self) -> u32 {
        self.inner.width
    }

    pub fn set_side(&mut self, side: u32) {
        self.inner = Rectangle::new(side, side);
    }

    pub fn set_width(&mut self, width: u32) {
        self.set_side(width);
    }

    pub fn set_height(&mut self, height: u32) {
        self.set_side(height);
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side={})", self.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_measurements() {
        let mut rect = Rectangle::new(10, 5);
        assert_eq!(rect.area(), 50);
        rect.set_height(3);
        assert_eq!(rect.perimeter(), 26);
        assert_eq!(rect.to_string(), "Rectangle(width=10, height=3)");
        assert_eq!(rect.picture(), "**********\n**********\n**********\n");
    }

    #[test]
    fn test_square_stays_square() {
        let mut sq = Square::new(9);
        assert_eq!(sq.area(), 81);
        sq.set_side(4);
        assert_eq!(sq.to_string(), "Square(side=4)");
        sq.set_width(2);
        assert_eq!((sq.width(), sq.height()), (2, 2));
        sq.set_height(5);
        assert_eq!(sq.side(), 5);
        assert!((Square::new(3).diagonal() - 18f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_picture_limit() {
        assert_eq!(Rectangle::new(51, 3).picture(), "Too big for picture.");
        assert_eq!(Square::new(50).picture().lines().count(), 50);
    }

    #[test]
    fn test_amount_inside() {
        let mut rect = Rectangle::new(16, 8);
        rect.set_width(15);
        assert_eq!(rect.amount_inside(&Square::new(4)), 6);
        assert_eq!(Rectangle::new(4, 8).amount_inside(&Rectangle::new(3, 6)), 1);
        assert_eq!(Rectangle::new(2, 3).amount_inside(&Rectangle::new(3, 6)), 0);
        assert_eq!(rect.amount_inside(&Rectangle::new(0, 1)), 0);
    }
}
