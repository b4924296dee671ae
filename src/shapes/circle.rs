// ◯ Circle - closed-form area and circumference, no rounding

use super::{Measurable, ShapeRecord};
use crate::error::GeometryError;
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle {}", self.radius)
    }
}

impl Measurable for Circle {
    fn area(&self) -> Result<f64, GeometryError> {
        Ok(Circle::area(self))
    }

    fn perimeter(&self) -> f64 {
        Circle::perimeter(self)
    }

    fn to_record(&self) -> Result<ShapeRecord, GeometryError> {
        Ok(ShapeRecord {
            kind: self.to_string(),
            perimeter: self.perimeter(),
            area: self.area(),
            heights: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_and_perimeter() {
        let circle = Circle::new(2.0);
        assert_eq!(circle.area(), 4.0 * PI);
        assert_eq!(circle.perimeter(), 4.0 * PI);
    }

    #[test]
    fn test_unit_circle() {
        let circle = Circle::new(1.0);
        assert!((circle.area() - 3.14159).abs() < 1e-5);
        assert_eq!(circle.to_string(), "Circle 1");
    }
}
