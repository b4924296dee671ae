// ▭ Rectangle - closed-form area and perimeter, no rounding

use super::{Measurable, ShapeRecord};
use crate::error::GeometryError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Rectangle { length, width }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle {}x{}", self.length, self.width)
    }
}

impl Measurable for Rectangle {
    fn area(&self) -> Result<f64, GeometryError> {
        Ok(Rectangle::area(self))
    }

    fn perimeter(&self) -> f64 {
        Rectangle::perimeter(self)
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
