// Shape Models
//
// Each shape is an immutable value built once from input data.
// - Measurable: capability set shared by every shape type
// - Shape: tagged union used for the combined, ordered shape list
// - ShapeRecord: serializable summary written to the output file

pub mod circle;
pub mod rectangle;
pub mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::{Triangle, TriangleKind};

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round to a fixed number of decimal places.
///
/// Goes through the decimal formatter, which rounds the exact binary value
/// (ties to even) and cannot overflow the way `value * 10^places` does.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

// ============================================================================
// CAPABILITY SET
// ============================================================================

/// Operations every shape provides.
///
/// `Display` supplies the label (e.g. "Triangle 7-4-5").
pub trait Measurable: fmt::Display {
    fn area(&self) -> Result<f64, GeometryError>;

    fn perimeter(&self) -> f64;

    fn to_record(&self) -> Result<ShapeRecord, GeometryError>;
}

// ============================================================================
// SHAPE RECORD
// ============================================================================

/// One entry of the summary file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Shape label
    #[serde(rename = "type")]
    pub kind: String,

    pub perimeter: f64,

    pub area: f64,

    /// Height onto each side (triangles only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heights: Option<[f64; 3]>,
}

// ============================================================================
// SHAPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl Shape {
    fn as_measurable(&self) -> &dyn Measurable {
        match self {
            Shape::Rectangle(rectangle) => rectangle,
            Shape::Circle(circle) => circle,
            Shape::Triangle(triangle) => triangle,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_measurable(), f)
    }
}

impl Measurable for Shape {
    fn area(&self) -> Result<f64, GeometryError> {
        self.as_measurable().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_measurable().perimeter()
    }

    fn to_record(&self) -> Result<ShapeRecord, GeometryError> {
        self.as_measurable().to_record()
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}
