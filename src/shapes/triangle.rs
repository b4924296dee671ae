// 🔺 Triangle - Heron's formula, heights and classification
//
// Values are derived on every call from the three stored sides, never cached.
// Rounding follows the published fixtures: perimeter, area, heights and sides
// to 5 places, squared sides to 4 places for the right-angle check.

use super::{round_to, Measurable, ShapeRecord};
use crate::error::GeometryError;
use std::fmt;

/// Decimal places for every reported triangle value
pub const DECIMAL_PLACES: usize = 5;

/// Decimal places applied to squared sides before the Pythagorean comparison
const SQUARE_PLACES: usize = 4;

// ============================================================================
// TRIANGLE KIND
// ============================================================================

/// Classification categories, declared in reporting precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    RightAngle,
    Scalene,
}

impl TriangleKind {
    /// All kinds in precedence order
    pub const PRECEDENCE: [TriangleKind; 4] = [
        TriangleKind::Equilateral,
        TriangleKind::Isosceles,
        TriangleKind::RightAngle,
        TriangleKind::Scalene,
    ];

    /// Noun phrase with its article, e.g. "an isosceles triangle"
    pub fn description(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "an equilateral triangle",
            TriangleKind::Isosceles => "an isosceles triangle",
            TriangleKind::RightAngle => "a right triangle",
            TriangleKind::Scalene => "a scalene triangle",
        }
    }
}

// ============================================================================
// TRIANGLE
// ============================================================================

/// Triangle described by its three side lengths.
///
/// Construction never fails; sides that cannot form a triangle are reported
/// by [`Triangle::area`] and [`Triangle::heights`] as a [`GeometryError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub side1: f64,
    pub side2: f64,
    pub side3: f64,
}

impl Triangle {
    pub fn new(side1: f64, side2: f64, side3: f64) -> Self {
        Triangle { side1, side2, side3 }
    }

    /// Sides in construction order, each rounded to 5 places
    pub fn sides(&self) -> (f64, f64, f64) {
        (
            round_to(self.side1, DECIMAL_PLACES),
            round_to(self.side2, DECIMAL_PLACES),
            round_to(self.side3, DECIMAL_PLACES),
        )
    }

    fn raw_sides(&self) -> [f64; 3] {
        [self.side1, self.side2, self.side3]
    }

    /// Half of the already-rounded perimeter
    fn semi_perimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    fn ensure_positive_sides(&self) -> Result<(), GeometryError> {
        match self
            .raw_sides()
            .into_iter()
            .find(|side| !side.is_finite() || *side <= 0.0)
        {
            Some(side) => Err(GeometryError::NonPositiveSide {
                label: self.to_string(),
                side,
            }),
            None => Ok(()),
        }
    }

    fn checked_sqrt(&self, radicand: f64) -> Result<f64, GeometryError> {
        if radicand.is_nan() || radicand < 0.0 {
            return Err(GeometryError::InvalidTriangle {
                label: self.to_string(),
                radicand,
            });
        }
        Ok(radicand.sqrt())
    }

    /// Heron's formula: sqrt(s * (s-a) * (s-b) * (s-c)), rounded to 5 places.
    ///
    /// `s` is taken from the rounded perimeter, so a perimeter that needed
    /// rounding feeds that rounding into the area.
    pub fn area(&self) -> Result<f64, GeometryError> {
        self.ensure_positive_sides()?;

        let s = self.semi_perimeter();
        let radicand = s * (s - self.side1) * (s - self.side2) * (s - self.side3);
        let area = self.checked_sqrt(radicand)?;

        Ok(round_to(area, DECIMAL_PLACES))
    }

    /// Perimeter rounded to 5 places
    pub fn perimeter(&self) -> f64 {
        round_to(self.side1 + self.side2 + self.side3, DECIMAL_PLACES)
    }

    /// Height onto each side, in side order.
    ///
    /// height_i = 0.5 * sqrt((a+b+c)(-a+b+c)(a-b+c)(a+b-c)) / side_i, computed
    /// from the raw sides and rounded to 5 places.
    pub fn heights(&self) -> Result<(f64, f64, f64), GeometryError> {
        self.ensure_positive_sides()?;

        let (a, b, c) = (self.side1, self.side2, self.side3);
        let radicand = (a + b + c) * (-a + b + c) * (a - b + c) * (a + b - c);
        let root = self.checked_sqrt(radicand)?;

        let height = |base: f64| round_to(0.5 * root / base, DECIMAL_PLACES);
        Ok((height(a), height(b), height(c)))
    }

    // ========================================================================
    // CLASSIFICATION
    // ========================================================================

    pub fn is_equilateral(&self) -> bool {
        self.side1 == self.side2 && self.side2 == self.side3
    }

    pub fn is_isosceles(&self) -> bool {
        self.side1 == self.side2 || self.side1 == self.side3 || self.side2 == self.side3
    }

    /// Pythagorean check with every side tried as the hypotenuse
    pub fn is_right_angle(&self) -> bool {
        let s1 = round_to(self.side1 * self.side1, SQUARE_PLACES);
        let s2 = round_to(self.side2 * self.side2, SQUARE_PLACES);
        let s3 = round_to(self.side3 * self.side3, SQUARE_PLACES);

        s1 + s2 == s3 || s1 + s3 == s2 || s2 + s3 == s1
    }

    pub fn is_scalene(&self) -> bool {
        self.side1 != self.side2 && self.side2 != self.side3 && self.side1 != self.side3
    }

    pub fn is_special(&self) -> bool {
        self.is_equilateral() || self.is_isosceles() || self.is_right_angle() || self.is_scalene()
    }

    pub fn is_kind(&self, kind: TriangleKind) -> bool {
        match kind {
            TriangleKind::Equilateral => self.is_equilateral(),
            TriangleKind::Isosceles => self.is_isosceles(),
            TriangleKind::RightAngle => self.is_right_angle(),
            TriangleKind::Scalene => self.is_scalene(),
        }
    }

    /// First matching kind in precedence order
    pub fn classification(&self) -> Option<TriangleKind> {
        TriangleKind::PRECEDENCE
            .into_iter()
            .find(|kind| self.is_kind(*kind))
    }

    /// Every matching kind in precedence order
    pub fn kinds(&self) -> Vec<TriangleKind> {
        TriangleKind::PRECEDENCE
            .into_iter()
            .filter(|kind| self.is_kind(*kind))
            .collect()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle {}-{}-{}", self.side1, self.side2, self.side3)
    }
}

impl Measurable for Triangle {
    fn area(&self) -> Result<f64, GeometryError> {
        Triangle::area(self)
    }

    fn perimeter(&self) -> f64 {
        Triangle::perimeter(self)
    }

    fn to_record(&self) -> Result<ShapeRecord, GeometryError> {
        let (h1, h2, h3) = self.heights()?;
        Ok(ShapeRecord {
            kind: self.to_string(),
            perimeter: self.perimeter(),
            area: self.area()?,
            heights: Some([h1, h2, h3]),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
