// 📂 Shape Catalog - builds shapes from the three input files
//
// Rectangles and triangles come from JSON, circles from YAML. Every entry
// becomes exactly one shape; serde type conversion is the only validation.
// Combined order: rectangles, then circles, then triangles.

use crate::config::Config;
use crate::shapes::{Circle, Rectangle, Shape, Triangle};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// ============================================================================
// INPUT SCHEMAS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct RectangleEntry {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriangleEntry {
    pub side1: f64,
    pub side2: f64,
    pub side3: f64,
}

#[derive(Debug, Deserialize)]
struct RectangleFile {
    rectangle_list: Vec<RectangleEntry>,
}

#[derive(Debug, Deserialize)]
struct CircleFile {
    circle_list: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct TriangleFile {
    triangle_list: Vec<TriangleEntry>,
}

// ============================================================================
// PARSERS
// ============================================================================

pub fn parse_rectangles(content: &str) -> Result<Vec<Rectangle>> {
    let file: RectangleFile =
        serde_json::from_str(content).context("Failed to parse rectangles JSON")?;

    Ok(file
        .rectangle_list
        .into_iter()
        .map(|entry| Rectangle::new(entry.length, entry.width))
        .collect())
}

pub fn parse_circles(content: &str) -> Result<Vec<Circle>> {
    let file: CircleFile =
        serde_yaml::from_str(content).context("Failed to parse circles YAML")?;

    Ok(file.circle_list.into_iter().map(Circle::new).collect())
}

pub fn parse_triangles(content: &str) -> Result<Vec<Triangle>> {
    let file: TriangleFile =
        serde_json::from_str(content).context("Failed to parse triangles JSON")?;

    Ok(file
        .triangle_list
        .into_iter()
        .map(|entry| Triangle::new(entry.side1, entry.side2, entry.side3))
        .collect())
}

// ============================================================================
// FILE LOADERS
// ============================================================================

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read input file: {:?}", path))
}

pub fn load_rectangles<P: AsRef<Path>>(path: P) -> Result<Vec<Rectangle>> {
    let path = path.as_ref();
    let rectangles = parse_rectangles(&read_source(path)?)
        .with_context(|| format!("Invalid rectangle source: {:?}", path))?;

    tracing::debug!(count = rectangles.len(), path = %path.display(), "loaded rectangles");
    Ok(rectangles)
}

pub fn load_circles<P: AsRef<Path>>(path: P) -> Result<Vec<Circle>> {
    let path = path.as_ref();
    let circles = parse_circles(&read_source(path)?)
        .with_context(|| format!("Invalid circle source: {:?}", path))?;

    tracing::debug!(count = circles.len(), path = %path.display(), "loaded circles");
    Ok(circles)
}

pub fn load_triangles<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    let triangles = parse_triangles(&read_source(path)?)
        .with_context(|| format!("Invalid triangle source: {:?}", path))?;

    tracing::debug!(count = triangles.len(), path = %path.display(), "loaded triangles");
    Ok(triangles)
}

// ============================================================================
// CATALOG
// ============================================================================

/// Every shape from one run, grouped by type in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeCatalog {
    pub rectangles: Vec<Rectangle>,
    pub circles: Vec<Circle>,
    pub triangles: Vec<Triangle>,
}

impl ShapeCatalog {
    /// Load all three sources; the first failure aborts the whole load
    pub fn load(config: &Config) -> Result<Self> {
        Ok(ShapeCatalog {
            rectangles: load_rectangles(&config.rectangles_path)?,
            circles: load_circles(&config.circles_path)?,
            triangles: load_triangles(&config.triangles_path)?,
        })
    }

    pub fn len(&self) -> usize {
        self.rectangles.len() + self.circles.len() + self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combined list: rectangles, then circles, then triangles
    pub fn shapes(&self) -> Vec<Shape> {
        let rectangles = self.rectangles.iter().copied().map(Shape::from);
        let circles = self.circles.iter().copied().map(Shape::from);
        let triangles = self.triangles.iter().copied().map(Shape::from);

        rectangles.chain(circles).chain(triangles).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RECTANGLES: &str = r#"{
        "rectangle_list": [
            {"length": 4, "width": 6},
            {"length": 2.5, "width": 10}
        ]
    }"#;

    const CIRCLES: &str = "---\ncircle_list:\n  - 1\n  - 2.5\n  - 10\n";

    const TRIANGLES: &str = r#"{
        "triangle_list": [
            {"side1": 7, "side2": 4, "side3": 5},
            {"side1": 5, "side2": 5, "side3": 5}
        ]
    }"#;

    fn write_inputs(dir: &TempDir) -> Config {
        let config = Config {
            rectangles_path: dir.path().join("rectangle.json"),
            circles_path: dir.path().join("circle.yml"),
            triangles_path: dir.path().join("triangle_sides.json"),
            output_path: dir.path().join("out/computations.json"),
        };
        fs::write(&config.rectangles_path, RECTANGLES).unwrap();
        fs::write(&config.circles_path, CIRCLES).unwrap();
        fs::write(&config.triangles_path, TRIANGLES).unwrap();
        config
    }

    #[test]
    fn test_parse_rectangles() {
        let rectangles = parse_rectangles(RECTANGLES).unwrap();
        assert_eq!(
            rectangles,
            vec![Rectangle::new(4.0, 6.0), Rectangle::new(2.5, 10.0)]
        );
    }

    #[test]
    fn test_parse_circles() {
        let circles = parse_circles(CIRCLES).unwrap();
        assert_eq!(
            circles,
            vec![Circle::new(1.0), Circle::new(2.5), Circle::new(10.0)]
        );
    }

    #[test]
    fn test_parse_triangles_keeps_side_order() {
        let triangles = parse_triangles(TRIANGLES).unwrap();
        assert_eq!(triangles[0], Triangle::new(7.0, 4.0, 5.0));
        assert_eq!(triangles[1], Triangle::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_rectangles("{\"rectangle_list\": [").is_err());
        assert!(parse_rectangles("{\"rectangles\": []}").is_err());
        assert!(parse_circles("circle_list: [one, two]").is_err());
        assert!(parse_triangles(r#"{"triangle_list": [{"side1": 3, "side2": 4}]}"#).is_err());
    }

    #[test]
    fn test_empty_lists() {
        assert!(parse_rectangles(r#"{"rectangle_list": []}"#).unwrap().is_empty());
        assert!(parse_circles("circle_list: []").unwrap().is_empty());
    }

    #[test]
    fn test_load_catalog_orders_by_type() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(&dir);

        let catalog = ShapeCatalog::load(&config).unwrap();
        assert_eq!(catalog.len(), 7);

        let labels: Vec<String> = catalog.shapes().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Rectangle 4x6",
                "Rectangle 2.5x10",
                "Circle 1",
                "Circle 2.5",
                "Circle 10",
                "Triangle 7-4-5",
                "Triangle 5-5-5",
            ]
        );
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let mut config = write_inputs(&dir);
        config.circles_path = dir.path().join("nope.yml");

        let error = ShapeCatalog::load(&config).unwrap_err();
        assert!(format!("{:#}", error).contains("nope.yml"));
    }

    #[test]
    fn test_malformed_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let config = write_inputs(&dir);
        fs::write(&config.triangles_path, "{ not json").unwrap();

        let error = load_triangles(&config.triangles_path).unwrap_err();
        let message = format!("{:#}", error);
        assert!(message.contains("triangle_sides.json"));
        assert!(message.contains("Failed to parse triangles JSON"));
    }
}
