// 📊 Reporting - console report and JSON summary file

use crate::shapes::{Measurable, Shape, ShapeRecord, Triangle};
use crate::units::Unit;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Numbers always show a fractional part: 16.0, 9.79796
fn num(value: f64) -> String {
    format!("{:?}", value)
}

// ============================================================================
// CONSOLE REPORT
// ============================================================================

/// Write the block for every shape, in list order
pub fn write_report<W: Write>(out: &mut W, shapes: &[Shape], unit: Unit) -> Result<()> {
    for shape in shapes {
        write_shape(out, shape, unit).with_context(|| format!("Failed to report {}", shape))?;
    }
    Ok(())
}

/// Label, area and perimeter, plus triangle details, then a blank line
pub fn write_shape<W: Write>(out: &mut W, shape: &Shape, unit: Unit) -> Result<()> {
    writeln!(out, "Type:  {}", shape)?;
    writeln!(out, " Area:  {} {} sq", num(shape.area()?), unit)?;
    writeln!(out, " Perim: {} {}", num(shape.perimeter()), unit)?;

    match shape {
        Shape::Triangle(triangle) => write_triangle_details(out, triangle, unit)?,
        Shape::Rectangle(_) | Shape::Circle(_) => {}
    }

    writeln!(out)?;
    Ok(())
}

fn write_triangle_details<W: Write>(out: &mut W, triangle: &Triangle, unit: Unit) -> Result<()> {
    let (s1, s2, s3) = triangle.sides();
    let (h1, h2, h3) = triangle.heights()?;

    for (side, height) in [(s1, h1), (s2, h2), (s3, h3)] {
        writeln!(
            out,
            " If the side of length {} {} is treated as the base, triangle has a height of {} {}",
            num(side),
            unit,
            num(height),
            unit
        )?;
    }

    if let Some(kind) = triangle.classification() {
        writeln!(out, " {} is {}", triangle, kind.description())?;
    }

    Ok(())
}

// ============================================================================
// SUMMARY FILE
// ============================================================================

/// Records for every shape; the first geometry failure names its shape
pub fn summary_records(shapes: &[Shape]) -> Result<Vec<ShapeRecord>> {
    shapes
        .iter()
        .map(|shape| {
            shape
                .to_record()
                .with_context(|| format!("Failed to summarize {}", shape))
        })
        .collect()
}

/// JSON array, pretty-printed with 4-space indentation
pub fn to_summary_json(records: &[ShapeRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to serialize summary")?;

    String::from_utf8(buffer).context("Summary is not valid UTF-8")
}

/// Write the summary file, creating its directory if needed.
/// Returns the number of records written.
pub fn write_summary<P: AsRef<Path>>(path: P, shapes: &[Shape]) -> Result<usize> {
    let path = path.as_ref();
    let records = summary_records(shapes)?;
    let json = to_summary_json(&records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write summary file: {:?}", path))?;

    tracing::info!(records = records.len(), path = %path.display(), "wrote summary");
    Ok(records.len())
}

// ============================================================================
// TESTS
// ============================================================================
