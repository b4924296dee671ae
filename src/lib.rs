// Shape Calculator - Core Library
// Exposes all modules for use in the CLI and tests

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod shapes;
pub mod units;

// Re-export commonly used types
pub use catalog::{
    load_circles, load_rectangles, load_triangles,
    parse_circles, parse_rectangles, parse_triangles,
    ShapeCatalog,
};
pub use config::Config;
pub use error::GeometryError;
pub use report::{summary_records, write_report, write_summary};
pub use shapes::{
    Circle, Measurable, Rectangle, Shape, ShapeRecord, Triangle, TriangleKind,
};
pub use units::{resolve_unit, Unit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
