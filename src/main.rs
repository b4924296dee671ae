use anyhow::Result;
use std::env;
use std::io;

// Use library instead of local modules
use shape_calc::logging::init_tracing;
use shape_calc::{resolve_unit, write_report, write_summary, Config, ShapeCatalog};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let config = Config::from_env();
    tracing::debug!(?config, "starting shape-calc {}", shape_calc::VERSION);

    // 1. Unit of measure: argument first, prompt otherwise
    let stdin = io::stdin();
    let unit = resolve_unit(args.get(1).map(String::as_str), stdin.lock(), io::stdout())?;

    // 2. Load every shape source; malformed input stops the run here
    let catalog = ShapeCatalog::load(&config)?;
    let shapes = catalog.shapes();
    tracing::info!(
        rectangles = catalog.rectangles.len(),
        circles = catalog.circles.len(),
        triangles = catalog.triangles.len(),
        "catalog loaded"
    );

    // 3. Console report
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &shapes, unit)?;

    // 4. Summary file
    write_summary(&config.output_path, &shapes)?;

    Ok(())
}
