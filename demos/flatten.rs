//! Flattens a handful of shapes and probes them for containment.
//!
//! ```text
//! cargo run --example flatten                  # default flatness 0.5
//! cargo run --example flatten -- 0.05          # finer polylines
//! RUST_LOG=euklid=trace cargo run --example flatten
//! ```

use euklid::geometry::{AnyShape, Arc, ArcType, Circle, CubicCurve, Ellipse, Rect, RoundRect, Shape};
use euklid::path::{Area, Path, PathIterator};
use euklid::transform::Transform;
use euklid::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for euklid.
    // Override with RUST_LOG env var (e.g. RUST_LOG=euklid=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flatten=info".parse().unwrap_or_default())
        .add_directive("euklid=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let flatness = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(0.5);

    let shapes: Vec<(&str, AnyShape)> = vec![
        ("rect", Rect::new(0.0, 0.0, 40.0, 20.0).into()),
        ("ellipse", Ellipse::new(0.0, 0.0, 40.0, 20.0).into()),
        ("circle", Circle::new(10.0, 10.0, 10.0).into()),
        (
            "round rect",
            RoundRect::new(0.0, 0.0, 40.0, 20.0, 8.0, 8.0).into(),
        ),
        (
            "pie",
            Arc::new(Rect::new(0.0, 0.0, 40.0, 40.0), 30.0, 300.0, ArcType::Pie).into(),
        ),
        (
            "cubic",
            CubicCurve::new(0.0, 0.0, 0.0, 30.0, 40.0, 30.0, 40.0, 0.0).into(),
        ),
    ];

    let tilt = Transform::rigid(std::f64::consts::FRAC_PI_6, 100.0, 50.0);
    for (name, shape) in &shapes {
        let flat = shape.flattened_path_iter(Some(&tilt), flatness)?;
        let count = flat.segments().count();
        let b = shape.bounds();
        tracing::info!(
            shape = name,
            segments = count,
            center_inside = shape.contains(b.center_x(), b.center_y()),
            "flattened"
        );
    }

    let mut path = Path::new();
    path.move_to(0.0, 0.0);
    path.line_to(30.0, 0.0)?;
    path.quad_to(40.0, 15.0, 30.0, 30.0)?;
    path.line_to(0.0, 30.0)?;
    let area = Area::from(&path);
    tracing::info!(
        segments = area.segments().len(),
        inside = area.contains(15.0, 15.0),
        outside = area.contains(45.0, 15.0),
        "area"
    );
    Ok(())
}
