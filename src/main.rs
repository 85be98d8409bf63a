use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use escape_field::{MandelbrotConfig, NeverCancel, compute_field_using};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MandelbrotConfig::default();
    let viewport = config.viewport();

    info!(
        pixel_width = viewport.pixel_width(),
        pixel_height = viewport.pixel_height(),
        max_iterations = viewport.max_iterations(),
        strategy = %config.strategy,
        "computing Mandelbrot escape field"
    );

    let start = Instant::now();
    let last_decile = AtomicUsize::new(0);
    let progress = |fraction: f64| {
        let decile = (fraction * 10.0) as usize;
        if last_decile.fetch_max(decile, Ordering::Relaxed) < decile {
            info!(percent = decile * 10, "progress");
        }
    };

    let field = compute_field_using(config.strategy, &viewport, &NeverCancel, &progress)?;

    info!(
        cells = field.len(),
        members = field.member_count(),
        duration = ?start.elapsed(),
        "escape field ready"
    );

    Ok(())
}
