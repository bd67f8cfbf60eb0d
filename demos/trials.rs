use std::error::Error;

use mandelbrot_grid::{raster, trial_line, RenderParameters, TrialHarness};

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let harness = TrialHarness::new(RenderParameters::default())?;
    let report = harness.run_with(|trial, elapsed| println!("{}", trial_line(trial, elapsed)));

    raster::save_pgm("mandelbrot.pgm", report.grid())?;
    println!("{}", report.summary_line());

    Ok(())
}
