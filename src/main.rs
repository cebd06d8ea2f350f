use anyhow::Context;
use tracing_subscriber::EnvFilter;
use curve_data::Config;

const MIN_X: f64 = -500.;
const MAX_X: f64 = 500.;
const NUM_POINTS: usize = 5000;
const OUTPUT_FILE: &str = "data.csv";

/// y = 3 (x² / 8) - 2x / 3 + 17
fn equation(x: f64) -> f64 {
    3. * (x.powi(2) / 8.) - (2. * x / 3.) + 17.
}

fn init_logging() {
    // Quiet by default, overridable via RUST_LOG.  Logs go to stderr,
    // stdout only gets the summary line.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let mut config = Config::new(equation, MIN_X, MAX_X);
    config.n = NUM_POINTS;
    config.output = OUTPUT_FILE.into();
    let report = config.run()
        .with_context(|| format!("cannot generate {}", OUTPUT_FILE))?;
    println!("{}", report);
    Ok(())
}
