//! Configuration of a complete run: sample the function, then write
//! the points to a file.

use std::{fmt::{self, Display, Formatter},
          path::PathBuf};
use crate::{BoundingBox, Error, Sampling};

/// Default number of points.
pub const DEFAULT_N: usize = 5000;

/// Default destination file.
pub const DEFAULT_OUTPUT: &str = "data.csv";

/// Everything a run needs, passed by value to [`Config::run`].
#[derive(Debug, Clone)]
pub struct Config<F> {
    /// The function whose graph is sampled.
    pub f: F,
    pub min_x: f64,
    pub max_x: f64,
    /// Number of distinct abscissas to draw.
    pub n: usize,
    /// Cap on the number of random draws (see
    /// [`Random::max_attempts`](crate::Random::max_attempts)).
    pub max_attempts: Option<usize>,
    pub seed: Option<u64>,
    /// Destination file, overwritten if it exists.
    pub output: PathBuf,
}

impl<F> Config<F>
where F: FnMut(f64) -> f64 {
    /// Configuration sampling `f` on \[`min_x`, `max_x`\] with
    /// [`DEFAULT_N`] points written to [`DEFAULT_OUTPUT`].
    pub fn new(f: F, min_x: f64, max_x: f64) -> Self {
        Config { f, min_x, max_x,
                 n: DEFAULT_N,
                 max_attempts: None,
                 seed: None,
                 output: PathBuf::from(DEFAULT_OUTPUT) }
    }

    /// Sample the function and write the points to `self.output`.
    /// Nothing is written if the sampling fails.
    pub fn run(self) -> Result<Report, Error> {
        let mut opts = Sampling::random(self.f, self.min_x, self.max_x)
            .n(self.n);
        if let Some(m) = self.max_attempts { opts = opts.max_attempts(m) }
        if let Some(seed) = self.seed { opts = opts.seed(seed) }
        let s = opts.build()?;
        s.save(&self.output)?;
        Ok(Report { n: s.len(),
                    path: self.output,
                    bounding_box: s.bounding_box() })
    }
}

/// Outcome of a successful [`Config::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub n: usize,
    pub path: PathBuf,
    pub bounding_box: BoundingBox,
}

impl Display for Report {
    /// One-line human readable summary.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Wrote {} data points to {}", self.n, self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::{BoundingBox, Config, Report};

    #[test]
    fn defaults() {
        let c = Config::new(|x| x, -500., 500.);
        assert_eq!(c.n, 5000);
        assert_eq!(c.output, PathBuf::from("data.csv"));
        assert_eq!(c.max_attempts, None);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn report_message() {
        let r = Report { n: 5000,
                         path: PathBuf::from("data.csv"),
                         bounding_box: BoundingBox { xmin: 0., xmax: 1.,
                                                     ymin: 0., ymax: 1. } };
        assert_eq!(r.to_string(), "Wrote 5000 data points to data.csv");
    }
}
