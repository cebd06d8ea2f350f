//! Random sampling of the graph of a function ℝ → ℝ.
//!
//! A [`Sampling`] is built by drawing distinct random abscissas in an
//! interval \[`a`, `b`\] and evaluating the function at each of them.
//! It can be written as comma-separated `x,y` records (one point per
//! line, no header) and read back.
//!
//! # Example
//!
//! ```
//! use curve_data::Sampling;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let s = Sampling::random(|x| x * x + 2. * x + 1., -500., 500.)
//!     .n(5).build()?;
//! assert_eq!(s.len(), 5);
//! s.save("target/random.csv")?;
//! # Ok(()) }
//! ```

use std::{collections::HashSet,
          fmt::{self, Display, Formatter},
          fs::File,
          io::{BufReader, BufWriter, Read, Write},
          path::Path};
use rand::{distributions::Uniform, prelude::*};
use tracing::{debug, info, trace, warn};

mod config;
mod error;

pub use config::{Config, Report, DEFAULT_N, DEFAULT_OUTPUT};
pub use error::Error;

/// A point (`x`, `y`) of the graph, `y` being the value of the
/// function at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A box \[`xmin`, `xmax`\] × \[`ymin`, `ymax`\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    /// Return `true` if the bounding box contains no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.xmin <= self.xmax && self.ymin <= self.ymax) // NAN ⟹ empty
    }

    /// Return `true` if the point `p` belongs to `bb` (possibly on
    /// the boundary).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.xmin <= p.x && p.x <= self.xmax
            && self.ymin <= p.y && p.y <= self.ymax
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "[{}, {}] × [{}, {}]",
               self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// Key identifying an abscissa for the uniqueness test.  `0.` and
/// `-0.` compare equal and thus share a key.
#[inline]
fn key(x: f64) -> u64 {
    if x == 0. { 0 } else { x.to_bits() }
}

////////////////////////////////////////////////////////////////////////
//
// Sampling datastructure

/// A sampling of the graph of a function: points in generation
/// order, with pairwise distinct abscissas when built by
/// [`Sampling::random`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sampling {
    path: Vec<Point>,
}

impl Sampling {
    /// Return `true` if the sampling has no point.
    #[inline]
    pub fn is_empty(&self) -> bool { self.path.is_empty() }

    /// Number of points of the sampling.
    #[inline]
    pub fn len(&self) -> usize { self.path.len() }

    /// The points, in generation order.
    #[inline]
    pub fn points(&self) -> &[Point] { &self.path }

    /// Iterate on the points `[x, y]` in generation order.
    pub fn iter(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.path.iter().map(|p| [p.x, p.y])
    }

    /// Return the smallest rectangle enclosing all the points of the
    /// sampling `self`.  If the sampling is empty, the "min" fields of
    /// the bounding box are set to +∞ and "max" fields to -∞.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bb = BoundingBox {
            xmin: f64::INFINITY,  xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,  ymax: f64::NEG_INFINITY };
        for p in &self.path {
            if p.x < bb.xmin { bb.xmin = p.x }
            if p.x > bb.xmax { bb.xmax = p.x }
            if p.y < bb.ymin { bb.ymin = p.y }
            if p.y > bb.ymax { bb.ymax = p.y }
        }
        bb
    }

    /// Return `true` if no two points share the same abscissa.
    pub fn has_distinct_x(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.path.len());
        self.path.iter().all(|p| seen.insert(key(p.x)))
    }

    /// Evaluate `f` at each of the `xs` (in order, duplicates kept).
    /// No randomness is involved: this regenerates a sampling from
    /// known abscissas, for example those read back from a file.
    pub fn eval<F, I>(mut f: F, xs: I) -> Self
    where F: FnMut(f64) -> f64,
          I: IntoIterator<Item = f64> {
        Sampling { path: xs.into_iter().map(|x| Point { x, y: f(x) })
                   .collect() }
    }
}

impl<T> From<T> for Sampling
where T: IntoIterator<Item = [f64; 2]> {
    /// Return a sampling made of the points, in order.
    fn from(points: T) -> Self {
        Sampling { path: points.into_iter()
                   .map(|[x, y]| Point { x, y }).collect() }
    }
}

////////////////////////////////////////////////////////////////////////
//
// Random sampling

impl Sampling {
    /// Create a sampling of the graph of `f` on the interval
    /// \[`a`, `b`\] at distinct random abscissas, drawn uniformly.
    /// The bounds are checked when the sampling is built.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_data::Sampling;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let s = Sampling::random(f64::sin, 0., 4.).n(100).seed(7).build()?;
    /// assert!(s.iter().all(|[x, y]| 0. <= x && x <= 4. && y == x.sin()));
    /// # Ok(()) }
    /// ```
    #[must_use]
    pub fn random<F>(f: F, a: f64, b: f64) -> Random<F>
    where F: FnMut(f64) -> f64 {
        Random { f, a, b,
                 n: DEFAULT_N,
                 max_attempts: None,
                 seed: None,
                 init: vec![],
                 init_pt: vec![] }
    }
}

/// Random sampling options.  See [`Sampling::random`].
pub struct Random<F> {
    f: F,  a: f64,  b: f64,
    n: usize,
    max_attempts: Option<usize>,
    seed: Option<u64>,
    init: Vec<f64>,
    init_pt: Vec<(f64, f64)>,
}

impl<F> Random<F> {
    /// Set the number of points of the sampling.  Default: 5000.
    pub fn n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Set the maximum number of random draws.  Building fails with
    /// [`Error::AttemptsExhausted`] when `n` distinct abscissas have
    /// not been found within that many draws.  Default:
    /// `max(64 n, 1024)`.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Draw from a generator seeded with `seed` instead of the
    /// thread-local one, making the sampling reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add initial values of `x` such that `f(x)` must be included
    /// into the sampling.  They come first and count toward `n`.
    /// Only the values between `a` and `b` are taken into account
    /// (other values are ignored).
    pub fn init<'a, I>(mut self, xs: I) -> Self
    where I: IntoIterator<Item = &'a f64> {
        for &x in xs {
            if self.a <= x && x <= self.b { // ⟹ x is finite
                self.init.push(x);
            }
        }
        self
    }

    /// Add initial points `(x, f(x))` to include into the sampling,
    /// after those given by [`Random::init`].  This allows you to use
    /// previous evaluations of `f`.  Only the couples with first
    /// coordinate between `a` and `b` are considered.
    pub fn init_pt<'a, I>(mut self, pts: I) -> Self
    where I: IntoIterator<Item = &'a (f64, f64)> {
        for &p in pts {
            if self.a <= p.0 && p.0 <= self.b {
                self.init_pt.push(p);
            }
        }
        self
    }

    fn attempt_cap(&self) -> usize {
        self.max_attempts.unwrap_or_else(|| self.n.saturating_mul(64).max(1024))
    }

    fn check(&self) -> Result<(), Error> {
        if !self.a.is_finite() {
            return Err(Error::NonFiniteBound { name: "a", value: self.a })
        }
        if !self.b.is_finite() {
            return Err(Error::NonFiniteBound { name: "b", value: self.b })
        }
        if self.a > self.b {
            return Err(Error::InvalidInterval { a: self.a, b: self.b })
        }
        // The uniform distribution divides the width by 1 - 2⁻⁵².
        if !((self.b - self.a) / (1. - f64::EPSILON)).is_finite() {
            return Err(Error::RangeOverflow { a: self.a, b: self.b })
        }
        if self.n == 0 { return Err(Error::ZeroCount) }
        if self.max_attempts == Some(0) { return Err(Error::ZeroAttempts) }
        if self.a == self.b && self.n > 1 {
            return Err(Error::DegenerateInterval { a: self.a, n: self.n })
        }
        Ok(())
    }
}

impl<F> Random<F>
where F: FnMut(f64) -> f64 {
    /// Return the sampling, drawing from the thread-local generator
    /// or from the seeded one if [`Random::seed`] was given.
    pub fn build(&mut self) -> Result<Sampling, Error> {
        match self.seed {
            Some(seed) => self.build_with(&mut StdRng::seed_from_u64(seed)),
            None => self.build_with(&mut thread_rng()),
        }
    }

    /// Return the sampling, drawing the abscissas from `rng`.
    pub fn build_with<R>(&mut self, rng: &mut R) -> Result<Sampling, Error>
    where R: Rng + ?Sized {
        self.check()?;
        let n = self.n;
        debug!(a = self.a, b = self.b, n, "random sampling");
        let mut seen = HashSet::with_capacity(n);
        let mut path = Vec::with_capacity(n);
        // `x` ∈ \[`a`, `b`\] already checked by [`init`] and [`init_pt`].
        for &x in &self.init {
            if path.len() == n { break }
            if seen.insert(key(x)) {
                path.push(Point { x, y: (self.f)(x) });
            }
        }
        for &(x, y) in &self.init_pt {
            if path.len() == n { break }
            if seen.insert(key(x)) {
                path.push(Point { x, y });
            }
        }
        if path.len() < n && self.a == self.b {
            // n == 1 and nothing given initially.
            let x = self.a;
            path.push(Point { x, y: (self.f)(x) });
        }
        let max_attempts = self.attempt_cap();
        let dist = Uniform::new_inclusive(self.a, self.b);
        let mut attempts = 0;
        while path.len() < n {
            if attempts == max_attempts {
                warn!(accepted = path.len(), n, attempts,
                      "attempt cap reached");
                return Err(Error::AttemptsExhausted {
                    accepted: path.len(), n, attempts })
            }
            attempts += 1;
            let x = dist.sample(rng);
            if seen.insert(key(x)) {
                path.push(Point { x, y: (self.f)(x) });
            } else {
                trace!(x, "duplicate abscissa rejected");
            }
        }
        debug!(n, attempts, "random sampling done");
        Ok(Sampling { path })
    }
}

////////////////////////////////////////////////////////////////////////
//
// Output

/// # Output
impl Sampling {
    /// Write the sampling to `f` as comma-separated records: each
    /// point is written as "x,y" on a single line, in generation
    /// order, without header.  Numbers use the shortest decimal form
    /// that reads back to the same `f64`.
    pub fn write(&self, f: &mut impl Write) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(f);
        for p in &self.path {
            wtr.write_record([p.x.to_string(), p.y.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the sampling to the file `path` (see
    /// [`Sampling::write`]).  The file is created if needed and
    /// truncated otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let mut fh = BufWriter::new(File::create(path)?);
        self.write(&mut fh)?;
        fh.flush()?;
        info!(n = self.len(), path = %path.display(),
              bounding_box = %self.bounding_box(), "sampling written");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
//
// Input

/// # Input
impl Sampling {
    /// Read a sampling in the format produced by [`Sampling::write`].
    /// Each record must have exactly two fields, both real numbers.
    pub fn read(r: impl Read) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(r);
        let mut path = vec![];
        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            if record.len() != 2 {
                return Err(Error::FieldCount { line, found: record.len() })
            }
            let num = |i: usize| {
                let field = &record[i];
                field.trim().parse::<f64>().map_err(|_| {
                    Error::Parse { line, field: field.to_string() } })
            };
            path.push(Point { x: num(0)?, y: num(1)? });
        }
        Ok(Sampling { path })
    }

    /// Read the sampling stored in the file `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::read(BufReader::new(File::open(path)?))
    }
}

impl Display for Sampling {
    /// Display the sampling in the format of [`Sampling::write`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for p in &self.path {
            writeln!(f, "{},{}", p.x, p.y)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
//
// Tests
