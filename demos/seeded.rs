use std::{error::Error,
          fs::File,
          io::BufWriter};
use curve_data::Sampling;

fn main() -> Result<(), Box<dyn Error>> {
    let f = |x: f64| (- x.powi(2)).exp();
    let s = Sampling::random(f, -2.5, 2.5).n(200).seed(42)
        .init(&[-2.5, 0., 2.5]).build()?;
    s.write(&mut BufWriter::new(File::create("/tmp/gauss.csv")?))?;

    // Same abscissas, other function.
    let xs = Sampling::load("/tmp/gauss.csv")?;
    let s = Sampling::eval(f64::sin, xs.iter().map(|[x, _]| x));
    s.save("/tmp/gauss_sin.csv")?;
    Ok(())
}
