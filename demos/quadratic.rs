use std::error::Error;
use curve_data::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = Config::new(|x| x * x + 2. * x + 1., -500., 500.);
    config.n = 5;
    config.output = "/tmp/quadratic.csv".into();
    let report = config.run()?;
    println!("{}", report);
    println!("bounding box: {}", report.bounding_box);
    Ok(())
}
