use std::fs;
use approx::assert_relative_eq;
use curve_data::{Config, Error, Sampling};

fn quadratic(x: f64) -> f64 { x * x + 2. * x + 1. }

#[test]
fn run_writes_n_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::new(quadratic, -500., 500.);
    config.n = 5;
    config.output = dir.path().join("data.csv");
    let report = config.run().unwrap();
    assert_eq!(report.n, 5);
    assert_eq!(report.to_string(),
               format!("Wrote 5 data points to {}", report.path.display()));

    let text = fs::read_to_string(&report.path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    let s = Sampling::load(&report.path).unwrap();
    assert!(s.has_distinct_x());
    for [x, y] in s.iter() {
        assert!((-500. ..= 500.).contains(&x));
        assert_relative_eq!(y, quadratic(x), max_relative = 1e-12);
    }
}

#[test]
fn regenerate_from_parsed_x_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let f = |x: f64| 3. * (x.powi(2) / 8.) - (2. * x / 3.) + 17.;
    Sampling::random(f, -500., 500.).n(300).build().unwrap()
        .save(&path).unwrap();
    let written = fs::read_to_string(&path).unwrap();

    let parsed = Sampling::load(&path).unwrap();
    let again = Sampling::eval(f, parsed.iter().map(|[x, _]| x));
    assert_eq!(again.to_string(), written);
}

#[test]
fn save_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, "garbage\n".repeat(100)).unwrap();
    let s = Sampling::from([[1., 2.]]);
    s.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1,2\n");
}

#[test]
fn single_point_on_degenerate_interval() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::new(quadratic, 7., 7.);
    config.n = 1;
    config.output = dir.path().join("one.csv");
    let report = config.run().unwrap();
    assert_eq!(fs::read_to_string(&report.path).unwrap(), "7,64\n");
}

#[test]
fn degenerate_interval_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::new(quadratic, 7., 7.);
    config.n = 2;
    config.output = dir.path().join("two.csv");
    let e = config.run().unwrap_err();
    assert!(matches!(e, Error::DegenerateInterval { n: 2, .. }));
    assert!(e.is_config());
    assert!(!dir.path().join("two.csv").exists());
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::new(quadratic, 0., 1.);
    config.n = 3;
    config.output = dir.path().join("missing").join("data.csv");
    assert!(matches!(config.run(), Err(Error::Io(_))));
}
