use proptest::prelude::*;
use curve_data::Sampling;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_sampling_invariants(a in -1e6f64..1e6,
                                  width in 1e-3f64..1e6,
                                  n in 1usize..200,
                                  seed: u64) {
        let b = a + width;
        let f = |x: f64| x.sin() * x;
        let s = Sampling::random(f, a, b).n(n).seed(seed).build().unwrap();
        prop_assert_eq!(s.len(), n);
        prop_assert!(s.has_distinct_x());
        for [x, y] in s.iter() {
            prop_assert!(a <= x && x <= b);
            prop_assert_eq!(y, f(x));
        }
    }

    #[test]
    fn written_text_reads_back(seed: u64, n in 1usize..50) {
        let s = Sampling::random(|x| x.exp(), -20., 20.).n(n).seed(seed)
            .build().unwrap();
        let mut buf = vec![];
        s.write(&mut buf).unwrap();
        prop_assert_eq!(Sampling::read(&buf[..]).unwrap(), s);
    }
}
