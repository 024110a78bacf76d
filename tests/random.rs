//! Exploratory tests which use randomized test cases

use fastrand::Rng;

use bode_core::Poly;

/// For a monic polynomial, the sum of all roots is minus the second
/// coefficient (Vieta). Exercises the solver over random cases.
#[test]
fn root_sum_matches_vieta() {
    // RUST_LOG=trace prints the candidate path of every solver sweep
    let _ = simple_logger::SimpleLogger::new().env().init();

    let case = |degree: usize, seed: u64, cases: usize| {
        let mut rng = Rng::with_seed(seed);
        for i in 0..cases {
            let mut coeffs = vec![1.0];
            for _ in 0..degree {
                coeffs.push(rng.f64() * 8.0 - 4.0);
            }
            let poly = Poly::new(coeffs.clone());

            let roots = poly.roots_with_rng(&mut rng);
            assert_eq!(roots.len(), degree);

            let sum: f64 = roots.iter().map(|r| r.value.re).sum();
            let imag_sum: f64 = roots.iter().map(|r| r.value.im).sum();
            assert!(
                (sum - -coeffs[1]).abs() < 1e-3,
                "re sum {sum} vs {} for {coeffs:?} @ iter = {i}",
                -coeffs[1]
            );
            // real coefficients: roots come in conjugate pairs
            assert!(imag_sum.abs() < 1e-3, "im sum {imag_sum} for {coeffs:?}");
        }
    };

    case(2, 1, 50);
    case(3, 2, 50);
    case(4, 3, 30);
}
