//! Internal numeric utilities, not part of the API

use std::cmp::Ordering;

use crate::Complex64;

/// Stop the root iteration once the largest correction falls below this.
pub(crate) const CONVERGENCE_EPS: f64 = 1e-6;

/// Substituted for a vanishing difference between two root candidates, so a
/// coincident pair perturbs apart instead of propagating NaN.
pub(crate) const DIVISOR_EPS: f64 = 1e-12;

/// Floor for the response denominator magnitude when a pole sits exactly on
/// the evaluation point.
pub(crate) const MAG_FLOOR: f64 = 1e-10;

/// Round to a number of significant digits, like JS `Number.toPrecision`.
pub(crate) fn round_sig(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = x.abs().log10().floor() as i32;
    let shift = digits - 1 - magnitude;
    // keep the scale an exact integer power of ten on either side
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (x / factor).round() * factor
    }
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_dp(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}

// sort a slice of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut(v: &mut [Complex64]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

// re-exported by crate root
#[doc(hidden)]
pub mod __testing {
    //! Testing utilities, do not depend on any of these in production!

    use super::complex_sort_mut;
    use crate::Complex64;

    /// Check that two sets of roots agree pairwise within `tolerance`,
    /// ignoring ordering.
    #[must_use]
    pub fn check_roots(
        mut roots: Vec<Complex64>,
        mut expected: Vec<Complex64>,
        tolerance: f64,
    ) -> bool {
        if roots.len() != expected.len() {
            return false;
        }
        complex_sort_mut(&mut roots);
        complex_sort_mut(&mut expected);
        roots
            .iter()
            .zip(expected.iter())
            .all(|(a, b)| (a - b).norm() <= tolerance)
    }
}

#[cfg(test)]
mod test {
    use super::{round_dp, round_sig};

    #[test]
    fn round_sig_matches_to_precision() {
        assert_eq!(round_sig(123.456, 4), 123.5);
        assert_eq!(round_sig(0.001_234_4, 4), 0.001_234);
        assert_eq!(round_sig(-98765.0, 4), -98770.0);
        assert_eq!(round_sig(0.0, 4), 0.0);
    }

    #[test]
    fn round_dp_matches_to_fixed() {
        assert_eq!(round_dp(0.125, 2), 0.13);
        assert_eq!(round_dp(-1.005, 1), -1.0);
        assert_eq!(round_dp(3.14159, 4), 3.1416);
    }
}
