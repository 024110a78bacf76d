use std::f64::consts::PI;

use itertools::Itertools;

use crate::{util::MAG_FLOOR, Complex64, Error, Poly};

/// A continuous LTI system in factored form:
/// `H(s) = gain · Π(s − zᵢ) / Π(s − pⱼ)`.
///
/// Zero and pole lists may be empty (the trivial factor 1) and their order
/// is preserved for stable output. The gain may be negative, indicating a
/// 180° phase inversion.
#[derive(Clone, Debug, PartialEq)]
pub struct System {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

impl System {
    #[must_use]
    pub fn new(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self { zeros, poles, gain }
    }

    /// Build a system from numerator/denominator coefficient polynomials.
    ///
    /// Zeros are the roots of the numerator ([`Poly::roots`]), poles the
    /// roots of the denominator. The gain is the leading (first nonzero)
    /// numerator coefficient over the leading denominator coefficient, which
    /// is what falls out of factoring both polynomials monic.
    #[must_use]
    pub fn from_transfer_function(numerator: &Poly, denominator: &Poly) -> Self {
        Self::from_transfer_function_with_rng(numerator, denominator, &mut fastrand::Rng::new())
    }

    /// Same as [`System::from_transfer_function`], with an injected random
    /// source for the root finder.
    #[must_use]
    pub fn from_transfer_function_with_rng(
        numerator: &Poly,
        denominator: &Poly,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let zeros = numerator
            .roots_with_rng(rng)
            .into_iter()
            .map(|r| r.value)
            .collect_vec();
        let poles = denominator
            .roots_with_rng(rng)
            .into_iter()
            .map(|r| r.value)
            .collect_vec();
        let gain = numerator.leading().unwrap_or(0.0) / denominator.leading().unwrap_or(1.0);
        Self { zeros, poles, gain }
    }

    /// Parse two whitespace-separated coefficient strings (descending degree
    /// order) and build the system they describe.
    ///
    /// # Errors
    /// Fails like [`Poly::parse`] on an empty or non-numeric coefficient
    /// sequence; no partial system is produced.
    pub fn parse_transfer_function(
        numerator: &str,
        denominator: &str,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, Error> {
        let num = Poly::parse(numerator)?;
        let den = Poly::parse(denominator)?;
        Ok(Self::from_transfer_function_with_rng(&num, &den, rng))
    }

    /// Linear magnitude `|H(jω)|`.
    ///
    /// Each factor `jω − z` has modulus `√(z.re² + (ω − z.im)²)`. The
    /// denominator product is floored to a small epsilon before dividing, so
    /// a pole sitting exactly on the evaluation point yields a huge finite
    /// value instead of infinity.
    #[must_use]
    pub fn magnitude_at(&self, omega: f64) -> f64 {
        let factor = |v: &Complex64| (v.re * v.re + (omega - v.im) * (omega - v.im)).sqrt();
        let numerator: f64 = self.zeros.iter().map(factor).product();
        let denominator: f64 = self.poles.iter().map(factor).product();
        self.gain.abs() * numerator / denominator.max(MAG_FLOOR)
    }

    /// Phase of `H(jω)` in degrees, normalized into `(-180, 180]`.
    ///
    /// A negative gain contributes 180°; each zero adds
    /// `atan2(ω − z.im, −z.re)` and each pole subtracts the analogous term.
    #[must_use]
    pub fn phase_at(&self, omega: f64) -> f64 {
        let mut phase = if self.gain < 0.0 { PI } else { 0.0 };
        for z in &self.zeros {
            phase += f64::atan2(omega - z.im, -z.re);
        }
        for p in &self.poles {
            phase -= f64::atan2(omega - p.im, -p.re);
        }
        normalize_phase_deg(phase.to_degrees())
    }

    /// Largest imaginary-part magnitude among all poles and zeros; zero for
    /// a system with neither.
    pub(crate) fn max_imag(&self) -> f64 {
        self.poles
            .iter()
            .chain(&self.zeros)
            .map(|v| v.im.abs())
            .fold(0.0, f64::max)
    }
}

/// Normalize a phase in degrees into the half-open interval `(-180, 180]`.
pub(crate) fn normalize_phase_deg(mut phase: f64) -> f64 {
    while phase > 180.0 {
        phase -= 360.0;
    }
    while phase <= -180.0 {
        phase += 360.0;
    }
    phase
}

#[cfg(test)]
mod test {
    use super::{normalize_phase_deg, System};
    use crate::{Complex64, Poly};

    #[test]
    fn pure_gain_magnitude_and_phase() {
        let positive = System::new(vec![], vec![], 2.5);
        for omega in [-100.0, 0.0, 0.3, 1e4] {
            assert_eq!(positive.magnitude_at(omega), 2.5);
            assert_eq!(positive.phase_at(omega), 0.0);
        }

        let negative = System::new(vec![], vec![], -2.5);
        assert_eq!(negative.magnitude_at(10.0), 2.5);
        // either boundary representation of a 180 degree inversion is fine
        assert!((negative.phase_at(10.0).abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn single_pole_magnitude() {
        // H(s) = 1 / (s + 1); |H(j1)| = 1/sqrt(2)
        let system = System::new(vec![], vec![Complex64::new(-1.0, 0.0)], 1.0);
        assert!((system.magnitude_at(1.0) - 1.0 / 2.0f64.sqrt()).abs() < 1e-12);
        assert!((system.phase_at(1.0) - -45.0).abs() < 1e-9);
    }

    #[test]
    fn pole_on_the_evaluation_point_is_floored() {
        // pole at s = 10i, evaluated at omega = 10
        let system = System::new(vec![], vec![Complex64::new(0.0, 10.0)], 1.0);
        let mag = system.magnitude_at(10.0);
        assert!(mag.is_finite());
        assert!(mag >= 1e9);
    }

    #[test]
    fn gain_from_leading_coefficients() {
        // H(s) = (2s + 4) / (4s^2 + ...) -> K = 2/4
        let num = Poly::new(vec![2.0, 4.0]);
        let den = Poly::new(vec![4.0, 8.0, 4.0]);
        let mut rng = fastrand::Rng::with_seed(7);
        let system = System::from_transfer_function_with_rng(&num, &den, &mut rng);
        assert!((system.gain - 0.5).abs() < 1e-12);
        assert_eq!(system.zeros.len(), 1);
        assert_eq!(system.poles.len(), 2);
    }

    #[test]
    fn parse_transfer_function_propagates_errors() {
        let mut rng = fastrand::Rng::with_seed(8);
        assert!(System::parse_transfer_function("1 2", "", &mut rng).is_err());
        assert!(System::parse_transfer_function("1 nope", "1", &mut rng).is_err());
    }

    #[test]
    fn phase_normalization_boundaries() {
        assert_eq!(normalize_phase_deg(180.0), 180.0);
        assert_eq!(normalize_phase_deg(-180.0), 180.0);
        assert_eq!(normalize_phase_deg(540.0), 180.0);
        assert_eq!(normalize_phase_deg(-190.0), 170.0);
    }
}
