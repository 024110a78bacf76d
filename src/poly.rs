use crate::{Complex64, Error};

pub mod roots;

/// A real-coefficient polynomial, stored highest degree first.
///
/// Leading zero coefficients are trimmed on construction, so `self.0[0]` is
/// nonzero whenever the polynomial is nonconstant.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(pub(crate) Vec<f64>);

impl Poly {
    /// Create a polynomial from coefficients in descending degree order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bode_core::Poly;
    ///
    /// // leading zeros do not change the polynomial
    /// assert_eq!(Poly::new(vec![0.0, 0.0, 1.0, 2.0]), Poly::new(vec![1.0, 2.0]));
    /// ```
    #[must_use]
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self(coeffs).trim_zeros()
    }

    /// Parse whitespace-separated coefficients, descending degree order.
    ///
    /// # Errors
    /// - [`Error::EmptyCoefficients`] if the input contains no tokens
    /// - [`Error::ParseCoefficient`] naming the first token that is not a
    ///   valid real number; no partial result is produced
    ///
    /// ```
    /// use bode_core::Poly;
    ///
    /// let p = Poly::parse("1 2 101").unwrap();
    /// assert_eq!(p.degree(), 2);
    /// assert!(Poly::parse("1 oops 3").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let coeffs = input
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| Error::ParseCoefficient {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if coeffs.is_empty() {
            return Err(Error::EmptyCoefficients);
        }
        Ok(Self::new(coeffs))
    }

    /// Removes leading zero coefficients
    fn trim_zeros(self) -> Self {
        let first = self.0.iter().take_while(|c| **c == 0.0).count();
        Self(self.0[first..].to_vec())
    }

    /// Number of coefficients, excluding trimmed leading zeros.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Degree of the polynomial; zero for constants and the empty polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// A constant polynomial has no roots.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.len() <= 1
    }

    /// The first nonzero coefficient, if any.
    pub(crate) fn leading(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Make the polynomial monic in-place.
    ///
    /// Scales all coefficients such that the leading one is 1; the roots are
    /// preserved.
    pub(crate) fn make_monic(&mut self) {
        let Some(leading) = self.leading() else {
            return;
        };
        // pre-condition: leading is nonzero (trimmed on construction)
        debug_assert!(leading != 0.0);
        for c in &mut self.0 {
            *c /= leading;
        }
    }

    /// Evaluate the polynomial at a complex point using Horner's scheme.
    ///
    /// A degree-0 polynomial evaluates to its constant everywhere; the empty
    /// polynomial evaluates to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bode_core::{Complex64, Poly};
    ///
    /// // x^2 + 2x + 1
    /// let p = Poly::new(vec![1.0, 2.0, 1.0]);
    /// assert_eq!(p.eval(Complex64::new(-1.0, 0.0)), Complex64::new(0.0, 0.0));
    /// assert_eq!(p.eval(Complex64::new(1.0, 0.0)), Complex64::new(4.0, 0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        let mut y = Complex64::new(0.0, 0.0);
        for c in &self.0 {
            y = y * x + *c;
        }
        y
    }
}

#[cfg(test)]
mod test {
    use super::Poly;
    use crate::{Complex64, Error};

    #[test]
    fn parse_rejects_bad_token() {
        let err = Poly::parse("1 2 x1").unwrap_err();
        assert!(matches!(err, Error::ParseCoefficient { ref token } if token == "x1"));
        assert_eq!(err.to_string(), "invalid coefficient: \"x1\"");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(
            Poly::parse("   "),
            Err(Error::EmptyCoefficients)
        ));
    }

    #[test]
    fn constant_evaluates_everywhere() {
        let p = Poly::new(vec![3.5]);
        assert_eq!(p.eval(Complex64::new(0.0, 0.0)).re, 3.5);
        assert_eq!(p.eval(Complex64::new(-7.0, 2.0)).re, 3.5);
    }

    #[test]
    fn horner_at_complex_point() {
        // s^2 + 2s + 101 at s = -1 + 10i is 0
        let p = Poly::new(vec![1.0, 2.0, 101.0]);
        let y = p.eval(Complex64::new(-1.0, 10.0));
        assert!(y.norm() < 1e-12);
    }

    #[test]
    fn make_monic_preserves_roots() {
        let mut p = Poly::new(vec![2.0, 4.0, 2.0]);
        p.make_monic();
        assert_eq!(p, Poly::new(vec![1.0, 2.0, 1.0]));
    }
}
