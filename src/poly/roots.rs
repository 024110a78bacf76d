use std::f64::consts::TAU;

use itertools::Itertools;

use crate::{
    util::{round_dp, CONVERGENCE_EPS, DIVISOR_EPS},
    Complex64, Poly,
};

/// Iteration cap; in practice low-degree polynomials converge in far fewer
/// sweeps.
const MAX_SWEEPS: usize = 50;

/// Synthetic identifier for a [`Root`], distinct within a single call.
///
/// Carries no numerical meaning; it only lets a caller track individual
/// roots across edits. The high 32 bits are a per-call nonce (so ids from
/// separate calls are in practice distinct too, though that is not
/// guaranteed), the low bits the candidate index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RootId(pub u64);

/// A root of a polynomial, as returned by [`Poly::roots`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    pub id: RootId,
    pub value: Complex64,
}

impl Poly {
    /// Find all complex roots using the Durand–Kerner method.
    ///
    /// All roots are refined simultaneously, so repeated roots come back as
    /// repeated near-identical entries; no deduplication or multiplicity
    /// detection is performed. Root values are rounded to 4 decimal places.
    ///
    /// A constant (or zero) polynomial has no roots and yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use bode_core::{Complex64, Poly};
    ///
    /// // s^2 + 2s + 101 = (s + 1 - 10i)(s + 1 + 10i)
    /// let roots = Poly::new(vec![1.0, 2.0, 101.0]).roots();
    /// assert_eq!(roots.len(), 2);
    /// assert!(roots
    ///     .iter()
    ///     .all(|r| (r.value.re - -1.0).abs() < 1e-3 && (r.value.im.abs() - 10.0).abs() < 1e-3));
    /// ```
    #[must_use]
    pub fn roots(&self) -> Vec<Root> {
        self.roots_with_rng(&mut fastrand::Rng::new())
    }

    /// Same as [`Poly::roots`], with an injected random source.
    ///
    /// The rng only perturbs the initial candidate circle (and the id
    /// nonce); it steers the convergence path, never the converged roots.
    /// Seed it to make tests reproducible.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn roots_with_rng(&self, rng: &mut fastrand::Rng) -> Vec<Root> {
        if self.is_constant() {
            return vec![];
        }

        let mut this = self.clone();
        this.make_monic();
        let degree = this.degree();
        let call_nonce = u64::from(rng.u32(..));

        // Candidates start equally spaced on a randomly rotated circle. The
        // radius avoids the degenerate value 1; the rotation keeps the start
        // off the real axis, where an aligned configuration stays real
        // forever and complex roots are unreachable. Both only perturb the
        // convergence path, never the converged roots.
        let radius = 0.4 + 0.9 * rng.f64();
        let rotation = rng.f64() * TAU;
        let mut candidates = (0..degree)
            .map(|k| Complex64::from_polar(radius, rotation + TAU * k as f64 / degree as f64))
            .collect_vec();
        let mut next = candidates.clone();

        let mut converged = false;
        for sweep in 1..=MAX_SWEEPS {
            let mut max_correction = 0.0f64;

            // simultaneous update: every candidate in this sweep is computed
            // from the same snapshot
            for i in 0..degree {
                let pz = this.eval(candidates[i]);
                let mut denom = Complex64::new(1.0, 0.0);
                for j in 0..degree {
                    if i == j {
                        continue;
                    }
                    let mut diff = candidates[i] - candidates[j];
                    if diff.norm_sqr() < DIVISOR_EPS * DIVISOR_EPS {
                        // coincident candidates; nudge instead of dividing by zero
                        diff = Complex64::new(DIVISOR_EPS, 0.0);
                    }
                    denom *= diff;
                }
                let delta = pz / denom;
                next[i] = candidates[i] - delta;
                max_correction = max_correction.max(delta.norm());
            }
            std::mem::swap(&mut candidates, &mut next);
            log::trace!("{candidates:?}");

            if max_correction < CONVERGENCE_EPS {
                log::debug!("converged after {sweep} sweeps");
                converged = true;
                break;
            }
        }
        if !converged {
            log::debug!("iteration cap of {MAX_SWEEPS} sweeps exhausted, returning last candidates");
        }

        candidates
            .into_iter()
            .enumerate()
            .map(|(i, z)| Root {
                id: RootId((call_nonce << 32) | i as u64),
                value: Complex64::new(round_dp(z.re, 4), round_dp(z.im, 4)),
            })
            .collect()
    }
}
