//! Frequency sweeps over a system's response, producing plot-ready samples.
//!
//! Two independent strategies: [`log_sweep`] covers the full spectrum
//! logarithmically with a phase trace unwrapped for a traditional Bode plot;
//! [`linear_sweep`] covers a symmetric window around zero and keeps every
//! phase at its principal value.

use crate::{
    util::{round_dp, round_sig},
    System,
};

/// One point of a frequency sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencySample {
    /// Angular frequency ω, rad/s.
    pub frequency: f64,
    /// Linear magnitude `|H(jω)|`.
    pub magnitude: f64,
    /// Phase in degrees. Unwrapped samples may leave `(-180, 180]`.
    pub phase: f64,
}

const LOG_SWEEP_START_EXP: f64 = -1.0; // 10^-1 rad/s
const LOG_SWEEP_END_EXP: f64 = 4.0; // 10^4 rad/s
const LOG_SWEEP_DEFAULT_POINTS: usize = 200;

const LINEAR_SWEEP_MIN_HALF_WIDTH: f64 = 20.0; // rad/s
const LINEAR_SWEEP_DEFAULT_POINTS: usize = 400;

/// Logarithmic full-spectrum sweep with the default 200 intervals
/// (201 samples). See [`log_sweep_with_points`].
#[must_use]
pub fn log_sweep(system: &System) -> Vec<FrequencySample> {
    log_sweep_with_points(system, LOG_SWEEP_DEFAULT_POINTS)
}

/// Sample `H(jω)` logarithmically from 0.1 to 10⁴ rad/s, `points + 1`
/// samples inclusive of both ends, in ascending frequency order.
///
/// The phase trace is unwrapped: each sample's phase is shifted by whole
/// turns until it is within 180° of the previous (already unwrapped)
/// sample's, producing a continuous trace at the cost of leaving
/// `(-180, 180]`. Frequency, magnitude and phase are rounded to 4
/// significant digits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn log_sweep_with_points(system: &System, points: usize) -> Vec<FrequencySample> {
    let step = (LOG_SWEEP_END_EXP - LOG_SWEEP_START_EXP) / points as f64;

    let mut samples = Vec::with_capacity(points + 1);
    let mut previous_phase = 0.0;
    for i in 0..=points {
        let omega = 10f64.powf(LOG_SWEEP_START_EXP + i as f64 * step);
        let magnitude = system.magnitude_at(omega);
        let mut phase = system.phase_at(omega);

        // unwrap against the previous sample, which is already unwrapped
        if i > 0 {
            while phase - previous_phase > 180.0 {
                phase -= 360.0;
            }
            while phase - previous_phase < -180.0 {
                phase += 360.0;
            }
        }
        previous_phase = phase;

        samples.push(FrequencySample {
            frequency: round_sig(omega, 4),
            magnitude: round_sig(magnitude, 4),
            phase: round_sig(phase, 4),
        });
    }
    samples
}

/// Linear symmetric sweep with the default 400 intervals (401 samples).
/// See [`linear_sweep_with_points`].
#[must_use]
pub fn linear_sweep(system: &System) -> Vec<FrequencySample> {
    linear_sweep_with_points(system, LINEAR_SWEEP_DEFAULT_POINTS)
}

/// Sample `H(jω)` linearly over a window symmetric around zero, `points + 1`
/// samples inclusive of both ends, in ascending frequency order.
///
/// The half-width is the larger of 20 rad/s and twice the largest
/// imaginary-part magnitude among the system's poles and zeros, so the
/// window always covers the resonant region. Phase is *not* unwrapped;
/// every sample carries the principal value in `(-180, 180]`. Frequency and
/// phase are rounded to 2 decimal places, magnitude to 4 significant digits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linear_sweep_with_points(system: &System, points: usize) -> Vec<FrequencySample> {
    let half_width = LINEAR_SWEEP_MIN_HALF_WIDTH.max(2.0 * system.max_imag());
    let step = 2.0 * half_width / points as f64;

    let mut samples = Vec::with_capacity(points + 1);
    for i in 0..=points {
        let omega = -half_width + i as f64 * step;
        let mut phase = round_dp(system.phase_at(omega), 2);
        // rounding can land a phase just inside (-180, 180] on the excluded
        // boundary itself; fold it back to the included one
        if phase == -180.0 {
            phase = 180.0;
        }
        samples.push(FrequencySample {
            frequency: round_dp(omega, 2),
            magnitude: round_sig(system.magnitude_at(omega), 4),
            phase,
        });
    }
    samples
}
