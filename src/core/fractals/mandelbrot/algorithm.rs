use crate::core::actions::compute_field::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::SENTINEL;

const CARDIOID_DISC_CENTER: Complex = Complex::new(-1.0, 0.0);
const CARDIOID_DISC_RADIUS: f64 = 0.25;
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time classifier for `z ← z² + c` starting at `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: i32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: i32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    /// Points within 0.25 of `-1 + 0i`.
    ///
    /// This is a disc around the centre of the period-2 bulb rather than the
    /// cardioid proper; the rendered output depends on it staying exactly this.
    #[must_use]
    pub fn in_cardioid_disc(c: Complex) -> bool {
        (c - CARDIOID_DISC_CENTER).magnitude() < CARDIOID_DISC_RADIUS
    }

    /// Closed-form membership test covering the main cardioid and the period-2 bulb.
    ///
    /// `|c|²` is taken as the square of the same magnitude the disc test uses.
    #[must_use]
    pub fn in_cardioid_or_period2_bulb(c: Complex) -> bool {
        let magnitude = c.magnitude();
        let m = magnitude * magnitude;
        m * (8.0 * m - 3.0) < 3.0 / 32.0 - c.real
    }

    /// Iterates until `|z| ≥ 2` or the bound is reached.
    ///
    /// Counts are taken after each step, so an escape is reported as `1..max_iterations`.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> i32 {
        if self.max_iterations <= 0 {
            return SENTINEL;
        }

        let mut z = Complex::ZERO;
        let mut iteration = 0;

        loop {
            z = z * z + c;
            iteration += 1;

            if iteration >= self.max_iterations || z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
                break;
            }
        }

        if iteration == self.max_iterations {
            SENTINEL
        } else {
            iteration
        }
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn classify(&self, c: Complex) -> i32 {
        if Self::in_cardioid_disc(c) || Self::in_cardioid_or_period2_bulb(c) {
            return SENTINEL;
        }

        self.escape_time(c)
    }
}
