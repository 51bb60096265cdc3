use heapless::Vec;
use libm::{floor, fmod};

use crate::color::{Hsl, Rgb, hsl2rgb};
use crate::error::{Error, Result};

/// Maximum number of color stops in one gradient
pub const MAX_GRADIENT_STOPS: usize = 8;

/// Cyclic gradient over time
///
/// The period is split into one phase per stop. During a phase the color
/// moves linearly in HSL space from its stop to the next one, the last
/// phase wraps back to the first stop.
///
/// Times are `f64`, only the proportion within a phase is narrowed to
/// `f32` for mixing.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGradient {
    stops: Vec<Hsl, MAX_GRADIENT_STOPS>,
    period: f64,
    phase_offset: f64,
}

impl TimeGradient {
    /// Create a gradient cycling through `stops` once per `period`
    ///
    /// Fails if the period is not a positive finite number or if there are
    /// no stops (or more than [`MAX_GRADIENT_STOPS`]).
    pub fn new(stops: &[Hsl], period: f64) -> Result<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(Error::InvalidParameter("gradient period must be positive"));
        }
        if stops.is_empty() {
            return Err(Error::InvalidParameter("gradient needs at least one stop"));
        }
        let stops = Vec::from_slice(stops)
            .map_err(|()| Error::InvalidParameter("too many gradient stops"))?;

        Ok(Self {
            stops,
            period,
            phase_offset: 0.0,
        })
    }

    /// Shift the whole cycle in time
    #[must_use]
    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    pub fn stops(&self) -> &[Hsl] {
        &self.stops
    }

    /// Override a single stop
    pub fn set_stop(&mut self, index: usize, color: Hsl) -> Result<()> {
        let stop = self
            .stops
            .get_mut(index)
            .ok_or(Error::InvalidParameter("gradient stop index out of range"))?;
        *stop = color;
        Ok(())
    }

    /// Color at time `t`
    ///
    /// Negative times wrap like positive ones, so the result is periodic
    /// in both directions.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn sample(&self, t: f64) -> Hsl {
        let count = self.stops.len();
        if count == 1 {
            return self.stops[0];
        }

        let phase_duration = self.period / count as f64;
        let t0 = self.wrap(t + self.phase_offset);

        let phase = (floor(t0 / phase_duration).max(0.0) as usize).min(count - 1);
        let proportion = ((t0 - phase as f64 * phase_duration) / phase_duration).clamp(0.0, 1.0);

        let from = self.stops[phase];
        let to = self.stops[(phase + 1) % count];
        from.mix(to, proportion as f32)
    }

    /// Sample and convert to RGB
    pub fn sample_rgb(&self, t: f64) -> Rgb {
        hsl2rgb(self.sample(t))
    }

    /// Euclidean modulo into `0..period`
    fn wrap(&self, t: f64) -> f64 {
        let mut t0 = fmod(t, self.period);
        if t0 < 0.0 {
            t0 += self.period;
        }
        // -tiny + period may round up to exactly one period
        if t0 >= self.period { 0.0 } else { t0 }
    }
}
