//! Traveling sine wave across the strip
//!
//! Position and time are mapped onto an angle, the sine of that angle
//! selects the hue. Saturation and lightness stay fixed.

use libm::sin;

use crate::color::{Hsl, Rgb, hsl2rgb};
use crate::error::{Error, Result};

/// Divisor applied to the tick, higher values move the wave slower
pub const DEFAULT_SPEED_DIVISOR: f32 = 300.0;

const WAVE_SATURATION: f32 = 1.0;
const WAVE_LIGHTNESS: f32 = 0.6;

/// Direction the wave travels along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `+1` or `-1`
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub direction: Direction,
    pub speed_divisor: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            direction: Direction::Forward,
            speed_divisor: DEFAULT_SPEED_DIVISOR,
        }
    }
}

impl WaveParams {
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_speed_divisor(mut self, speed_divisor: f32) -> Self {
        self.speed_divisor = speed_divisor;
        self
    }

    fn validate(self) -> Result<Self> {
        if self.speed_divisor.is_finite() && self.speed_divisor > 0.0 {
            Ok(self)
        } else {
            Err(Error::InvalidParameter("wave speed divisor must be positive"))
        }
    }
}

/// Wave generator for a strip of fixed length
///
/// Carries no state between frames: output is a pure function of the
/// tick, the direction and the stride length.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveGenerator {
    params: WaveParams,
    stride_length: usize,
}

impl WaveGenerator {
    pub fn new(stride_length: usize, params: WaveParams) -> Result<Self> {
        if stride_length == 0 {
            return Err(Error::InvalidParameter("wave stride length must be positive"));
        }
        Ok(Self {
            params: params.validate()?,
            stride_length,
        })
    }

    pub fn params(&self) -> WaveParams {
        self.params
    }

    pub fn stride_length(&self) -> usize {
        self.stride_length
    }

    pub fn direction(&self) -> Direction {
        self.params.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.params.direction = direction;
    }

    /// Reverse the travel direction
    pub fn flip(&mut self) {
        self.params.direction = self.params.direction.reversed();
    }

    pub fn set_speed_divisor(&mut self, speed_divisor: f32) -> Result<()> {
        self.params = self.params.with_speed_divisor(speed_divisor).validate()?;
        Ok(())
    }

    /// Color of one position at `tick`
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn sample(&self, tick: u64, position: usize) -> Rgb {
        let angle = position as f64 / self.stride_length as f64 * self.params.direction.sign()
            + tick as f64 / f64::from(self.params.speed_divisor);
        let hue = ((sin(angle) + 1.0) / 2.0) as f32;
        hsl2rgb(Hsl::new(hue, WAVE_SATURATION, WAVE_LIGHTNESS))
    }

    /// Fill `leds` with the wave at `tick`
    ///
    /// Writes at most one stride; extra entries are left untouched.
    pub fn render(&self, tick: u64, leds: &mut [Rgb]) {
        for (position, led) in leds.iter_mut().take(self.stride_length).enumerate() {
            *led = self.sample(tick, position);
        }
    }
}
