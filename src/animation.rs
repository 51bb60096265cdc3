//! Animation driver
//!
//! Sequences one frame: clear the display, render the wave, sample every
//! gradient, composite, advance the tick and flush. The tick and the wave
//! direction are the only state carried from one frame to the next.

use heapless::Vec;

use crate::color::Rgb;
use crate::compositor::{Layer, compose_frame};
use crate::display::DisplayDevice;
use crate::error::{ConfigurationError, Error, FrameError, Result};
use crate::gradient::{GradientGroup, GradientLayer};
use crate::intent::AnimationIntent;
use crate::logging::{log_debug, log_warn};
use crate::wave::{WaveGenerator, WaveParams};

/// Ticks per unit of gradient time
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Maximum number of layers composited into one frame
pub const MAX_LAYERS: usize = 16;

/// Maximum number of gradient groups
pub const MAX_GROUPS: usize = 4;

/// Configuration for the animation driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Converts ticks to gradient time, `t = tick / frame_rate`
    pub frame_rate: f32,
    pub wave: WaveParams,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            wave: WaveParams::default(),
        }
    }
}

/// State carried across frames
#[derive(Debug, Clone)]
pub struct AnimationState {
    tick: u64,
    gradients: Vec<GradientLayer, MAX_LAYERS>,
    groups: Vec<GradientGroup, MAX_GROUPS>,
    wave: WaveGenerator,
}

impl AnimationState {
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn wave(&self) -> WaveParams {
        self.wave.params()
    }

    pub fn gradients(&self) -> &[GradientLayer] {
        &self.gradients
    }

    pub fn groups(&self) -> &[GradientGroup] {
        &self.groups
    }
}

/// Drives the animation for a strip of up to `MAX_LEDS` positions
pub struct AnimationDriver<const MAX_LEDS: usize> {
    frame_rate: f32,
    state: AnimationState,
    wave_colors: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> AnimationDriver<MAX_LEDS> {
    /// Create a driver for a strip of `strip_length` positions
    pub fn new(strip_length: usize, config: &AnimationConfig) -> Result<Self> {
        if strip_length > MAX_LEDS {
            return Err(ConfigurationError::StripTooLong {
                len: strip_length,
                capacity: MAX_LEDS,
            }
            .into());
        }
        if !(config.frame_rate.is_finite() && config.frame_rate > 0.0) {
            return Err(Error::InvalidParameter("frame rate must be positive"));
        }
        log_debug!("[AnimationDriver.new] strip of {} LEDs", strip_length);

        Ok(Self {
            frame_rate: config.frame_rate,
            state: AnimationState {
                tick: 0,
                gradients: Vec::new(),
                groups: Vec::new(),
                wave: WaveGenerator::new(strip_length, config.wave)?,
            },
            wave_colors: [Rgb::default(); MAX_LEDS],
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn tick(&self) -> u64 {
        self.state.tick
    }

    /// Gradient time of the current tick
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self) -> f64 {
        self.state.tick as f64 / f64::from(self.frame_rate)
    }

    /// Resume the animation from `tick`
    pub fn seek(&mut self, tick: u64) {
        self.state.tick = tick;
    }

    /// Add a gradient layer, applied after the ones already added
    pub fn push_gradient(&mut self, layer: GradientLayer) -> Result<()> {
        self.state
            .gradients
            .push(layer)
            .map_err(|_| ConfigurationError::TooManyLayers.into())
    }

    /// Add a group, its members are applied after all plain gradients
    pub fn push_group(&mut self, group: GradientGroup) -> Result<()> {
        self.state
            .groups
            .push(group)
            .map_err(|_| ConfigurationError::TooManyGroups.into())
    }

    pub fn group_mut(&mut self, index: usize) -> Result<&mut GradientGroup> {
        self.state
            .groups
            .get_mut(index)
            .ok_or(ConfigurationError::UnknownGroup(index).into())
    }

    /// Apply a runtime intent
    pub fn apply_intent(&mut self, intent: AnimationIntent) -> Result<()> {
        log_debug!("[AnimationDriver.apply_intent] {:?}", intent);
        match intent {
            AnimationIntent::FlipDirection => self.state.wave.flip(),
            AnimationIntent::SetDirection(direction) => self.state.wave.set_direction(direction),
            AnimationIntent::SetSpeedDivisor(divisor) => {
                self.state.wave.set_speed_divisor(divisor)?;
            }
            AnimationIntent::MoveGroup { group, offset } => self.group_mut(group)?.move_to(offset),
        }
        Ok(())
    }

    /// Render one frame into `display` and flush it
    ///
    /// The tick only advances once the frame is composed. Display errors
    /// are returned as is, the caller decides whether to skip or stop.
    pub fn render_frame<D: DisplayDevice>(
        &mut self,
        display: &mut D,
    ) -> core::result::Result<(), FrameError<D::Error>> {
        display.clear();

        let len = display.size();
        if len != self.state.wave.stride_length() {
            return Err(Error::from(ConfigurationError::LengthMismatch {
                expected: self.state.wave.stride_length(),
                actual: len,
            })
            .into());
        }

        let wave = &mut self.wave_colors[..len];
        self.state.wave.render(self.state.tick, wave);

        let layers = self.layers().inspect_err(|err| {
            log_warn!("[AnimationDriver.render_frame] tick {}: {}", self.state.tick, err);
        })?;
        compose_frame(display.buffer_mut(), &self.wave_colors[..len], &layers)?;

        self.state.tick += 1;
        display.send().map_err(FrameError::Display)
    }

    /// Layers for the current tick, plain gradients first, then groups
    fn layers(&self) -> Result<Vec<Layer, MAX_LAYERS>> {
        let t = self.time();
        let mut layers = Vec::new();

        let gradients = self.state.gradients.iter().map(|gradient| Ok(gradient.layer(t)));
        let groups = self.state.groups.iter().flat_map(|group| group.layers(t));
        for layer in gradients.chain(groups) {
            layers
                .push(layer?)
                .map_err(|_| Error::from(ConfigurationError::TooManyLayers))?;
        }

        Ok(layers)
    }
}
