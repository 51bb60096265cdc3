//! Frame scheduling and timing utilities.
//!
//! `tick` is portable frame pacing without async: the caller sleeps for the
//! returned duration. `run` is the async variant built on `embassy-time`.
//! Either way a frame is always fully flushed before the next one starts.

use embassy_time::{Duration, Instant, Timer};

use crate::animation::AnimationDriver;
use crate::display::DisplayDevice;
use crate::error::FrameError;
use crate::intent::IntentReceiver;
use crate::logging::{log_debug, log_warn};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Frame scheduler owning the driver and the display
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(driver, display);
///
/// loop {
///     let result = scheduler.tick(Instant::now())?;
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D: DisplayDevice, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
{
    display: D,
    driver: AnimationDriver<MAX_LEDS>,
    intents: Option<IntentReceiver<'a, INTENT_CHANNEL_SIZE>>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<'a, D: DisplayDevice, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, D, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(driver: AnimationDriver<MAX_LEDS>, display: D) -> Self {
        Self::with_frame_duration(driver, display, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        driver: AnimationDriver<MAX_LEDS>,
        display: D,
        frame_duration: Duration,
    ) -> Self {
        Self {
            display,
            driver,
            intents: None,
            next_frame: None,
            frame_duration,
        }
    }

    /// Drain intents from `receiver` before every frame
    #[must_use]
    pub fn with_intents(mut self, receiver: IntentReceiver<'a, INTENT_CHANNEL_SIZE>) -> Self {
        self.intents = Some(receiver);
        self
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, FrameError<D::Error>> {
        // If we've fallen more than two frames behind, skip the backlog
        let max_drift = self.frame_duration * 2;
        let next_frame = match self.next_frame {
            Some(next_frame) if now <= next_frame + max_drift => next_frame,
            Some(_) => {
                log_debug!("[FrameScheduler.tick] behind schedule, resetting to now");
                now
            }
            None => now,
        };

        self.process_intents();
        self.driver.render_frame(&mut self.display)?;

        let next_deadline = next_frame + self.frame_duration;
        self.next_frame = Some(next_deadline);

        let sleep_duration = if next_deadline > now {
            next_deadline - now
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline,
            sleep_duration,
        })
    }

    /// Render frames until one fails
    ///
    /// Dropping the future stops the animation, no cleanup is needed.
    pub async fn run(&mut self) -> FrameError<D::Error> {
        loop {
            match self.tick(Instant::now()) {
                Ok(result) => Timer::at(result.next_deadline).await,
                Err(err) => return err,
            }
        }
    }

    fn process_intents(&mut self) {
        let Some(intents) = self.intents else {
            return;
        };
        while let Some(intent) = intents.try_receive() {
            if let Err(err) = self.driver.apply_intent(intent) {
                log_warn!("[FrameScheduler] dropped {:?}: {}", intent, err);
            }
        }
    }

    pub fn driver(&self) -> &AnimationDriver<MAX_LEDS> {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver<MAX_LEDS> {
        &mut self.driver
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
