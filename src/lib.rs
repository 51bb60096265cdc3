#![no_std]

mod logging;

pub mod animation;
pub mod color;
pub mod compositor;
pub mod display;
pub mod error;
pub mod frame_scheduler;
pub mod gradient;
pub mod indices;
pub mod intent;
pub mod wave;

pub use animation::{AnimationConfig, AnimationDriver, AnimationState};
pub use color::{BlendOperator, Hsl, Rgb, RgbF, hsl2rgb};
pub use compositor::{Layer, Pixel, compose_frame};
pub use display::{DisplayDevice, LedStrip, MemoryDisplay};
pub use error::{ConfigurationError, Error, FrameError};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gradient::{GradientGroup, GradientLayer, TimeGradient};
pub use indices::LayerIndices;
pub use intent::{AnimationIntent, IntentChannel, IntentReceiver, IntentSender};
pub use wave::{Direction, WaveGenerator, WaveParams};

pub use embassy_time::{Duration, Instant};
