mod blend;
mod hsl;

use smart_leds::{RGB, RGB8};

pub use blend::{BlendOperator, add, limit, mean, multiply, screen, widen};
pub use hsl::{Hsl, hsl2rgb};

pub type Rgb = RGB8;

/// Unclamped RGB used for intermediate blend results
pub type RgbF = RGB<f32>;
