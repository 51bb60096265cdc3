//! Pure operators combining two RGB colors
//!
//! None of these mutate their inputs. Every result is clamped into the
//! 8-bit range.

use libm::roundf;

use crate::color::{Rgb, RgbF};

/// Clamp and round each channel into `0..=255`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn limit(color: RgbF) -> Rgb {
    let channel = |value: f32| roundf(value).clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Widen an 8-bit color to the unclamped float representation
pub fn widen(color: Rgb) -> RgbF {
    RgbF {
        r: f32::from(color.r),
        g: f32::from(color.g),
        b: f32::from(color.b),
    }
}

/// Weighted mean: `a * (1 - proportion) + b * proportion`
///
/// Proportions outside `0.0..=1.0` extrapolate and are then clamped.
pub fn mean(a: Rgb, b: Rgb, proportion: f32) -> Rgb {
    let keep = 1.0 - proportion;
    let channel = |a: u8, b: u8| f32::from(a) * keep + f32::from(b) * proportion;
    limit(RgbF {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    })
}

/// Saturating per-channel sum
pub fn add(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Normalized multiply, `floor(a * b / 255)`
///
/// White is the identity, black absorbs.
#[allow(clippy::cast_possible_truncation)]
pub fn multiply(a: Rgb, b: Rgb) -> Rgb {
    let channel = |a: u8, b: u8| ((u16::from(a) * u16::from(b)) / 255) as u8;
    Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    }
}

/// Screen, `floor((1 - (1 - a/255) * (1 - b/255)) * 255)`
///
/// Evaluated in integers so black stays an exact identity.
#[allow(clippy::cast_possible_truncation)]
pub fn screen(a: Rgb, b: Rgb) -> Rgb {
    let channel = |a: u8, b: u8| {
        let inverse = u16::from(255 - a) * u16::from(255 - b);
        (255 - inverse.div_ceil(255)) as u8
    };
    Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    }
}

/// Operator used when a layer lands on a position that already has a color
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BlendOperator {
    /// Take the layer color as is
    #[default]
    Replace,
    /// Saturating sum
    Add,
    /// Normalized multiply, tints the underlying color
    Multiply,
    /// Screen, brightens the underlying color
    Screen,
    /// Weighted mean with the given proportion of the layer color
    Mean(f32),
}

impl BlendOperator {
    /// Combine the color already in the buffer with the layer color
    pub fn apply(self, base: Rgb, top: Rgb) -> Rgb {
        match self {
            Self::Replace => top,
            Self::Add => add(base, top),
            Self::Multiply => multiply(base, top),
            Self::Screen => screen(base, top),
            Self::Mean(proportion) => mean(base, top, proportion),
        }
    }
}
