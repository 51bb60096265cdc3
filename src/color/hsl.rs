use libm::roundf;

use crate::color::Rgb;

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// Hue/saturation/lightness color, every component normalized to `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Interpolate component-wise towards `other`
    ///
    /// `proportion` of 0 yields `self`, 1 yields `other`. Values outside
    /// `0.0..=1.0` extrapolate.
    #[must_use]
    pub fn mix(self, other: Self, proportion: f32) -> Self {
        let keep = 1.0 - proportion;
        Self {
            hue: self.hue * keep + other.hue * proportion,
            saturation: self.saturation * keep + other.saturation * proportion,
            lightness: self.lightness * keep + other.lightness * proportion,
        }
    }
}

/// Fold a hue offset onto one RGB channel
fn hue2rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < ONE_SIXTH {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < TWO_THIRDS {
        return p + (q - p) * (TWO_THIRDS - t) * 6.0;
    }
    p
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel8(value: f32) -> u8 {
    roundf(value * 255.0).clamp(0.0, 255.0) as u8
}

/// Convert HSL to an 8-bit RGB triple
///
/// Total over `[0, 1]^3`. Channels are rounded and clamped, never rejected.
#[allow(clippy::float_cmp)]
pub fn hsl2rgb(hsl: Hsl) -> Rgb {
    let Hsl {
        hue,
        saturation,
        lightness,
    } = hsl;

    if saturation == 0.0 {
        let level = channel8(lightness);
        return Rgb {
            r: level,
            g: level,
            b: level,
        };
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Rgb {
        r: channel8(hue2rgb(p, q, hue + ONE_THIRD)),
        g: channel8(hue2rgb(p, q, hue)),
        b: channel8(hue2rgb(p, q, hue - ONE_THIRD)),
    }
}
