//! Display devices the animation driver renders into
//!
//! Implement [`DisplayDevice`] to support different hardware platforms.
//! The driver and the frame scheduler are generic over this trait.

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::color::Rgb;
use crate::compositor::Pixel;

/// Addressable strip with a per-position frame buffer
pub trait DisplayDevice {
    /// Error reported when a frame cannot be flushed
    type Error: core::fmt::Debug;

    /// Mark every position as unset
    fn clear(&mut self);

    /// Number of positions, constant for the device lifetime
    fn size(&self) -> usize;

    /// Frame buffer, `size()` entries long
    fn buffer_mut(&mut self) -> &mut [Pixel];

    /// Flush the buffer to the device
    fn send(&mut self) -> Result<(), Self::Error>;
}

/// Unset positions are shown black
fn resolve(pixel: Pixel) -> Rgb {
    pixel.unwrap_or_default()
}

/// In-memory strip, keeps the last flushed frame
#[derive(Debug, Clone)]
pub struct MemoryDisplay<const N: usize> {
    buffer: [Pixel; N],
    shown: [Rgb; N],
    frames: u64,
}

impl<const N: usize> Default for MemoryDisplay<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryDisplay<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [None; N],
            shown: [Rgb { r: 0, g: 0, b: 0 }; N],
            frames: 0,
        }
    }

    /// Colors of the last flushed frame
    pub fn shown(&self) -> &[Rgb; N] {
        &self.shown
    }

    /// Number of frames flushed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn buffer(&self) -> &[Pixel; N] {
        &self.buffer
    }
}

impl<const N: usize> DisplayDevice for MemoryDisplay<N> {
    type Error = Infallible;

    fn clear(&mut self) {
        self.buffer = [None; N];
    }

    fn size(&self) -> usize {
        N
    }

    fn buffer_mut(&mut self) -> &mut [Pixel] {
        &mut self.buffer
    }

    fn send(&mut self) -> Result<(), Infallible> {
        for (shown, pixel) in self.shown.iter_mut().zip(self.buffer) {
            *shown = resolve(pixel);
        }
        self.frames += 1;
        Ok(())
    }
}

/// Strip backed by a `smart-leds` writer
pub struct LedStrip<W, const N: usize> {
    writer: W,
    buffer: [Pixel; N],
}

impl<W, const N: usize> LedStrip<W, N> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: [None; N],
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> DisplayDevice for LedStrip<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    type Error = W::Error;

    fn clear(&mut self) {
        self.buffer = [None; N];
    }

    fn size(&self) -> usize {
        N
    }

    fn buffer_mut(&mut self) -> &mut [Pixel] {
        &mut self.buffer
    }

    fn send(&mut self) -> Result<(), W::Error> {
        self.writer.write(self.buffer.iter().copied().map(resolve))
    }
}
