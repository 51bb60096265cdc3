//! Frame compositing
//!
//! The wave forms a base layer over the whole strip, gradient layers are
//! then applied on top in order. Later layers see the result of earlier
//! ones.

use crate::color::{BlendOperator, Rgb};
use crate::error::{ConfigurationError, Result};
use crate::indices::LayerIndices;

/// Frame buffer entry, `None` while the position is unset
pub type Pixel = Option<Rgb>;

/// A single color painted onto a set of positions
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub indices: LayerIndices,
    pub color: Rgb,
    pub blend: BlendOperator,
}

impl Layer {
    /// Create a layer that replaces whatever is under it
    pub const fn new(indices: LayerIndices, color: Rgb) -> Self {
        Self {
            indices,
            color,
            blend: BlendOperator::Replace,
        }
    }

    #[must_use]
    pub fn with_blend(mut self, blend: BlendOperator) -> Self {
        self.blend = blend;
        self
    }
}

/// Compose one frame into `buffer`
///
/// Every layer is validated before the buffer is touched, so a
/// configuration error leaves the buffer as it was.
pub fn compose_frame(buffer: &mut [Pixel], wave: &[Rgb], layers: &[Layer]) -> Result<()> {
    if wave.len() != buffer.len() {
        return Err(ConfigurationError::LengthMismatch {
            expected: buffer.len(),
            actual: wave.len(),
        }
        .into());
    }
    validate_layers(buffer.len(), layers)?;

    for (pixel, color) in buffer.iter_mut().zip(wave) {
        *pixel = Some(*color);
    }
    layers.iter().for_each(|layer| apply_layer(buffer, layer));

    Ok(())
}

/// Apply layers on top of the current buffer contents
///
/// Unset positions take the layer color directly.
pub fn apply_layers(buffer: &mut [Pixel], layers: &[Layer]) -> Result<()> {
    validate_layers(buffer.len(), layers)?;
    layers.iter().for_each(|layer| apply_layer(buffer, layer));
    Ok(())
}

fn validate_layers(len: usize, layers: &[Layer]) -> Result<()> {
    layers.iter().try_for_each(|layer| layer.indices.validate(len))
}

fn apply_layer(buffer: &mut [Pixel], layer: &Layer) {
    for position in &layer.indices {
        let Some(pixel) = buffer.get_mut(position) else {
            continue;
        };
        *pixel = Some(match *pixel {
            None => layer.color,
            Some(base) => layer.blend.apply(base, layer.color),
        });
    }
}
