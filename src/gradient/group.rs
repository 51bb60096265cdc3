//! Gradients that move together
//!
//! A group owns its members and applies a shared time offset and a shared
//! position offset to all of them, while each member keeps its own stops,
//! positions and blend operator.

use heapless::Vec;

use super::TimeGradient;
use crate::color::{BlendOperator, Hsl};
use crate::compositor::Layer;
use crate::error::{Error, Result};
use crate::indices::LayerIndices;

/// Maximum number of gradients in one group
pub const MAX_GROUP_MEMBERS: usize = 8;

/// A gradient bound to the positions it paints
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayer {
    pub gradient: TimeGradient,
    pub indices: LayerIndices,
    pub blend: BlendOperator,
}

impl GradientLayer {
    pub const fn new(gradient: TimeGradient, indices: LayerIndices) -> Self {
        Self {
            gradient,
            indices,
            blend: BlendOperator::Replace,
        }
    }

    #[must_use]
    pub fn with_blend(mut self, blend: BlendOperator) -> Self {
        self.blend = blend;
        self
    }

    /// Layer for the current frame
    pub fn layer(&self, t: f64) -> Layer {
        Layer::new(self.indices.clone(), self.gradient.sample_rgb(t)).with_blend(self.blend)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientGroup {
    members: Vec<GradientLayer, MAX_GROUP_MEMBERS>,
    time_offset: f64,
    position_offset: isize,
}

impl GradientGroup {
    pub const fn new(time_offset: f64) -> Self {
        Self {
            members: Vec::new(),
            time_offset,
            position_offset: 0,
        }
    }

    pub fn push(&mut self, member: GradientLayer) -> Result<()> {
        self.members
            .push(member)
            .map_err(|_| Error::InvalidParameter("too many group members"))
    }

    pub fn members(&self) -> &[GradientLayer] {
        &self.members
    }

    pub fn time_offset(&self) -> f64 {
        self.time_offset
    }

    pub fn position_offset(&self) -> isize {
        self.position_offset
    }

    /// Place the whole group at `offset` positions from its authored spot
    pub fn move_to(&mut self, offset: isize) {
        self.position_offset = offset;
    }

    pub fn move_by(&mut self, delta: isize) {
        self.position_offset = self.position_offset.saturating_add(delta);
    }

    pub fn set_member_indices(&mut self, member: usize, indices: LayerIndices) -> Result<()> {
        self.member_mut(member)?.indices = indices;
        Ok(())
    }

    /// Override one stop of one member, leaving the rest of the group as is
    pub fn set_member_stop(&mut self, member: usize, stop: usize, color: Hsl) -> Result<()> {
        self.member_mut(member)?.gradient.set_stop(stop, color)
    }

    /// Layers of every member at time `t`, in member order
    pub fn layers(&self, t: f64) -> impl Iterator<Item = Result<Layer>> + '_ {
        let t = t + self.time_offset;
        self.members.iter().map(move |member| {
            let indices = member.indices.shifted(self.position_offset)?;
            Ok(Layer::new(indices, member.gradient.sample_rgb(t)).with_blend(member.blend))
        })
    }

    fn member_mut(&mut self, member: usize) -> Result<&mut GradientLayer> {
        self.members
            .get_mut(member)
            .ok_or(Error::InvalidParameter("group member index out of range"))
    }
}
