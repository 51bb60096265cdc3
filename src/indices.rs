//! Position sets a layer paints onto

use heapless::Vec;

use crate::error::{ConfigurationError, Error, Result};

/// Capacity of a [`LayerIndices::Scattered`] set
pub const MAX_SCATTERED_POSITIONS: usize = 32;

/// Positions of the strip covered by a layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerIndices {
    /// Contiguous range, `end` exclusive
    Span { start: usize, end: usize },
    /// Explicit positions, applied in the given order
    Scattered(Vec<usize, MAX_SCATTERED_POSITIONS>),
}

impl LayerIndices {
    pub const fn span(start: usize, end: usize) -> Self {
        Self::Span { start, end }
    }

    /// Build a scattered set from explicit positions
    pub fn from_positions(positions: &[usize]) -> Result<Self> {
        Vec::from_slice(positions)
            .map(Self::Scattered)
            .map_err(|()| Error::InvalidParameter("too many scattered positions"))
    }

    /// Number of positions in the set
    pub fn len(&self) -> usize {
        match self {
            Self::Span { start, end } => end.saturating_sub(*start),
            Self::Scattered(positions) => positions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Positions<'_> {
        match self {
            Self::Span { start, end } => Positions::Span(*start..*end),
            Self::Scattered(positions) => Positions::Scattered(positions.iter()),
        }
    }

    /// Check that every position fits a buffer of `len` entries
    #[allow(clippy::cast_possible_wrap)]
    pub fn validate(&self, len: usize) -> Result<()> {
        match self.iter().find(|&position| position >= len) {
            Some(position) => Err(ConfigurationError::PositionOutOfRange {
                position: position as isize,
                len,
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Move every position by a signed offset
    pub fn shifted(&self, offset: isize) -> Result<Self> {
        let shift = |position: usize| {
            position
                .checked_add_signed(offset)
                .ok_or(ConfigurationError::ShiftedBelowZero { position, offset })
        };

        if offset == 0 {
            return Ok(self.clone());
        }
        match self {
            Self::Span { start, end } if start >= end => Ok(Self::span(0, 0)),
            Self::Span { start, end } => Ok(Self::span(shift(*start)?, shift(*end)?)),
            Self::Scattered(positions) => {
                let mut moved = Vec::new();
                for &position in positions {
                    // Same length as the source, cannot overflow capacity
                    let _ = moved.push(shift(position)?);
                }
                Ok(Self::Scattered(moved))
            }
        }
    }
}

/// Iterator over the positions of a [`LayerIndices`]
#[derive(Debug, Clone)]
pub enum Positions<'a> {
    Span(core::ops::Range<usize>),
    Scattered(core::slice::Iter<'a, usize>),
}

impl Iterator for Positions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Span(range) => range.next(),
            Self::Scattered(positions) => positions.next().copied(),
        }
    }
}

impl<'a> IntoIterator for &'a LayerIndices {
    type Item = usize;
    type IntoIter = Positions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
