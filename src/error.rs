use thiserror::Error;

/// Errors raised while building or composing an animation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Layer or strip setup that does not fit the frame buffer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("position {position} is outside of a buffer with {len} positions")]
    PositionOutOfRange { position: isize, len: usize },
    #[error("position {position} shifted by {offset} falls below zero")]
    ShiftedBelowZero { position: usize, offset: isize },
    #[error("expected {expected} wave colors, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("strip of {len} LEDs exceeds capacity of {capacity}")]
    StripTooLong { len: usize, capacity: usize },
    #[error("too many layers in one frame")]
    TooManyLayers,
    #[error("too many gradient groups")]
    TooManyGroups,
    #[error("no gradient group at index {0}")]
    UnknownGroup(usize),
}

/// Failure of a single frame
///
/// `E` is the display device error, passed through untouched.
#[derive(Error, Debug)]
pub enum FrameError<E: core::fmt::Debug> {
    #[error("frame composition failed: {0}")]
    Compose(#[from] Error),
    #[error("display failed: {0:?}")]
    Display(E),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
