mod group;
mod time_gradient;

pub use group::{GradientGroup, GradientLayer, MAX_GROUP_MEMBERS};
pub use time_gradient::{MAX_GRADIENT_STOPS, TimeGradient};
