mod line;
mod to_curve;
mod coefficients;

pub use self::line::*;
pub use self::to_curve::*;
pub use self::coefficients::*;

pub use super::geo::*;
