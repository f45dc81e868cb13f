mod curve;
mod quadratic;
mod cubic;
mod basis;
mod derivative;
mod subdivide;
mod bounds;
mod curvature;
mod ray;
mod offset;
mod overlaps;
mod solve;
mod svg;

pub use self::curve::*;
pub use self::quadratic::*;
pub use self::cubic::*;
pub use self::basis::*;
pub use self::derivative::*;
pub use self::subdivide::*;
pub use self::bounds::*;
pub use self::curvature::*;
pub use self::ray::*;
pub use self::offset::*;
pub use self::overlaps::*;
pub use self::solve::*;
pub use self::svg::*;

pub use super::geo::*;
