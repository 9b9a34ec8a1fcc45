pub mod geometry;
pub mod money;

pub use geometry::{Point, Quad, TopEdge};
pub use money::Money;
