//! Corner-fillet construction for two-segment polylines.
//!
//! Given the three points of a corner and a radius, [`fillet_corner`]
//! computes the circular arc tangent to both segments, ready to draw in a
//! y-down screen frame.

pub mod fillet;

pub use fillet::{fillet_corner, CornerFillet};
