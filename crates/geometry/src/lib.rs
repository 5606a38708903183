//! Geometry primitives for hand-landmark scoring.
//!
//! Everything in this crate is pure and allocation-free:
//! - `Point` / `Vec2`: normalized image coordinates and directions
//! - `Hand`: a validated set of 21 landmarks in MediaPipe joint order
//! - `range_score`: the soft threshold every gesture scorer is built from
//! - finger extension/fold measurements used as `range_score` inputs
//!
//! Coordinates are normalized to [0, 1] with y increasing downward.

mod error;
mod hand;
mod measure;
mod point;

pub mod joint;

pub use error::{LandmarkError, Result};
pub use hand::{Finger, Hand, LANDMARK_COUNT};
pub use measure::{
    average_point, distance, finger_extension, finger_fold, normalize_vector, range_score,
    rotate_vector, to_screen_point, DEGENERATE_LENGTH,
};
pub use point::{Point, Vec2};
