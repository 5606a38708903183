//! Scorer results.

use jutsu_geometry::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A recognized Kage Bunshin seal. The effect is camera-relative, so only the score is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KageBunshinMatch {
    pub score: f64,
}

/// A recognized Chidori grip: where the lightning starts and which way it flows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChidoriDescriptor {
    pub score: f64,
    /// Palm centroid of the open (emitter) hand.
    pub palm: Point,
    /// Unit vector from the emitter palm toward its middle fingertip.
    pub direction: Vec2,
}

/// A recognized Rasengan cup: the orb sits between the two palms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasenganDescriptor {
    pub score: f64,
    /// Midpoint of the two palm centroids.
    pub center: Point,
    /// Palm-to-palm distance.
    pub gap: f64,
    /// Unit vector from the first palm to the second.
    pub axis: Vec2,
}
