//! Validated per-hand landmark set.

use serde::{Deserialize, Serialize};

use crate::error::LandmarkError;
use crate::joint;
use crate::point::Point;

/// Number of landmarks the tracker reports per hand.
pub const LANDMARK_COUNT: usize = 21;

/// One tracked hand: exactly 21 points in joint order.
///
/// Hands carry no identity across frames; each detection is an independent value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Hand {
    points: [Point; LANDMARK_COUNT],
}

impl Hand {
    pub fn new(points: [Point; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Landmark at `index`. Panics when `index >= 21`, like slice indexing.
    pub fn at(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn wrist(&self) -> Point {
        self.points[joint::WRIST]
    }

    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.points
    }

    /// Centroid of the wrist and four knuckles.
    pub fn palm_center(&self) -> Point {
        crate::measure::average_point(self, &joint::PALM_JOINTS)
    }

    /// Midpoint between the thumb tip and index tip.
    pub fn pinch_point(&self) -> Point {
        self.at(joint::THUMB_TIP).midpoint(self.at(joint::INDEX_TIP))
    }
}

impl TryFrom<Vec<Point>> for Hand {
    type Error = LandmarkError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }
        let actual = points.len();
        let points: [Point; LANDMARK_COUNT] =
            points
                .try_into()
                .map_err(|_| LandmarkError::WrongPointCount {
                    expected: LANDMARK_COUNT,
                    actual,
                })?;
        Ok(Self { points })
    }
}

impl From<Hand> for Vec<Point> {
    fn from(hand: Hand) -> Self {
        hand.points.to_vec()
    }
}

/// Joint triple describing one finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finger {
    pub tip: usize,
    pub pip: usize,
    pub mcp: usize,
}

impl Finger {
    pub const THUMB: Finger = Finger {
        tip: joint::THUMB_TIP,
        pip: joint::THUMB_IP,
        mcp: joint::THUMB_MCP,
    };
    pub const INDEX: Finger = Finger {
        tip: joint::INDEX_TIP,
        pip: joint::INDEX_PIP,
        mcp: joint::INDEX_MCP,
    };
    pub const MIDDLE: Finger = Finger {
        tip: joint::MIDDLE_TIP,
        pip: joint::MIDDLE_PIP,
        mcp: joint::MIDDLE_MCP,
    };
    pub const RING: Finger = Finger {
        tip: joint::RING_TIP,
        pip: joint::RING_PIP,
        mcp: joint::RING_MCP,
    };
    pub const PINKY: Finger = Finger {
        tip: joint::PINKY_TIP,
        pip: joint::PINKY_PIP,
        mcp: joint::PINKY_MCP,
    };
}
