//! Rasengan: two open hands stacked vertically, cupping a sphere between the palms.
//!
//! The weighted total and every sub-score must each clear their own floor,
//! so a single strong dimension cannot carry several weak ones.

use jutsu_geometry::{distance, joint, normalize_vector, range_score, Hand, Vec2};

use crate::metrics::open_palm_score;
use crate::types::RasenganDescriptor;

/// Minimum weighted total for a Rasengan cup.
pub const RASENGAN_THRESHOLD: f64 = 0.6;

// Per-dimension floors, applied in addition to the weighted total.
const MIN_OPEN: f64 = 0.56;
const MIN_SAME_COLUMN: f64 = 0.38;
const MIN_VERTICAL_STACK: f64 = 0.45;
const MIN_GAP: f64 = 0.35;
const MIN_SHAPE: f64 = 0.45;
const MIN_FACING: f64 = 0.35;

/// Individual Rasengan dimensions, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasenganBreakdown {
    pub open: f64,
    pub same_column: f64,
    pub vertical_stack: f64,
    pub gap: f64,
    pub shape: f64,
    pub facing: f64,
}

impl RasenganBreakdown {
    pub fn weighted(&self) -> f64 {
        self.open * 0.3
            + self.same_column * 0.2
            + self.vertical_stack * 0.16
            + self.gap * 0.13
            + self.shape * 0.09
            + self.facing * 0.12
    }

    fn clears_floors(&self) -> bool {
        self.open >= MIN_OPEN
            && self.same_column >= MIN_SAME_COLUMN
            && self.vertical_stack >= MIN_VERTICAL_STACK
            && self.gap >= MIN_GAP
            && self.shape >= MIN_SHAPE
            && self.facing >= MIN_FACING
    }
}

/// Knuckle line (index MCP to pinky MCP) as a unit vector.
fn knuckle_axis(hand: &Hand) -> Vec2 {
    let from = hand.at(joint::INDEX_MCP);
    let to = hand.at(joint::PINKY_MCP);
    normalize_vector(to.x - from.x, to.y - from.y, Vec2::RIGHT)
}

/// How much closer to horizontal than vertical the knuckle line is.
fn horizontal_spread(hand: &Hand) -> f64 {
    let axis = hand.at(joint::INDEX_MCP).to(hand.at(joint::PINKY_MCP));
    range_score(axis.x.abs() - axis.y.abs(), 0.02, 0.16)
}

/// Break a two-hand pose down into the six Rasengan dimensions.
pub fn rasengan_breakdown(a: &Hand, b: &Hand) -> RasenganBreakdown {
    let palm_a = a.palm_center();
    let palm_b = b.palm_center();
    let gap_x = (palm_a.x - palm_b.x).abs();
    let gap_y = (palm_a.y - palm_b.y).abs();
    let gap = distance(palm_a, palm_b);

    let parallel = knuckle_axis(a).dot(knuckle_axis(b)).abs();
    let gap_lower = range_score(gap, 0.1, 0.22);
    let gap_upper = range_score(0.48 - gap, 0.0, 0.18);

    let (top, bottom) = if palm_a.y <= palm_b.y { (a, b) } else { (b, a) };
    let top_down = range_score(
        top.at(joint::MIDDLE_MCP).y - top.wrist().y,
        0.02,
        0.13,
    );
    let bottom_up = range_score(
        bottom.wrist().y - bottom.at(joint::MIDDLE_MCP).y,
        0.02,
        0.13,
    );

    RasenganBreakdown {
        open: (open_palm_score(a) + open_palm_score(b)) / 2.0,
        same_column: range_score(0.2 - gap_x, 0.0, 0.14),
        vertical_stack: range_score(gap_y - gap_x, 0.04, 0.22),
        gap: gap_lower.min(gap_upper),
        shape: (horizontal_spread(a) + horizontal_spread(b) + parallel) / 3.0,
        facing: (top_down + bottom_up) / 2.0,
    }
}

/// Score a Rasengan cup. `None` below two hands, below any floor, or below threshold.
pub fn score_rasengan(hands: &[Hand]) -> Option<RasenganDescriptor> {
    let [a, b, ..] = hands else {
        return None;
    };

    let breakdown = rasengan_breakdown(a, b);
    let score = breakdown.weighted();
    tracing::trace!(?breakdown, score, "rasengan score");

    if !breakdown.clears_floors() || score < RASENGAN_THRESHOLD {
        return None;
    }

    let palm_a = a.palm_center();
    let palm_b = b.palm_center();
    Some(RasenganDescriptor {
        score,
        center: palm_a.midpoint(palm_b),
        gap: distance(palm_a, palm_b),
        axis: normalize_vector(palm_b.x - palm_a.x, palm_b.y - palm_a.y, Vec2::RIGHT),
    })
}
