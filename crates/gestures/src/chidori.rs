//! Chidori: one open hand (emitter) with the other hand gripping its wrist (holder).

use jutsu_geometry::{distance, joint, normalize_vector, Hand, Vec2};

use crate::metrics::{open_palm_score, wrist_grab_score};
use crate::types::ChidoriDescriptor;

/// Minimum blended score for a Chidori grip.
pub const CHIDORI_THRESHOLD: f64 = 0.64;

const MAX_WRIST_TO_WRIST: f64 = 0.22;
const MAX_PALM_TO_WRIST: f64 = 0.2;
const MAX_PINCH_TO_WRIST: f64 = 0.17;

/// Emitter/holder assignment for one pair of hands.
struct RoleCandidate<'a> {
    emitter: &'a Hand,
    holder: &'a Hand,
    score: f64,
}

impl<'a> RoleCandidate<'a> {
    fn evaluate(emitter: &'a Hand, holder: &'a Hand) -> Self {
        let score = open_palm_score(emitter) * 0.52 + wrist_grab_score(holder, emitter) * 0.48;
        Self {
            emitter,
            holder,
            score,
        }
    }

    /// Hard distance caps on top of the soft score.
    fn is_plausible(&self) -> bool {
        let emitter_wrist = self.emitter.wrist();
        distance(self.holder.wrist(), emitter_wrist) <= MAX_WRIST_TO_WRIST
            && distance(self.holder.palm_center(), emitter_wrist) <= MAX_PALM_TO_WRIST
            && distance(self.holder.pinch_point(), emitter_wrist) <= MAX_PINCH_TO_WRIST
    }
}

/// Score a Chidori grip. Input order is irrelevant: both role assignments are tried.
pub fn score_chidori(hands: &[Hand]) -> Option<ChidoriDescriptor> {
    let [a, b, ..] = hands else {
        return None;
    };

    let first = RoleCandidate::evaluate(a, b);
    let second = RoleCandidate::evaluate(b, a);
    let best = if first.score >= second.score {
        first
    } else {
        second
    };

    tracing::trace!(score = best.score, "chidori score");
    if best.score < CHIDORI_THRESHOLD || !best.is_plausible() {
        return None;
    }

    let palm = best.emitter.palm_center();
    let tip = best.emitter.at(joint::MIDDLE_TIP);
    let direction = normalize_vector(tip.x - palm.x, tip.y - palm.y, Vec2::UP);

    Some(ChidoriDescriptor {
        score: best.score,
        palm,
        direction,
    })
}
