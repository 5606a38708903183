//! Kage Bunshin: the same index+middle seal on both hands, held close together.

use jutsu_geometry::{distance, joint, range_score, Hand};

use crate::metrics::{hand_seal_score, has_strong_ring_pinky_fold};
use crate::types::KageBunshinMatch;

/// Scores above this count as a Kage Bunshin seal.
pub const KAGE_BUNSHIN_THRESHOLD: f64 = 0.58;

const MAX_WRIST_DISTANCE: f64 = 0.5;
const MAX_TIP_DISTANCE: f64 = 0.34;

/// Score a two-hand Kage Bunshin seal. `None` below two hands or below threshold.
pub fn score_kage_bunshin(hands: &[Hand]) -> Option<KageBunshinMatch> {
    let [a, b, ..] = hands else {
        return None;
    };

    if !has_strong_ring_pinky_fold(a) || !has_strong_ring_pinky_fold(b) {
        return None;
    }

    let hand_score = (hand_seal_score(a) + hand_seal_score(b)) / 2.0;

    let wrist_distance = distance(a.wrist(), b.wrist());
    let index_distance = distance(a.at(joint::INDEX_TIP), b.at(joint::INDEX_TIP));
    let middle_distance = distance(a.at(joint::MIDDLE_TIP), b.at(joint::MIDDLE_TIP));
    if wrist_distance > MAX_WRIST_DISTANCE
        || index_distance > MAX_TIP_DISTANCE
        || middle_distance > MAX_TIP_DISTANCE
    {
        return None;
    }

    let wrists_close = range_score(0.52 - wrist_distance, 0.0, 0.22);
    let fingers_close = (range_score(0.38 - index_distance, 0.0, 0.21)
        + range_score(0.38 - middle_distance, 0.0, 0.21))
        / 2.0;
    let similar_height = range_score(0.38 - (a.wrist().y - b.wrist().y).abs(), 0.0, 0.22);
    let closeness = wrists_close * 0.42 + fingers_close * 0.38 + similar_height * 0.2;

    let score = hand_score * 0.68 + closeness * 0.32;
    tracing::trace!(hand_score, closeness, score, "kage bunshin score");

    (score > KAGE_BUNSHIN_THRESHOLD).then_some(KageBunshinMatch { score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poses;

    #[test]
    fn test_identical_seals_match() {
        let hand = poses::seal_hand(0.5, 0.8);
        let result = score_kage_bunshin(&[hand.clone(), hand]).unwrap();
        assert!(result.score > KAGE_BUNSHIN_THRESHOLD);
        assert!(result.score > 0.95);
    }

    #[test]
    fn test_nearby_seals_match() {
        let hands = [poses::seal_hand(0.45, 0.8), poses::seal_hand(0.55, 0.82)];
        assert!(score_kage_bunshin(&hands).is_some());
    }

    #[test]
    fn test_requires_two_hands() {
        assert!(score_kage_bunshin(&[]).is_none());
        assert!(score_kage_bunshin(&[poses::seal_hand(0.5, 0.8)]).is_none());
    }

    #[test]
    fn test_far_apart_seals_rejected() {
        let hands = [poses::seal_hand(0.2, 0.8), poses::seal_hand(0.8, 0.8)];
        assert!(score_kage_bunshin(&hands).is_none());
    }

    #[test]
    fn test_open_hand_fails_fold_prefilter() {
        let hands = [poses::seal_hand(0.5, 0.8), poses::open_hand_up(0.5, 0.8)];
        assert!(score_kage_bunshin(&hands).is_none());
    }

    #[test]
    fn test_extra_hands_ignored() {
        let hand = poses::seal_hand(0.5, 0.8);
        let hands = [hand.clone(), hand, poses::open_hand_up(0.1, 0.1)];
        assert!(score_kage_bunshin(&hands).is_some());
    }
}
