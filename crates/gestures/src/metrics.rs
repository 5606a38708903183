//! Per-hand sub-scores shared by the seal scorers.
//!
//! Each function maps one hand (or a holder/target pair) to a [0, 1] confidence
//! built from `range_score` ramps. Weights sum to 1.

use jutsu_geometry::{distance, finger_extension, finger_fold, joint, range_score, Finger, Hand};

/// Index+middle up, ring+pinky down, index and middle tips side by side.
pub fn hand_seal_score(hand: &Hand) -> f64 {
    let index = range_score(finger_extension(hand, Finger::INDEX), 0.01, 0.11);
    let middle = range_score(finger_extension(hand, Finger::MIDDLE), 0.01, 0.11);
    let ring = range_score(finger_fold(hand, Finger::RING), 0.015, 0.12);
    let pinky = range_score(finger_fold(hand, Finger::PINKY), 0.015, 0.12);
    let tip_gap = (hand.at(joint::INDEX_TIP).x - hand.at(joint::MIDDLE_TIP).x).abs();
    let pair_align = 1.0 - (tip_gap / 0.16).min(1.0);

    index * 0.26 + middle * 0.26 + ring * 0.22 + pinky * 0.22 + pair_align * 0.04
}

/// Binary pre-filter: ring and pinky clearly curled below both knuckle and middle joint.
pub fn has_strong_ring_pinky_fold(hand: &Hand) -> bool {
    let tip_below_pip = |finger: Finger| hand.at(finger.tip).y - hand.at(finger.pip).y;

    finger_fold(hand, Finger::RING) > 0.03
        && finger_fold(hand, Finger::PINKY) > 0.03
        && tip_below_pip(Finger::RING) > 0.008
        && tip_below_pip(Finger::PINKY) > 0.008
}

/// Spread thumb, four fingers extended upward, fingertips level.
pub fn open_palm_score(hand: &Hand) -> f64 {
    let thumb_spread = (hand.at(joint::THUMB_TIP).x - hand.at(joint::THUMB_MCP).x).abs();
    let thumb = range_score(thumb_spread, 0.03, 0.16);
    let index = range_score(finger_extension(hand, Finger::INDEX), 0.02, 0.13);
    let middle = range_score(finger_extension(hand, Finger::MIDDLE), 0.02, 0.13);
    let ring = range_score(finger_extension(hand, Finger::RING), 0.02, 0.12);
    let pinky = range_score(finger_extension(hand, Finger::PINKY), 0.02, 0.12);
    let tip_tilt = (hand.at(joint::INDEX_TIP).y - hand.at(joint::PINKY_TIP).y).abs();
    let flatness = range_score(0.2 - tip_tilt, 0.0, 0.14);

    thumb * 0.16 + index * 0.22 + middle * 0.24 + ring * 0.18 + pinky * 0.16 + flatness * 0.04
}

/// How convincingly `holder` is wrapped around `target`'s wrist.
pub fn wrist_grab_score(holder: &Hand, target: &Hand) -> f64 {
    let target_wrist = target.wrist();
    let thumb_index_width =
        (holder.at(joint::THUMB_TIP).x - holder.at(joint::INDEX_TIP).x).abs();

    let near_center = range_score(0.24 - distance(holder.palm_center(), target_wrist), 0.0, 0.14);
    let near_pinch = range_score(0.2 - distance(holder.pinch_point(), target_wrist), 0.0, 0.12);
    let wrap = range_score(0.2 - thumb_index_width, 0.0, 0.1);

    near_center * 0.4 + near_pinch * 0.5 + wrap * 0.1
}
