//! Hand poses for scorer tests, built from wrist-relative offsets.
//!
//! Compiled for this crate's tests and, behind the `test-support` feature, for
//! downstream test suites.

use jutsu_geometry::{Hand, Point, LANDMARK_COUNT};

fn build(wx: f64, wy: f64, offsets: [(f64, f64); LANDMARK_COUNT]) -> Hand {
    Hand::new(offsets.map(|(dx, dy)| Point::new(wx + dx, wy + dy)))
}

/// Index and middle straight up, ring and pinky curled down.
pub fn seal_hand(wx: f64, wy: f64) -> Hand {
    build(
        wx,
        wy,
        [
            (0.0, 0.0),
            (-0.04, -0.05),
            (-0.05, -0.1),
            (-0.03, -0.15),
            (-0.02, -0.18),
            (-0.03, -0.2),
            (-0.03, -0.3),
            (-0.03, -0.36),
            (-0.03, -0.4),
            (0.0, -0.2),
            (0.0, -0.31),
            (0.0, -0.37),
            (0.0, -0.42),
            (0.03, -0.2),
            (0.03, -0.14),
            (0.03, -0.1),
            (0.03, -0.06),
            (0.06, -0.18),
            (0.06, -0.12),
            (0.06, -0.08),
            (0.06, -0.04),
        ],
    )
}

/// Flat open hand, fingers up, thumb spread wide.
pub fn open_hand_up(wx: f64, wy: f64) -> Hand {
    build(
        wx,
        wy,
        [
            (0.0, 0.0),
            (-0.05, -0.03),
            (-0.09, -0.06),
            (-0.15, -0.08),
            (-0.26, -0.1),
            (-0.06, -0.12),
            (-0.07, -0.2),
            (-0.075, -0.25),
            (-0.08, -0.3),
            (-0.02, -0.13),
            (-0.02, -0.22),
            (-0.02, -0.27),
            (-0.02, -0.32),
            (0.02, -0.12),
            (0.025, -0.2),
            (0.03, -0.25),
            (0.03, -0.3),
            (0.06, -0.1),
            (0.07, -0.17),
            (0.075, -0.22),
            (0.08, -0.27),
        ],
    )
}

/// Loose fist wrapped around the wrist located at `(tx, ty)`.
pub fn wrist_holder(tx: f64, ty: f64) -> Hand {
    build(
        tx,
        ty,
        [
            (0.0, 0.15),
            (-0.03, 0.1),
            (-0.04, 0.06),
            (-0.03, 0.02),
            (-0.01, -0.01),
            (-0.04, 0.02),
            (-0.03, -0.01),
            (-0.01, -0.02),
            (0.01, -0.01),
            (-0.01, 0.01),
            (0.0, -0.02),
            (0.02, -0.02),
            (0.03, 0.0),
            (0.02, 0.01),
            (0.03, -0.01),
            (0.04, 0.0),
            (0.04, 0.02),
            (0.05, 0.02),
            (0.06, 0.01),
            (0.06, 0.02),
            (0.06, 0.04),
        ],
    )
}

const CUP_OFFSETS: [(f64, f64); LANDMARK_COUNT] = [
    (0.0, 0.0),
    (-0.05, -0.02),
    (-0.12, -0.05),
    (-0.2, -0.06),
    (-0.3, -0.07),
    (-0.09, -0.12),
    (-0.09, -0.18),
    (-0.09, -0.23),
    (-0.09, -0.27),
    (-0.02, -0.15),
    (-0.02, -0.21),
    (-0.02, -0.26),
    (-0.02, -0.3),
    (0.03, -0.13),
    (0.03, -0.19),
    (0.03, -0.23),
    (0.03, -0.27),
    (0.09, -0.12),
    (0.09, -0.17),
    (0.09, -0.21),
    (0.09, -0.27),
];

/// Lower half of a Rasengan cup: open hand, fingers up, knuckles level.
pub fn cup_bottom(wx: f64, wy: f64) -> Hand {
    build(wx, wy, CUP_OFFSETS)
}

/// Upper half of a Rasengan cup: the bottom pose flipped so fingers point down.
pub fn cup_top(wx: f64, wy: f64) -> Hand {
    build(wx, wy, CUP_OFFSETS.map(|(dx, dy)| (dx, -dy)))
}

/// Both hands in the Kage Bunshin seal, side by side.
pub fn kage_pair() -> Vec<Hand> {
    vec![seal_hand(0.5, 0.8), seal_hand(0.5, 0.8)]
}

/// Open emitter hand gripped at the wrist, emitter wrist at `(x, 0.7)`.
pub fn chidori_grip(x: f64) -> Vec<Hand> {
    vec![open_hand_up(x, 0.7), wrist_holder(x, 0.7)]
}

/// Palms cupped one above the other.
pub fn rasengan_cup() -> Vec<Hand> {
    vec![cup_top(0.5, 0.35), cup_bottom(0.5, 0.85)]
}
