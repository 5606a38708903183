//! Two-handed seal scorers.
//!
//! Each scorer is a pure function `&[Hand] -> Option<_>`: `None` means fewer
//! than two hands or a confidence below the scorer's floor. Nothing here fails;
//! non-detection is the steady state and is re-evaluated fresh every frame.
//!
//! | Seal | Scorer | Payload |
//! |---|---|---|
//! | Kage Bunshin | [`score_kage_bunshin`] | score only (camera-relative effect) |
//! | Chidori | [`score_chidori`] | emitter palm + lightning direction |
//! | Rasengan | [`score_rasengan`] | orb center, palm gap, palm-to-palm axis |

mod chidori;
mod kage_bunshin;
mod metrics;
mod rasengan;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod poses;

pub use chidori::{score_chidori, CHIDORI_THRESHOLD};
pub use kage_bunshin::{score_kage_bunshin, KAGE_BUNSHIN_THRESHOLD};
pub use metrics::{hand_seal_score, has_strong_ring_pinky_fold, open_palm_score, wrist_grab_score};
pub use rasengan::{rasengan_breakdown, score_rasengan, RasenganBreakdown, RASENGAN_THRESHOLD};
pub use types::{ChidoriDescriptor, KageBunshinMatch, RasenganDescriptor};

use jutsu_geometry::Hand;

/// Results of running every scorer over one hand set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureReadout {
    pub kage_bunshin: Option<KageBunshinMatch>,
    pub chidori: Option<ChidoriDescriptor>,
    pub rasengan: Option<RasenganDescriptor>,
}

impl GestureReadout {
    /// Run all three scorers.
    pub fn evaluate(hands: &[Hand]) -> Self {
        Self {
            kage_bunshin: score_kage_bunshin(hands),
            chidori: score_chidori(hands),
            rasengan: score_rasengan(hands),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kage_bunshin.is_none() && self.chidori.is_none() && self.rasengan.is_none()
    }
}
