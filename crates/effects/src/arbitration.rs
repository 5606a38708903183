//! Priority arbitration between seals that qualify on the same frame.

use jutsu_gestures::GestureReadout;

use crate::detection::Detection;
use crate::kind::JutsuKind;

/// Trigger precedence, highest first.
pub const PRIORITY: [JutsuKind; 3] = [
    JutsuKind::KageBunshin,
    JutsuKind::Rasengan,
    JutsuKind::Chidori,
];

/// Pair each kind with its scorer result, in priority order.
pub fn rank(readout: &GestureReadout) -> [(JutsuKind, Option<Detection>); 3] {
    PRIORITY.map(|kind| {
        let detection = match kind {
            JutsuKind::KageBunshin => readout.kage_bunshin.map(Detection::KageBunshin),
            JutsuKind::Rasengan => readout.rasengan.map(Detection::Rasengan),
            JutsuKind::Chidori => readout.chidori.map(Detection::Chidori),
        };
        (kind, detection)
    })
}

/// First qualifying entry wins; everything after it is discarded for this frame.
pub fn select_trigger<I>(ranked: I) -> Option<Detection>
where
    I: IntoIterator<Item = (JutsuKind, Option<Detection>)>,
{
    ranked
        .into_iter()
        .fold(None, |winner: Option<Detection>, (kind, detection)| match winner {
            Some(w) => {
                if detection.is_some() {
                    tracing::debug!(
                        winner = w.kind().as_str(),
                        discarded = kind.as_str(),
                        "lower-priority seal discarded"
                    );
                }
                Some(w)
            }
            None => detection,
        })
}
