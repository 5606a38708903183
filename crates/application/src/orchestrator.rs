//! The per-frame step: expire, score, refresh, trigger.
//!
//! `process_frame` owns no state of its own; everything it mutates lives in the
//! `EffectSession` passed in, so independent sessions never interfere.

use jutsu_effects::{rank, select_trigger, ActiveEffect, Detection, EffectSession, JutsuKind};
use jutsu_geometry::Hand;
use jutsu_gestures::GestureReadout;

/// What one call to [`process_frame`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    /// False when the hand set was not scored this tick (repeated frame).
    pub evaluated: bool,
    /// Kind whose effect timed out at the top of the tick.
    pub expired: Option<JutsuKind>,
    /// Whether the active effect's descriptor was rebound to fresh geometry.
    pub refreshed: bool,
    /// Effect started this tick.
    pub triggered: Option<ActiveEffect>,
    /// Raw scorer results for the hand set.
    pub readout: GestureReadout,
}

impl TickOutcome {
    /// Outcome for a tick that only ran the timeout transition.
    pub fn expiry_only(expired: Option<JutsuKind>) -> Self {
        Self {
            expired,
            ..Self::default()
        }
    }
}

/// Run one orchestrator step at `now_ms` over the latest `hands`.
///
/// Order matters:
/// 1. the active effect times out if `now_ms` is past its expiry;
/// 2. all three scorers run on `hands`;
/// 3. with `gate_open`, an active hand-anchored effect follows a re-detection of its own kind;
/// 4. with `gate_open` and the cooldown elapsed, the highest-priority qualifying seal triggers.
///
/// `gate_open` is the person-mask precondition; expiry runs regardless.
pub fn process_frame(
    session: &mut EffectSession,
    now_ms: u64,
    hands: &[Hand],
    gate_open: bool,
) -> TickOutcome {
    let expired = session.expire(now_ms);
    let readout = GestureReadout::evaluate(hands);
    let mut outcome = TickOutcome {
        evaluated: true,
        expired,
        readout,
        ..TickOutcome::default()
    };

    if !gate_open {
        return outcome;
    }

    let ranked = rank(&readout);

    if let Some(kind) = session.active_kind().filter(JutsuKind::tracks_hands) {
        if let Some(detection) = detection_for(&ranked, kind) {
            outcome.refreshed = session.refresh(detection);
            if outcome.refreshed {
                tracing::debug!(kind = kind.as_str(), score = detection.score(), "descriptor refreshed");
            }
        }
    }

    if session.can_trigger(now_ms) {
        if let Some(detection) = select_trigger(ranked) {
            outcome.triggered = session.trigger(now_ms, detection);
        }
    }

    outcome
}

fn detection_for(ranked: &[(JutsuKind, Option<Detection>)], kind: JutsuKind) -> Option<Detection> {
    ranked
        .iter()
        .find(|(k, _)| *k == kind)
        .and_then(|(_, detection)| *detection)
}
