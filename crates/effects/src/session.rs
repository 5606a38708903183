//! Single-slot effect lifecycle.
//!
//! ```text
//!            trigger (cooldown elapsed, slot free)
//!   Idle ───────────────────────────────────────────▶ Active(kind)
//!    ▲                                                   │  refresh (same kind,
//!    │            now > expires_at (checked first)       │  hand-anchored only)
//!    └───────────────────────────────────────────────────┘◀─┘
//! ```
//!
//! Timestamps are milliseconds on a monotonic clock. A refresh swaps the bound
//! descriptor but never moves the expiry or the cooldown.

use serde::Serialize;

use crate::detection::{Detection, EffectDescriptor};
use crate::kind::{JutsuKind, COOLDOWN_MS};

/// The effect currently occupying the slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveEffect {
    pub triggered_at_ms: u64,
    pub expires_at_ms: u64,
    /// Latest detection for this effect; replaced in place on refresh.
    pub detection: Detection,
}

impl ActiveEffect {
    pub fn kind(&self) -> JutsuKind {
        self.detection.kind()
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at_ms
    }
}

/// Session-scoped effect state: at most one active effect plus the shared cooldown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectSession {
    active: Option<ActiveEffect>,
    /// `None` until the first trigger of the session.
    cooldown_until_ms: Option<u64>,
}

impl EffectSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the slot once `now_ms` is past the active effect's expiry.
    ///
    /// Returns the kind that just ended, if any.
    pub fn expire(&mut self, now_ms: u64) -> Option<JutsuKind> {
        let effect = self.active.filter(|effect| effect.is_expired(now_ms))?;
        self.active = None;
        tracing::debug!(kind = effect.kind().as_str(), now_ms, "effect expired");
        Some(effect.kind())
    }

    pub fn cooldown_elapsed(&self, now_ms: u64) -> bool {
        self.cooldown_until_ms.map_or(true, |until| now_ms > until)
    }

    /// Whether a trigger at `now_ms` would be accepted.
    pub fn can_trigger(&self, now_ms: u64) -> bool {
        let slot_free = self.active.map_or(true, |effect| effect.is_expired(now_ms));
        slot_free && self.cooldown_elapsed(now_ms)
    }

    /// Start an effect for `detection`, re-arming the shared cooldown.
    ///
    /// Returns `None` when the cooldown is still running or an unexpired effect holds the slot.
    pub fn trigger(&mut self, now_ms: u64, detection: Detection) -> Option<ActiveEffect> {
        if !self.can_trigger(now_ms) {
            return None;
        }

        let kind = detection.kind();
        let effect = ActiveEffect {
            triggered_at_ms: now_ms,
            expires_at_ms: now_ms.saturating_add(kind.duration_ms()),
            detection,
        };
        self.active = Some(effect);
        self.cooldown_until_ms = Some(now_ms.saturating_add(COOLDOWN_MS));
        Some(effect)
    }

    /// Rebind the descriptor of an active hand-anchored effect to a fresher detection.
    ///
    /// Ignored unless `detection` is the same kind as the active effect and that kind
    /// tracks the hands. Expiry and cooldown are left untouched.
    pub fn refresh(&mut self, detection: Detection) -> bool {
        match self.active.as_mut() {
            Some(effect) if effect.kind() == detection.kind() && effect.kind().tracks_hands() => {
                effect.detection = detection;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> Option<&ActiveEffect> {
        self.active.as_ref()
    }

    pub fn active_kind(&self) -> Option<JutsuKind> {
        self.active.map(|effect| effect.kind())
    }

    /// Geometry bound to the active effect, if it has any.
    pub fn descriptor(&self) -> Option<EffectDescriptor> {
        self.active.and_then(|effect| effect.detection.descriptor())
    }

    pub fn expires_at_ms(&self) -> Option<u64> {
        self.active.map(|effect| effect.expires_at_ms)
    }

    pub fn cooldown_until_ms(&self) -> Option<u64> {
        self.cooldown_until_ms
    }

    /// Fraction of the active effect's lifetime still left, in [0, 1].
    pub fn remaining_life(&self, now_ms: u64) -> f64 {
        let Some(effect) = self.active else {
            return 0.0;
        };
        let left = effect.expires_at_ms.saturating_sub(now_ms) as f64;
        (left / effect.kind().duration_ms() as f64).clamp(0.0, 1.0)
    }

    /// Back to idle with no cooldown, as at session start.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
