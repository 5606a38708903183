//! Event contracts for the effect lifecycle.
//!
//! Payloads are plain serde DTOs so a UI shell can mirror them without
//! guessing field names. Emission goes through the [`EventBus`] trait.

mod bus;

pub use bus::{publish, EmittedEvent, EventBus, EventBusRef, InMemoryEventBus, NullEventBus};

use chrono::{DateTime, Utc};
use jutsu_effects::JutsuKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted once the landmark and mask sources are both up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStartedEvent {
    pub session_id: Uuid,
    /// Wall-clock start time.
    pub started_at: DateTime<Utc>,
    /// Whether triggers wait for a person mask.
    pub require_person_mask: bool,
}

/// Emitted when the session is stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStoppedEvent {
    pub session_id: Uuid,
    pub stopped_at: DateTime<Utc>,
    /// Frames that reached the classifier (duplicates excluded).
    pub frames_processed: u64,
    /// Effects triggered during the session.
    pub triggers: u64,
}

/// Emitted on the frame an effect starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JutsuTriggeredEvent {
    pub session_id: Uuid,
    pub kind: JutsuKind,
    pub score: f64,
    /// Session clock at trigger time.
    pub at_ms: u64,
    pub expires_at_ms: u64,
    pub cooldown_until_ms: u64,
    /// One-shot HUD line.
    pub headline: String,
}

/// Emitted on the frame an effect is cleared by expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JutsuExpiredEvent {
    pub session_id: Uuid,
    pub kind: JutsuKind,
    pub at_ms: u64,
}

/// Event names as constants to prevent typos.
pub mod event_names {
    pub const SESSION_STARTED: &str = "session:started";
    pub const SESSION_STOPPED: &str = "session:stopped";
    pub const JUTSU_TRIGGERED: &str = "jutsu:triggered";
    pub const JUTSU_EXPIRED: &str = "jutsu:expired";
}
