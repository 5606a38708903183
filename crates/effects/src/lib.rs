//! Effect lifecycle for recognized seals.
//!
//! - `kind.rs`        - the three effect kinds, durations, shared cooldown
//! - `detection.rs`   - qualifying scorer results and the descriptor slot
//! - `arbitration.rs` - priority rule when several seals qualify at once
//! - `session.rs`     - the single-slot state machine (trigger / refresh / expire)
//! - `catalog.rs`     - announcement cues, HUD lines, clone layout

mod arbitration;
mod catalog;
mod detection;
mod kind;
mod session;

pub use arbitration::{rank, select_trigger, PRIORITY};
pub use catalog::{AnnouncementCue, CloneOffset, CLONE_LAYOUT};
pub use detection::{Detection, EffectDescriptor};
pub use kind::{
    JutsuKind, CHIDORI_DURATION_MS, COOLDOWN_MS, KAGE_BUNSHIN_DURATION_MS, RASENGAN_DURATION_MS,
};
pub use session::{ActiveEffect, EffectSession};
