//! Effect kinds and their fixed timings.

use serde::{Deserialize, Serialize};

/// How long a Kage Bunshin effect stays on screen.
pub const KAGE_BUNSHIN_DURATION_MS: u64 = 3200;

/// How long a Chidori effect stays on screen.
pub const CHIDORI_DURATION_MS: u64 = 2500;

/// How long a Rasengan effect stays on screen.
pub const RASENGAN_DURATION_MS: u64 = 2700;

/// Minimum gap between two triggers, shared across every kind.
pub const COOLDOWN_MS: u64 = 4300;

/// The three recognizable seals, each driving one effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JutsuKind {
    KageBunshin,
    Chidori,
    Rasengan,
}

impl JutsuKind {
    pub const ALL: [JutsuKind; 3] = [Self::KageBunshin, Self::Chidori, Self::Rasengan];

    /// Stable identifier for events and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KageBunshin => "kage-bunshin",
            Self::Chidori => "chidori",
            Self::Rasengan => "rasengan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::KageBunshin => "Kage Bunshin",
            Self::Chidori => "Chidori",
            Self::Rasengan => "Rasengan",
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::KageBunshin => KAGE_BUNSHIN_DURATION_MS,
            Self::Chidori => CHIDORI_DURATION_MS,
            Self::Rasengan => RASENGAN_DURATION_MS,
        }
    }

    /// Whether the effect is anchored to the hands and follows them while active.
    pub fn tracks_hands(&self) -> bool {
        !matches!(self, Self::KageBunshin)
    }
}

impl std::fmt::Display for JutsuKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
