//! A qualifying scorer result, tagged with the effect it would drive.

use jutsu_gestures::{ChidoriDescriptor, KageBunshinMatch, RasenganDescriptor};
use serde::{Deserialize, Serialize};

use crate::kind::JutsuKind;

/// A scorer result that cleared its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum Detection {
    KageBunshin(KageBunshinMatch),
    Chidori(ChidoriDescriptor),
    Rasengan(RasenganDescriptor),
}

impl Detection {
    pub fn kind(&self) -> JutsuKind {
        match self {
            Self::KageBunshin(_) => JutsuKind::KageBunshin,
            Self::Chidori(_) => JutsuKind::Chidori,
            Self::Rasengan(_) => JutsuKind::Rasengan,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::KageBunshin(m) => m.score,
            Self::Chidori(d) => d.score,
            Self::Rasengan(d) => d.score,
        }
    }

    /// Hand-anchored geometry for the renderer; Kage Bunshin has none.
    pub fn descriptor(&self) -> Option<EffectDescriptor> {
        match self {
            Self::KageBunshin(_) => None,
            Self::Chidori(d) => Some(EffectDescriptor::Chidori(*d)),
            Self::Rasengan(d) => Some(EffectDescriptor::Rasengan(*d)),
        }
    }
}

/// The geometry bound to the active effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum EffectDescriptor {
    Chidori(ChidoriDescriptor),
    Rasengan(RasenganDescriptor),
}
