//! Fixed per-kind presentation data handed to the audio and render collaborators.

use serde::Serialize;

use crate::kind::JutsuKind;

/// What the announcer says (and the HUD shows) when an effect triggers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnouncementCue {
    pub kind: JutsuKind,
    /// Spoken text for a Japanese voice.
    pub text: &'static str,
    /// Spoken text when no Japanese voice is available.
    pub fallback_text: &'static str,
    pub rate: f64,
    pub pitch: f64,
    /// One-shot HUD line shown on the trigger frame.
    pub headline: &'static str,
}

const KAGE_BUNSHIN_CUE: AnnouncementCue = AnnouncementCue {
    kind: JutsuKind::KageBunshin,
    text: "影分身の術!",
    fallback_text: "Kage Bunshin no Jutsu",
    rate: 1.06,
    pitch: 0.96,
    headline: "Kage Bunshin detected! 10 clones deployed in-frame.",
};

const CHIDORI_CUE: AnnouncementCue = AnnouncementCue {
    kind: JutsuKind::Chidori,
    text: "千鳥!",
    fallback_text: "Chidori!",
    rate: 1.12,
    pitch: 1.02,
    headline: "Chidori detected! Lightning unleashed from your palm.",
};

const RASENGAN_CUE: AnnouncementCue = AnnouncementCue {
    kind: JutsuKind::Rasengan,
    text: "螺旋丸!",
    fallback_text: "Rasengan!",
    rate: 1.1,
    pitch: 1.0,
    headline: "Rasengan detected! Orb formed between your palms.",
};

impl JutsuKind {
    pub fn cue(&self) -> &'static AnnouncementCue {
        match self {
            Self::KageBunshin => &KAGE_BUNSHIN_CUE,
            Self::Chidori => &CHIDORI_CUE,
            Self::Rasengan => &RASENGAN_CUE,
        }
    }

    /// HUD line while the effect is running.
    pub fn active_hud(&self) -> &'static str {
        match self {
            Self::KageBunshin => "Kage Bunshin active: 10 in-frame clones.",
            Self::Chidori => "Chidori active: lightning flowing from your palm.",
            Self::Rasengan => "Rasengan active: rotating blue orb between palms.",
        }
    }
}

/// Placement of one Kage Bunshin clone, relative to the frame center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloneOffset {
    /// Horizontal offset as a fraction of frame width.
    pub x: f64,
    /// Vertical offset as a fraction of frame height.
    pub y: f64,
    pub scale: f64,
    /// Rotation in radians.
    pub tilt: f64,
}

const fn offset(x: f64, y: f64, scale: f64, tilt: f64) -> CloneOffset {
    CloneOffset { x, y, scale, tilt }
}

/// Camera-relative clone layout, mirrored in left/right pairs.
pub const CLONE_LAYOUT: [CloneOffset; 10] = [
    offset(-0.45, -0.03, 1.0, -0.02),
    offset(0.45, -0.03, 1.0, 0.02),
    offset(-0.3, -0.17, 0.98, -0.012),
    offset(0.3, -0.17, 0.98, 0.012),
    offset(-0.2, 0.05, 1.02, -0.008),
    offset(0.2, 0.05, 1.02, 0.008),
    offset(-0.39, 0.2, 1.0, -0.018),
    offset(0.39, 0.2, 1.0, 0.018),
    offset(-0.1, 0.24, 1.01, -0.01),
    offset(0.1, 0.24, 1.01, 0.01),
];
