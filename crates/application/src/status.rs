//! HUD and status lines shown next to the video.

use jutsu_effects::JutsuKind;
use serde::Serialize;

/// One HUD line plus a short status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub hud: &'static str,
    pub status: &'static str,
}

impl StatusReport {
    const fn new(hud: &'static str, status: &'static str) -> Self {
        Self { hud, status }
    }

    pub fn stopped() -> Self {
        Self::new("Stopped.", "Idle")
    }

    pub fn ready() -> Self {
        Self::new(
            "Camera ready. Form Kage Bunshin, Chidori, or Rasengan hand seal.",
            "Camera running",
        )
    }

    pub fn start_failed() -> Self {
        Self::new(
            "Failed to start camera or model. Check camera permissions.",
            "Error starting camera",
        )
    }

    /// Report for the end of a tick. First match wins.
    pub fn for_tick(active: Option<JutsuKind>, saw_hands: bool, has_mask: bool) -> Self {
        match active {
            Some(kind) => Self::new(kind.active_hud(), "Jutsu active"),
            None if saw_hands => Self::new(
                "Hands found. Try Kage Bunshin, Chidori, or Rasengan seal.",
                "Tracking hands",
            ),
            None if !has_mask => Self::new("Camera running. Building person mask...", "Preparing clones"),
            None => Self::new("No hands detected. Keep both hands in frame.", "Camera running"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_effect_wins() {
        let report = StatusReport::for_tick(Some(JutsuKind::Rasengan), true, false);
        assert_eq!(report.status, "Jutsu active");
        assert_eq!(report.hud, JutsuKind::Rasengan.active_hud());
    }

    #[test]
    fn test_hands_before_mask() {
        let report = StatusReport::for_tick(None, true, false);
        assert_eq!(report.status, "Tracking hands");
    }

    #[test]
    fn test_waiting_for_mask() {
        let report = StatusReport::for_tick(None, false, false);
        assert_eq!(report.status, "Preparing clones");
    }

    #[test]
    fn test_no_hands_with_mask() {
        let report = StatusReport::for_tick(None, false, true);
        assert_eq!(report.status, "Camera running");
        assert!(report.hud.starts_with("No hands detected"));
    }
}
