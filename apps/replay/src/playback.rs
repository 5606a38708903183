//! Collaborators that replay a recording instead of a live camera.

use std::collections::HashMap;

use jutsu_application::{
    Announcer, CollaboratorError, EffectFrame, EffectRenderer, LandmarkSource, PersonMaskSource,
    VideoFrame,
};
use jutsu_effects::{AnnouncementCue, EffectDescriptor};
use jutsu_geometry::Hand;

use crate::recording::RecordedFrame;

/// Serves the recorded hands for each frame stamp. The first entry for a stamp wins.
pub struct RecordedLandmarks {
    hands: HashMap<u64, Vec<Hand>>,
}

impl RecordedLandmarks {
    pub fn new(frames: &[RecordedFrame]) -> Self {
        let mut hands = HashMap::new();
        for frame in frames {
            hands.entry(frame.frame).or_insert_with(|| frame.hands.clone());
        }
        Self { hands }
    }
}

impl LandmarkSource for RecordedLandmarks {
    fn start(&mut self) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn detect(&mut self, frame: VideoFrame, _now_ms: u64) -> Result<Vec<Hand>, CollaboratorError> {
        self.hands
            .get(&frame.stamp)
            .cloned()
            .ok_or_else(|| CollaboratorError::Failed(format!("frame {} not in recording", frame.stamp)))
    }
}

/// Reports the recorded mask availability of the last submitted frame.
pub struct RecordedMask {
    ready: HashMap<u64, bool>,
    current: bool,
}

impl RecordedMask {
    pub fn new(frames: &[RecordedFrame]) -> Self {
        let mut ready = HashMap::new();
        for frame in frames {
            ready.entry(frame.frame).or_insert(frame.mask_ready);
        }
        Self {
            ready,
            current: false,
        }
    }
}

impl PersonMaskSource for RecordedMask {
    fn start(&mut self) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn submit(&mut self, frame: VideoFrame) -> Result<(), CollaboratorError> {
        self.current = self.ready.get(&frame.stamp).copied().unwrap_or(false);
        Ok(())
    }

    fn has_mask(&self) -> bool {
        self.current
    }

    fn clear(&mut self) {
        self.current = false;
    }
}

/// Logs what a renderer would draw.
#[derive(Default)]
pub struct LoggingRenderer;

impl EffectRenderer for LoggingRenderer {
    fn render(&mut self, frame: &EffectFrame<'_>) {
        let Some(kind) = frame.active else {
            return;
        };
        match frame.descriptor {
            Some(EffectDescriptor::Chidori(d)) => tracing::trace!(
                kind = kind.as_str(),
                life = frame.remaining_life,
                palm_x = d.palm.x,
                palm_y = d.palm.y,
                "render"
            ),
            Some(EffectDescriptor::Rasengan(d)) => tracing::trace!(
                kind = kind.as_str(),
                life = frame.remaining_life,
                center_x = d.center.x,
                center_y = d.center.y,
                gap = d.gap,
                "render"
            ),
            None => tracing::trace!(kind = kind.as_str(), life = frame.remaining_life, "render"),
        }
    }
}

/// Prints each cue to stdout.
#[derive(Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn announce(&mut self, cue: &AnnouncementCue) {
        println!("{} ({})", cue.text, cue.fallback_text);
    }
}
