//! Seams for the external collaborators the runtime drives.
//!
//! Camera access, segmentation, drawing and speech all live outside this crate.
//! Each trait has a `Null*` implementation for headless use and tests.

use jutsu_effects::{AnnouncementCue, EffectDescriptor, JutsuKind};
use jutsu_geometry::Hand;

use crate::error::CollaboratorError;

/// Handle to one decoded video frame.
///
/// `stamp` is the media time of the frame; two ticks that see the same stamp
/// are looking at the same picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoFrame {
    pub stamp: u64,
}

impl VideoFrame {
    pub fn new(stamp: u64) -> Self {
        Self { stamp }
    }
}

/// Hand-landmark detector.
pub trait LandmarkSource: Send {
    /// Load models or open devices. Called once per session start.
    fn start(&mut self) -> Result<(), CollaboratorError>;

    /// Hands visible in `frame`, at most two, each with 21 points.
    ///
    /// Called at most once per distinct frame.
    fn detect(&mut self, frame: VideoFrame, now_ms: u64) -> Result<Vec<Hand>, CollaboratorError>;

    /// Release whatever `start` acquired. Called when the session ends or a
    /// later start step fails.
    fn stop(&mut self) {}
}

/// Best-effort person segmentation. Only mask availability matters here.
pub trait PersonMaskSource: Send {
    fn start(&mut self) -> Result<(), CollaboratorError>;

    /// Queue `frame` for segmentation. The mask may become available later.
    fn submit(&mut self, frame: VideoFrame) -> Result<(), CollaboratorError>;

    fn has_mask(&self) -> bool;

    /// Drop any cached mask.
    fn clear(&mut self);

    fn stop(&mut self) {}
}

/// What the renderer gets once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectFrame<'a> {
    pub now_ms: u64,
    pub active: Option<JutsuKind>,
    pub descriptor: Option<EffectDescriptor>,
    /// Fraction of the active effect still left, in [0, 1].
    pub remaining_life: f64,
    /// Latest hand set, for overlays.
    pub hands: &'a [Hand],
}

/// Draws effects. Pure sink.
pub trait EffectRenderer: Send {
    fn render(&mut self, frame: &EffectFrame<'_>);
}

/// Speaks the trigger cue. Fire and forget.
pub trait Announcer: Send {
    fn announce(&mut self, cue: &AnnouncementCue);
}

/// Never sees any hands.
pub struct NullLandmarkSource;

impl LandmarkSource for NullLandmarkSource {
    fn start(&mut self) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn detect(&mut self, _frame: VideoFrame, _now_ms: u64) -> Result<Vec<Hand>, CollaboratorError> {
        Ok(Vec::new())
    }
}

/// Never produces a mask. Pair with `require_person_mask = false` to trigger without one.
pub struct NullMaskSource;

impl PersonMaskSource for NullMaskSource {
    fn start(&mut self) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn submit(&mut self, _frame: VideoFrame) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn has_mask(&self) -> bool {
        false
    }

    fn clear(&mut self) {}
}

pub struct NullRenderer;

impl EffectRenderer for NullRenderer {
    fn render(&mut self, _frame: &EffectFrame<'_>) {}
}

pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&mut self, _cue: &AnnouncementCue) {}
}
