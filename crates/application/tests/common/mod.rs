//! Shared fixtures: hand poses and scriptable collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use jutsu_application::{
    Announcer, CollaboratorError, EffectFrame, EffectRenderer, JutsuRuntime, LandmarkSource,
    PersonMaskSource, RuntimeSettings, VideoFrame,
};
use jutsu_effects::{AnnouncementCue, JutsuKind};
use jutsu_events::InMemoryEventBus;
use jutsu_geometry::Hand;

pub use jutsu_gestures::poses::*;

// --- Collaborators ---

/// Landmark source returning whatever hands the test last set.
#[derive(Clone, Default)]
pub struct ScriptedLandmarks {
    hands: Arc<Mutex<Vec<Hand>>>,
    calls: Arc<AtomicUsize>,
    stops: Arc<AtomicUsize>,
    fail_start: Arc<AtomicBool>,
    fail_detect: Arc<AtomicBool>,
}

impl ScriptedLandmarks {
    pub fn show(&self, hands: Vec<Hand>) {
        *self.hands.lock().unwrap() = hands;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn fail_start(&self) {
        self.fail_start.store(true, Ordering::SeqCst);
    }

    pub fn fail_detect(&self, fail: bool) {
        self.fail_detect.store(fail, Ordering::SeqCst);
    }
}

impl LandmarkSource for ScriptedLandmarks {
    fn start(&mut self) -> Result<(), CollaboratorError> {
        if self.fail_start.load(Ordering::SeqCst) {
            return Err(CollaboratorError::NotReady("model missing".into()));
        }
        Ok(())
    }

    fn detect(&mut self, _frame: VideoFrame, _now_ms: u64) -> Result<Vec<Hand>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_detect.load(Ordering::SeqCst) {
            return Err(CollaboratorError::Failed("inference error".into()));
        }
        Ok(self.hands.lock().unwrap().clone())
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mask source whose readiness is flipped by the test.
#[derive(Clone)]
pub struct SwitchMask {
    ready: Arc<AtomicBool>,
    submits: Arc<AtomicUsize>,
    stops: Arc<AtomicUsize>,
    fail_start: Arc<AtomicBool>,
}

impl SwitchMask {
    pub fn ready() -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(true)),
            submits: Arc::default(),
            stops: Arc::default(),
            fail_start: Arc::default(),
        }
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn submits(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn fail_start(&self) {
        self.fail_start.store(true, Ordering::SeqCst);
    }
}

impl PersonMaskSource for SwitchMask {
    fn start(&mut self) -> Result<(), CollaboratorError> {
        if self.fail_start.load(Ordering::SeqCst) {
            return Err(CollaboratorError::Failed("segmenter crashed".into()));
        }
        Ok(())
    }

    fn submit(&mut self, _frame: VideoFrame) -> Result<(), CollaboratorError> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn has_mask(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    // Readiness is owned by the test.
    fn clear(&mut self) {}

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rendered {
    pub now_ms: u64,
    pub active: Option<JutsuKind>,
    pub has_descriptor: bool,
    pub remaining_life: f64,
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<Rendered>>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> Vec<Rendered> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Rendered> {
        self.frames.lock().unwrap().last().copied()
    }
}

impl EffectRenderer for RecordingRenderer {
    fn render(&mut self, frame: &EffectFrame<'_>) {
        self.frames.lock().unwrap().push(Rendered {
            now_ms: frame.now_ms,
            active: frame.active,
            has_descriptor: frame.descriptor.is_some(),
            remaining_life: frame.remaining_life,
        });
    }
}

#[derive(Clone, Default)]
pub struct RecordingAnnouncer {
    spoken: Arc<Mutex<Vec<JutsuKind>>>,
}

impl RecordingAnnouncer {
    pub fn spoken(&self) -> Vec<JutsuKind> {
        self.spoken.lock().unwrap().clone()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, cue: &AnnouncementCue) {
        self.spoken.lock().unwrap().push(cue.kind);
    }
}

/// A runtime wired to scriptable collaborators, with handles kept for inspection.
pub struct Harness {
    pub runtime: JutsuRuntime,
    pub landmarks: ScriptedLandmarks,
    pub mask: SwitchMask,
    pub renderer: RecordingRenderer,
    pub announcer: RecordingAnnouncer,
    pub bus: Arc<InMemoryEventBus>,
}

impl Harness {
    pub fn new(settings: RuntimeSettings) -> Self {
        let landmarks = ScriptedLandmarks::default();
        let mask = SwitchMask::ready();
        let renderer = RecordingRenderer::default();
        let announcer = RecordingAnnouncer::default();
        let bus = Arc::new(InMemoryEventBus::new());

        let runtime = JutsuRuntime::new(
            Box::new(landmarks.clone()),
            Box::new(mask.clone()),
            Box::new(renderer.clone()),
            Box::new(announcer.clone()),
            bus.clone(),
            settings,
        );

        Self {
            runtime,
            landmarks,
            mask,
            renderer,
            announcer,
            bus,
        }
    }

    pub fn started(settings: RuntimeSettings) -> Self {
        let mut harness = Self::new(settings);
        harness.runtime.start().unwrap();
        harness
    }

    /// Show `hands` and tick on a fresh frame stamped with `now_ms`.
    pub fn step(&mut self, now_ms: u64, hands: Vec<Hand>) -> jutsu_application::TickOutcome {
        self.landmarks.show(hands);
        self.runtime
            .tick_at(now_ms, VideoFrame::new(now_ms))
            .unwrap()
    }
}
