use std::sync::Arc;

use jutsu_application::{JutsuRuntime, RuntimeSettings, SessionError, StatusReport, VideoFrame};
use jutsu_effects::JutsuKind;
use jutsu_events::InMemoryEventBus;
use serde::Serialize;

use crate::playback::{ConsoleAnnouncer, LoggingRenderer, RecordedLandmarks, RecordedMask};
use crate::recording::RecordedFrame;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerRecord {
    pub kind: JutsuKind,
    pub at_ms: u64,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryRecord {
    pub kind: JutsuKind,
    pub at_ms: u64,
}

/// What happened over one replayed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    /// Lines in the recording.
    pub frames: usize,
    /// Frames that were scored (repeated stamps excluded).
    pub evaluated: usize,
    pub triggers: Vec<TriggerRecord>,
    pub expirations: Vec<ExpiryRecord>,
    /// HUD state after the last frame, before the session stopped.
    pub final_status: StatusReport,
    /// Lifecycle event topics in emission order.
    pub events: Vec<String>,
}

/// Feed `frames` through a fresh runtime session, in order.
pub fn run_replay(frames: &[RecordedFrame], settings: RuntimeSettings) -> Result<ReplaySummary, SessionError> {
    let bus = Arc::new(InMemoryEventBus::new());
    let mut runtime = JutsuRuntime::new(
        Box::new(RecordedLandmarks::new(frames)),
        Box::new(RecordedMask::new(frames)),
        Box::new(LoggingRenderer),
        Box::new(ConsoleAnnouncer),
        bus.clone(),
        settings,
    );
    runtime.start()?;

    let mut evaluated = 0;
    let mut triggers = Vec::new();
    let mut expirations = Vec::new();

    for frame in frames {
        let outcome = runtime.tick_at(frame.t_ms, VideoFrame::new(frame.frame))?;
        if outcome.evaluated {
            evaluated += 1;
        }
        if let Some(kind) = outcome.expired {
            expirations.push(ExpiryRecord {
                kind,
                at_ms: frame.t_ms,
            });
        }
        if let Some(effect) = outcome.triggered {
            triggers.push(TriggerRecord {
                kind: effect.kind(),
                at_ms: effect.triggered_at_ms,
                score: effect.detection.score(),
            });
        }
    }

    let final_status = runtime.status();
    runtime.stop();

    Ok(ReplaySummary {
        frames: frames.len(),
        evaluated,
        triggers,
        expirations,
        final_status,
        events: bus.topics(),
    })
}
