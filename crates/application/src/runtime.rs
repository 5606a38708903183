//! Session lifecycle around the frame orchestrator.
//!
//! `JutsuRuntime` owns the collaborators and the effect session. A host calls
//! `start`, then `tick` once per rendered frame, then `stop`.

use std::time::Instant;

use chrono::Utc;
use jutsu_effects::{ActiveEffect, EffectSession, JutsuKind};
use jutsu_events::{
    event_names, publish, EventBusRef, JutsuExpiredEvent, JutsuTriggeredEvent, SessionStartedEvent,
    SessionStoppedEvent,
};
use jutsu_geometry::Hand;
use jutsu_gestures::GestureReadout;
use uuid::Uuid;

use crate::collaborators::{
    Announcer, EffectFrame, EffectRenderer, LandmarkSource, PersonMaskSource, VideoFrame,
};
use crate::error::{Result, SessionError};
use crate::orchestrator::{process_frame, TickOutcome};
use crate::settings::RuntimeSettings;
use crate::status::StatusReport;

/// State that only exists while a session is running.
struct RunningSession {
    id: Uuid,
    clock: Instant,
    last_frame_stamp: Option<u64>,
    last_now_ms: u64,
    frames_processed: u64,
    triggers: u64,
}

impl RunningSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            clock: Instant::now(),
            last_frame_stamp: None,
            last_now_ms: 0,
            frames_processed: 0,
            triggers: 0,
        }
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.clock.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

pub struct JutsuRuntime {
    landmarks: Box<dyn LandmarkSource>,
    mask: Box<dyn PersonMaskSource>,
    renderer: Box<dyn EffectRenderer>,
    announcer: Box<dyn Announcer>,
    bus: EventBusRef,
    settings: RuntimeSettings,
    session: EffectSession,
    hands: Vec<Hand>,
    status: StatusReport,
    running: Option<RunningSession>,
}

impl JutsuRuntime {
    pub fn new(
        landmarks: Box<dyn LandmarkSource>,
        mask: Box<dyn PersonMaskSource>,
        renderer: Box<dyn EffectRenderer>,
        announcer: Box<dyn Announcer>,
        bus: EventBusRef,
        settings: RuntimeSettings,
    ) -> Self {
        Self {
            landmarks,
            mask,
            renderer,
            announcer,
            bus,
            settings,
            session: EffectSession::new(),
            hands: Vec::new(),
            status: StatusReport::stopped(),
            running: None,
        }
    }

    /// Bring up both sources and begin a fresh session.
    ///
    /// Restarts cleanly if a session is already running. On failure the
    /// runtime stays stopped and a landmark source that did come up is stopped again.
    pub fn start(&mut self) -> Result<Uuid> {
        if self.running.is_some() {
            self.stop();
        }

        if let Err(err) = self.landmarks.start() {
            tracing::error!(error = %err, "hand landmark source failed to start");
            self.status = StatusReport::start_failed();
            return Err(SessionError::LandmarkSourceUnavailable(err));
        }
        if let Err(err) = self.mask.start() {
            tracing::error!(error = %err, "person mask source failed to start");
            self.landmarks.stop();
            self.status = StatusReport::start_failed();
            return Err(SessionError::MaskSourceUnavailable(err));
        }

        self.reset_state();
        let running = RunningSession::new();
        let id = running.id;
        self.running = Some(running);
        self.status = StatusReport::ready();

        tracing::info!(session_id = %id, settings = ?self.settings, "session started");
        publish(
            self.bus.as_ref(),
            event_names::SESSION_STARTED,
            &SessionStartedEvent {
                session_id: id,
                started_at: Utc::now(),
                require_person_mask: self.settings.require_person_mask,
            },
        );
        Ok(id)
    }

    /// End the session and clear all effect state. No-op when already stopped.
    pub fn stop(&mut self) {
        self.reset_state();
        self.status = StatusReport::stopped();

        let Some(running) = self.running.take() else {
            return;
        };
        self.mask.stop();
        self.landmarks.stop();
        tracing::info!(
            session_id = %running.id,
            frames = running.frames_processed,
            triggers = running.triggers,
            "session stopped"
        );
        publish(
            self.bus.as_ref(),
            event_names::SESSION_STOPPED,
            &SessionStoppedEvent {
                session_id: running.id,
                stopped_at: Utc::now(),
                frames_processed: running.frames_processed,
                triggers: running.triggers,
            },
        );
    }

    /// Process `frame` at the session's monotonic clock.
    pub fn tick(&mut self, frame: VideoFrame) -> Result<TickOutcome> {
        let now_ms = self
            .running
            .as_ref()
            .map(RunningSession::elapsed_ms)
            .ok_or(SessionError::NotRunning)?;
        self.tick_at(now_ms, frame)
    }

    /// Process `frame` at an explicit session time.
    ///
    /// Time never runs backwards: an earlier `now_ms` is clamped to the last one seen.
    pub fn tick_at(&mut self, now_ms: u64, frame: VideoFrame) -> Result<TickOutcome> {
        let running = self.running.as_mut().ok_or(SessionError::NotRunning)?;

        if now_ms < running.last_now_ms {
            tracing::debug!(now_ms, last_ms = running.last_now_ms, "clock went backwards, clamping");
        }
        let now_ms = now_ms.max(running.last_now_ms);
        running.last_now_ms = now_ms;

        let fresh = !self.settings.dedupe_frames || running.last_frame_stamp != Some(frame.stamp);
        let session_id = running.id;

        let outcome = if fresh {
            running.last_frame_stamp = Some(frame.stamp);
            running.frames_processed += 1;

            if let Err(err) = self.mask.submit(frame) {
                tracing::warn!(stamp = frame.stamp, error = %err, "mask submission failed");
            }
            self.hands = match self.landmarks.detect(frame, now_ms) {
                Ok(hands) => hands,
                Err(err) => {
                    tracing::warn!(stamp = frame.stamp, error = %err, "hand detection failed");
                    Vec::new()
                }
            };

            let gate_open = self.mask.has_mask() || !self.settings.require_person_mask;
            let outcome = process_frame(&mut self.session, now_ms, &self.hands, gate_open);
            if self.settings.log_scores {
                log_readout(now_ms, self.hands.len(), &outcome.readout);
            }
            outcome
        } else {
            TickOutcome::expiry_only(self.session.expire(now_ms))
        };

        if let Some(kind) = outcome.expired {
            self.on_expired(session_id, kind, now_ms);
        }
        if let Some(effect) = outcome.triggered {
            self.on_triggered(session_id, effect);
        }

        self.renderer.render(&EffectFrame {
            now_ms,
            active: self.session.active_kind(),
            descriptor: self.session.descriptor(),
            remaining_life: self.session.remaining_life(now_ms),
            hands: &self.hands,
        });
        self.status = StatusReport::for_tick(
            self.session.active_kind(),
            !self.hands.is_empty(),
            self.mask.has_mask(),
        );

        Ok(outcome)
    }

    fn on_expired(&self, session_id: Uuid, kind: JutsuKind, now_ms: u64) {
        tracing::info!(kind = kind.as_str(), now_ms, "jutsu expired");
        publish(
            self.bus.as_ref(),
            event_names::JUTSU_EXPIRED,
            &JutsuExpiredEvent {
                session_id,
                kind,
                at_ms: now_ms,
            },
        );
    }

    fn on_triggered(&mut self, session_id: Uuid, effect: ActiveEffect) {
        let kind = effect.kind();
        let cue = kind.cue();
        let cooldown_until_ms = self.session.cooldown_until_ms().unwrap_or(effect.triggered_at_ms);

        tracing::info!(
            kind = kind.as_str(),
            score = effect.detection.score(),
            at_ms = effect.triggered_at_ms,
            expires_at_ms = effect.expires_at_ms,
            "jutsu triggered"
        );
        if let Some(running) = self.running.as_mut() {
            running.triggers += 1;
        }

        self.announcer.announce(cue);
        publish(
            self.bus.as_ref(),
            event_names::JUTSU_TRIGGERED,
            &JutsuTriggeredEvent {
                session_id,
                kind,
                score: effect.detection.score(),
                at_ms: effect.triggered_at_ms,
                expires_at_ms: effect.expires_at_ms,
                cooldown_until_ms,
                headline: cue.headline.to_string(),
            },
        );
    }

    fn reset_state(&mut self) {
        self.session.reset();
        self.hands.clear();
        self.mask.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.running.as_ref().map(|running| running.id)
    }

    /// Effect state of the current session.
    pub fn session(&self) -> &EffectSession {
        &self.session
    }

    /// HUD state as of the last tick, start or stop.
    pub fn status(&self) -> StatusReport {
        self.status
    }

    /// Hands from the last processed frame.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn settings(&self) -> RuntimeSettings {
        self.settings
    }
}

fn log_readout(now_ms: u64, hand_count: usize, readout: &GestureReadout) {
    tracing::debug!(
        now_ms,
        hand_count,
        kage_bunshin = ?readout.kage_bunshin.map(|m| m.score),
        chidori = ?readout.chidori.map(|d| d.score),
        rasengan = ?readout.rasengan.map(|d| d.score),
        "scores"
    );
}
