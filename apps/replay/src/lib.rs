//! Headless host for the effect runtime.
//!
//! Replays a recorded landmark session frame by frame and reports which
//! effects fired and when.

mod playback;
mod recording;
mod replay;

pub use playback::{ConsoleAnnouncer, LoggingRenderer, RecordedLandmarks, RecordedMask};
pub use recording::{load_recording, parse_recording, RecordedFrame, ReplayError, Result};
pub use replay::{run_replay, ExpiryRecord, ReplaySummary, TriggerRecord};
