//! Frame-by-frame driver for seal recognition and effects.
//!
//! - [`process_frame`]: the pure per-tick step over an explicit [`EffectSession`]
//! - [`JutsuRuntime`]: session lifecycle, frame de-duplication, collaborator calls,
//!   lifecycle events and the HUD status
//!
//! [`EffectSession`]: jutsu_effects::EffectSession

mod collaborators;
mod error;
mod orchestrator;
mod runtime;
mod settings;
mod status;

pub use collaborators::{
    Announcer, EffectFrame, EffectRenderer, LandmarkSource, NullAnnouncer, NullLandmarkSource,
    NullMaskSource, NullRenderer, PersonMaskSource, VideoFrame,
};
pub use error::{CollaboratorError, Result, SessionError};
pub use orchestrator::{process_frame, TickOutcome};
pub use runtime::JutsuRuntime;
pub use settings::RuntimeSettings;
pub use status::StatusReport;
