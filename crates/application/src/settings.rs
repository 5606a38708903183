use serde::{Deserialize, Serialize};

/// Runtime knobs. Effect durations and the cooldown are fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Only refresh or trigger effects while a person mask is available.
    pub require_person_mask: bool,
    /// Skip detection when the video frame stamp has not changed.
    pub dedupe_frames: bool,
    /// Emit per-tick scorer results at debug level.
    pub log_scores: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            require_person_mask: true,
            dedupe_frames: true,
            log_scores: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RuntimeSettings::default();
        assert!(settings.require_person_mask);
        assert!(settings.dedupe_frames);
        assert!(!settings.log_scores);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: RuntimeSettings =
            serde_json::from_str(r#"{"require_person_mask": false}"#).unwrap();
        assert!(!settings.require_person_mask);
        assert!(settings.dedupe_frames);
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings: RuntimeSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RuntimeSettings::default());
    }
}
