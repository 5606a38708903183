//! JSON-lines session recordings.
//!
//! One object per line:
//!
//! ```text
//! {"t_ms": 1200, "frame": 36, "mask_ready": true, "hands": [[{"x": 0.5, "y": 0.8}, ...], ...]}
//! ```
//!
//! Blank lines are skipped. `mask_ready` defaults to true and `hands` to empty.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use jutsu_geometry::{Hand, LandmarkError, Point};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read recording: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}, hand {hand}: {source}")]
    InvalidHand {
        line: usize,
        hand: usize,
        #[source]
        source: LandmarkError,
    },
}

pub type Result<T> = std::result::Result<T, ReplayError>;

/// One captured video frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    /// Session clock when the frame was processed.
    pub t_ms: u64,
    /// Video frame stamp; repeats mean the camera had not produced a new picture.
    pub frame: u64,
    pub mask_ready: bool,
    pub hands: Vec<Hand>,
}

#[derive(Deserialize)]
struct RawFrame {
    t_ms: u64,
    frame: u64,
    #[serde(default = "default_mask_ready")]
    mask_ready: bool,
    #[serde(default)]
    hands: Vec<Vec<Point>>,
}

fn default_mask_ready() -> bool {
    true
}

/// Load a recording from disk.
pub fn load_recording(path: impl AsRef<Path>) -> Result<Vec<RecordedFrame>> {
    let file = File::open(path.as_ref())?;
    parse_recording(BufReader::new(file))
}

/// Parse a recording from any line source. Line numbers in errors are 1-based.
pub fn parse_recording(reader: impl BufRead) -> Result<Vec<RecordedFrame>> {
    let mut frames = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: RawFrame = serde_json::from_str(&line).map_err(|source| ReplayError::Json {
            line: line_no,
            source,
        })?;

        let hands = raw
            .hands
            .into_iter()
            .enumerate()
            .map(|(hand, points)| {
                Hand::try_from(points).map_err(|source| ReplayError::InvalidHand {
                    line: line_no,
                    hand,
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        frames.push(RecordedFrame {
            t_ms: raw.t_ms,
            frame: raw.frame,
            mask_ready: raw.mask_ready,
            hands,
        });
    }

    tracing::debug!(frames = frames.len(), "recording parsed");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_json(count: usize) -> String {
        let points: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"x":0.5,"y":{}}}"#, 0.3 + i as f64 * 0.01))
            .collect();
        format!("[{}]", points.join(","))
    }

    #[test]
    fn test_parse_defaults_and_blank_lines() {
        let input = format!(
            "{{\"t_ms\":0,\"frame\":1}}\n\n   \n{{\"t_ms\":33,\"frame\":2,\"mask_ready\":false,\"hands\":[{}]}}\n",
            hand_json(21)
        );
        let frames = parse_recording(input.as_bytes()).unwrap();

        assert_eq!(frames.len(), 2);
        assert!(frames[0].mask_ready);
        assert!(frames[0].hands.is_empty());
        assert!(!frames[1].mask_ready);
        assert_eq!(frames[1].hands.len(), 1);
    }

    #[test]
    fn test_short_hand_reports_line_and_index() {
        let input = format!(
            "{{\"t_ms\":0,\"frame\":1}}\n{{\"t_ms\":33,\"frame\":2,\"hands\":[{},{}]}}\n",
            hand_json(21),
            hand_json(20)
        );
        let err = parse_recording(input.as_bytes()).unwrap_err();

        match err {
            ReplayError::InvalidHand { line, hand, source } => {
                assert_eq!(line, 2);
                assert_eq!(hand, 1);
                assert_eq!(
                    source,
                    LandmarkError::WrongPointCount {
                        expected: 21,
                        actual: 20
                    }
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bad_json_reports_line() {
        let input = "{\"t_ms\":0,\"frame\":1}\n\n{\"t_ms\": \"soon\"}\n";
        let err = parse_recording(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReplayError::Json { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3:"));
    }
}
