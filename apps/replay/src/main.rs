use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use jutsu_application::RuntimeSettings;
use jutsu_replay::{load_recording, run_replay};
use tracing_subscriber::EnvFilter;

struct Args {
    recording: PathBuf,
    settings: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut recording = None;
    let mut settings = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                let path = iter.next().context("--settings needs a file path")?;
                settings = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path if recording.is_none() => recording = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}"),
        }
    }

    Ok(Args {
        recording: recording.context("missing recording path")?,
        settings,
    })
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<RuntimeSettings> {
    let Some(path) = path else {
        return Ok(RuntimeSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid settings {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,jutsu=debug")),
        )
        .init();

    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            let program = argv.first().map_or("jutsu-replay", String::as_str);
            eprintln!("Usage: {program} <recording.jsonl> [--settings file.json]");
            std::process::exit(1);
        }
    };

    let settings = load_settings(args.settings.as_ref())?;
    let frames = load_recording(&args.recording)
        .with_context(|| format!("failed to load {}", args.recording.display()))?;
    tracing::info!(frames = frames.len(), path = %args.recording.display(), "replaying");

    let summary = run_replay(&frames, settings)?;

    println!("\n=== Replay ===");
    println!("frames: {} ({} scored)", summary.frames, summary.evaluated);
    for trigger in &summary.triggers {
        println!(
            "[{:>7} ms] {:<12} score {:.2}",
            trigger.at_ms,
            trigger.kind.label(),
            trigger.score
        );
    }
    if summary.triggers.is_empty() {
        println!("no jutsu triggered");
    }
    println!("status: {} / {}", summary.final_status.status, summary.final_status.hud);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        std::iter::once("jutsu-replay")
            .chain(items.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_recording_only() {
        let args = parse_args(&argv(&["session.jsonl"])).unwrap();
        assert_eq!(args.recording, PathBuf::from("session.jsonl"));
        assert!(args.settings.is_none());
    }

    #[test]
    fn test_parse_settings_flag_any_position() {
        let args = parse_args(&argv(&["--settings", "s.json", "session.jsonl"])).unwrap();
        assert_eq!(args.recording, PathBuf::from("session.jsonl"));
        assert_eq!(args.settings, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&argv(&[])).is_err());
        assert!(parse_args(&argv(&["a.jsonl", "b.jsonl"])).is_err());
        assert!(parse_args(&argv(&["a.jsonl", "--settings"])).is_err());
        assert!(parse_args(&argv(&["a.jsonl", "--fast"])).is_err());
    }

    #[test]
    fn test_missing_settings_is_default() {
        assert_eq!(load_settings(None).unwrap(), RuntimeSettings::default());
    }
}
