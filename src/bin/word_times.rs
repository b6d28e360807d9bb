use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wordtime_rs::{
    AlignedTranscript, Timeline, TimelinePostprocessorBuilder, TimelineReport, WordTimeConfig,
};

#[path = "word_times/json_writer.rs"]
mod json_writer;

#[derive(Debug, Parser)]
#[command(name = "word_times")]
#[command(about = "Fill missing word timecodes and sanitize an aligned caption timeline")]
struct Args {
    /// Aligned transcript JSON produced by the alignment stage.
    #[arg(long, env = "WORDTIME_ALIGNED")]
    aligned: PathBuf,
    #[arg(long, env = "WORDTIME_CONFIG")]
    config: Option<PathBuf>,
    #[arg(
        long,
        env = "WORDTIME_AUDIO_DURATION_SEC",
        required_unless_present = "audio_samples",
        conflicts_with = "audio_samples"
    )]
    audio_duration_sec: Option<f64>,
    /// Decoded sample count; converted to seconds with the configured sample rate.
    #[arg(long, env = "WORDTIME_AUDIO_SAMPLES")]
    audio_samples: Option<usize>,
    #[arg(long, env = "WORDTIME_LANGUAGE")]
    language: Option<String>,
    #[arg(long, env = "WORDTIME_OUT")]
    out: Option<PathBuf>,
    #[arg(long, env = "WORDTIME_WITH_REPORT", default_value_t = false)]
    with_report: bool,
}

#[derive(Debug, Serialize)]
struct Meta {
    generated_at: String,
    source_path: String,
    audio_duration_sec: f64,
}

#[derive(Debug, Serialize)]
struct TimelineDocument {
    meta: Meta,
    #[serde(flatten)]
    timeline: Timeline,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<TimelineReport>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let config = match args.config.as_ref() {
        Some(path) => WordTimeConfig::load(path).map_err(|err| err.to_string())?,
        None => WordTimeConfig::default(),
    };

    let audio_duration_sec = match (args.audio_duration_sec, args.audio_samples) {
        (Some(seconds), _) => seconds,
        (None, Some(samples)) => config.audio_duration_sec(samples),
        (None, None) => {
            return Err("--audio-duration-sec or --audio-samples is required.".to_string())
        }
    };

    let transcript = AlignedTranscript::load(&args.aligned).map_err(|err| {
        format!(
            "Failed to load aligned transcript '{}': {err}",
            args.aligned.display()
        )
    })?;
    let input = transcript
        .into_timeline_input(audio_duration_sec, args.language.as_deref())
        .map_err(|err| err.to_string())?;

    let processor = TimelinePostprocessorBuilder::new(config)
        .build()
        .map_err(|err| err.to_string())?;
    let (timeline, report) = processor
        .process_with_report(&input)
        .map_err(|err| format!("Failed to build word timeline: {err}"))?;

    let document = TimelineDocument {
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            source_path: args.aligned.display().to_string(),
            audio_duration_sec,
        },
        timeline,
        report: args.with_report.then_some(report),
    };
    json_writer::write_json(args.out.as_deref(), &document)?;

    if let Some(out) = args.out.as_ref() {
        println!("{}", out.display());
    }
    Ok(())
}
