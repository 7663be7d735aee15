use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use emoscan_core::detection::domain::detector_config::DetectorConfig;
use emoscan_core::detection::infrastructure::classifier_resolver;
use emoscan_core::detection::infrastructure::replay_detector::ReplayDetector;
use emoscan_core::output::infrastructure::json_result_writer::JsonResultWriter;
use emoscan_core::pipeline::analyze_video_use_case::AnalyzeVideoUseCase;
use emoscan_core::pipeline::drain_executor::{DrainConfig, DrainExecutor};
use emoscan_core::pipeline::infrastructure::parked_drain_executor::ParkedDrainExecutor;
use emoscan_core::pipeline::infrastructure::polling_drain_executor::PollingDrainExecutor;

/// Facial emotion analysis over a video's detection stream.
#[derive(Parser)]
#[command(name = "emoscan")]
struct Cli {
    /// Detection stream of the video to analyze.
    video: PathBuf,

    /// Analysis framerate.
    #[arg(short, long, default_value = "30")]
    framerate: u32,

    /// Classifier data directory (overrides EMOSCAN_CLASSIFIER_DATA).
    #[arg(short = 'a', long)]
    classifier: Option<PathBuf>,

    /// Write results to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Drain strategy: poll or park.
    #[arg(long, default_value = "poll")]
    drain: String,

    /// Consumer back-off in milliseconds while no result is buffered.
    #[arg(long, default_value = "2")]
    poll_interval_ms: u64,

    /// Faces tracked per frame.
    #[arg(long, default_value = "1")]
    max_faces: u32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let classifier_dir = classifier_resolver::resolve(cli.classifier.as_deref())?;
    log::info!("Classifier data: {}", classifier_dir.display());
    log::info!("Video: {}", cli.video.display());
    log::info!("Framerate: {}", cli.framerate);

    let detector = Box::new(ReplayDetector::new(DetectorConfig {
        framerate: cli.framerate,
        max_faces: cli.max_faces,
        classifier_dir: Some(classifier_dir),
    }));
    let executor: Box<dyn DrainExecutor> = match cli.drain.as_str() {
        "park" => Box::new(ParkedDrainExecutor::new()),
        _ => Box::new(PollingDrainExecutor::new()),
    };
    let writer = Box::new(if cli.pretty {
        JsonResultWriter::pretty()
    } else {
        JsonResultWriter::new()
    });
    let drain_config = DrainConfig {
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
        ..DrainConfig::default()
    };

    let mut use_case = AnalyzeVideoUseCase::new(detector, executor, writer, Some(drain_config));

    let collection = match cli.output {
        Some(ref path) => {
            let mut file = File::create(path)?;
            let collection = use_case.execute(&cli.video, &mut file)?;
            log::info!("Output written to {}", path.display());
            collection
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            use_case.execute(&cli.video, &mut lock)?
        }
    };

    log::info!("Analyzed {} records", collection.len());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.video.exists() {
        return Err(format!("Input file not found: {}", cli.video.display()).into());
    }
    if cli.framerate == 0 {
        return Err("Framerate must be positive".into());
    }
    if cli.max_faces == 0 {
        return Err("Max faces must be positive".into());
    }
    if cli.drain != "poll" && cli.drain != "park" {
        return Err(format!("Drain strategy must be 'poll' or 'park', got '{}'", cli.drain).into());
    }
    Ok(())
}
