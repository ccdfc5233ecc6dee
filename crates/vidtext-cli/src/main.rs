use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use vidtext_core::{
    ReportConfig, build_report, fetch_video_meta, format_report_readable, load_transcript,
    save_report, save_transcript_json, save_transcript_text, video_id,
};

#[derive(Parser)]
#[command(name = "vidtext")]
#[command(about = "Turn a video transcript into top keywords and an extractive summary")]
struct Cli {
    /// Transcript file: Whisper-style JSON or plain text, one segment per line
    transcript: PathBuf,

    /// YouTube URL of the video, used for the video id and metadata
    #[arg(short, long)]
    url: Option<String>,

    /// Skip the metadata lookup
    #[arg(long)]
    no_meta: bool,

    /// Print the report as JSON instead of markdown
    #[arg(long)]
    json: bool,

    /// JSON config file with report defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of summary bullets
    #[arg(short, long)]
    bullets: Option<usize>,

    /// Number of keywords to rank
    #[arg(short, long)]
    keywords: Option<usize>,

    /// Shortest sentence (characters) accepted as a bullet
    #[arg(long)]
    min_len: Option<usize>,

    /// Longest sentence (characters) accepted as a bullet
    #[arg(long)]
    max_len: Option<usize>,

    /// Write the transcript as plain text to this file
    #[arg(long)]
    save_text: Option<PathBuf>,

    /// Write the transcript as JSON to this file
    #[arg(long)]
    save_json: Option<PathBuf>,

    /// Write the report as JSON to this file
    #[arg(long)]
    save_report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    async fn report_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::load(path).await?,
            None => ReportConfig::default(),
        };

        if let Some(bullets) = self.bullets {
            config.summary.bullets = bullets;
        }
        if let Some(keywords) = self.keywords {
            config = config.with_top_keywords(keywords);
        }
        if let Some(min_len) = self.min_len {
            config.summary.min_len = min_len;
        }
        if let Some(max_len) = self.max_len {
            config.summary.max_len = max_len;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.report_config().await.unwrap_or_else(|e| fail(e));

    // Validate the URL early
    let vid = match &cli.url {
        Some(url) => Some(video_id(url).unwrap_or_else(|e| fail(e))),
        None => None,
    };

    eprintln!(
        "\n{}  {}\n",
        style("vidtext").cyan().bold(),
        style("Transcript Reporter").dim()
    );

    // Step 1: Load transcript
    let spinner = create_spinner("Loading transcript...");
    let transcript = match load_transcript(&cli.transcript).await {
        Ok(transcript) => transcript,
        Err(e) => {
            spinner.finish_and_clear();
            fail(e);
        }
    };
    let duration_mins = transcript.duration_seconds() / 60.0;
    let duration = if duration_mins > 0.0 {
        format!("{:.1} min, ", duration_mins)
    } else {
        String::new()
    };
    spinner.finish_with_message(format!(
        "{} Loaded: {}{} segments, {}",
        style("✓").green().bold(),
        duration,
        transcript.segments.len(),
        style(&transcript.language).yellow()
    ));

    // Step 2: Metadata (non-fatal)
    let meta = match &cli.url {
        Some(url) if !cli.no_meta => {
            let spinner = create_spinner("Fetching video metadata...");
            match fetch_video_meta(url).await {
                Ok(meta) => {
                    spinner.finish_with_message(format!(
                        "{} Metadata: {}",
                        style("✓").green().bold(),
                        style(&meta.title).dim()
                    ));
                    Some(meta)
                }
                Err(e) => {
                    warn!(error = %e, "metadata lookup failed");
                    spinner.finish_with_message(format!(
                        "{} Metadata unavailable {}",
                        style("!").yellow().bold(),
                        style("(continuing without it)").dim()
                    ));
                    None
                }
            }
        }
        _ => None,
    };

    // Step 3: Downloads
    if let Some(path) = &cli.save_text {
        save_transcript_text(&transcript, path).await?;
        eprintln!("{} {}", style("Saved:").dim(), style(path.display()).cyan());
    }
    if let Some(path) = &cli.save_json {
        save_transcript_json(&transcript, path).await?;
        eprintln!("{} {}", style("Saved:").dim(), style(path.display()).cyan());
    }

    // Step 4: Analyze
    let report = build_report(&transcript, vid, meta, &config);
    if let Some(path) = &cli.save_report {
        save_report(&report, path).await?;
        eprintln!("{} {}", style("Saved:").dim(), style(path.display()).cyan());
    }

    eprintln!("{}", style("─".repeat(60)).dim());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report_readable(&report, &config));
    }

    Ok(())
}
