use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{Result, bail};
use log::info;

mod cli;

use cli::{Cli, OutputFormat};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytcopy.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytcopy")
        .join("logs")
}

fn deliver(rendered: &str, output: Option<&Path>, verbose: bool) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        if verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        println!("{rendered}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytcopy::config::Config::load().unwrap_or_default();

    // CLI flags take priority over config defaults
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| "en".to_string());
    let format = cli.format.unwrap_or(match config.default_format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    if cli.verbose {
        let config_path = ytcopy::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    let client = reqwest::Client::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytcopy <URL>\n       echo <URL> | ytcopy");
    }

    let mut all_available = true;

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        let video_id = ytcopy::extract_video_id(url_input)
            .ok_or_else(|| eyre::eyre!("could not extract video ID from: {url_input}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  <11-character video ID>"))?;

        if cli.check {
            if ytcopy::transcript::captions_available(&client, &video_id).await {
                println!("{video_id}: captions available");
            } else {
                println!("{video_id}: no captions");
                all_available = false;
            }
            continue;
        }

        if cli.title {
            let title = ytcopy::transcript::video_title(&client, &video_id).await?;
            deliver(&title, cli.output.as_deref(), cli.verbose)?;
            continue;
        }

        let transcript = ytcopy::transcript::retrieve_transcript(&client, &video_id, &lang).await?;

        if cli.verbose {
            eprintln!(
                "Video: {} ({})\nLanguage: {}\nAuto-generated: {}\nLines: {}",
                transcript.title,
                transcript.video_id,
                transcript.language,
                transcript.auto_generated,
                transcript.text.lines().count(),
            );
        }

        let rendered = match format {
            OutputFormat::Text => ytcopy::output::render_text(&transcript),
            OutputFormat::Json => ytcopy::output::render_json(&transcript),
        };

        deliver(&rendered, cli.output.as_deref(), cli.verbose)?;
    }

    if cli.check && !all_available {
        std::process::exit(1);
    }

    Ok(())
}
