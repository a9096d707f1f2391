use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ytcopy",
    about = "Copy clean YouTube transcripts (no timestamps) or video titles",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Copy the video title instead of the transcript
    #[arg(short, long)]
    pub title: bool,

    /// Only check whether captions are available (exit 1 if not)
    #[arg(short, long)]
    pub check: bool,

    /// Show video metadata on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
