#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use ai_timeline::{TimelineConfig, TimelineResult, generate, load_config};

#[derive(Parser, Debug)]
#[command(name = "ai-timeline")]
#[command(about = "Render a JSON list of dated events as an interactive HTML timeline", long_about = None)]
struct Cli {
    /// Path to the input JSON file (array of events)
    #[arg(long = "json_file_path", value_name = "PATH")]
    json_file_path: PathBuf,

    /// Output file name, written under timelines/
    #[arg(long = "output_file_name", value_name = "NAME", default_value = "timeline.html")]
    output_file_name: String,

    /// Optional TOML file with layout settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging (or set AI_TIMELINE_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("AI_TIMELINE_LOG").unwrap_or_else(|_| {
        if verbose { "ai_timeline=debug".to_string() } else { "ai_timeline=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn run(cli: Cli) -> TimelineResult<PathBuf> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TimelineConfig::default(),
    };
    let output_path = config.output_path(&cli.output_file_name);
    generate(&cli.json_file_path, &output_path, &config)
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(path) => println!("Timeline saved as {}", path.display()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
