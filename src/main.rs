//! native-track-filter
//!
//! Looks up a file's native language in Sonarr or Radarr, drops audio
//! tracks that are neither native nor English, fixes up default
//! dispositions and prints the decision record as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use native_track_filter::config::{Config, ConfigOverrides, LogFormat, LoggingConfig};
use native_track_filter::config_file::{generate_default_config, ConfigFile};
use native_track_filter::{
    pipeline, probe, DecisionRecord, LanguageResolver, LanguageTable, ProviderClient,
    ProviderKind, Result,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "native-track-filter";

/// Exit code when `--require-work` is set and nothing was removed
const EXIT_NO_WORK: u8 = 2;

#[derive(Parser, Debug, Clone)]
#[command(name = "native-track-filter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Media file to process. For Sonarr/Radarr its path must carry a
    /// [tvdbid-N] or [tmdbid-N] tag; TMDB searches the file's title.
    #[arg(required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Write a default configuration file to the --config path and exit.
    /// An existing file is left alone.
    #[arg(long)]
    init_config: bool,

    /// Use a captured `ffprobe -show_streams -of json` output instead of running ffprobe.
    #[arg(long)]
    probe_json: Option<PathBuf>,

    /// Configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Metadata provider (sonarr, radarr or tmdb).
    #[arg(long)]
    provider: Option<ProviderKind>,

    /// API key for the provider (TMDB: API read access token).
    #[arg(long)]
    api_key: Option<String>,

    /// Provider URL, e.g. http://192.168.1.2:8989
    #[arg(long)]
    base_url: Option<String>,

    /// ffprobe binary.
    #[arg(long)]
    ffprobe: Option<String>,

    /// Write the decision record here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit with status 2 when no stream was removed.
    #[arg(long)]
    require_work: bool,

    /// Logging level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let (config, load_error) = load_config(&args.config);
    let mut config = config.with_overrides(ConfigOverrides {
        provider: args.provider,
        api_key: args.api_key.clone(),
        base_url: args.base_url.clone(),
        ffprobe: args.ffprobe.clone(),
    });
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    // Initialize logging
    init_logging(&config.logging);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = load_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            args.config.display(),
            e
        );
    }

    if args.init_config {
        return match generate_default_config(&args.config) {
            Ok(()) => {
                tracing::info!("Wrote default configuration to {}", args.config.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to write {}: {}", args.config.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    let Some(file) = args.file.as_deref() else {
        tracing::error!("No media file given");
        return ExitCode::FAILURE;
    };

    match run(&args, file, &config).await {
        Ok(record) if args.require_work && !record.needs_work() => {
            tracing::info!("No streams were removed from {}", file.display());
            ExitCode::from(EXIT_NO_WORK)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to process {}: {}", file.display(), e);
            ExitCode::FAILURE
        }
    }
}

/// Load the config file, falling back to defaults when it is missing or broken.
fn load_config(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match ConfigFile::from_file(path) {
        Ok(cf) => (cf.into_config(), None),
        Err(e) => (Config::default(), Some(e.to_string())),
    }
}

async fn run(args: &Args, file: &Path, config: &Config) -> Result<DecisionRecord> {
    let client = ProviderClient::new(config.provider_config())?;
    let source = file.to_string_lossy().to_string();

    let media = match &args.probe_json {
        Some(path) => probe::load_probe_file(path)?,
        None => probe::probe_file(&config.ffprobe, file).await?,
    };

    let resolver = LanguageResolver::new(LanguageTable::builtin());
    let record = pipeline::process_file(&source, media, &client, &resolver).await?;

    match &args.output {
        Some(path) => record.write_to(path)?,
        None => println!("{}", record.to_json()?),
    }
    Ok(record)
}

/// Initialize logging with tracing. Logs go to stderr; stdout carries the record.
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("native_track_filter={}", logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
