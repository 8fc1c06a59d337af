use clap::{Parser, Subcommand, ValueEnum};
use shotzone::aggregate::Orientation;
use shotzone::commands;
use shotzone::config;
use shotzone::data_provider::{FileProvider, ShotDataProvider};
use shotzone::pitch::PitchDimensions;
use shotzone::zones::{default_zones, validate_tiling};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "shotzone")]
#[command(about = "Football shot zone statistics CLI", long_about = "Football shot zone statistics CLI\n\nReads per-player and per-match shot dumps and reports shot zones, shotmaps and headline numbers.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory holding shot dumps (overrides config)
    #[arg(short = 'D', long, global = true)]
    data_dir: Option<String>,

    /// Use fixture data instead of reading dumps
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OrientationArg {
    /// Goals at top and bottom
    Vertical,
    /// Goals left and right
    Horizontal,
}

impl OrientationArg {
    /// Convert CLI OrientationArg enum to aggregate::Orientation
    fn to_orientation(self) -> Orientation {
        match self {
            OrientationArg::Vertical => Orientation::Vertical,
            OrientationArg::Horizontal => Orientation::Horizontal,
        }
    }
}

/// CLI choice first, then the config file
fn resolve_orientation(arg: Option<OrientationArg>, config: &config::Config) -> Orientation {
    arg.map(OrientationArg::to_orientation).unwrap_or(config.orientation)
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a player's shots into pitch zones
    Shotzone {
        /// Player name as it appears in the dump file name
        player: String,

        /// Season start year (optional, defaults to the current season)
        #[arg(short, long)]
        season: Option<i32>,

        /// Pitch orientation (optional, defaults to the configured one)
        #[arg(short, long)]
        orientation: Option<OrientationArg>,

        /// Print the figure description as JSON
        #[arg(long)]
        json: bool,
    },
    /// List a player's shots with marker sizes and headline numbers
    Shotmap {
        player: String,

        #[arg(short, long)]
        season: Option<i32>,

        #[arg(long)]
        json: bool,
    },
    /// Show both teams' shots for a fixture
    Match {
        /// Home team
        home: String,

        /// Away team
        away: String,

        #[arg(short, long)]
        season: Option<i32>,

        #[arg(long)]
        json: bool,
    },
    /// Display descriptive shot statistics for a player
    Stats {
        player: String,

        #[arg(short, long)]
        season: Option<i32>,

        #[arg(long)]
        json: bool,
    },
    /// Display the zone layout
    Zones {
        #[arg(long)]
        json: bool,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("data_dir: {}", cfg.data_dir);
    println!("invalid_records: {:?}", cfg.invalid_records);
    println!("orientation: {:?}", cfg.orientation);
    println!("pitch_length_meters: {}", cfg.pitch_length_meters);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[style]");
    println!("background: {}", cfg.style.background);
    println!("main: {}", cfg.style.main);
    println!("accent: {}", cfg.style.accent);
    let ramp: Vec<String> = cfg.style.zone_ramp.iter().map(|c| c.to_string()).collect();
    println!("zone_ramp: [{}]", ramp.join(", "));
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_provider(cli: &Cli, config: &config::Config) -> Box<dyn ShotDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Box::new(shotzone::dev::mock_provider::MockProvider::new());
    }

    let data_dir = cli.data_dir.as_deref().unwrap_or(&config.data_dir);
    tracing::debug!("Reading shot dumps from {}", data_dir);
    Box::new(FileProvider::new(data_dir))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn ShotDataProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Zones { json } => commands::zones::run(config, json),
        Commands::Shotzone { player, season, orientation, json } => {
            let orientation = resolve_orientation(orientation, config);
            commands::shotzone::run(client, config, &player, season, orientation, json).await
        }
        Commands::Shotmap { player, season, json } => {
            commands::shotmap::run(client, config, &player, season, json).await
        }
        Commands::Match { home, away, season, json } => {
            commands::matchup::run(client, config, &home, &away, season, json).await
        }
        Commands::Stats { player, season, json } => {
            commands::stats::run(client, config, &player, season, json).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let dims = PitchDimensions::opta();
    if let Err(e) = validate_tiling(&default_zones(&dims), &dims) {
        eprintln!("Error: invalid zone layout: {}", e);
        tracing::error!("Invalid zone layout: {}", e);
        std::process::exit(1);
    }

    // Handle Config command separately (doesn't need a provider)
    if let Commands::Config = cli.command {
        handle_config_command(&config);
        return;
    }

    let client = create_provider(&cli, &config);
    if let Err(e) = execute_command(client.as_ref(), &config, cli.command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
