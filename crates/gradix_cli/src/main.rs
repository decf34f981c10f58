//! Gradix CLI
//!
//! Extract gradient descriptions from selection snapshots, generate code
//! panel entries, format code, and replay host sessions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradix_bridge::{format_code, CodeGenerator, HostMode, JSON_LANGUAGE};
use gradix_extract::{ExtractOptions, GradientExtractor, SelectionSnapshot};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod session;

use config::{GradixConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "gradix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Normalize design-tool gradient fills", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./gradix.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable experimental radial gradient extraction
    #[arg(long, global = true)]
    radial: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the gradient description of a selection snapshot
    Extract {
        /// Snapshot JSON file (`-` for stdin)
        #[arg(default_value = "-")]
        snapshot: String,
    },

    /// Print code panel entries for a selection snapshot
    Codegen {
        /// Snapshot JSON file (`-` for stdin)
        #[arg(default_value = "-")]
        snapshot: String,
    },

    /// Pretty-print code
    Format {
        /// Code file (`-` for stdin)
        #[arg(default_value = "-")]
        input: String,

        /// Language of the code
        #[arg(short, long, default_value = JSON_LANGUAGE)]
        language: String,
    },

    /// Replay a newline-delimited host session
    Session {
        /// Session file (`-` for stdin)
        #[arg(default_value = "-")]
        events: String,

        /// Host mode (default, dev, inspect, codegen)
        #[arg(short, long)]
        mode: Option<HostMode>,
    },

    /// Write a default gradix.toml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if let Commands::Init = cli.command {
        return cmd_init();
    }

    let config = GradixConfig::load(cli.config.as_deref())?;
    let options = extract_options(&config, cli.radial);

    match cli.command {
        Commands::Extract { snapshot } => cmd_extract(&snapshot, options),
        Commands::Codegen { snapshot } => cmd_codegen(&snapshot, options, &config),
        Commands::Format { input, language } => cmd_format(&input, &language),
        Commands::Session { events, mode } => {
            cmd_session(&events, options, mode.unwrap_or(config.host.mode), &config)
        }
        Commands::Init => cmd_init(),
    }
}

/// Config file options with command-line overrides applied
fn extract_options(config: &GradixConfig, radial: bool) -> ExtractOptions {
    let options = config.extract.clone();
    if radial {
        options.with_radial(true)
    } else {
        options
    }
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
    }
}

fn read_snapshot(source: &str) -> Result<SelectionSnapshot> {
    let content = read_input(source)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse selection snapshot from {}", source))
}

fn cmd_extract(source: &str, options: ExtractOptions) -> Result<()> {
    let snapshot = read_snapshot(source)?;
    let description = GradientExtractor::new(options)
        .extract(&snapshot)
        .context("No gradient extracted")?;

    info!("Extracted {} gradient", description.kind());
    println!("{}", description.to_json_pretty()?);

    Ok(())
}

fn cmd_codegen(source: &str, options: ExtractOptions, config: &GradixConfig) -> Result<()> {
    let snapshot = read_snapshot(source)?;
    let results = CodeGenerator::new(GradientExtractor::new(options))
        .with_title(config.codegen.title.clone())
        .generate(&snapshot);

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}

fn cmd_format(source: &str, language: &str) -> Result<()> {
    let code = read_input(source)?;

    match format_code(language, &code)? {
        Some(formatted) => println!("{}", formatted),
        None => anyhow::bail!(
            "No formatter for language '{}'. Supported: {}",
            language,
            JSON_LANGUAGE
        ),
    }

    Ok(())
}

fn cmd_session(
    source: &str,
    options: ExtractOptions,
    mode: HostMode,
    config: &GradixConfig,
) -> Result<()> {
    let events = session::parse_events(&read_input(source)?)?;
    info!("Replaying {} event(s) in {} mode", events.len(), mode);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(session::replay(
        events,
        options,
        mode,
        &config.codegen.title,
        &mut out,
    ))
}

fn cmd_init() -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE);
    }

    let content = GradixConfig::default().to_toml()?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    info!("Created {}", CONFIG_FILE);
    Ok(())
}
