use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use sigil::asset::{CachedAssetStore, DirAssetStore};
use sigil::config::Config;
use sigil::error::{ConfigError, ErrorCode, ParseError, RenderError, describe};
use sigil::render::Renderer;
use sigil::surface::RecordingSurface;
use tracing::level_filters::LevelFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to read notation from stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("failed to encode draw operation: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Stdin(_) => "E_STDIN",
            Self::Encode(_) => "E_ENCODE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Render(e) => e.retryable(),
            Self::Config(_) | Self::Parse(_) | Self::Stdin(_) | Self::Encode(_) => false,
        }
    }
}

/// Parse a diagram, render it into a recording surface, and print the draw
/// operations as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "sigil", version, about = "Render magic-circle notation to draw operations")]
struct Cli {
    /// Notation text; read from stdin when omitted.
    #[arg(env = "SIGIL_NOTATION")]
    notation: Option<String>,

    /// Edge length of the drawing square (overrides SIGIL_SIDE).
    #[arg(long)]
    side: Option<f64>,

    /// Glyph directory (overrides SIGIL_ASSET_DIR).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Maximum group nesting (overrides SIGIL_MAX_DEPTH).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::from_env()?;
    if let Some(side) = cli.side {
        if !side.is_finite() || side <= 0.0 {
            return Err(ConfigError::NotPositive { key: "--side", value: side.to_string() }.into());
        }
        config.side = side;
    }
    if let Some(dir) = cli.assets {
        config.asset_dir = dir;
    }
    if let Some(depth) = cli.max_depth {
        if depth == 0 {
            return Err(ConfigError::NotPositive { key: "--max-depth", value: depth.to_string() }.into());
        }
        config.max_depth = depth;
    }

    let text = match cli.notation {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let tree = config.parser().parse(&text)?;
    tracing::info!(complexity = tree.complexity(), side = config.side, "rendering diagram");

    let store = CachedAssetStore::new(DirAssetStore::new(&config.asset_dir));
    let renderer = Renderer::from_config(store, &config);
    let mut surface = RecordingSurface::new();
    renderer.render(&tree, &mut surface)?;

    for op in surface.ops() {
        println!("{}", serde_json::to_string(op)?);
    }
    Ok(())
}
