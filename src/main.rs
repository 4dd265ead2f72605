//! # Glint - fuzzy syntax styling in the terminal
//!
//! Styles a C-family source file one line at a time and prints the result.
//!
//! ```bash
//! # Colored output
//! cargo run -- path/to/Hello.java
//!
//! # Style ranges as JSON, lines 10 to 20
//! cargo run -- --format json --lines 10:20 path/to/Hello.java
//! ```

mod render;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use glint_core::{Config, Document};
use render::Format;

/// Glint - fuzzy line-at-a-time syntax styling
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to style
    #[arg(value_name = "FILE", required_unless_present = "dump_config")]
    file: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// Only print lines FIRST:LAST (1-based, inclusive)
    #[arg(short, long, value_name = "FIRST:LAST", value_parser = parse_line_range)]
    lines: Option<LineRange>,

    /// Print the effective configuration and exit
    #[arg(long)]
    dump_config: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// An inclusive, 1-based range of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineRange {
    first: usize,
    last: usize,
}

impl LineRange {
    /// Whether the 0-based line index falls in the range.
    fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&(index + 1))
    }
}

fn parse_line_range(s: &str) -> Result<LineRange, String> {
    let (first, last) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FIRST:LAST, got `{s}`"))?;
    let first: usize = first.parse().map_err(|e| format!("bad first line: {e}"))?;
    let last: usize = last.parse().map_err(|e| format!("bad last line: {e}"))?;
    if first == 0 || first > last {
        return Err(format!("invalid line range {first}:{last}"));
    }
    Ok(LineRange { first, last })
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the -v count
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(log_level(args.verbose).as_str().to_lowercase())
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting glint v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load default config")?,
    };

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    if args.dump_config {
        out.write_all(config.to_toml()?.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let styler = config.line_styler().context("invalid highlight config")?;
    let Some(path) = args.file else {
        anyhow::bail!("no input file given");
    };
    let document = Document::open(&path, styler)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let default_fg = config.highlight.default_foreground;
    for (line, styles) in document.styled_lines(default_fg) {
        if args.lines.is_some_and(|range| !range.contains(line.index)) {
            continue;
        }
        render::write_line(&mut out, args.format, &line, &styles)?;
    }
    out.flush()?;

    tracing::info!("Styled {} lines of {}", document.buffer().len_lines(), document.name());
    Ok(())
}
