//! obar: a lightweight overlay bar fed one value per line on stdin.
//!
//! Run with:  `pamixer --get-volume | RUST_LOG=debug obar -t 2000 | drawer`

use anyhow::Result;
use clap::Parser;
use obar_overlay::RunOptions;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Shortest timeout that still leaves the bar visible long enough to read.
const MIN_SENSIBLE_TIMEOUT_MS: u64 = 100;

#[derive(Debug, Parser)]
#[command(name = "obar", version, about, long_about = None)]
struct Cli {
    /// Maximum value; larger values overflow.
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..))]
    max: i64,

    /// Milliseconds without input before the bar hides (0: never).
    #[arg(short, long, default_value_t = 1000)]
    timeout: u64,

    /// Style file to read before the standard locations.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the style to use.
    #[arg(short, long, default_value = obar_overlay::DEFAULT_STYLE)]
    style: String,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,

    /// Screen size used when the compositor cannot be queried.
    #[arg(long, default_value = "1920x1080", value_parser = parse_screen)]
    screen: (i32, i32),
}

fn parse_screen(raw: &str) -> Result<(i32, i32), String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {raw:?}"))?;
    let dim = |s: &str| match s.trim().parse::<i32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("invalid screen dimension {s:?}")),
    };
    Ok((dim(w)?, dim(h)?))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the draw stream, so logs go to stderr.
    let default = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("obar v{} starting", env!("CARGO_PKG_VERSION"));

    if cli.timeout == 0 {
        tracing::warn!("timeout is 0; the bar will stay on screen");
    } else if cli.timeout < MIN_SENSIBLE_TIMEOUT_MS {
        tracing::warn!("timeout of {} ms is very short; the bar may not be visible", cli.timeout);
    }

    obar_overlay::run(RunOptions {
        cap:     cli.max,
        timeout: Duration::from_millis(cli.timeout),
        config:  cli.config,
        style:   cli.style,
        screen:  cli.screen,
    })
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_sizes() {
        assert_eq!(parse_screen("2560x1440"), Ok((2560, 1440)));
        assert_eq!(parse_screen("800X600"), Ok((800, 600)));
        assert!(parse_screen("1920").is_err());
        assert!(parse_screen("0x600").is_err());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["obar"]).unwrap();
        assert_eq!((cli.max, cli.timeout, cli.screen), (100, 1000, (1920, 1080)));
        assert_eq!(cli.style, "default");
        assert!(!cli.quiet && cli.config.is_none());
    }

    #[test]
    fn short_flags_and_cap_range() {
        let cli = Cli::try_parse_from(["obar", "-m", "150", "-t", "0", "-s", "slim", "-q"]).unwrap();
        assert_eq!((cli.max, cli.timeout, cli.style.as_str(), cli.quiet), (150, 0, "slim", true));
        assert!(Cli::try_parse_from(["obar", "-m", "0"]).is_err());
    }
}
