//! Input loop for `obar`.
//!
//! Reads one update per line from stdin and drives the coordinator:
//! - a valid line shows (or keeps showing) the bar
//! - no input for `timeout` while shown hides it
//! - EOF or an invalid line hides it after a grace wait and ends the session

pub mod lines;
pub mod monitors;
pub mod surface;

pub use lines::LineReader;
pub use monitors::MonitorSet;
pub use obar_config::DEFAULT_STYLE;
pub use surface::JsonSurface;

use obar_config::{Placement, StyleConfig};
use obar_core::{BarError, InputValue, Message, Result, ShowMode, Visibility};
use obar_ipc::HyprlandIpc;
use obar_renderer::Coordinator;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, info, warn};

/// Settings taken from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub cap:     i64,
    /// Idle time before the bar hides; zero keeps it on screen.
    pub timeout: Duration,
    pub config:  Option<PathBuf>,
    pub style:   String,
    /// Screen size used when the compositor cannot be queried.
    pub screen:  (i32, i32),
}

/// Load the selected style, falling back to the defaults on any error.
pub fn load_style(config: Option<&std::path::Path>, style: &str) -> StyleConfig {
    let Some(path) = obar_config::discover(config) else {
        info!("no configuration file found; using the default style");
        return StyleConfig::default();
    };

    obar_config::load(&path, style).unwrap_or_else(|e| {
        warn!("{}: {e}; using the default style", path.display());
        StyleConfig::default()
    })
}

/// Start the bar on stdin/stdout. Returns once the input session ends.
pub async fn run(opts: RunOptions) -> Result<()> {
    let style = load_style(opts.config.as_deref(), &opts.style);

    let ipc = match HyprlandIpc::new() {
        Ok(ipc) => Some(ipc),
        Err(e) => {
            info!("compositor queries unavailable ({e}); using a {}x{} screen", opts.screen.0, opts.screen.1);
            None
        }
    };

    let monitors = MonitorSet::new(opts.screen.0, opts.screen.1);
    let surface = JsonSurface::new(std::io::stdout(), monitors);

    let mut overlay = Overlay::new(&style, opts.cap, opts.timeout, surface, ipc)?;
    overlay.listen(BufReader::new(tokio::io::stdin())).await
}

/// The coordinator together with its surface and input policy.
pub struct Overlay<W: Write> {
    coordinator: Coordinator,
    surface:     JsonSurface<W>,
    placement:   Placement,
    ipc:         Option<HyprlandIpc>,
    timeout:     Duration,
    /// Monitors are queried at least once.
    queried:     bool,
}

impl<W: Write> Overlay<W> {
    pub fn new(
        style: &StyleConfig,
        cap: i64,
        timeout: Duration,
        surface: JsonSurface<W>,
        ipc: Option<HyprlandIpc>,
    ) -> Result<Self> {
        Ok(Self {
            coordinator: Coordinator::new(style, cap)?,
            surface,
            placement: style.monitor.clone(),
            ipc,
            timeout,
            queried: false,
        })
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn into_surface(self) -> JsonSurface<W> {
        self.surface
    }

    /// Process lines until EOF or an invalid line, then hide after the grace
    /// wait. Only a read or surface failure is returned as an error.
    pub async fn listen<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<()> {
        let mut lines = LineReader::new(reader);

        loop {
            let armed = self.coordinator.visibility() == Visibility::Shown && !self.timeout.is_zero();
            let message = next_message(&mut lines, armed.then_some(self.timeout)).await?;

            match message {
                Message::Line(line) => {
                    if let Err(e) = self.update(&line).await {
                        match e {
                            BarError::InvalidInput(reason) => {
                                warn!("invalid input: {reason}; stopping");
                                break;
                            }
                            e => return Err(e),
                        }
                    }
                }
                Message::IdleTimeout => {
                    debug!("idle for {:?}; hiding", self.timeout);
                    self.coordinator.on_idle_timeout(&mut self.surface)?;
                }
                Message::Eof => {
                    info!("end of input");
                    break;
                }
            }
        }

        tokio::time::sleep(self.timeout).await;
        self.coordinator.hide(&mut self.surface)
    }

    async fn update(&mut self, line: &str) -> Result<()> {
        let input = InputValue::parse(line)?;

        if let Some(ipc) = &self.ipc {
            if !self.queried || self.placement.is_relative() {
                self.surface.monitors_mut().refresh(ipc, &self.placement).await;
                self.queried = true;
            }
        }

        let report = self.coordinator.apply(&input, &mut self.surface)?;
        let alt = if report.mode == ShowMode::Alternative { " [ALT]" } else { "" };
        info!("update: {}/{}{alt}", report.value, report.cap);
        debug!(filled = report.fill.filled, full_redraw = report.full_redraw, "frame");
        Ok(())
    }
}

/// Wait for the next input event; with a `timeout`, silence becomes
/// [`Message::IdleTimeout`].
pub async fn next_message<R: AsyncBufRead + Unpin>(
    lines: &mut LineReader<R>,
    timeout: Option<Duration>,
) -> Result<Message> {
    let next = match timeout {
        Some(limit) => match tokio::time::timeout(limit, lines.next_line()).await {
            Ok(next) => next,
            Err(_) => return Ok(Message::IdleTimeout),
        },
        None => lines.next_line().await,
    };

    Ok(match next? {
        Some(line) => Message::Line(line),
        None => Message::Eof,
    })
}
