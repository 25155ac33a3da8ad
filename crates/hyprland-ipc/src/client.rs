use crate::monitors::{parse_active_window, parse_cursor_pos, parse_monitors, ActiveWindow, CursorPos, MonitorInfo};
use obar_core::{BarError, Result};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::debug;

/// Hyprland IPC client for one-shot queries on the command socket.
#[derive(Debug, Clone)]
pub struct HyprlandIpc {
    /// Path to `.socket.sock` (the command socket).
    cmd_socket: PathBuf,
}

impl HyprlandIpc {
    /// Create a new client, discovering the socket from `$HYPRLAND_INSTANCE_SIGNATURE`.
    pub fn new() -> Result<Self> {
        let sig = std::env::var("HYPRLAND_INSTANCE_SIGNATURE").map_err(|_| {
            BarError::Ipc("HYPRLAND_INSTANCE_SIGNATURE not set; is Hyprland running?".into())
        })?;

        let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
            .unwrap_or_else(|_| "/run/user/1000".to_string());

        Ok(Self::with_socket(
            PathBuf::from(format!("{runtime_dir}/hypr/{sig}")).join(".socket.sock"),
        ))
    }

    pub fn with_socket(cmd_socket: impl Into<PathBuf>) -> Self {
        Self {
            cmd_socket: cmd_socket.into(),
        }
    }

    pub fn socket(&self) -> &Path {
        &self.cmd_socket
    }

    /// Send a one-shot command to Hyprland and return the raw response.
    pub async fn command(&self, cmd: &str) -> Result<String> {
        let mut stream = UnixStream::connect(&self.cmd_socket)
            .await
            .map_err(|e| BarError::Ipc(format!("connect: {e}")))?;

        stream
            .write_all(cmd.as_bytes())
            .await
            .map_err(|e| BarError::Ipc(format!("write: {e}")))?;

        let mut buf = String::new();
        stream
            .read_to_string(&mut buf)
            .await
            .map_err(|e| BarError::Ipc(format!("read: {e}")))?;

        debug!("ipc {cmd}: {} bytes", buf.len());
        Ok(buf)
    }
}

/// All monitors, via `hyprctl monitors -j`.
pub async fn fetch_monitors(ipc: &HyprlandIpc) -> Result<Vec<MonitorInfo>> {
    parse_monitors(&ipc.command("j/monitors").await?)
}

/// The focused window, via `hyprctl activewindow -j`.
pub async fn fetch_active_window(ipc: &HyprlandIpc) -> Result<ActiveWindow> {
    parse_active_window(&ipc.command("j/activewindow").await?)
}

/// The pointer position, via `hyprctl cursorpos -j`.
pub async fn fetch_cursor_pos(ipc: &HyprlandIpc) -> Result<CursorPos> {
    parse_cursor_pos(&ipc.command("j/cursorpos").await?)
}
