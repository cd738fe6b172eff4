//! Opening links in the user's default browser.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

/// Opens URLs somewhere the user can see them.
pub trait BrowserOpener: Send + Sync {
    /// Fire-and-forget: returns once the opener is launched, not when the page loads.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform's opener command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        debug!(url = %url, "Opening in browser");
        spawn_detached(Self::command(url))
    }
}

/// Launch `cmd` with null stdio and reap it on a background thread,
/// so the caller never blocks and no zombie is left behind.
fn spawn_detached(mut cmd: Command) -> io::Result<()> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => debug!(%status, "Browser opener exited"),
        Ok(_) => {}
        Err(e) => debug!(error = %e, "Failed to wait for browser opener"),
    });
    Ok(())
}
