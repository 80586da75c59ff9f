// SPDX-License-Identifier: MPL-2.0
//! Hands outbound links to the system browser.
//!
//! Quote requests leave the application entirely; the URL is passed to the
//! platform opener untouched. The process is spawned detached and never
//! awaited, so a slow browser start cannot stall the UI thread.

use crate::error::{Error, Result};
use std::process::Command;

/// Opens `url` in the default browser.
///
/// Guarded during tests to keep them from spawning real processes; unit
/// tests exercise the routing around this call instead.
pub fn open_in_browser(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::Launcher("empty url".to_string()));
    }
    if cfg!(test) {
        return Ok(());
    }

    command(url)
        .spawn()
        .map(|_| ())
        .map_err(|err| Error::Launcher(err.to_string()))
}

#[cfg(target_os = "windows")]
fn command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            open_in_browser(""),
            Err(Error::Launcher(_))
        ));
    }

    #[test]
    fn non_empty_url_is_accepted() {
        assert!(open_in_browser("https://example.test/quote").is_ok());
    }
}
