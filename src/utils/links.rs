use crate::core::error::LinkError;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Where users take the personality test
pub const PERSONALITY_TEST_URL: &str = "https://www.16personalities.com/free-personality-test";

/// Hands a URL to something that can show it to the user
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Launches the platform browser without waiting for it
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Result<Command, LinkError> {
        let mut cmd = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        } else if cfg!(unix) {
            Command::new("xdg-open")
        } else {
            return Err(LinkError::Unsupported(std::env::consts::OS.to_string()));
        };
        cmd.arg(url);
        Ok(cmd)
    }
}

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        Self::command(url)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

/// Open the personality test. The outcome is logged and reported back only
/// so the front-end can tell the user; nothing else depends on it.
pub fn open_personality_test(opener: &dyn LinkOpener) -> bool {
    match opener.open(PERSONALITY_TEST_URL) {
        Ok(()) => {
            info!(url = PERSONALITY_TEST_URL, "Opened personality test");
            true
        }
        Err(e) => {
            warn!(url = PERSONALITY_TEST_URL, error = %e, "Failed to open personality test");
            false
        }
    }
}
