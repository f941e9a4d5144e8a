//! OS-level resource opener.

use std::io;
use std::process::{Command, Stdio};

/// Opens an external resource (usually a video URL) for the viewer.
pub trait ResourceOpener {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Uses the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ResourceOpener for SystemOpener {
    fn open(&self, target: &str) -> io::Result<()> {
        let mut command = if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", target]);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(target);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(target);
            cmd
        };

        command.stdout(Stdio::null()).stderr(Stdio::null()).spawn()?;
        Ok(())
    }
}
