//! Clipboard service
//!
//! Text is handed to an external clipboard program on its stdin
//! (`pbcopy`, `wl-copy`, `xclip`, ...). The write is synchronous: the
//! program must exit successfully for the copy to count.

use anyhow::{bail, Context, Result};
use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

/// Write-only clipboard capability
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by an external command reading from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a user-supplied command line such as `xclip -selection clipboard`
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            bail!("clipboard command is empty");
        };
        Ok(Self::new(program, parts.collect()))
    }

    /// Pick the platform's usual clipboard program
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            return Self::new("pbcopy", Vec::new());
        }
        if cfg!(windows) {
            return Self::new("clip", Vec::new());
        }
        if env::var_os("WAYLAND_DISPLAY").is_some() && is_on_path("wl-copy") {
            return Self::new("wl-copy", Vec::new());
        }
        if !is_on_path("xclip") && is_on_path("xsel") {
            return Self::new("xsel", vec!["--clipboard".into(), "--input".into()]);
        }
        Self::new("xclip", vec!["-selection".into(), "clipboard".into()])
    }

    /// Human-readable command line, used in log and error messages
    pub fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to run '{}'", self.describe()))?;

        // Dropping stdin at the end of the match closes it to signal EOF
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the child even when the write failed (e.g. EPIPE)
        let status = child
            .wait()
            .with_context(|| format!("failed to wait for '{}'", self.describe()))?;
        write_result.with_context(|| format!("failed to write to '{}'", self.describe()))?;
        if !status.success() {
            bail!("'{}' exited with {}", self.describe(), status);
        }

        log::info!("Copied to clipboard via {}: {}", self.describe(), text);
        Ok(())
    }
}

fn is_on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}
