//! System clipboard access through an external command

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::Clipboard;
use crate::errors::SummarizerError;

#[cfg(target_os = "macos")]
const DEFAULT_CLIPBOARD_COMMAND: &str = "pbcopy";
#[cfg(target_os = "windows")]
const DEFAULT_CLIPBOARD_COMMAND: &str = "clip";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_CLIPBOARD_COMMAND: &str = "xclip -selection clipboard";

/// Writes text to the clipboard by piping it into a shell command's stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: String,
}

impl CommandClipboard {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    #[must_use]
    pub fn from_optional(command: Option<&str>) -> Self {
        Self::new(command.unwrap_or(DEFAULT_CLIPBOARD_COMMAND))
    }

    fn shell(&self) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut process = Command::new("cmd");
            process.arg("/C").arg(&self.command);
            process
        }
        #[cfg(not(target_os = "windows"))]
        {
            let mut process = Command::new("sh");
            process.arg("-c").arg(&self.command);
            process
        }
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SummarizerError> {
        let mut process = self.shell();
        process.stdin(Stdio::piped());
        process.stdout(Stdio::null());
        process.stderr(Stdio::null());

        let mut child = process.spawn().map_err(|e| {
            SummarizerError::ClipboardError(format!("failed to spawn `{}`: {e}", self.command))
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| SummarizerError::ClipboardError(e.to_string()))?;
            stdin
                .shutdown()
                .await
                .map_err(|e| SummarizerError::ClipboardError(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| SummarizerError::ClipboardError(e.to_string()))?;
        if !status.success() {
            return Err(SummarizerError::ClipboardError(format!(
                "`{}` exited with {status}",
                self.command
            )));
        }
        Ok(())
    }
}
