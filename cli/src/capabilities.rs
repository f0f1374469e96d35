//! Share capabilities available from a terminal.
//!
//! There is no native share sheet here, so the probe list is the system
//! clipboard tools in preference order; when none is installed the core
//! chain falls back to presenting the text directly.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use ladle_core::share::ShareError;
use ladle_core::{ShareCapability, ShareOutcome, SharePayload};

/// Clipboard commands worth probing for, in order.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

/// A clipboard reached by piping text into an external command.
pub struct CommandClipboard {
    command: &'static str,
    args: &'static [&'static str],
}

pub fn clipboard_chain() -> Vec<CommandClipboard> {
    CLIPBOARD_COMMANDS
        .iter()
        .map(|&(command, args)| CommandClipboard { command, args })
        .collect()
}

impl ShareCapability for CommandClipboard {
    fn name(&self) -> &'static str {
        self.command
    }

    fn is_available(&self) -> bool {
        let Some(paths) = env::var_os("PATH") else {
            return false;
        };
        env::split_paths(&paths).any(|dir| dir.join(self.command).is_file())
    }

    fn invoke(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let mut child = Command::new(self.command)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ShareError(e.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ShareError(format!("{} has no stdin", self.command)))?;
        stdin
            .write_all(payload.fallback_text().as_bytes())
            .map_err(|e| ShareError(e.to_string()))?;
        drop(stdin);

        let status = child.wait().map_err(|e| ShareError(e.to_string()))?;
        if status.success() {
            Ok(ShareOutcome::Copied)
        } else {
            Err(ShareError(format!("{} exited with {}", self.command, status)))
        }
    }
}
