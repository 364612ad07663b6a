//! Clipboard port
//!
//! Copying goes through [`ClipboardPort`] so the update loop never touches
//! the system clipboard directly. The default port tries a platform
//! clipboard command and falls back to an OSC 52 escape sequence, which
//! most modern terminals forward to the system clipboard.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use specview_core::prelude::*;

/// Writes text to a clipboard
pub trait ClipboardPort: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    fn copy(&self, text: &str) -> Result<()>;
}

/// Known clipboard commands, tried in order
const CLIPBOARD_COMMANDS: &[(&str, &[&str], Option<&str>)] = &[
    ("wl-copy", &[], Some("WAYLAND_DISPLAY")),
    ("xclip", &["-selection", "clipboard"], Some("DISPLAY")),
    ("xsel", &["--clipboard", "--input"], Some("DISPLAY")),
    ("pbcopy", &[], None),
    ("clip.exe", &[], None),
];

/// Pipes text into a platform clipboard command
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// First clipboard command available on PATH for this session
    pub fn detect() -> Option<Self> {
        CLIPBOARD_COMMANDS
            .iter()
            .filter(|(_, _, env)| env.map_or(true, |var| std::env::var_os(var).is_some()))
            .find_map(|(name, args, _)| {
                which::which(name).ok().map(|path| {
                    debug!("Using clipboard command {}", path.display());
                    Self::new(path, args)
                })
            })
    }
}

impl ClipboardPort for CommandClipboard {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("clipboard command")
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::clipboard(format!("{}: {}", self.name(), e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| Error::clipboard(format!("{}: {}", self.name(), e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| Error::clipboard(format!("{}: {}", self.name(), e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::clipboard(format!(
                "{} exited with {}",
                self.name(),
                status
            )))
        }
    }
}

/// Terminal clipboard via the OSC 52 escape sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct Osc52Clipboard;

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text))
}

impl ClipboardPort for Osc52Clipboard {
    fn name(&self) -> &str {
        "osc52"
    }

    fn copy(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| Error::clipboard(format!("osc52: {}", e)))
    }
}

/// Tries `primary`, then `fallback`
pub struct FallbackClipboard {
    primary: Option<Box<dyn ClipboardPort>>,
    fallback: Box<dyn ClipboardPort>,
}

impl FallbackClipboard {
    pub fn new(primary: Option<Box<dyn ClipboardPort>>, fallback: Box<dyn ClipboardPort>) -> Self {
        Self { primary, fallback }
    }

    /// Platform command if one is installed, OSC 52 otherwise
    pub fn system() -> Self {
        let primary = CommandClipboard::detect().map(|c| Box::new(c) as Box<dyn ClipboardPort>);
        Self::new(primary, Box::new(Osc52Clipboard))
    }
}

impl ClipboardPort for FallbackClipboard {
    fn name(&self) -> &str {
        self.primary
            .as_deref()
            .map_or(self.fallback.name(), |primary| primary.name())
    }

    fn copy(&self, text: &str) -> Result<()> {
        if let Some(primary) = &self.primary {
            match primary.copy(text) {
                Ok(()) => return Ok(()),
                Err(e) => warn!(
                    "{} failed ({}), falling back to {}",
                    primary.name(),
                    e,
                    self.fallback.name()
                ),
            }
        }
        self.fallback.copy(text)
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_support::FakeClipboard;
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_fallback_used_when_primary_fails() {
        let fallback = Arc::new(FakeClipboard::default());
        let clipboard = FallbackClipboard::new(
            Some(Box::new(FakeClipboard::failing())),
            Box::new(fallback.clone()),
        );
        clipboard.copy("opencli: 1.0.0").unwrap();
        assert_eq!(fallback.copied(), vec!["opencli: 1.0.0"]);
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let primary = Arc::new(FakeClipboard::default());
        let fallback = Arc::new(FakeClipboard::default());
        let clipboard =
            FallbackClipboard::new(Some(Box::new(primary.clone())), Box::new(fallback.clone()));
        clipboard.copy("x").unwrap();
        assert_eq!(primary.copied(), vec!["x"]);
        assert!(fallback.copied().is_empty());
    }

    #[test]
    fn test_both_failing_reports_error() {
        let clipboard = FallbackClipboard::new(
            Some(Box::new(FakeClipboard::failing())),
            Box::new(FakeClipboard::failing()),
        );
        assert!(matches!(
            clipboard.copy("x"),
            Err(Error::Clipboard { .. })
        ));
    }

    #[test]
    fn test_missing_command_reports_clipboard_error() {
        let clipboard = CommandClipboard::new("/nonexistent/specview-clipboard", &[]);
        assert!(matches!(
            clipboard.copy("x"),
            Err(Error::Clipboard { .. })
        ));
    }
}
