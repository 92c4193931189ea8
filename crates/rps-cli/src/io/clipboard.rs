// crates/rps-cli/src/io/clipboard.rs
//
// System clipboard access through the platform's command-line helpers:
//   macOS    pbpaste / pbcopy
//   Wayland  wl-paste / wl-copy
//   X11      xclip or xsel
//   Windows  powershell Get-Clipboard / Set-Clipboard
//
// An empty clipboard reads as "". Several helpers exit non-zero in that case,
// so their "nothing there" messages are mapped back to an empty string.
//
// Copy helpers on X11 and Wayland fork a child that keeps serving the
// selection. That child inherits the helper's stdio, so the copy side never
// pipes stdout/stderr and only waits for the helper's own exit status.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use std::string::FromUtf8Error;

use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard backend detected (pass --backend)")]
    NoBackend,

    #[error("failed to run {cmd}: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{cmd} exited with {status}: {stderr}")]
    Failed {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("clipboard text is not valid utf-8")]
    Utf8(#[from] FromUtf8Error),
}

pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// `--backend` choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Auto,
    Pbcopy,
    Wayland,
    Xclip,
    Xsel,
    Windows,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tool {
    Pbcopy,
    Wayland,
    Xclip,
    Xsel,
    Windows,
}

const EMPTY_MARKERS: &[&str] = &[
    "Nothing is copied",
    "No selection",
    "target STRING not available",
    "target UTF8_STRING not available",
];

// PowerShell writes stdout in the console code page and pipes stdin line by
// line unless told otherwise.
const PS_PASTE: &str =
    "[Console]::OutputEncoding=[Text.Encoding]::UTF8; Get-Clipboard -Raw";
const PS_COPY: &str = "[Console]::InputEncoding=[Text.Encoding]::UTF8; \
     Set-Clipboard -Value ([Console]::In.ReadToEnd())";

impl Tool {
    fn detect() -> Result<Self, ClipboardError> {
        if cfg!(target_os = "macos") {
            return Ok(Self::Pbcopy);
        }
        if cfg!(target_os = "windows") {
            return Ok(Self::Windows);
        }
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            return Ok(Self::Wayland);
        }
        if std::env::var_os("DISPLAY").is_some() {
            return Ok(Self::Xclip);
        }
        Err(ClipboardError::NoBackend)
    }

    fn paste_cmd(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Pbcopy => ("pbpaste", &[]),
            Self::Wayland => ("wl-paste", &["--no-newline"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-o"]),
            Self::Xsel => ("xsel", &["--clipboard", "--output"]),
            Self::Windows => ("powershell", &["-NoProfile", "-Command", PS_PASTE]),
        }
    }

    fn copy_cmd(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Pbcopy => ("pbcopy", &[]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-i"]),
            Self::Xsel => ("xsel", &["--clipboard", "--input"]),
            Self::Windows => ("powershell", &["-NoProfile", "-Command", PS_COPY]),
        }
    }
}

pub struct SystemClipboard {
    tool: Tool,
}

impl SystemClipboard {
    pub fn new(backend: Backend) -> Result<Self, ClipboardError> {
        let tool = match backend {
            Backend::Auto => Tool::detect()?,
            Backend::Pbcopy => Tool::Pbcopy,
            Backend::Wayland => Tool::Wayland,
            Backend::Xclip => Tool::Xclip,
            Backend::Xsel => Tool::Xsel,
            Backend::Windows => Tool::Windows,
        };
        debug!(?tool, "clipboard backend");
        Ok(Self { tool })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let (cmd, args) = self.tool.paste_cmd();
        let text = paste_with(cmd, args)?;
        if self.tool == Tool::Windows {
            return Ok(strip_host_newline(text));
        }
        Ok(text)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let (cmd, args) = self.tool.copy_cmd();
        copy_with(cmd, args, text)
    }
}

fn paste_with(cmd: &str, args: &[&str]) -> Result<String, ClipboardError> {
    let out = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ClipboardError::Spawn {
            cmd: cmd.to_owned(),
            source,
        })?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr).trim().to_owned();
        if EMPTY_MARKERS.iter().any(|m| stderr.contains(m)) {
            return Ok(String::new());
        }
        return Err(ClipboardError::Failed {
            cmd: cmd.to_owned(),
            status: out.status,
            stderr,
        });
    }

    Ok(String::from_utf8(out.stdout)?)
}

fn copy_with(cmd: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let spawn_err = |source: std::io::Error| ClipboardError::Spawn {
        cmd: cmd.to_owned(),
        source,
    };

    // stderr is inherited so helper diagnostics still reach the user.
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(spawn_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(spawn_err)?;
    }

    let status = child.wait().map_err(spawn_err)?;
    if !status.success() {
        return Err(ClipboardError::Failed {
            cmd: cmd.to_owned(),
            status,
            stderr: String::new(),
        });
    }
    Ok(())
}

/// `Get-Clipboard -Raw` output carries one extra line break from the host.
fn strip_host_newline(mut text: String) -> String {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    } else if text.ends_with('\n') {
        text.truncate(text.len() - 1);
    }
    text
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_backend_skips_detection() {
        let cb = SystemClipboard::new(Backend::Xsel).unwrap();
        assert_eq!(cb.tool, Tool::Xsel);
        assert_eq!(cb.tool.paste_cmd().0, "xsel");
        assert_eq!(cb.tool.copy_cmd().1, &["--clipboard", "--input"]);
    }

    #[test]
    fn x11_commands_target_the_clipboard_selection() {
        let (cmd, args) = Tool::Xclip.paste_cmd();
        assert_eq!(cmd, "xclip");
        assert!(args.windows(2).any(|w| w == ["-selection", "clipboard"]));
    }

    #[test]
    fn powershell_commands_force_utf8_and_whole_stdin() {
        let (_, paste) = Tool::Windows.paste_cmd();
        assert!(paste[2].contains("OutputEncoding=[Text.Encoding]::UTF8"));
        let (_, copy) = Tool::Windows.copy_cmd();
        assert!(copy[2].contains("InputEncoding=[Text.Encoding]::UTF8"));
        assert!(copy[2].contains("[Console]::In.ReadToEnd()"));
    }

    #[test]
    fn host_newline_is_stripped_once() {
        assert_eq!(strip_host_newline("  a\n  b\r\n".into()), "  a\n  b");
        assert_eq!(strip_host_newline("a\n\n".into()), "a\n");
        assert_eq!(strip_host_newline("a".into()), "a");
        assert_eq!(strip_host_newline(String::new()), "");
    }

    #[cfg(unix)]
    #[test]
    fn copy_returns_without_waiting_for_forked_server() {
        // Like xclip: swallow stdin, leave a child holding the selection.
        let script = "cat >/dev/null; sleep 6 & exit 0";
        let start = std::time::Instant::now();
        copy_with("sh", &["-c", script], "a\nb").unwrap();
        assert!(
            start.elapsed() < std::time::Duration::from_secs(3),
            "copy blocked for {:?}",
            start.elapsed()
        );
    }

    #[cfg(unix)]
    #[test]
    fn copy_reports_helper_failure() {
        let err = copy_with("sh", &["-c", "cat >/dev/null; exit 3"], "x").unwrap_err();
        assert!(matches!(err, ClipboardError::Failed { .. }));
        assert!(err.to_string().starts_with("sh exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn paste_maps_empty_clipboard_to_empty_text() {
        let script = "echo 'Nothing is copied' >&2; exit 1";
        assert_eq!(paste_with("sh", &["-c", script]).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn paste_reports_other_failures() {
        let script = "echo 'cannot open display' >&2; exit 1";
        let err = paste_with("sh", &["-c", script]).unwrap_err();
        match err {
            ClipboardError::Failed { stderr, .. } => assert_eq!(stderr, "cannot open display"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn paste_returns_helper_stdout_verbatim() {
        let text = paste_with("sh", &["-c", "printf '  a\\n  b\\n'"]).unwrap();
        assert_eq!(text, "  a\n  b\n");
    }

    #[test]
    fn missing_helper_is_a_spawn_error() {
        let err = paste_with("rps-no-such-clipboard-helper", &[]).unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn { .. }));
    }
}
