// crates/rps-cli/src/cmd/copy.rs
//
// Second user action: put an already processed result on the clipboard,
// e.g. after `rps clip --no-copy --print > out.txt` and a manual review.
// Text is written verbatim.

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::io::clipboard::{Backend, Clipboard, SystemClipboard};
use crate::io::stdio;

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Clipboard helper to use
    #[arg(long, value_enum, default_value_t = Backend::Auto)]
    pub backend: Backend,
}

pub fn run(args: CopyArgs) -> anyhow::Result<()> {
    let text = stdio::read_stdin_text()?;
    let mut cb = SystemClipboard::new(args.backend)?;

    if copy_result(&mut cb, &text)? {
        eprintln!("copy ok: lines={}", text.split('\n').count());
    } else {
        eprintln!("no result text to copy (clipboard unchanged)");
    }
    Ok(())
}

/// Returns false when `text` is blank and nothing was written.
pub fn copy_result(cb: &mut dyn Clipboard, text: &str) -> anyhow::Result<bool> {
    if text.trim().is_empty() {
        return Ok(false);
    }
    cb.write_text(text).context("copy result to clipboard")?;
    info!(chars = text.chars().count(), "copied result");
    Ok(true)
}
