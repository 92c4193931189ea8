// crates/rps-cli/src/cmd/clip.rs
//
// Load -> pre-check -> normalize -> verify -> copy back.
//
// An empty clipboard and text without a common indent are both reported and
// leave the clipboard untouched. Clipboard and verification failures surface
// as errors.

use std::borrow::Cow;

use anyhow::Context;
use clap::Args;
use rps_core::{text_norm, Verified};
use tracing::{debug, info};

use crate::io::clipboard::{Backend, Clipboard, SystemClipboard};
use crate::io::stdio;

#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Clipboard helper to use
    #[arg(long, value_enum, default_value_t = Backend::Auto)]
    pub backend: Backend,

    /// Also print the processed text to stdout
    #[arg(long)]
    pub print: bool,

    /// Do not write the result back to the clipboard (use `rps copy` later)
    #[arg(long)]
    pub no_copy: bool,

    /// Convert CRLF / CR line endings to LF before processing
    #[arg(long)]
    pub newlines: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Clipboard was empty or whitespace only.
    Empty,
    /// No common indent; nothing was written.
    NothingToDo { lines: usize },
    Done {
        text: String,
        verified: Verified,
        copied: bool,
    },
}

pub fn run(args: ClipArgs) -> anyhow::Result<()> {
    let mut cb = SystemClipboard::new(args.backend)?;

    match process(&mut cb, args.newlines, !args.no_copy)? {
        Outcome::Empty => eprintln!("clipboard is empty"),
        Outcome::NothingToDo { lines } => {
            eprintln!("no prepended spaces found: lines={lines} (clipboard unchanged)")
        }
        Outcome::Done {
            text,
            verified,
            copied,
        } => {
            if args.print {
                stdio::write_stdout_text(&text)?;
            }
            eprintln!(
                "clip ok: lines={} offset={} copied={}",
                verified.line_count, verified.offset, copied
            );
        }
    }
    Ok(())
}

pub fn process(
    cb: &mut dyn Clipboard,
    newlines: bool,
    copy_back: bool,
) -> anyhow::Result<Outcome> {
    let raw = cb.read_text().context("load clipboard")?;
    info!(chars = raw.chars().count(), "loaded clipboard");

    if raw.trim().is_empty() {
        return Ok(Outcome::Empty);
    }

    let text: Cow<'_, str> = if newlines {
        text_norm::normalize_newlines(&raw)
    } else {
        Cow::Borrowed(raw.as_str())
    };

    let scan = rps_core::scan(&text);
    debug!(?scan, "scanned clipboard");
    if !scan.needs_work() {
        return Ok(Outcome::NothingToDo {
            lines: scan.line_count,
        });
    }

    let out = rps_core::normalize(&text);
    let verified = rps_core::verify(&text, &out)?;

    if copy_back {
        cb.write_text(&out).context("copy result to clipboard")?;
    }

    Ok(Outcome::Done {
        text: out,
        verified,
        copied: copy_back,
    })
}
