use clap::Args;
use rps_core::text_norm;
use tracing::{debug, info};

use crate::io::stdio;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Convert CRLF / CR line endings to LF before processing
    #[arg(long)]
    pub newlines: bool,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let raw = stdio::read_stdin_text()?;
    let text = if args.newlines {
        text_norm::normalize_newlines(&raw)
    } else {
        raw.as_str().into()
    };

    let scan = rps_core::scan(&text);
    debug!(?scan, "scanned input");

    let out = rps_core::normalize(&text);
    stdio::write_stdout_text(&out)?;

    info!(
        lines = scan.line_count,
        offset = scan.offset,
        "normalize ok"
    );
    Ok(())
}
