use clap::Args;
use rps_core::text_norm;

use crate::io::stdio;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Convert CRLF / CR line endings to LF before scanning
    #[arg(long)]
    pub newlines: bool,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let raw = stdio::read_stdin_text()?;
    let text = if args.newlines {
        text_norm::normalize_newlines(&raw)
    } else {
        raw.as_str().into()
    };

    let s = rps_core::scan(&text);
    println!(
        "lines={} offset={} first_indent={} participating={} needs_work={}",
        s.line_count,
        s.offset,
        s.first_indent,
        s.participating,
        s.needs_work()
    );
    Ok(())
}
