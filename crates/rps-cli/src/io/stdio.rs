// crates/rps-cli/src/io/stdio.rs

use std::io::{Read, Write};

use anyhow::Context;

pub fn read_stdin_text() -> anyhow::Result<String> {
    let mut s = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut s)
        .context("read stdin as utf-8 text")?;
    Ok(s)
}

pub fn write_stdout_text(text: &str) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes()).context("write stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
