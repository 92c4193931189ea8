// crates/rps-cli/src/io/mod.rs

pub mod clipboard;
pub mod stdio;
