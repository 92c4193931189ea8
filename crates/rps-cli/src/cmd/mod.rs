// crates/rps-cli/src/cmd/mod.rs

pub mod check;
pub mod clip;
pub mod copy;
pub mod normalize;
