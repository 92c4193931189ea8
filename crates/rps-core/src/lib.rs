pub mod error;
pub mod indent;
pub mod normalize;
pub mod text_norm;
pub mod verify;

pub use crate::indent::{scan, IndentScan};
pub use crate::normalize::normalize;
pub use crate::verify::{verify, Verified};
