// src/core/mod.rs
pub mod step;
pub mod util;

pub use step::*;
pub use util::*;

pub type Result<T> = std::result::Result<T, crate::error::CipherError>;
