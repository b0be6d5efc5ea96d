// src/lib.rs
//! classical-cipher-engine — classical ciphers with step-by-step traces
//!
//! Features:
//! - Vigenère, Affine, Playfair and N×N Hill
//! - Enigma M3 (rotors I–V, reflectors B/C, double-stepping)
//! - Configurable-alphabet rotor cipher with random key generation
//! - Every run returns the result text plus an ordered trace for display

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod request;

// Re-export everything users need at the crate root
pub use cipher::{
    affine, build_matrix, custom_enigma, enigma, enigma_traced, generate_random_keys, hill,
    hill_determinant, playfair, vigenere, PlayfairMatrix, RotorKeySet,
};
pub use config::load as load_config;
pub use crate::core::{
    gcd, mod_inverse, modulo, normalize, CipherOutput, NormalizedText, OperationStep, Result,
    StepDetail,
};
pub use enums::Mode;
pub use error::CipherError;
pub use request::{run_batch, BatchOutcome, CipherRequest};
