// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error(
        "a={0} is not coprime with 26. Valid values: 1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25"
    )]
    InvalidMultiplier(i64),

    #[error("No modular inverse for a={a} mod {m}")]
    NoInverse { a: i64, m: i64 },

    #[error("Determinant (det mod 26 = {0}) is not coprime with 26. Matrix is not invertible")]
    SingularMatrix(i64),

    #[error("Key must contain {expected} values for a {n}×{n} matrix, got {actual}")]
    InvalidKeyLength {
        n: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Block size {0} is not supported (expected 1 to {max})",
        max = crate::consts::MAX_HILL_BLOCK_SIZE
    )]
    InvalidBlockSize(usize),

    #[error("Matrix entry {value} at position {index} is outside [0, 26)")]
    InvalidMatrixEntry { index: usize, value: i64 },

    #[error("Input text must not be empty")]
    EmptyInput,

    #[error("Unknown rotor '{0}'. Valid rotors: I, II, III, IV, V")]
    UnknownRotor(String),

    #[error("Unknown reflector '{0}'. Valid reflectors: B, C")]
    UnknownReflector(String),

    #[error(
        "Expected exactly 3 rotors and 3 positions, got {rotors} rotors and {positions} positions"
    )]
    InvalidRotorSelection { rotors: usize, positions: usize },

    #[error("Rotor position {0} is outside 0..=25")]
    InvalidPosition(usize),

    #[error("Character '{ch}' is outside the {len}-letter alphabet (A-{max})")]
    OutOfAlphabet { ch: char, len: usize, max: char },

    #[error("Alphabet length must be between 5 and 26, got {0}")]
    InvalidAlphabetLength(usize),

    #[error("Rotor count must be between 3 and 10, got {0}")]
    InvalidRotorCount(usize),

    #[error("Missing key for rotor slot {0}")]
    MissingRotorKey(String),

    #[error("{slot}: key must be a valid permutation of {len} letters (A-{max}): {reason}")]
    InvalidPermutation {
        slot: String,
        len: usize,
        max: char,
        reason: String,
    },

    #[error("Invalid key string: {0}")]
    KeyParse(String),

    #[error("Unknown mode '{0}'. Expected \"encrypt\" or \"decrypt\"")]
    UnknownMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
