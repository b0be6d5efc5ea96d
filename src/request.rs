// src/request.rs
//! Caller-facing dispatch over the closed set of ciphers
//!
//! Each variant carries its own key shape; callers build one (usually from
//! JSON) and call [`CipherRequest::run`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aliases::FlatKey;
use crate::cipher::{affine, custom_enigma, enigma_traced, hill, playfair, vigenere, RotorKeySet};
use crate::core::{CipherOutput, Result};
use crate::enums::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "snake_case")]
pub enum CipherRequest {
    Vigenere {
        text: String,
        key: String,
        mode: Mode,
    },
    Affine {
        text: String,
        a: i64,
        b: i64,
        mode: Mode,
    },
    Playfair {
        text: String,
        keyword: String,
        mode: Mode,
    },
    Hill {
        text: String,
        key: FlatKey,
        size: usize,
        mode: Mode,
    },
    /// Reciprocal, so there is no mode
    Enigma {
        text: String,
        rotors: Vec<String>,
        reflector: String,
        positions: Vec<usize>,
    },
    Rotor {
        text: String,
        rotor_count: usize,
        #[serde(default)]
        start_position: usize,
        keys: RotorKeySet,
        alphabet_length: usize,
        mode: Mode,
    },
}

impl CipherRequest {
    pub fn name(&self) -> &'static str {
        match self {
            CipherRequest::Vigenere { .. } => "vigenere",
            CipherRequest::Affine { .. } => "affine",
            CipherRequest::Playfair { .. } => "playfair",
            CipherRequest::Hill { .. } => "hill",
            CipherRequest::Enigma { .. } => "enigma",
            CipherRequest::Rotor { .. } => "rotor",
        }
    }

    pub fn run(&self) -> Result<CipherOutput> {
        debug!(cipher = self.name(), "dispatching request");
        match self {
            CipherRequest::Vigenere { text, key, mode } => vigenere(text, key, *mode),
            CipherRequest::Affine { text, a, b, mode } => affine(text, *a, *b, *mode),
            CipherRequest::Playfair {
                text,
                keyword,
                mode,
            } => playfair(text, keyword, *mode),
            CipherRequest::Hill {
                text,
                key,
                size,
                mode,
            } => hill(text, key, *size, *mode),
            CipherRequest::Enigma {
                text,
                rotors,
                reflector,
                positions,
            } => enigma_traced(text, rotors.as_slice(), reflector, positions),
            CipherRequest::Rotor {
                text,
                rotor_count,
                start_position,
                keys,
                alphabet_length,
                mode,
            } => custom_enigma(
                text,
                *rotor_count,
                *start_position,
                keys,
                *alphabet_length,
                *mode,
            ),
        }
    }
}

/// Either the full output or the error message, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Ok(CipherOutput),
    Error(String),
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchOutcome::Ok(_))
    }
}

impl From<Result<CipherOutput>> for BatchOutcome {
    fn from(result: Result<CipherOutput>) -> Self {
        match result {
            Ok(out) => BatchOutcome::Ok(out),
            Err(err) => BatchOutcome::Error(err.to_string()),
        }
    }
}

pub fn run_batch(requests: &[CipherRequest]) -> Vec<BatchOutcome> {
    requests.iter().map(|req| req.run().into()).collect()
}
