// src/cipher/mod.rs
//! Cipher modules — each depends only on `crate::core`, never on a sibling

pub mod affine;
pub mod enigma;
pub mod hill;
pub mod playfair;
pub mod rotor;
pub mod vigenere;

pub use affine::affine;
pub use enigma::{enigma, enigma_traced};
pub use hill::{hill, hill_determinant};
pub use playfair::{build_matrix, playfair, PlayfairMatrix};
pub use rotor::{custom_enigma, generate_random_keys, RotorKeySet};
pub use vigenere::vigenere;
