// src/aliases.rs
//! Type aliases for the key shapes used across the cipher modules

/// Row-major N×N Hill key
pub type FlatKey = Vec<i64>;

/// Square integer matrix, one `Vec` per row
pub type Matrix = Vec<Vec<i64>>;

/// Rotor substitution: the letter at index `i` replaces alphabet letter `i`
pub type Permutation = Vec<char>;
