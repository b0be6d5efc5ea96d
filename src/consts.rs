// src/consts.rs
//! Shared constants — alphabet bounds and cipher defaults

/// Size of the standard working alphabet (A–Z)
pub const ALPHABET_SIZE: i64 = 26;

/// Multipliers accepted by the Affine cipher (coprime with 26)
pub const VALID_AFFINE_MULTIPLIERS: [i64; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// Side length of the Playfair key square
pub const PLAYFAIR_SIZE: usize = 5;

/// Inserted between doubled letters and after a trailing odd letter
pub const PLAYFAIR_FILLER: char = 'X';

/// Right-padding for Hill blocks
pub const HILL_PADDING: char = 'X';

/// Largest Hill block for which exact Laplace expansion stays within `i64`
pub const MAX_HILL_BLOCK_SIZE: usize = 8;

/// Configurable rotor alphabet bounds
pub const MIN_ALPHABET_LENGTH: usize = 5;
pub const MAX_ALPHABET_LENGTH: usize = 26;

/// Configurable rotor slot bounds
pub const MIN_ROTOR_COUNT: usize = 3;
pub const MAX_ROTOR_COUNT: usize = 10;

/// Prefix of rotor slot names (`K0`, `K1`, …)
pub const ROTOR_SLOT_PREFIX: &str = "K";
