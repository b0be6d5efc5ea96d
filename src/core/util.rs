//! Alphabet and modular-arithmetic helpers shared by every cipher
//!
//! Keep this light — ciphers depend on it, never on each other.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::core::Result;
use crate::error::CipherError;

/// Uppercase text restricted to the active alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NormalizedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Uppercase `text` and drop everything outside A–Z
pub fn normalize(text: &str) -> NormalizedText {
    normalize_to_alphabet(text, 26)
}

/// Uppercase `text` and drop everything outside the first `len` letters
pub fn normalize_to_alphabet(text: &str, len: usize) -> NormalizedText {
    NormalizedText(
        text.chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&c| letter_index(c).is_some_and(|i| i < len))
            .collect(),
    )
}

/// 0-based position of an uppercase ASCII letter
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}

/// Uppercase ASCII letter for a value, reduced mod 26
#[inline]
pub fn index_letter(i: i64) -> char {
    (b'A' + modulo(i, 26) as u8) as char
}

/// Mathematical modulo: always in `[0, m)`
#[inline]
pub fn modulo(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Euclid's algorithm; the result is never negative
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // 2^63 only for gcd(i64::MIN, 0) and gcd(i64::MIN, i64::MIN)
    i64::try_from(a).unwrap_or(i64::MAX)
}

/// The unique `x` in `[1, m)` with `a*x ≡ 1 (mod m)`
///
/// A modulus below 2 has no inverses at all.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64> {
    if m <= 1 {
        return Err(CipherError::NoInverse { a, m });
    }
    let a = modulo(a, m);
    // Extended Euclid; i128 holds every Bézout coefficient
    let (mut r0, mut r1) = (i128::from(m), i128::from(a));
    let (mut t0, mut t1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 != 1 {
        return Err(CipherError::NoInverse { a, m });
    }
    i64::try_from(t0.rem_euclid(i128::from(m))).map_err(|_| CipherError::NoInverse { a, m })
}
