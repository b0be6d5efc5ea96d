//! Configurable-alphabet rotor cipher
//!
//! A simplified rotating substitution: `rotor_count` slots (`K0`, `K1`, …)
//! each hold a permutation of the first `alphabet_length` letters, and the
//! active slot advances by one after every substituted letter. There is no
//! reflector and no notch; non-letters pass through without moving the rotor.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aliases::Permutation;
use crate::consts::{
    MAX_ALPHABET_LENGTH, MAX_ROTOR_COUNT, MIN_ALPHABET_LENGTH, MIN_ROTOR_COUNT, ROTOR_SLOT_PREFIX,
};
use crate::core::{letter_index, CipherOutput, OperationStep, Result, StepDetail};
use crate::enums::Mode;
use crate::error::CipherError;

/// Rotor slot name → permutation of the active alphabet
///
/// Bijectivity is checked by [`validate_keys`], not enforced by the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotorKeySet(BTreeMap<String, Permutation>);

impl RotorKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: impl Into<String>, key: Permutation) -> Option<Permutation> {
        self.0.insert(slot.into(), key)
    }

    pub fn get(&self, slot: &str) -> Option<&Permutation> {
        self.0.get(slot)
    }

    /// Permutation for the slot at `position`
    pub fn slot(&self, position: usize) -> Option<&Permutation> {
        self.get(&slot_name(position))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Permutation)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Permutation)> for RotorKeySet {
    fn from_iter<I: IntoIterator<Item = (String, Permutation)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn slot_name(position: usize) -> String {
    format!("{ROTOR_SLOT_PREFIX}{position}")
}

#[inline]
fn max_letter(len: usize) -> char {
    (b'A' + len as u8 - 1) as char
}

fn check_alphabet_length(len: usize) -> Result<()> {
    if (MIN_ALPHABET_LENGTH..=MAX_ALPHABET_LENGTH).contains(&len) {
        Ok(())
    } else {
        Err(CipherError::InvalidAlphabetLength(len))
    }
}

fn check_rotor_count(count: usize) -> Result<()> {
    if (MIN_ROTOR_COUNT..=MAX_ROTOR_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(CipherError::InvalidRotorCount(count))
    }
}

/// First `len` uppercase letters, e.g. 5 → `[A, B, C, D, E]`
pub fn generate_alphabet(len: usize) -> Result<Vec<char>> {
    check_alphabet_length(len)?;
    Ok(('A'..='Z').take(len).collect())
}

pub fn generate_random_keys(rotor_count: usize, alphabet_length: usize) -> Result<RotorKeySet> {
    generate_random_keys_with(&mut rand::rng(), rotor_count, alphabet_length)
}

/// One independently shuffled alphabet per slot
pub fn generate_random_keys_with<R: Rng + ?Sized>(
    rng: &mut R,
    rotor_count: usize,
    alphabet_length: usize,
) -> Result<RotorKeySet> {
    check_rotor_count(rotor_count)?;
    let alphabet = generate_alphabet(alphabet_length)?;
    Ok((0..rotor_count)
        .map(|i| {
            let mut key = alphabet.clone();
            key.shuffle(rng);
            (slot_name(i), key)
        })
        .collect())
}

/// Strict input check: only spaces and letters inside the alphabet
pub fn is_valid_for_alphabet(text: &str, alphabet_length: usize) -> bool {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| c != ' ')
        .all(|c| letter_index(c).is_some_and(|i| i < alphabet_length))
}

/// Exactly `alphabet_length` entries, all inside the alphabet, no duplicates
pub fn validate_permutation(slot: &str, key: &[char], alphabet_length: usize) -> Result<()> {
    check_alphabet_length(alphabet_length)?;
    let invalid = |reason: String| CipherError::InvalidPermutation {
        slot: slot.to_owned(),
        len: alphabet_length,
        max: max_letter(alphabet_length),
        reason,
    };

    if key.len() != alphabet_length {
        return Err(invalid(format!(
            "expected {alphabet_length} letters, got {}",
            key.len()
        )));
    }
    let mut seen = [false; 26];
    for &c in key {
        match letter_index(c) {
            Some(i) if i < alphabet_length => {
                if seen[i] {
                    return Err(invalid(format!("duplicate letter '{c}'")));
                }
                seen[i] = true;
            }
            _ => return Err(invalid(format!("letter '{c}' is outside the alphabet"))),
        }
    }
    Ok(())
}

/// Every slot `K0..K{rotor_count-1}` must hold a valid permutation
pub fn validate_keys(keys: &RotorKeySet, rotor_count: usize, alphabet_length: usize) -> Result<()> {
    check_rotor_count(rotor_count)?;
    check_alphabet_length(alphabet_length)?;
    for position in 0..rotor_count {
        let slot = slot_name(position);
        let key = keys
            .get(&slot)
            .ok_or_else(|| CipherError::MissingRotorKey(slot.clone()))?;
        validate_permutation(&slot, key, alphabet_length)?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedKey {
    pub key: Permutation,
    /// Inferred from the highest letter present
    pub alphabet_length: usize,
}

/// Parse `"D,A,H,C,F,B,G,E"`; an `expected_length` of 0 skips the length check
pub fn parse_key_string(input: &str, expected_length: usize) -> Result<ParsedKey> {
    if input.trim().is_empty() {
        return Err(CipherError::KeyParse("key must not be empty".into()));
    }

    let parts: Vec<String> = input
        .split(',')
        .map(|p| p.trim().to_ascii_uppercase())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return Err(CipherError::KeyParse("no valid letters found".into()));
    }
    if parts.iter().any(|p| p.chars().count() > 1) {
        return Err(CipherError::KeyParse(
            "each entry must be a single letter".into(),
        ));
    }
    let key: Permutation = parts.iter().filter_map(|p| p.chars().next()).collect();

    let mut duplicates: Vec<char> = Vec::new();
    for (i, c) in key.iter().enumerate() {
        if key[..i].contains(c) && !duplicates.contains(c) {
            duplicates.push(*c);
        }
    }
    if !duplicates.is_empty() {
        let list: Vec<String> = duplicates.iter().map(char::to_string).collect();
        return Err(CipherError::KeyParse(format!(
            "duplicate letters: {}",
            list.join(", ")
        )));
    }

    if let Some(c) = key.iter().find(|c| !c.is_ascii_uppercase()) {
        return Err(CipherError::KeyParse(format!(
            "'{c}' is not a letter in the range A to Z"
        )));
    }
    let alphabet_length = key
        .iter()
        .filter_map(|&c| letter_index(c))
        .max()
        .map_or(0, |i| i + 1);
    if !(MIN_ALPHABET_LENGTH..=MAX_ALPHABET_LENGTH).contains(&alphabet_length) {
        return Err(CipherError::KeyParse(format!(
            "highest letter must be between {} and Z",
            max_letter(MIN_ALPHABET_LENGTH)
        )));
    }

    if expected_length > 0 && key.len() != expected_length {
        return Err(CipherError::KeyParse(format!(
            "expected {expected_length} letters, got {}",
            key.len()
        )));
    }

    Ok(ParsedKey {
        key,
        alphabet_length,
    })
}

pub fn custom_enigma(
    text: &str,
    rotor_count: usize,
    start_position: usize,
    keys: &RotorKeySet,
    alphabet_length: usize,
    mode: Mode,
) -> Result<CipherOutput> {
    let alphabet = generate_alphabet(alphabet_length)?;
    validate_keys(keys, rotor_count, alphabet_length)?;
    if let Some(ch) = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .find(|&c| letter_index(c).is_some_and(|i| i >= alphabet_length))
    {
        return Err(CipherError::OutOfAlphabet {
            ch,
            len: alphabet_length,
            max: max_letter(alphabet_length),
        });
    }
    debug!(%mode, rotor_count, start_position, alphabet_length, "custom enigma");

    let mut out = CipherOutput::with_capacity(text.len());
    let mut position = start_position % rotor_count;
    for original in text.chars() {
        let ch = original.to_ascii_uppercase();
        let Some(index) = letter_index(ch).filter(|&i| i < alphabet_length) else {
            out.result.push(original);
            continue;
        };
        let key = keys
            .slot(position)
            .ok_or_else(|| CipherError::MissingRotorKey(slot_name(position)))?;

        let (substituted, formula) = match mode {
            Mode::Encrypt => {
                let c = key[index];
                (c, format!("{}[{ch}] = {c}", slot_name(position)))
            }
            Mode::Decrypt => {
                let c = key
                    .iter()
                    .position(|&k| k == ch)
                    .map_or(ch, |i| alphabet[i]);
                (c, format!("{}⁻¹[{ch}] = {c}", slot_name(position)))
            }
        };

        let ordinal = out.steps.len() + 1;
        out.push(
            OperationStep::new(ordinal, ch, substituted, formula)
                .with_key(slot_name(position))
                .with_detail(StepDetail::Rotor { position }),
        );
        position = (position + 1) % rotor_count;
    }
    Ok(out)
}
