//! Enigma M3 simulation: three rotors, reflector, double-stepping
//!
//! No plugboard and no ring settings. The machine is reciprocal, so the same
//! call both encrypts and decrypts.

use tracing::debug;

use crate::core::{
    index_letter, modulo, normalize, CipherOutput, OperationStep, Result, StepDetail,
};
use crate::error::CipherError;

/// A catalog rotor: substitution wiring plus turnover notch (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorWiring {
    pub name: &'static str,
    pub wiring: &'static [u8; 26],
    pub notch: usize,
    inverse: [u8; 26],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorWiring {
    pub name: &'static str,
    pub wiring: &'static [u8; 26],
}

pub static ROTORS: [RotorWiring; 5] = [
    RotorWiring::new("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", 16), // Q → R
    RotorWiring::new("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", 4), // E → F
    RotorWiring::new("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", 21), // V → W
    RotorWiring::new("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", 9), // J → K
    RotorWiring::new("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", 25), // Z → A
];

pub static REFLECTORS: [ReflectorWiring; 2] = [
    ReflectorWiring {
        name: "B",
        wiring: b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorWiring {
        name: "C",
        wiring: b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

pub fn rotor(name: &str) -> Result<&'static RotorWiring> {
    ROTORS
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| CipherError::UnknownRotor(name.to_owned()))
}

pub fn reflector(name: &str) -> Result<&'static ReflectorWiring> {
    REFLECTORS
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| CipherError::UnknownReflector(name.to_owned()))
}

impl RotorWiring {
    /// `wiring` must be a permutation of A–Z
    pub const fn new(name: &'static str, wiring: &'static [u8; 26], notch: usize) -> Self {
        let mut inverse = [0u8; 26];
        let mut i = 0;
        while i < 26 {
            inverse[(wiring[i] - b'A') as usize] = i as u8;
            i += 1;
        }
        Self {
            name,
            wiring,
            notch,
            inverse,
        }
    }

    fn forward(&self, signal: usize, pos: usize) -> usize {
        let contact = self.wiring[(signal + pos) % 26];
        modulo(i64::from(contact - b'A') - pos as i64, 26) as usize
    }

    fn backward(&self, signal: usize, pos: usize) -> usize {
        let contact = self.inverse[(signal + pos) % 26];
        modulo(i64::from(contact) - pos as i64, 26) as usize
    }
}

/// Advance the rotors for one key press: left, middle, right
fn step(rotors: &[&RotorWiring; 3], pos: &mut [usize; 3]) {
    if pos[1] == rotors[1].notch {
        // Double step: middle at its notch carries both itself and the left rotor
        pos[0] = (pos[0] + 1) % 26;
        pos[1] = (pos[1] + 1) % 26;
    } else if pos[2] == rotors[2].notch {
        pos[1] = (pos[1] + 1) % 26;
    }
    pos[2] = (pos[2] + 1) % 26;
}

/// Signal after each stage: input, right, middle, left, reflector, left, middle, right
fn signal_path(
    rotors: &[&RotorWiring; 3],
    refl: &ReflectorWiring,
    pos: &[usize; 3],
    letter: usize,
) -> [usize; 8] {
    let mut path = [letter; 8];
    let mut signal = letter;
    let mut stage = 1;
    for (r, &p) in rotors.iter().zip(pos).rev() {
        signal = r.forward(signal, p);
        path[stage] = signal;
        stage += 1;
    }
    signal = usize::from(refl.wiring[signal] - b'A');
    path[stage] = signal;
    stage += 1;
    for (r, &p) in rotors.iter().zip(pos) {
        signal = r.backward(signal, p);
        path[stage] = signal;
        stage += 1;
    }
    path
}

/// Rotors and positions are given left to right; positions are 0 (A) to 25 (Z)
pub fn enigma_traced<S: AsRef<str>>(
    text: &str,
    rotors: &[S],
    reflector_name: &str,
    initial_positions: &[usize],
) -> Result<CipherOutput> {
    let refl = reflector(reflector_name)?;
    if rotors.len() != 3 || initial_positions.len() != 3 {
        return Err(CipherError::InvalidRotorSelection {
            rotors: rotors.len(),
            positions: initial_positions.len(),
        });
    }
    let wiring = [
        rotor(rotors[0].as_ref())?,
        rotor(rotors[1].as_ref())?,
        rotor(rotors[2].as_ref())?,
    ];
    let mut pos = [0usize; 3];
    for (slot, &p) in pos.iter_mut().zip(initial_positions) {
        if p >= 26 {
            return Err(CipherError::InvalidPosition(p));
        }
        *slot = p;
    }

    let clean = normalize(text);
    debug!(
        len = clean.len(),
        rotors = ?[wiring[0].name, wiring[1].name, wiring[2].name],
        reflector = refl.name,
        "enigma"
    );

    let mut out = CipherOutput::with_capacity(clean.len());
    for (i, ch) in clean.bytes().enumerate() {
        step(&wiring, &mut pos);
        let letter = usize::from(ch - b'A');
        let path = signal_path(&wiring, refl, &pos, letter);
        let enc = index_letter(path[7] as i64);
        let window: String = pos.iter().map(|&p| index_letter(p as i64)).collect();
        let formula = path
            .iter()
            .map(|&s| index_letter(s as i64).to_string())
            .collect::<Vec<_>>()
            .join(" → ");
        out.push(
            OperationStep::new(i + 1, char::from(ch), enc, formula)
                .with_key(window)
                .with_detail(StepDetail::Enigma { positions: pos }),
        );
    }
    Ok(out)
}

/// Same as [`enigma_traced`] without the trace
pub fn enigma<S: AsRef<str>>(
    text: &str,
    rotors: &[S],
    reflector_name: &str,
    initial_positions: &[usize],
) -> Result<String> {
    enigma_traced(text, rotors, reflector_name, initial_positions).map(|out| out.result)
}
