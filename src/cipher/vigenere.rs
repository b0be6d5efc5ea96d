//! Vigenère: `C = (P + K) mod 26`, `P = (C - K) mod 26`

use tracing::debug;

use crate::core::{index_letter, modulo, normalize, CipherOutput, OperationStep, Result};
use crate::enums::Mode;
use crate::error::CipherError;

pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<CipherOutput> {
    let key = normalize(key);
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let clean = normalize(text);
    debug!(%mode, len = clean.len(), key_len = key.len(), "vigenere");

    let key_bytes = key.as_bytes();
    let mut out = CipherOutput::with_capacity(clean.len());
    for (i, ch) in clean.bytes().enumerate() {
        let key_char = key_bytes[i % key_bytes.len()];
        let p = i64::from(ch - b'A');
        let k = i64::from(key_char - b'A');
        let (c, formula) = match mode {
            Mode::Encrypt => {
                let c = modulo(p + k, 26);
                (c, format!("({p} + {k}) mod 26 = {c}"))
            }
            Mode::Decrypt => {
                let c = modulo(p - k, 26);
                (c, format!("({p} - {k}) mod 26 = {c}"))
            }
        };
        out.push(
            OperationStep::new(i + 1, char::from(ch), index_letter(c), formula)
                .with_key(char::from(key_char)),
        );
    }
    Ok(out)
}
