//! Affine: `C = (a*P + b) mod 26`, `P = a⁻¹ * (C - b) mod 26`

use tracing::debug;

use crate::core::{
    gcd, index_letter, mod_inverse, modulo, normalize, CipherOutput, OperationStep, Result,
};
use crate::enums::Mode;
use crate::error::CipherError;

pub fn affine(text: &str, a: i64, b: i64, mode: Mode) -> Result<CipherOutput> {
    if gcd(modulo(a, 26), 26) != 1 {
        return Err(CipherError::InvalidMultiplier(a));
    }
    let clean = normalize(text);
    let (a, b) = (modulo(a, 26), modulo(b, 26));
    let a_inv = mod_inverse(a, 26)?;
    debug!(%mode, len = clean.len(), a, b, a_inv, "affine");

    let mut out = CipherOutput::with_capacity(clean.len());
    for (i, ch) in clean.bytes().enumerate() {
        let p = i64::from(ch - b'A');
        let (c, formula) = match mode {
            Mode::Encrypt => {
                let c = modulo(a * p + b, 26);
                (c, format!("({a}*{p} + {b}) mod 26 = {c}"))
            }
            Mode::Decrypt => {
                let c = modulo(a_inv * (p - b), 26);
                (c, format!("{a_inv}*({p} - {b}) mod 26 = {c}"))
            }
        };
        out.push(
            OperationStep::new(i + 1, char::from(ch), index_letter(c), formula)
                .with_key(format!("a={a}, b={b}")),
        );
    }
    Ok(out)
}
