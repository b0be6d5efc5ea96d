//! Hill block cipher with an invertible N×N key matrix mod 26
//!
//! Determinants and adjugates use exact-integer Laplace expansion, which is
//! exponential in N. Block sizes are therefore capped at
//! [`MAX_HILL_BLOCK_SIZE`], where every intermediate value still fits in `i64`.

use tracing::debug;

use crate::aliases::Matrix;
use crate::consts::{ALPHABET_SIZE, HILL_PADDING, MAX_HILL_BLOCK_SIZE};
use crate::core::{
    gcd, index_letter, mod_inverse, modulo, normalize, CipherOutput, OperationStep, Result,
    StepDetail,
};
use crate::enums::Mode;
use crate::error::CipherError;

/// Exact determinant by cofactor expansion along the first row
pub fn determinant(m: &[Vec<i64>]) -> i64 {
    match m.len() {
        0 => 1,
        1 => m[0][0],
        2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
        n => (0..n)
            .map(|j| {
                let sign = if j % 2 == 0 { 1 } else { -1 };
                sign * m[0][j] * determinant(&minor(m, 0, j))
            })
            .sum(),
    }
}

/// `m` without row `row` and column `col`
fn minor(m: &[Vec<i64>], row: usize, col: usize) -> Matrix {
    m.iter()
        .enumerate()
        .filter(|&(r, _)| r != row)
        .map(|(_, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(c, _)| c != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Classical adjugate: `adj[i][j] = (-1)^(i+j) * det(minor(j, i))`
pub fn adjugate(m: &[Vec<i64>]) -> Matrix {
    let n = m.len();
    if n == 1 {
        return vec![vec![1]];
    }
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                    sign * determinant(&minor(m, j, i))
                })
                .collect()
        })
        .collect()
}

fn to_matrix(flat_key: &[i64], n: usize) -> Result<Matrix> {
    if n == 0 || n > MAX_HILL_BLOCK_SIZE {
        return Err(CipherError::InvalidBlockSize(n));
    }
    if flat_key.len() != n * n {
        return Err(CipherError::InvalidKeyLength {
            n,
            expected: n * n,
            actual: flat_key.len(),
        });
    }
    if let Some((index, &value)) = flat_key
        .iter()
        .enumerate()
        .find(|&(_, v)| !(0..ALPHABET_SIZE).contains(v))
    {
        return Err(CipherError::InvalidMatrixEntry { index, value });
    }
    Ok(flat_key.chunks(n).map(<[i64]>::to_vec).collect())
}

/// Determinant of the row-major key, reduced mod 26
pub fn hill_determinant(flat_key: &[i64], n: usize) -> Result<i64> {
    let m = to_matrix(flat_key, n)?;
    Ok(modulo(determinant(&m), ALPHABET_SIZE))
}

fn checked_matrix(flat_key: &[i64], n: usize) -> Result<(Matrix, i64)> {
    let m = to_matrix(flat_key, n)?;
    let det = modulo(determinant(&m), ALPHABET_SIZE);
    if gcd(det, ALPHABET_SIZE) != 1 {
        return Err(CipherError::SingularMatrix(det));
    }
    Ok((m, det))
}

/// Decryption matrix: `adj(M) * det⁻¹ mod 26`
pub fn inverse_key_matrix(flat_key: &[i64], n: usize) -> Result<Matrix> {
    let (m, det) = checked_matrix(flat_key, n)?;
    let det_inv = mod_inverse(det, ALPHABET_SIZE)?;
    Ok(adjugate(&m)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|v| modulo(v * det_inv, ALPHABET_SIZE))
                .collect()
        })
        .collect())
}

fn multiply(m: &[Vec<i64>], v: &[i64]) -> Vec<i64> {
    m.iter()
        .map(|row| {
            let sum: i64 = row.iter().zip(v).map(|(k, x)| k * x).sum();
            modulo(sum, ALPHABET_SIZE)
        })
        .collect()
}

fn block_formula(key: &[Vec<i64>], block: &[i64], out: &[i64]) -> String {
    key.iter()
        .zip(out)
        .map(|(row, e)| {
            let terms: Vec<String> = row
                .iter()
                .zip(block)
                .map(|(k, v)| format!("{k}*{v}"))
                .collect();
            format!("({}) mod 26 = {e}", terms.join(" + "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn hill(text: &str, flat_key: &[i64], n: usize, mode: Mode) -> Result<CipherOutput> {
    let key = match mode {
        Mode::Encrypt => checked_matrix(flat_key, n)?.0,
        Mode::Decrypt => inverse_key_matrix(flat_key, n)?,
    };

    let mut clean = normalize(text).into_string();
    if clean.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    while clean.len() % n != 0 {
        clean.push(HILL_PADDING);
    }
    debug!(%mode, n, blocks = clean.len() / n, "hill");

    let mut out = CipherOutput::with_capacity(clean.len());
    for (i, chunk) in clean.as_bytes().chunks(n).enumerate() {
        let block: Vec<i64> = chunk.iter().map(|&c| i64::from(c - b'A')).collect();
        let enc = multiply(&key, &block);
        let output: String = enc.iter().map(|&x| index_letter(x)).collect();
        let input: String = chunk.iter().map(|&c| char::from(c)).collect();
        out.push(
            OperationStep::new(i + 1, input, output, block_formula(&key, &block, &enc))
                .with_detail(StepDetail::Hill {
                    input_vector: block,
                    output_vector: enc,
                }),
        );
    }
    Ok(out)
}
