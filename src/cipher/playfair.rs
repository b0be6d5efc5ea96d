//! Playfair digraph substitution over a 5×5 key square (I and J share a cell)

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::consts::{PLAYFAIR_FILLER, PLAYFAIR_SIZE};
use crate::core::{modulo, normalize, CipherOutput, OperationStep, PlayfairRule, Result, StepDetail};
use crate::enums::Mode;
use crate::error::CipherError;

const CELLS: usize = PLAYFAIR_SIZE * PLAYFAIR_SIZE;

/// 25 distinct letters, row-major, never containing `J`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayfairMatrix {
    cells: [char; CELLS],
}

impl PlayfairMatrix {
    pub fn letters(&self) -> &[char] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(PLAYFAIR_SIZE)
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % PLAYFAIR_SIZE) * PLAYFAIR_SIZE + col % PLAYFAIR_SIZE]
    }

    /// Row and column of `letter`, with `J` looked up as `I`
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        let letter = fold_j(letter.to_ascii_uppercase());
        self.cells
            .iter()
            .position(|&c| c == letter)
            .map(|idx| (idx / PLAYFAIR_SIZE, idx % PLAYFAIR_SIZE))
    }

    fn shifted(&self, row: usize, col: usize, d_row: i64, d_col: i64) -> char {
        let size = PLAYFAIR_SIZE as i64;
        self.at(
            modulo(row as i64 + d_row, size) as usize,
            modulo(col as i64 + d_col, size) as usize,
        )
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}

#[inline]
fn fold_j(c: char) -> char {
    if c == 'J' {
        'I'
    } else {
        c
    }
}

/// Keyword letters in order (deduplicated), then the rest of the alphabet without `J`
pub fn build_matrix(keyword: &str) -> PlayfairMatrix {
    let mut cells = ['\0'; CELLS];
    let mut seen = [false; 26];
    let mut len = 0;

    let keyword = normalize(keyword);
    for c in keyword.chars().chain('A'..='Z') {
        let c = fold_j(c);
        let idx = (c as u8 - b'A') as usize;
        if seen[idx] {
            continue;
        }
        seen[idx] = true;
        cells[len] = c;
        len += 1;
        if len == CELLS {
            break;
        }
    }
    PlayfairMatrix { cells }
}

/// Greedy left-to-right pairing; a doubled letter or a trailing odd letter gets `X`
pub fn prepare_digraphs(text: &str) -> Vec<[char; 2]> {
    let clean: Vec<char> = normalize(text).chars().map(fold_j).collect();
    let mut digraphs = Vec::with_capacity(clean.len() / 2 + 1);
    let mut i = 0;
    while i < clean.len() {
        let a = clean[i];
        match clean.get(i + 1) {
            Some(&b) if b != a => {
                digraphs.push([a, b]);
                i += 2;
            }
            _ => {
                digraphs.push([a, PLAYFAIR_FILLER]);
                i += 1;
            }
        }
    }
    digraphs
}

pub fn playfair(text: &str, keyword: &str, mode: Mode) -> Result<CipherOutput> {
    if normalize(keyword).is_empty() {
        return Err(CipherError::EmptyKeyword);
    }
    let matrix = build_matrix(keyword);
    let digraphs = prepare_digraphs(text);
    let dir: i64 = if mode.is_encrypt() { 1 } else { -1 };
    debug!(%mode, digraphs = digraphs.len(), "playfair");

    let mut out = CipherOutput::with_capacity(digraphs.len() * 2);
    for (i, &[a, b]) in digraphs.iter().enumerate() {
        let (r1, c1) = locate(&matrix, a)?;
        let (r2, c2) = locate(&matrix, b)?;

        let (pair, rule, formula) = if r1 == r2 {
            (
                [matrix.shifted(r1, c1, 0, dir), matrix.shifted(r2, c2, 0, dir)],
                PlayfairRule::SameRow { row: r1, shift: dir },
                format!(
                    "Same row (row {}), shift columns {}",
                    r1 + 1,
                    if dir > 0 { "right" } else { "left" }
                ),
            )
        } else if c1 == c2 {
            (
                [matrix.shifted(r1, c1, dir, 0), matrix.shifted(r2, c2, dir, 0)],
                PlayfairRule::SameColumn { column: c1, shift: dir },
                format!(
                    "Same column (column {}), shift rows {}",
                    c1 + 1,
                    if dir > 0 { "down" } else { "up" }
                ),
            )
        } else {
            (
                [matrix.at(r1, c2), matrix.at(r2, c1)],
                PlayfairRule::Rectangle {
                    first: (r1, c1),
                    second: (r2, c2),
                },
                format!(
                    "Rectangle, swap columns: [{},{}] & [{},{}]",
                    r1 + 1,
                    c1 + 1,
                    r2 + 1,
                    c2 + 1
                ),
            )
        };

        out.push(
            OperationStep::new(
                i + 1,
                String::from_iter([a, b]),
                String::from_iter(pair),
                formula,
            )
            .with_detail(StepDetail::Playfair(rule)),
        );
    }
    Ok(out)
}

fn locate(matrix: &PlayfairMatrix, letter: char) -> Result<(usize, usize)> {
    matrix.position(letter).ok_or(CipherError::OutOfAlphabet {
        ch: letter,
        len: 26,
        max: 'Z',
    })
}
