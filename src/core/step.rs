//! Step trace records shared by the cipher modules
//!
//! Steps are display-only: nothing in the engine reads them back.

use serde::Serialize;

/// Which Playfair rule transformed a digraph (0-based coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PlayfairRule {
    SameRow { row: usize, shift: i64 },
    SameColumn { column: usize, shift: i64 },
    Rectangle {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Cipher-specific extras attached to a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDetail {
    #[default]
    Plain,
    Playfair(PlayfairRule),
    Hill {
        input_vector: Vec<i64>,
        output_vector: Vec<i64>,
    },
    /// Rotor positions (left, middle, right) after stepping
    Enigma { positions: [usize; 3] },
    Rotor { position: usize },
}

/// One processed unit: a letter, a digraph or a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationStep {
    /// 1-based ordinal
    pub index: usize,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub output: String,
    pub formula: String,
    pub detail: StepDetail,
}

impl OperationStep {
    pub fn new(
        index: usize,
        input: impl Into<String>,
        output: impl Into<String>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            index,
            input: input.into(),
            key: None,
            output: output.into(),
            formula: formula.into(),
            detail: StepDetail::Plain,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_detail(mut self, detail: StepDetail) -> Self {
        self.detail = detail;
        self
    }
}

/// Result text plus the ordered trace that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CipherOutput {
    pub result: String,
    pub steps: Vec<OperationStep>,
}

impl CipherOutput {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            result: String::with_capacity(len),
            steps: Vec::with_capacity(len),
        }
    }

    pub fn push(&mut self, step: OperationStep) {
        self.result.push_str(&step.output);
        self.steps.push(step);
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty() && self.steps.is_empty()
    }
}
