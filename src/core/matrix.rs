// square code-level count matrix
use serde::{Deserialize, Serialize};

use crate::core::error::MatrixError;
use crate::core::vocabulary::CodeVocabulary;

/// Square `|vocab| x |vocab|` count matrix, row/column indexed by vocabulary
/// position. Stored row-major. Which index is the row and which the column is
/// fixed in `populate.rs` and applied uniformly by every exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMatrix {
    size: usize,
    cells: Vec<u64>,
}

impl CodeMatrix {
    pub fn zero(size: usize) -> Self {
        CodeMatrix {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row * self.size + col]
    }

    pub fn increment(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] += 1;
    }

    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.cells[row * self.size + col] = value;
    }

    //shape check against the shared vocabulary, used by the exporters
    pub fn check_vocabulary(&self, vocab: &CodeVocabulary) -> Result<(), MatrixError> {
        if self.size != vocab.len() {
            return Err(MatrixError::VocabularyMismatch {
                matrix: self.size,
                vocabulary: vocab.len(),
            });
        }
        Ok(())
    }

    //shape check against another expected size, used by the accumulator
    pub fn check_size(&self, expected: usize) -> Result<(), MatrixError> {
        if self.size != expected {
            return Err(MatrixError::DimensionMismatch {
                expected,
                found: self.size,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.cells.chunks(self.size)
    }
}
