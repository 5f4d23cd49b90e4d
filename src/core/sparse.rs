// sparse (triple) form of a code matrix
use serde::{Deserialize, Serialize};

use crate::core::error::MatrixError;
use crate::core::matrix::CodeMatrix;
use crate::core::vocabulary::CodeVocabulary;

/// One above-threshold cell of a code matrix, labeled with the human-readable
/// code strings rather than the numeric indices.
///
/// `from` carries the matrix row's code and `to` the column's code, matching
/// the column order the reference tool wrote under its `From:/To:/Value:`
/// header. Derived on demand, never persisted as a standalone entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleRecord {
    pub from: String,
    pub to: String,
    pub value: u64,
}

impl CodeMatrix {
    /// Enumerate the matrix row-major, emitting a triple for every cell with
    /// `value >= min_value`. The default threshold of 0 emits every cell,
    /// zeros included, which is what makes the dense form reconstructible
    /// from the triples.
    pub fn to_triples(
        &self,
        vocab: &CodeVocabulary,
        min_value: u64,
    ) -> Result<Vec<TripleRecord>, MatrixError> {
        self.check_vocabulary(vocab)?;

        let mut triples = Vec::new();
        for row in 0..self.size() {
            for col in 0..self.size() {
                let value = self.get(row, col);
                if value >= min_value {
                    triples.push(TripleRecord {
                        from: vocab.code(row).to_string(),
                        to: vocab.code(col).to_string(),
                        value,
                    });
                }
            }
        }
        Ok(triples)
    }
}
