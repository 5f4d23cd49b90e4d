// presence matrix file (code-presence-matrix.csv)
use std::path::Path;

use crate::core::error::MatrixError;
use crate::core::presence::PresenceMatrix;
use crate::core::vocabulary::CodeVocabulary;

pub fn render_presence(presence: &PresenceMatrix, vocab: &CodeVocabulary) -> String {
    let mut out = String::new();

    //header row: leading empty cell, then the code labels
    for code in vocab.iter() {
        out.push('\t');
        out.push_str(code);
    }
    out.push('\n');

    for (row, name) in presence.session_names().enumerate() {
        out.push_str(name);
        for value in presence.row(row) {
            out.push('\t');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }

    out
}

pub fn write_presence(
    path: &Path,
    presence: &PresenceMatrix,
    vocab: &CodeVocabulary,
) -> Result<(), MatrixError> {
    std::fs::write(path, render_presence(presence, vocab)).map_err(|e| MatrixError::io(path, e))
}
