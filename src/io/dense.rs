// dense code-matrix files (-CM.csv)
/*

Byte layout, fixed so reruns are byte-identical:

    <TAB>0<TAB>1...            column headers (vocabulary indices)
    0<TAB>v<TAB>v...           one row per vocabulary index
    ...
                               blank line
    Legend:
    0<TAB>"code"               one line per vocabulary entry
    ...

The legend makes the file self-describing, which is what lets to_sparse
recover the code strings without re-reading the original corpus.

*/
use std::path::Path;

use crate::core::error::MatrixError;
use crate::core::matrix::CodeMatrix;
use crate::core::vocabulary::CodeVocabulary;

pub fn render_dense(matrix: &CodeMatrix, vocab: &CodeVocabulary) -> Result<String, MatrixError> {
    matrix.check_vocabulary(vocab)?;

    let mut out = String::new();

    //column header row: leading empty cell, then the indices
    for col in 0..matrix.size() {
        out.push('\t');
        out.push_str(&col.to_string());
    }
    out.push('\n');

    for (row_idx, row) in matrix.rows().enumerate() {
        out.push_str(&row_idx.to_string());
        for value in row {
            out.push('\t');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str("Legend:\n");
    for (i, code) in vocab.iter().enumerate() {
        out.push_str(&format!("{i}\t\"{code}\"\n"));
    }

    Ok(out)
}

pub fn write_dense(
    path: &Path,
    matrix: &CodeMatrix,
    vocab: &CodeVocabulary,
) -> Result<(), MatrixError> {
    let rendered = render_dense(matrix, vocab)?;
    std::fs::write(path, rendered).map_err(|e| MatrixError::io(path, e))
}

fn malformed(path: &Path, detail: impl Into<String>) -> MatrixError {
    MatrixError::MalformedMatrixFile {
        path: path.to_path_buf(),
        detail: detail.into(),
    }
}

/// Read a dense matrix file back, recovering both the matrix and its
/// vocabulary from the trailing legend.
pub fn read_dense(path: &Path) -> Result<(CodeMatrix, CodeVocabulary), MatrixError> {
    let text = std::fs::read_to_string(path).map_err(|e| MatrixError::io(path, e))?;
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let header = lines
        .next()
        .ok_or_else(|| malformed(path, "file is empty"))?;
    //leading empty cell, then one header per column
    let size = header.split('\t').skip(1).count();

    let mut matrix = CodeMatrix::zero(size);
    for row in 0..size {
        let line = lines
            .next()
            .ok_or_else(|| malformed(path, format!("missing matrix row {row}")))?;
        let mut fields = line.split('\t');
        fields.next(); //row index label

        for col in 0..size {
            let cell = fields
                .next()
                .ok_or_else(|| malformed(path, format!("row {row} has fewer than {size} cells")))?;
            let value: u64 = cell
                .parse()
                .map_err(|_| malformed(path, format!("row {row}: bad cell {cell:?}")))?;
            matrix.set(row, col, value);
        }
    }

    //blank separator, then the legend
    match lines.next() {
        Some("") => {}
        _ => return Err(malformed(path, "expected blank line before legend")),
    }
    match lines.next() {
        Some("Legend:") => {}
        _ => return Err(malformed(path, "expected Legend: header")),
    }

    let mut codes = Vec::with_capacity(size);
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let (_, quoted) = line
            .split_once('\t')
            .ok_or_else(|| malformed(path, format!("bad legend line {line:?}")))?;
        let code = quoted
            .strip_prefix('"')
            .and_then(|c| c.strip_suffix('"'))
            .ok_or_else(|| malformed(path, format!("legend code not quoted: {quoted:?}")))?;
        codes.push(code.to_string());
    }

    if codes.len() != size {
        return Err(malformed(
            path,
            format!("legend has {} entries for a {size}x{size} matrix", codes.len()),
        ));
    }

    Ok((matrix, CodeVocabulary::from_sorted_codes(codes)))
}
