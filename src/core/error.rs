// one error taxonomy for the whole pipeline
/*

Fatal everywhere: this is a one-shot batch tool, a failure aborts the run
and names the file or step that caused it. The only non-fatal condition,
a file that doesn't follow the naming convention, is handled by the
directory lister (warn + skip) and never becomes an error value.

*/
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    //no session files at all -> no vocabulary can exist, hard stop
    #[error("no session files found in {}", dir.display())]
    EmptyCorpus { dir: PathBuf },

    //required header cell absent ("Code", or "0" marking the adjacency block)
    #[error("{}: required column {column:?} not found in header", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    //a session references a code outside the corpus vocabulary.
    //should be impossible if the vocabulary was built over the same corpus,
    //so this signals a pipeline ordering bug, not bad input.
    #[error("code {code:?} in session {session:?} is not in the corpus vocabulary")]
    UnknownCode { code: String, session: String },

    #[error("matrix is {found}x{found} but expected {expected}x{expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("matrix size {matrix} does not match vocabulary size {vocabulary}")]
    VocabularyMismatch { matrix: usize, vocabulary: usize },

    //the adjacency block must be square over the session's own node count
    #[error("{}: adjacency block is not square ({rows} rows, {cols} columns)", path.display())]
    AdjacencyNotSquare {
        path: PathBuf,
        rows: usize,
        cols: usize,
    },

    #[error("{}, line {line}: cannot parse adjacency weight {value:?}", path.display())]
    InvalidWeight {
        path: PathBuf,
        line: usize,
        value: String,
    },

    //dense matrix file (a -CM.csv being read back by to_sparse) is broken
    #[error("{}: {detail}", path.display())]
    MalformedMatrixFile { path: PathBuf, detail: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl MatrixError {
    //attach the offending path to a raw io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatrixError::Io {
            path: path.into(),
            source,
        }
    }
}
