// coded binary link matrix (CBLM) reader
/*

Input layout, one file per session: tab-delimited with a header row. The
column headed "Code" holds each node's code label. The adjacency block is
the contiguous run of columns starting at the column headed "0" and
continuing to the last column, one row per node, ordered identically to
the columns.

*/
use std::path::Path;

use tracing::debug;

use crate::core::error::MatrixError;
use crate::core::session::{NodeRecord, Session};
use crate::io::naming::{self, CBLM_SUFFIX};

const CODE_COLUMN: &str = "Code";
const ADJACENCY_START: &str = "0";

/// Read one session file. The session name is the file name with the
/// `-CBLM.csv` suffix stripped.
pub fn read_session(path: &Path) -> Result<Session, MatrixError> {
    let text = std::fs::read_to_string(path).map_err(|e| MatrixError::io(path, e))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| naming::base_name(n, CBLM_SUFFIX).to_string())
        .unwrap_or_default();

    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split('\t').collect(),
        None => {
            return Err(MatrixError::MalformedMatrixFile {
                path: path.to_path_buf(),
                detail: "file is empty".to_string(),
            });
        }
    };

    let code_col = header
        .iter()
        .position(|&h| h == CODE_COLUMN)
        .ok_or_else(|| MatrixError::MissingColumn {
            path: path.to_path_buf(),
            column: CODE_COLUMN,
        })?;

    let adj_start = header
        .iter()
        .position(|&h| h == ADJACENCY_START)
        .ok_or_else(|| MatrixError::MissingColumn {
            path: path.to_path_buf(),
            column: ADJACENCY_START,
        })?;

    let mut nodes = Vec::new();
    for (i, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();

        let code = fields.get(code_col).ok_or_else(|| MatrixError::MissingColumn {
            path: path.to_path_buf(),
            column: CODE_COLUMN,
        })?;

        let mut weights = Vec::new();
        for cell in fields.iter().skip(adj_start) {
            let w: f64 = cell.parse().map_err(|_| MatrixError::InvalidWeight {
                path: path.to_path_buf(),
                line: i + 2, //1-based, after the header
                value: cell.to_string(),
            })?;
            weights.push(w);
        }

        nodes.push(NodeRecord {
            code: code.to_string(),
            weights,
        });
    }

    let session = Session::new(name, nodes);
    if !session.is_square() {
        let cols = session.nodes.iter().map(|n| n.weights.len()).max().unwrap_or(0);
        return Err(MatrixError::AdjacencyNotSquare {
            path: path.to_path_buf(),
            rows: session.node_count(),
            cols,
        });
    }

    debug!(session = %session.name, nodes = session.node_count(), "read cblm file");
    Ok(session)
}

/// Read every `-CBLM.csv` session in `dir` (sorted by file name). The whole
/// corpus is read before anything downstream runs, because the vocabulary
/// must be closed over all of it first.
pub fn read_corpus(dir: &Path) -> Result<Vec<Session>, MatrixError> {
    let files = naming::list_suffixed_files(dir, CBLM_SUFFIX)?;
    files.iter().map(|p| read_session(p)).collect()
}
