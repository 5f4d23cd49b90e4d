// file-naming conventions and directory listing
/*

The pipeline pairs inputs to outputs purely by suffix:

    coded binary link matrix (input):  <name>-CBLM.csv
    dense code matrix:                 <name>-CM.csv
    sparse triples:                    <name>-3cols_get<min_value>.csv
    corpus aggregate:                  sum-CM.csv
    presence matrix:                   code-presence-matrix.csv

A file lacking the expected suffix is reported and excluded, never fatal
to the rest of the corpus.

*/
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::error::MatrixError;

pub const CBLM_SUFFIX: &str = "-CBLM.csv";
pub const CM_SUFFIX: &str = "-CM.csv";
pub const SUM_MATRIX_NAME: &str = "sum";
pub const PRESENCE_FILE_NAME: &str = "code-presence-matrix.csv";

/// List the files in `dir` whose names end in `suffix`, sorted by name so
/// every downstream pass runs in a fixed, reproducible order. Non-matching
/// files are warned about and skipped.
pub fn list_suffixed_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, MatrixError> {
    let entries = std::fs::read_dir(dir).map_err(|e| MatrixError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MatrixError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if name.ends_with(suffix) => files.push(path),
            Some(name) => {
                warn!(file = name, expected_suffix = suffix, "skipping file with invalid name");
            }
            None => {
                warn!(path = %path.display(), "skipping file with non-utf8 name");
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Strip the suffix off a session file name to get the session identifier.
pub fn base_name<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    file_name.strip_suffix(suffix).unwrap_or(file_name)
}

pub fn cm_path(out_dir: &Path, base: &str) -> PathBuf {
    out_dir.join(format!("{base}{CM_SUFFIX}"))
}

pub fn sparse_path(out_dir: &Path, base: &str, min_value: u64) -> PathBuf {
    out_dir.join(format!("{base}-3cols_get{min_value}.csv"))
}

pub fn presence_path(out_dir: &Path) -> PathBuf {
    out_dir.join(PRESENCE_FILE_NAME)
}
