// the three top-level batch operations behind the binaries
/*

Two-pass structure, required by the data model: the vocabulary must be
closed over the WHOLE corpus (pass 1) before any session matrix's row and
column indices can be assigned (pass 2). Everything is synchronous and
sequential, inputs are processed in sorted file-name order, and a failure
at any stage aborts the run.

All state is carried in an explicit `PipelineConfig` threaded through the
calls; nothing reads ambient globals.

*/
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::MatrixError;
use crate::core::matrix::CodeMatrix;
use crate::core::presence::PresenceMatrix;
use crate::core::vocabulary::CodeVocabulary;
use crate::io::{cblm, dense, naming, presence, sparse};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

fn ensure_output_dir(dir: &Path) -> Result<(), MatrixError> {
    std::fs::create_dir_all(dir).map_err(|e| MatrixError::io(dir, e))
}

/// `build_code_matrices <input_dir> <output_dir>`: one dense code matrix per
/// session file, plus the corpus-wide `sum-CM.csv` aggregate.
pub fn build_code_matrices(cfg: &PipelineConfig) -> Result<(), MatrixError> {
    ensure_output_dir(&cfg.output_dir)?;

    //pass 1: read everything, freeze the vocabulary
    let sessions = cblm::read_corpus(&cfg.input_dir)?;
    let vocab = CodeVocabulary::build(&sessions, &cfg.input_dir)?;
    info!(
        sessions = sessions.len(),
        codes = vocab.len(),
        "vocabulary built over the corpus"
    );

    //pass 2: one matrix per session, then the aggregate
    let mut matrices = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let matrix = CodeMatrix::from_session(session, &vocab)?;
        let out_path = naming::cm_path(&cfg.output_dir, &session.name);
        dense::write_dense(&out_path, &matrix, &vocab)?;
        info!(session = %session.name, out = %out_path.display(), "wrote code matrix");
        matrices.push(matrix);
    }

    let total = CodeMatrix::sum(matrices.iter(), vocab.len())?;
    let sum_path = naming::cm_path(&cfg.output_dir, naming::SUM_MATRIX_NAME);
    dense::write_dense(&sum_path, &total, &vocab)?;
    info!(out = %sum_path.display(), "wrote aggregate matrix");

    Ok(())
}

/// `to_sparse <cm_dir> <output_dir> [min_value]`: each dense matrix becomes a
/// triple list, keeping cells with value >= min_value. The code strings come
/// from each file's own legend; the original corpus is not needed.
pub fn convert_to_sparse(cfg: &PipelineConfig, min_value: u64) -> Result<(), MatrixError> {
    ensure_output_dir(&cfg.output_dir)?;

    let cm_files = naming::list_suffixed_files(&cfg.input_dir, naming::CM_SUFFIX)?;
    for path in &cm_files {
        let (matrix, vocab) = dense::read_dense(path)?;
        let triples = matrix.to_triples(&vocab, min_value)?;

        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let base = naming::base_name(file_name, naming::CM_SUFFIX);
        let out_path = naming::sparse_path(&cfg.output_dir, base, min_value);
        sparse::write_sparse(&out_path, &triples)?;
        info!(
            cm = %path.display(),
            out = %out_path.display(),
            triples = triples.len(),
            "wrote sparse matrix"
        );
    }

    info!(files = cm_files.len(), min_value, "sparse conversion done");
    Ok(())
}

/// `build_presence_matrix <input_dir> <output_dir>`: one corpus-wide
/// session-by-code occurrence matrix.
pub fn build_presence_matrix(cfg: &PipelineConfig) -> Result<(), MatrixError> {
    ensure_output_dir(&cfg.output_dir)?;

    let sessions = cblm::read_corpus(&cfg.input_dir)?;
    let vocab = CodeVocabulary::build(&sessions, &cfg.input_dir)?;

    let matrix = PresenceMatrix::from_sessions(&sessions, &vocab)?;
    let out_path = naming::presence_path(&cfg.output_dir);
    presence::write_presence(&out_path, &matrix, &vocab)?;
    info!(
        sessions = sessions.len(),
        codes = vocab.len(),
        out = %out_path.display(),
        "wrote presence matrix"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    //the worked two-session corpus:
    // s1: nodes [A, B], one edge node0 -> node1
    // s2: nodes [A, A, B], edges node0 -> node2 and node1 -> node2
    fn write_example_corpus(dir: &Path) {
        fs::write(
            dir.join("s1-CBLM.csv"),
            "ID\tCode\t0\t1\n0\tA\t0\t1\n1\tB\t0\t0\n",
        )
        .unwrap();
        fs::write(
            dir.join("s2-CBLM.csv"),
            "ID\tCode\t0\t1\t2\n0\tA\t0\t0\t1\n1\tA\t0\t0\t1\n2\tB\t0\t0\t0\n",
        )
        .unwrap();
    }

    #[test]
    fn build_writes_per_session_matrices_and_the_aggregate() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_example_corpus(input.path());

        let cfg = PipelineConfig::new(input.path(), output.path());
        build_code_matrices(&cfg).unwrap();

        let s1 = fs::read_to_string(output.path().join("s1-CM.csv")).unwrap();
        assert_eq!(s1, "\t0\t1\n0\t0\t0\n1\t1\t0\n\nLegend:\n0\t\"A\"\n1\t\"B\"\n");

        let s2 = fs::read_to_string(output.path().join("s2-CM.csv")).unwrap();
        assert_eq!(s2, "\t0\t1\n0\t0\t0\n1\t2\t0\n\nLegend:\n0\t\"A\"\n1\t\"B\"\n");

        let sum = fs::read_to_string(output.path().join("sum-CM.csv")).unwrap();
        assert_eq!(sum, "\t0\t1\n0\t0\t0\n1\t3\t0\n\nLegend:\n0\t\"A\"\n1\t\"B\"\n");
    }

    #[test]
    fn sparse_conversion_of_the_aggregate_matches_the_worked_example() {
        let input = tempfile::tempdir().unwrap();
        let cms = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_example_corpus(input.path());

        build_code_matrices(&PipelineConfig::new(input.path(), cms.path())).unwrap();
        convert_to_sparse(&PipelineConfig::new(cms.path(), out.path()), 1).unwrap();

        let sparse = fs::read_to_string(out.path().join("sum-3cols_get1.csv")).unwrap();
        assert_eq!(sparse, "From:\tTo:\tValue:\nB\tA\t3\n");
    }

    #[test]
    fn sparse_at_threshold_zero_emits_every_cell() {
        let input = tempfile::tempdir().unwrap();
        let cms = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_example_corpus(input.path());

        build_code_matrices(&PipelineConfig::new(input.path(), cms.path())).unwrap();
        convert_to_sparse(&PipelineConfig::new(cms.path(), out.path()), 0).unwrap();

        let sparse = fs::read_to_string(out.path().join("s1-3cols_get0.csv")).unwrap();
        assert_eq!(
            sparse,
            "From:\tTo:\tValue:\nA\tA\t0\nA\tB\t0\nB\tA\t1\nB\tB\t0\n"
        );
    }

    #[test]
    fn rerunning_the_pipeline_is_byte_identical() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_example_corpus(input.path());

        let cfg = PipelineConfig::new(input.path(), output.path());
        build_code_matrices(&cfg).unwrap();
        let first = fs::read_to_string(output.path().join("sum-CM.csv")).unwrap();

        build_code_matrices(&cfg).unwrap();
        let second = fs::read_to_string(output.path().join("sum-CM.csv")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_file_names_are_skipped_not_fatal() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_example_corpus(input.path());
        fs::write(input.path().join("README.md"), "not a session").unwrap();

        let cfg = PipelineConfig::new(input.path(), output.path());
        build_code_matrices(&cfg).unwrap();
        assert!(output.path().join("sum-CM.csv").exists());
    }

    #[test]
    fn empty_input_directory_is_a_hard_stop() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let cfg = PipelineConfig::new(input.path(), output.path());
        let err = build_code_matrices(&cfg).unwrap_err();
        assert!(matches!(err, MatrixError::EmptyCorpus { .. }));
    }

    #[test]
    fn presence_matrix_counts_codes_per_session() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_example_corpus(input.path());

        build_presence_matrix(&PipelineConfig::new(input.path(), output.path())).unwrap();

        let p = fs::read_to_string(output.path().join("code-presence-matrix.csv")).unwrap();
        assert_eq!(p, "\tA\tB\ns1\t1\t1\ns2\t2\t1\n");
    }
}
