// corpus-wide code vocabulary (pass 1)
/*

The vocabulary is built once over the WHOLE corpus before any matrix is
constructed, then shared by every session matrix, the aggregate, and the
exporters. That way cell (i, j) means the same pair of codes no matter
which session or sum produced it.

*/
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Serialize;

use crate::core::error::MatrixError;
use crate::core::session::Session;

/// Deduplicated, lexicographically sorted list of every code in the corpus,
/// with a bijective code <-> index assignment. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct CodeVocabulary {
    codes: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CodeVocabulary {
    /// Collect every code label from every node record across every session,
    /// dedup, sort ascending. Deterministic regardless of session order.
    pub fn build(sessions: &[Session], corpus_dir: &Path) -> Result<Self, MatrixError> {
        if sessions.is_empty() {
            return Err(MatrixError::EmptyCorpus {
                dir: corpus_dir.to_path_buf(),
            });
        }

        //BTreeSet does both the dedup and the sort
        let set: BTreeSet<String> = sessions
            .iter()
            .flat_map(|s| s.nodes.iter().map(|n| n.code.clone()))
            .collect();

        Ok(Self::from_sorted_codes(set.into_iter().collect()))
    }

    //codes must already be sorted and unique (BTreeSet output, or a legend
    //read back from a dense matrix file)
    pub(crate) fn from_sorted_codes(codes: Vec<String>) -> Self {
        let index = codes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        CodeVocabulary { codes, index }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Look up a code's matrix index. A miss is a fatal consistency error:
    /// the vocabulary was supposed to be closed over the same corpus.
    pub fn index_of(&self, code: &str, session: &str) -> Result<usize, MatrixError> {
        self.index
            .get(code)
            .copied()
            .ok_or_else(|| MatrixError::UnknownCode {
                code: code.to_string(),
                session: session.to_string(),
            })
    }

    pub fn code(&self, index: usize) -> &str {
        &self.codes[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(|c| c.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::testutil::mk_session;

    fn corpus() -> Vec<Session> {
        vec![
            mk_session("s1", &["Role", "Goal"], &[&[0.0, 1.0], &[0.0, 0.0]]),
            mk_session(
                "s2",
                &["Goal", "Goal", "Barrier"],
                &[
                    &[0.0, 0.0, 1.0],
                    &[0.0, 0.0, 1.0],
                    &[0.0, 0.0, 0.0],
                ],
            ),
        ]
    }

    #[test]
    fn build_dedups_and_sorts_across_sessions() {
        let vocab = CodeVocabulary::build(&corpus(), Path::new("maps")).unwrap();

        let codes: Vec<&str> = vocab.iter().collect();
        assert_eq!(codes, vec!["Barrier", "Goal", "Role"]);
        assert_eq!(vocab.index_of("Goal", "s1").unwrap(), 1);
        assert_eq!(vocab.code(2), "Role");
    }

    #[test]
    fn build_is_independent_of_session_order() {
        let forward = CodeVocabulary::build(&corpus(), Path::new("maps")).unwrap();

        let mut reversed = corpus();
        reversed.reverse();
        let backward = CodeVocabulary::build(&reversed, Path::new("maps")).unwrap();

        let a: Vec<&str> = forward.iter().collect();
        let b: Vec<&str> = backward.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn build_rejects_empty_corpus() {
        let err = CodeVocabulary::build(&[], Path::new("maps")).unwrap_err();
        assert!(matches!(err, MatrixError::EmptyCorpus { .. }));
    }

    #[test]
    fn unknown_code_lookup_is_an_error() {
        let vocab = CodeVocabulary::build(&corpus(), Path::new("maps")).unwrap();

        let err = vocab.index_of("Resource", "s9").unwrap_err();
        match err {
            MatrixError::UnknownCode { code, session } => {
                assert_eq!(code, "Resource");
                assert_eq!(session, "s9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
