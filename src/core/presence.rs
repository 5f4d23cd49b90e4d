// code-presence-by-session matrix
/*

Counts code OCCURRENCE, not code-to-code linkage: cell (s, c) is how many
nodes in session s carry code c. Independent of the adjacency block, so a
session with no edges at all still shows up here.

*/
use serde::Serialize;

use crate::core::error::MatrixError;
use crate::core::session::Session;
use crate::core::vocabulary::CodeVocabulary;

/// Rows = sessions (in the order given), columns = vocabulary codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceMatrix {
    sessions: Vec<String>,
    width: usize,
    //row-major, one row of counts per session
    counts: Vec<u64>,
}

impl PresenceMatrix {
    pub fn from_sessions(
        sessions: &[Session],
        vocab: &CodeVocabulary,
    ) -> Result<Self, MatrixError> {
        let width = vocab.len();
        let mut names = Vec::with_capacity(sessions.len());
        let mut counts = vec![0u64; sessions.len() * width];

        for (row, session) in sessions.iter().enumerate() {
            names.push(session.name.clone());
            for node in &session.nodes {
                let col = vocab.index_of(&node.code, &session.name)?;
                counts[row * width + col] += 1;
            }
        }

        Ok(PresenceMatrix {
            sessions: names,
            width,
            counts,
        })
    }

    pub fn session_names(&self) -> impl Iterator<Item = &str> {
        self.sessions.iter().map(|s| s.as_str())
    }

    pub fn row(&self, row: usize) -> &[u64] {
        &self.counts[row * self.width..(row + 1) * self.width]
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.counts[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::core::session::testutil::mk_session;

    #[test]
    fn presence_counts_nodes_per_code_not_edges() {
        //s2 has two A nodes and one B node; its edges must not matter
        let corpus = vec![
            mk_session("s1", &["A", "B"], &[&[0.0, 1.0], &[0.0, 0.0]]),
            mk_session(
                "s2",
                &["A", "A", "B"],
                &[
                    &[0.0, 0.0, 1.0],
                    &[0.0, 0.0, 1.0],
                    &[0.0, 0.0, 0.0],
                ],
            ),
        ];
        let vocab = CodeVocabulary::build(&corpus, Path::new("maps")).unwrap();

        let p = PresenceMatrix::from_sessions(&corpus, &vocab).unwrap();

        let names: Vec<&str> = p.session_names().collect();
        assert_eq!(names, vec!["s1", "s2"]);
        //vocab order is [A, B]
        assert_eq!(p.row(0), &[1, 1]);
        assert_eq!(p.row(1), &[2, 1]);
    }

    #[test]
    fn session_without_a_code_gets_a_zero_cell() {
        let corpus = vec![
            mk_session("s1", &["A"], &[&[0.0]]),
            mk_session("s2", &["B"], &[&[0.0]]),
        ];
        let vocab = CodeVocabulary::build(&corpus, Path::new("maps")).unwrap();

        let p = PresenceMatrix::from_sessions(&corpus, &vocab).unwrap();
        assert_eq!(p.get(0, 1), 0);
        assert_eq!(p.get(1, 0), 0);
    }

    #[test]
    fn unknown_code_in_a_session_is_fatal() {
        let s1 = mk_session("s1", &["A"], &[&[0.0]]);
        let vocab =
            CodeVocabulary::build(std::slice::from_ref(&s1), Path::new("maps")).unwrap();

        let rogue = vec![mk_session("s2", &["Z"], &[&[0.0]])];
        let err = PresenceMatrix::from_sessions(&rogue, &vocab).unwrap_err();
        assert!(matches!(err, MatrixError::UnknownCode { .. }));
    }
}
