// session matrix builder (pass 2): collapse one session's node-level
// adjacency down to code level
/*

Orientation, fixed once and applied uniformly everywhere:

    a nonzero adjacency weight at node position (i, j) increments
    matrix[code(j)][code(i)]

i.e. the ROW is the target node's code and the COLUMN is the source node's
code. Historical revisions of the reference tool disagreed on which index
was which; the exporters in io/ all read the matrix with this convention.

*/
use crate::core::error::MatrixError;
use crate::core::matrix::CodeMatrix;
use crate::core::session::Session;
use crate::core::vocabulary::CodeVocabulary;

impl CodeMatrix {
    /// Build one session's code matrix over the shared corpus vocabulary.
    ///
    /// Edge PRESENCE is what gets counted: any nonzero weight contributes
    /// exactly 1, a weight of 5 counts the same as a weight of 1. Self-pairs
    /// (i == j) are included whenever the adjacency data marks them.
    ///
    /// Pure function of (session, vocabulary): calling twice with the same
    /// arguments yields an identical matrix.
    pub fn from_session(
        session: &Session,
        vocab: &CodeVocabulary,
    ) -> Result<CodeMatrix, MatrixError> {
        //resolve every node's code index up front; one lookup per node
        //instead of one per cell
        let code_idx: Vec<usize> = session
            .nodes
            .iter()
            .map(|n| vocab.index_of(&n.code, &session.name))
            .collect::<Result<_, _>>()?;

        let mut matrix = CodeMatrix::zero(vocab.len());

        for (i, node) in session.nodes.iter().enumerate() {
            for (j, &weight) in node.weights.iter().enumerate() {
                if weight != 0.0 {
                    matrix.increment(code_idx[j], code_idx[i]);
                }
            }
        }

        Ok(matrix)
    }
}
