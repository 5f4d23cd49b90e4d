// aggregate accumulator: corpus-level sum of per-session matrices
use crate::core::error::MatrixError;
use crate::core::matrix::CodeMatrix;

impl CodeMatrix {
    /// Elementwise, zero-based addition of session matrices over the shared
    /// vocabulary. Commutative and associative in the summation order; a
    /// corpus of one session sums to that session's own matrix.
    ///
    /// Starts from an all-zero matrix. A cell that is zero in one operand and
    /// nonzero in another contributes exactly the nonzero value, never less.
    pub fn sum<'a>(
        matrices: impl IntoIterator<Item = &'a CodeMatrix>,
        size: usize,
    ) -> Result<CodeMatrix, MatrixError> {
        let mut total = CodeMatrix::zero(size);

        for m in matrices {
            m.check_size(size)?;
            for row in 0..size {
                for col in 0..size {
                    let v = total.get(row, col) + m.get(row, col);
                    total.set(row, col, v);
                }
            }
        }

        Ok(total)
    }
}
