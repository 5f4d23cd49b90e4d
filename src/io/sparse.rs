// sparse triple files (-3cols_get<min>.csv)
use std::path::Path;

use crate::core::error::MatrixError;
use crate::core::sparse::TripleRecord;

pub fn render_sparse(triples: &[TripleRecord]) -> String {
    let mut out = String::from("From:\tTo:\tValue:\n");
    for t in triples {
        out.push_str(&format!("{}\t{}\t{}\n", t.from, t.to, t.value));
    }
    out
}

pub fn write_sparse(path: &Path, triples: &[TripleRecord]) -> Result<(), MatrixError> {
    std::fs::write(path, render_sparse(triples)).map_err(|e| MatrixError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_then_one_row_per_triple() {
        let triples = vec![
            TripleRecord {
                from: "B".to_string(),
                to: "A".to_string(),
                value: 3,
            },
            TripleRecord {
                from: "B".to_string(),
                to: "B".to_string(),
                value: 1,
            },
        ];

        assert_eq!(
            render_sparse(&triples),
            "From:\tTo:\tValue:\nB\tA\t3\nB\tB\t1\n"
        );
    }

    #[test]
    fn empty_triple_list_still_gets_the_header() {
        assert_eq!(render_sparse(&[]), "From:\tTo:\tValue:\n");
    }
}
