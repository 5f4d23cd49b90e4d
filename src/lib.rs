//! ssm-matrices: code-level relationship matrices from coded node-link maps.
//!
//! Input is a directory of per-session coded binary link matrix (CBLM) files,
//! where every node carries a categorical "code" and a row of adjacency
//! weights over the session's own nodes. The pipeline builds one corpus-wide
//! code vocabulary, collapses each session's node-level adjacency down to a
//! code-level matrix, sums those into a corpus aggregate, and writes dense,
//! sparse (triple), and presence-by-session representations.

pub mod core;
pub mod io;
pub mod pipeline;

pub use crate::core::error::MatrixError;
pub use crate::core::matrix::CodeMatrix;
pub use crate::core::presence::PresenceMatrix;
pub use crate::core::session::{NodeRecord, Session};
pub use crate::core::sparse::TripleRecord;
pub use crate::core::vocabulary::CodeVocabulary;
pub use crate::pipeline::PipelineConfig;
