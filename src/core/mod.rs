pub mod aggregate;
pub mod error;
pub mod matrix;
pub mod populate;
pub mod presence;
pub mod session;
pub mod sparse;
pub mod vocabulary;
