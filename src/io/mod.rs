pub mod cblm;
pub mod dense;
pub mod naming;
pub mod presence;
pub mod sparse;
