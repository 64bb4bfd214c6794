mod base;
pub use base::*;

pub mod algo;
pub mod dense;
