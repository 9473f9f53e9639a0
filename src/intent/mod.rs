pub mod classifier;
pub(crate) mod rules;

pub use classifier::*;
