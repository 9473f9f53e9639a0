pub mod graph_builder;
pub mod node_builder;

pub use graph_builder::*;
pub use node_builder::*;
