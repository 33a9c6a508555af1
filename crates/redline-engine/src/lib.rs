pub mod io;
pub mod model;
pub mod parsing;
pub mod pipeline;

// Re-export key types for easier usage
pub use model::{Composite, CompositeKind, Leaf, LeafKind, ModelError, Node};
pub use parsing::parse_document;
pub use pipeline::{LeafAction, Pipeline, SpanRemoval, Stage, WhitespaceCollapse};
