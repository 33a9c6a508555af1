pub mod node;

pub use node::{Composite, CompositeKind, Leaf, LeafKind, ModelError, Node};
