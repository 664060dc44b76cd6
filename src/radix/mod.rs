mod node;
mod tree;

pub use tree::Rax;
