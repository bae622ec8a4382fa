//! Uniform, navigable syntax tree wrapping a front-end's resolved AST.
//!
//! Nodes are appended through [`TreeBuilder`] while the front-end drives
//! traversal, then frozen in one closing pass that finalizes every region.
//! After that the tree is immutable and navigated through lightweight
//! [`SyntaxNode`] handles.

mod builder;
mod syntax;
mod syntax_kind;

pub use builder::{NodeData, NodeId, TreeBuilder};
pub use syntax::{Preorder, SyntaxNode, SyntaxTree};
pub use syntax_kind::SyntaxKind;
