//! Navigation over the closed tree.

use la_arena::Arena;
use salix_frontend::ResolvedNode;
use text_size::TextRange;

use crate::builder::{NodeData, NodeSource};
use crate::{NodeId, SyntaxKind};

/// Closed adapter tree for a single source file.
///
/// Children are in source order once the tree is closed; nothing may rely on
/// the order nodes were appended in while the build was running.
pub struct SyntaxTree<'ast> {
    pub(crate) nodes: Arena<NodeData<'ast>>,
    pub(crate) root: NodeId<'ast>,
}

impl<'ast> SyntaxTree<'ast> {
    pub fn root(&self) -> SyntaxNode<'_, 'ast> {
        SyntaxNode { tree: self, id: self.root }
    }

    /// Total number of nodes, file root and comment nodes included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Renders the tree one node per line, indented by depth.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        self.dump(self.root(), 0, &mut out);
        out
    }

    fn dump(&self, node: SyntaxNode<'_, 'ast>, depth: usize, out: &mut String) {
        use std::fmt::Write as _;

        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = write!(out, "{:?}@{:?}", node.kind(), node.range());
        if node.contains_comment() {
            out.push_str(" contains-comment");
        }
        if let Some(text) = node.doc_text() {
            let _ = write!(out, " {text:?}");
        }
        out.push('\n');
        for child in node.children() {
            self.dump(child, depth + 1, out);
        }
    }
}

/// Node handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t, 'ast> {
    tree: &'t SyntaxTree<'ast>,
    id: NodeId<'ast>,
}

impl<'t, 'ast> SyntaxNode<'t, 'ast> {
    fn data(self) -> &'t NodeData<'ast> {
        &self.tree.nodes[self.id]
    }

    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// The finalized region.
    pub fn range(self) -> TextRange {
        self.data().range
    }

    pub fn contains_comment(self) -> bool {
        self.data().contains_comment
    }

    pub fn parent(self) -> Option<Self> {
        Some(Self { tree: self.tree, id: self.data().parent? })
    }

    /// Child nodes in source order.
    pub fn children(self) -> impl DoubleEndedIterator<Item = SyntaxNode<'t, 'ast>> {
        self.data().children.iter().map(move |&child| SyntaxNode { tree: self.tree, id: child })
    }

    pub fn first_child(self) -> Option<Self> {
        self.children().next()
    }

    /// This node and its ancestors, innermost first.
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'t, 'ast>> {
        std::iter::successors(Some(self), |node| node.parent())
    }

    pub fn preorder(self) -> Preorder<'t, 'ast> {
        Preorder { tree: self.tree, stack: vec![self.id] }
    }

    /// The front-end node this adapter wraps; `None` for the file root and
    /// for comment nodes.
    pub fn foreign(self) -> Option<&'ast dyn ResolvedNode> {
        match self.data().source {
            NodeSource::Foreign(node) => Some(node),
            NodeSource::File | NodeSource::DocComment(..) => None,
        }
    }

    /// Raw text of a doc-comment node.
    pub fn doc_text(self) -> Option<&'t str> {
        match &self.data().source {
            NodeSource::DocComment(text, _) => Some(text),
            NodeSource::File | NodeSource::Foreign(_) => None,
        }
    }

    /// Returns `true` when the wrapped front-end node has no source position.
    pub fn is_synthetic(self) -> bool {
        match self.data().source {
            NodeSource::Foreign(node) => !node.location().is_real(),
            NodeSource::File | NodeSource::DocComment(..) => false,
        }
    }
}

impl PartialEq for SyntaxNode<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_, '_> {}

impl std::fmt::Debug for SyntaxNode<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.range())
    }
}

/// Depth-first, parent-before-children iterator.
pub struct Preorder<'t, 'ast> {
    tree: &'t SyntaxTree<'ast>,
    stack: Vec<NodeId<'ast>>,
}

impl<'t, 'ast> Iterator for Preorder<'t, 'ast> {
    type Item = SyntaxNode<'t, 'ast>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = SyntaxNode { tree: self.tree, id };
        self.stack.extend(node.data().children.iter().rev().copied());
        Some(node)
    }
}
