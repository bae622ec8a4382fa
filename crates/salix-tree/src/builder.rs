//! Mutable-until-closed node storage.

use la_arena::{Arena, Idx};
use salix_frontend::ResolvedNode;
use text_size::{TextRange, TextSize};

use crate::{SyntaxKind, SyntaxTree};

/// Index of a node in the tree's arena.
pub type NodeId<'ast> = Idx<NodeData<'ast>>;

/// What a tree node stands for.
pub(crate) enum NodeSource<'ast> {
    /// The file root; spans the entire text.
    File,
    /// An adapter around one front-end node.
    Foreign(&'ast dyn ResolvedNode),
    /// A synthetic comment node carrying the comment's raw text.
    DocComment(Box<str>, TextRange),
}

/// One node of the tree; written through [`TreeBuilder`], frozen by `finish`.
pub struct NodeData<'ast> {
    pub(crate) kind: SyntaxKind,
    pub(crate) source: NodeSource<'ast>,
    pub(crate) parent: Option<NodeId<'ast>>,
    pub(crate) children: Vec<NodeId<'ast>>,
    pub(crate) range: TextRange,
    pub(crate) contains_comment: bool,
}

/// Appends nodes while a build is in flight, then closes the tree.
///
/// One builder handles exactly one file and is consumed by [`finish`];
/// nothing about it is shared or reusable.
///
/// [`finish`]: TreeBuilder::finish
pub struct TreeBuilder<'ast> {
    nodes: Arena<NodeData<'ast>>,
    text_len: TextSize,
}

impl<'ast> TreeBuilder<'ast> {
    pub fn new(text_len: TextSize) -> Self {
        Self { nodes: Arena::default(), text_len }
    }

    /// Allocates the file root; the build hangs everything beneath it.
    pub fn alloc_file_root(&mut self) -> NodeId<'ast> {
        self.alloc(SyntaxKind::SOURCE_FILE, NodeSource::File)
    }

    /// Allocates an adapter for one front-end node.
    pub fn alloc_foreign(
        &mut self,
        kind: SyntaxKind,
        node: &'ast dyn ResolvedNode,
    ) -> NodeId<'ast> {
        self.alloc(kind, NodeSource::Foreign(node))
    }

    /// Allocates a synthetic comment node.
    pub fn alloc_doc_comment(&mut self, text: Box<str>, range: TextRange) -> NodeId<'ast> {
        self.alloc(SyntaxKind::DOC_COMMENT, NodeSource::DocComment(text, range))
    }

    fn alloc(&mut self, kind: SyntaxKind, source: NodeSource<'ast>) -> NodeId<'ast> {
        self.nodes.alloc(NodeData {
            kind,
            source,
            parent: None,
            children: Vec::new(),
            range: TextRange::empty(TextSize::new(0)),
            contains_comment: false,
        })
    }

    /// Appends `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId<'ast>, child: NodeId<'ast>) {
        debug_assert!(self.nodes[child].parent.is_none(), "node is already attached");
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Inserts `child` as the first child of `parent`.
    pub fn insert_first_child(&mut self, parent: NodeId<'ast>, child: NodeId<'ast>) {
        debug_assert!(self.nodes[child].parent.is_none(), "node is already attached");
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.insert(0, child);
    }

    pub fn set_contains_comment(&mut self, node: NodeId<'ast>) {
        self.nodes[node].contains_comment = true;
    }

    /// The node's own source region, known before closing: the front-end
    /// location for adapters, the token range for comment nodes, the whole
    /// text for the file root. Synthetic adapters have none.
    pub fn source_range(&self, node: NodeId<'ast>) -> Option<TextRange> {
        match &self.nodes[node].source {
            NodeSource::File => Some(TextRange::up_to(self.text_len)),
            NodeSource::Foreign(foreign) => foreign.location().real(),
            NodeSource::DocComment(_, range) => Some(*range),
        }
    }

    /// Closes the tree, fixing every node's final region in post-order.
    ///
    /// A synthetic node takes the union of its children's non-empty regions;
    /// one without located descendants collapses to an empty region at the
    /// start of the nearest enclosing node that has one. Children are put in
    /// source order while closing: construction order follows the front-end's
    /// traversal, which is not required to match the source.
    pub fn finish(mut self, root: NodeId<'ast>) -> SyntaxTree<'ast> {
        self.close(root, TextSize::new(0));
        SyntaxTree { nodes: self.nodes, root }
    }

    fn close(&mut self, node: NodeId<'ast>, anchor: TextSize) {
        let own = self.source_range(node);
        let child_anchor = own.map_or(anchor, |range| range.start());
        for index in 0..self.nodes[node].children.len() {
            let child = self.nodes[node].children[index];
            self.close(child, child_anchor);
        }

        // Every child's region is final now; order them by it. The sort is
        // stable, so children sharing a start offset keep construction order.
        let mut children = std::mem::take(&mut self.nodes[node].children);
        children.sort_by_key(|&child| self.nodes[child].range.start());
        self.nodes[node].children = children;

        let range = own.unwrap_or_else(|| {
            let data = &self.nodes[node];
            let mut covered: Option<TextRange> = None;
            for &child in &data.children {
                let child_range = self.nodes[child].range;
                if child_range.is_empty() {
                    continue;
                }
                covered = Some(covered.map_or(child_range, |acc| acc.cover(child_range)));
            }
            covered.unwrap_or_else(|| TextRange::empty(anchor))
        });
        self.nodes[node].range = range;
    }
}
