//! Drives tree construction from the front-end's push-style traversal.

use salix_comments::{CommentIndex, Suppressions};
use salix_frontend::{NodeVisitor, ResolvedNode, same_node};
use salix_tree::{NodeId, SyntaxTree, TreeBuilder};
use text_size::TextSize;

use crate::attach::{self, DocBindings};
use crate::registry;

/// One-shot adapter for a single file.
///
/// The front-end drives descent by announcing nodes to [`visit`]; the two
/// stacks keep the adapter node and the front-end node currently being
/// expanded in lock step, which is what lets a re-entrant announcement be
/// told apart from the first sighting of a child.
///
/// [`visit`]: NodeVisitor::visit
pub(crate) struct TreeAdapter<'ast> {
    builder: TreeBuilder<'ast>,
    /// Adapter nodes whose child lists are still growing.
    nodes: Vec<NodeId<'ast>>,
    /// Front-end nodes currently being expanded; tops always correspond.
    parents: Vec<&'ast dyn ResolvedNode>,
    comments: CommentIndex,
    bindings: DocBindings<'ast>,
}

impl<'ast> TreeAdapter<'ast> {
    pub(crate) fn new(text_len: TextSize, comments: CommentIndex) -> Self {
        let bindings = DocBindings::new(comments.doc_comments().len());
        Self {
            builder: TreeBuilder::new(text_len),
            nodes: Vec::new(),
            parents: Vec::new(),
            comments,
            bindings,
        }
    }

    /// Builds and closes the whole tree under a fresh file root.
    pub(crate) fn build_tree(
        mut self,
        root: &'ast dyn ResolvedNode,
    ) -> (SyntaxTree<'ast>, Suppressions) {
        assert!(self.nodes.is_empty(), "stacks should be empty");

        let file = self.builder.alloc_file_root();
        self.nodes.push(file);
        self.parents.push(root);

        self.build(root);

        self.nodes.pop();
        self.parents.pop();
        debug_assert!(self.nodes.is_empty() && self.parents.is_empty());

        // Insert every bound doc comment as a synthetic first child of its
        // owner. Walking the comments back to front keeps several comments
        // on one owner in source order.
        let Self { mut builder, comments, bindings, .. } = self;
        let (docs, suppressions) = comments.into_parts();
        for (doc, owner) in docs.into_iter().zip(bindings.into_owners()).rev() {
            if let Some(owner) = owner {
                let range = doc.range();
                let comment = builder.alloc_doc_comment(doc.into_text(), range);
                builder.insert_first_child(owner, comment);
            }
        }

        (builder.finish(file), suppressions)
    }

    fn build(&mut self, foreign: &'ast dyn ResolvedNode) {
        let node = self.builder.alloc_foreign(registry::adapter_kind(foreign.kind()), foreign);
        let parent = *self.nodes.last().expect("a parent is always on the stack");
        self.builder.append_child(parent, node);

        // The front-end re-announces `foreign` first thing and then walks
        // its children through `visit`, so this exhausts the whole subtree.
        self.nodes.push(node);
        self.parents.push(foreign);
        foreign.traverse(self);
        self.nodes.pop();
        self.parents.pop();

        if let Some(range) = foreign.location().real()
            && attach::contains_comment(self.comments.tokens(), range)
        {
            self.builder.set_contains_comment(node);
        }
    }

    /// Offers the adapter on top of the stack to every doc comment recorded
    /// before it. Compiler-generated nodes have no source position and never
    /// own documentation.
    fn offer_doc_candidate(&mut self, foreign: &'ast dyn ResolvedNode) {
        let Some(range) = foreign.location().real() else {
            return;
        };
        let node = *self.nodes.last().expect("a candidate is always on the stack");
        self.bindings.offer(self.comments.doc_comments(), node, range);
    }
}

impl<'ast> NodeVisitor<'ast> for TreeAdapter<'ast> {
    fn visit(&mut self, node: &'ast dyn ResolvedNode) -> bool {
        if self.parents.last().is_some_and(|&top| same_node(top, node)) {
            // Re-entrant announcement of the node being expanded: let the
            // front-end keep descending. Declaration kinds become doc-comment
            // candidates at this moment, before any of their children exist.
            if registry::owns_doc_comments(node.kind()) {
                self.offer_doc_candidate(node);
            }
            true
        } else {
            // First sighting of a child: build its entire subtree ourselves
            // and stop the front-end from descending a second time.
            self.build(node);
            false
        }
    }
}
