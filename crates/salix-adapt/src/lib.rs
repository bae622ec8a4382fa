//! Adapts a front-end's resolved AST into the uniform salix tree.
//!
//! The front-end hands over one file's already-resolved tree; this crate
//! rebuilds it as a [`SyntaxTree`], attaches doc comments to their nearest
//! declarations, flags nodes that contain comments, and collects the file's
//! suppression directives along the way.

mod attach;
mod builder;
mod registry;

use salix_comments::{CommentIndex, Suppressions};
use salix_frontend::ResolvedNode;
use salix_inputs::File;
use salix_tree::SyntaxTree;
use text_size::TextSize;

/// A closed adapter tree plus the file's suppression directives.
pub struct AdaptedFile<'ast> {
    tree: SyntaxTree<'ast>,
    suppressions: Suppressions,
}

impl<'ast> AdaptedFile<'ast> {
    pub fn tree(&self) -> &SyntaxTree<'ast> {
        &self.tree
    }

    /// Line-keyed suppression directives, for the violation reporter.
    pub fn suppressions(&self) -> &Suppressions {
        &self.suppressions
    }
}

/// Builds the uniform tree for one file from the front-end's resolved root.
///
/// Comments are extracted up front by lexical scanning; the tree itself is
/// built by letting the front-end drive traversal; doc comments are bound to
/// their nearest declaration and inserted before the tree is closed. The
/// call either returns a fully closed tree or panics on a broken traversal
/// contract; there is no partially built result.
pub fn adapt_file<'ast>(
    db: &dyn salsa::Database,
    file: File,
    root: &'ast dyn ResolvedNode,
    suppress_marker: Option<&str>,
) -> AdaptedFile<'ast> {
    let text = file.text(db);
    let comments = CommentIndex::scan(text, suppress_marker, file.line_index(db));
    let adapter = builder::TreeAdapter::new(TextSize::of(text), comments);
    let (tree, suppressions) = adapter.build_tree(root);
    AdaptedFile { tree, suppressions }
}
