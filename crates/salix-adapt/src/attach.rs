//! Assigns comments to tree nodes.

use salix_comments::{CommentToken, DocComment};
use salix_tree::NodeId;
use text_size::{TextRange, TextSize};

/// Returns whether a comment token starts inside `range`.
///
/// Tokens are sorted by start offset and never overlap, so only the first
/// token at or after the range start needs checking: if that one falls
/// outside, every later one does too. A node start never coincides with a
/// comment start; should an exact hit turn up anyway, the input is malformed
/// and the node is reported comment-free.
pub(crate) fn contains_comment(tokens: &[CommentToken], range: TextRange) -> bool {
    let point = match tokens.binary_search_by_key(&range.start(), |token| token.range().start()) {
        Err(point) => point,
        Ok(_) => {
            debug_assert!(false, "comment token at the same position as a non-comment token");
            return false;
        }
    };
    tokens.get(point).is_some_and(|token| token.range().start() < range.end())
}

/// Scratch state of the nearest-owner search, one slot per doc comment.
///
/// A binding stays provisional for the whole build. The front-end's
/// traversal order does not match source order, so a node visited later can
/// still be lexically closer and take the comment over; only the distances
/// decide.
pub(crate) struct DocBindings<'ast> {
    nearest: Vec<Option<Binding<'ast>>>,
}

#[derive(Clone, Copy)]
struct Binding<'ast> {
    node: NodeId<'ast>,
    distance: TextSize,
}

impl<'ast> DocBindings<'ast> {
    pub(crate) fn new(doc_count: usize) -> Self {
        Self { nearest: vec![None; doc_count] }
    }

    /// Offers `node` as a candidate owner to every doc comment that precedes
    /// it in the source.
    ///
    /// `docs` is offset-ordered, so the scan stops at the first comment that
    /// starts at or after the node: neither it nor anything later can be
    /// documentation for this node. Ties keep the earlier-found owner.
    pub(crate) fn offer(&mut self, docs: &[DocComment], node: NodeId<'ast>, range: TextRange) {
        for (slot, doc) in self.nearest.iter_mut().zip(docs) {
            if doc.range().start() >= range.start() {
                break;
            }

            let distance = range.start() - doc.range().start();
            if slot.is_none_or(|binding| distance < binding.distance) {
                *slot = Some(Binding { node, distance });
            }
        }
    }

    /// Final owner per doc comment, frozen once the build is over.
    pub(crate) fn into_owners(self) -> Vec<Option<NodeId<'ast>>> {
        self.nearest.into_iter().map(|slot| slot.map(|binding| binding.node)).collect()
    }
}
