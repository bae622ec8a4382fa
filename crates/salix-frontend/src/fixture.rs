//! In-memory stand-in for a front-end tree.
//!
//! Tests build these by hand to exercise the adaptation layer without a real
//! compiler behind it. The traversal implements the same push-style protocol
//! a front-end does, including the re-announcement of a node that is being
//! descended into.

use text_size::TextRange;

use crate::{Location, NodeKind, NodeVisitor, ResolvedNode};

pub struct FixtureNode {
    kind: NodeKind,
    location: Location,
    children: Vec<FixtureNode>,
}

impl FixtureNode {
    pub fn new(kind: NodeKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            location: Location::Real(TextRange::new(start.into(), end.into())),
            children: Vec::new(),
        }
    }

    /// A compiler-generated node without a source position.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self { kind, location: Location::Synthetic, children: Vec::new() }
    }

    /// Appends a child; children are traversed in the order they were added,
    /// which tests deliberately decouple from source order.
    pub fn child(mut self, child: FixtureNode) -> Self {
        self.children.push(child);
        self
    }
}

impl ResolvedNode for FixtureNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn location(&self) -> Location {
        self.location
    }

    fn traverse<'ast>(&'ast self, visitor: &mut dyn NodeVisitor<'ast>) {
        if visitor.visit(self) {
            for child in &self.children {
                child.traverse(visitor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder<'ast> {
        events: Vec<(NodeKind, bool)>,
        descend_into: Vec<&'ast dyn ResolvedNode>,
    }

    impl<'ast> NodeVisitor<'ast> for Recorder<'ast> {
        fn visit(&mut self, node: &'ast dyn ResolvedNode) -> bool {
            let descend = self
                .descend_into
                .iter()
                .any(|candidate| crate::same_node(*candidate, node));
            self.events.push((node.kind(), descend));
            descend
        }
    }

    #[test]
    fn traversal_announces_before_children() {
        let tree = FixtureNode::new(NodeKind::Block, 0, 10)
            .child(FixtureNode::new(NodeKind::ReturnStatement, 2, 9));

        let mut recorder = Recorder { events: Vec::new(), descend_into: vec![&tree] };
        tree.traverse(&mut recorder);

        assert_eq!(
            recorder.events,
            vec![(NodeKind::Block, true), (NodeKind::ReturnStatement, false)]
        );
    }

    #[test]
    fn refusing_descent_skips_the_subtree() {
        let tree = FixtureNode::new(NodeKind::Block, 0, 10)
            .child(FixtureNode::new(NodeKind::IfStatement, 1, 9).child(FixtureNode::new(
                NodeKind::ReturnStatement,
                3,
                8,
            )));

        let mut recorder = Recorder { events: Vec::new(), descend_into: vec![&tree] };
        tree.traverse(&mut recorder);

        assert_eq!(
            recorder.events,
            vec![(NodeKind::Block, true), (NodeKind::IfStatement, false)]
        );
    }
}
