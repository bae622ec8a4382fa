use salix_db::{File, RootDatabase, adapt_file, suppression_at};
use salix_frontend::NodeKind;
use salix_frontend::fixture::FixtureNode;
use salix_tree::SyntaxKind;
use text_size::{TextRange, TextSize};

#[test]
fn adapts_a_file_end_to_end() {
    let text = "/** Greets. */\nclass Greeter {\n  int x = 1; // NOLINT boring\n}\n";
    let class = FixtureNode::new(NodeKind::ClassDeclaration, 15, 62)
        .child(FixtureNode::new(NodeKind::FieldDeclaration, 33, 43));

    let db = RootDatabase::default();
    let file = File::new(&db, "greeter.src".into(), text.to_owned());
    let adapted = adapt_file(&db, file, &class, Some("NOLINT"));

    let root = adapted.tree().root();
    assert_eq!(root.kind(), SyntaxKind::SOURCE_FILE);
    assert_eq!(root.range(), TextRange::new(0.into(), TextSize::of(text)));

    let class = root.first_child().unwrap();
    assert_eq!(class.kind(), SyntaxKind::CLASS_DECLARATION);
    assert!(class.contains_comment());

    let comment = class.first_child().unwrap();
    assert_eq!(comment.kind(), SyntaxKind::DOC_COMMENT);
    assert_eq!(comment.doc_text(), Some("/** Greets. */"));

    let field = class.children().last().unwrap();
    assert_eq!(field.kind(), SyntaxKind::FIELD);
    assert!(!field.contains_comment());

    assert_eq!(adapted.suppressions().message(3), Some("boring"));

    // A finding reported on `x` (line 3) is silenced; one on the class
    // declaration line is not.
    let x_offset = TextSize::new(37);
    assert_eq!(suppression_at(&db, file, adapted.suppressions(), x_offset), Some("boring"));
    let class_offset = TextSize::new(16);
    assert_eq!(suppression_at(&db, file, adapted.suppressions(), class_offset), None);
}

#[test]
fn files_without_directives_have_empty_suppressions() {
    let text = "class Quiet {}\n";
    let class = FixtureNode::new(NodeKind::ClassDeclaration, 0, 14);

    let db = RootDatabase::default();
    let file = File::new(&db, "quiet.src".into(), text.to_owned());
    let adapted = adapt_file(&db, file, &class, Some("NOLINT"));

    assert!(adapted.suppressions().is_empty());
    assert!(!adapted.tree().root().first_child().unwrap().contains_comment());
}
