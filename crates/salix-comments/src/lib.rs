//! Lexical comment extraction.
//!
//! One left-to-right scan over the raw source text collects every comment
//! token, the doc-comment subset, and suppression directives. The scan is
//! independent of the tree: it runs before any node is built, and the
//! attachment pass later consumes its output.

use rustc_hash::FxHashMap;
use salix_inputs::LineIndex;
use text_size::{TextRange, TextSize};

/// A single comment occurrence.
///
/// Tokens are numbered in scan order, which equals start-offset order, and
/// never overlap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommentToken {
    index: u32,
    range: TextRange,
}

impl CommentToken {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn range(self) -> TextRange {
        self.range
    }
}

/// A `/** ... */` comment with its raw text retained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocComment {
    token: CommentToken,
    text: Box<str>,
}

impl DocComment {
    pub fn range(&self) -> TextRange {
        self.token.range
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> Box<str> {
        self.text
    }
}

/// Suppression directives keyed by 1-based source line.
///
/// The last directive wins when a line carries more than one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Suppressions {
    entries: FxHashMap<u32, String>,
}

impl Suppressions {
    /// Returns the user message recorded for `line`, if any.
    pub fn message(&self, line: u32) -> Option<&str> {
        self.entries.get(&line).map(String::as_str)
    }

    pub fn contains_line(&self, line: u32) -> bool {
        self.entries.contains_key(&line)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(&line, message)| (line, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, line: u32, message: String) {
        self.entries.insert(line, message);
    }
}

/// Everything one scan produces for a file.
pub struct CommentIndex {
    tokens: Vec<CommentToken>,
    docs: Vec<DocComment>,
    suppressions: Suppressions,
}

impl CommentIndex {
    /// Scans `text` for comments and suppression directives.
    ///
    /// Block comments run from `/*` to the first `*/`; an unterminated block
    /// comment swallows the rest of the file and produces no token. Line
    /// comments run through the end of the line and keep the terminating
    /// newline in their range when one exists. A `None` or empty
    /// `suppress_marker` disables suppression scanning entirely.
    pub fn scan(text: &str, suppress_marker: Option<&str>, line_index: &LineIndex) -> Self {
        let marker = suppress_marker.filter(|marker| !marker.is_empty());

        let mut tokens = Vec::new();
        let mut docs = Vec::new();
        let mut suppressions = Suppressions::default();

        let bytes = text.as_bytes();
        let mut pos = 0;
        while pos + 1 < bytes.len() {
            let end = match (bytes[pos], bytes[pos + 1]) {
                (b'/', b'*') => {
                    let Some(end) = block_comment_end(bytes, pos + 2) else {
                        break;
                    };
                    end
                }
                (b'/', b'/') => line_comment_end(bytes, pos + 2),
                _ => {
                    pos += 1;
                    continue;
                }
            };

            let token = CommentToken {
                index: tokens.len() as u32,
                range: TextRange::new(TextSize::new(pos as u32), TextSize::new(end as u32)),
            };
            let comment = &text[pos..end];
            if comment.starts_with("/**") {
                docs.push(DocComment { token, text: comment.into() });
            }
            tokens.push(token);

            if let Some(marker) = marker
                && comment.starts_with("//")
            {
                let trimmed = comment["//".len()..].trim_start();
                if let Some(message) = trimmed.strip_prefix(marker) {
                    let line = line_index.line_col(token.range.start()).line + 1;
                    suppressions.insert(line, message.trim().to_owned());
                }
            }

            pos = end;
        }

        Self { tokens, docs, suppressions }
    }

    /// All comment tokens in start-offset order.
    ///
    /// The slice doubles as the binary-search view over start offsets; no
    /// separate key list is materialized.
    pub fn tokens(&self) -> &[CommentToken] {
        &self.tokens
    }

    /// The doc-comment subset, still in start-offset order.
    pub fn doc_comments(&self) -> &[DocComment] {
        &self.docs
    }

    pub fn suppressions(&self) -> &Suppressions {
        &self.suppressions
    }

    /// Consumes the index once the containment queries are done with it.
    pub fn into_parts(self) -> (Vec<DocComment>, Suppressions) {
        (self.docs, self.suppressions)
    }
}

fn block_comment_end(bytes: &[u8], mut pos: usize) -> Option<usize> {
    while pos + 1 < bytes.len() {
        if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
            return Some(pos + 2);
        }
        pos += 1;
    }
    None
}

fn line_comment_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() {
        if bytes[pos] == b'\n' {
            return pos + 1;
        }
        pos += 1;
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use salix_inputs::LineIndex;
    use text_size::TextRange;

    use super::CommentIndex;

    fn scan(text: &str, marker: Option<&str>) -> CommentIndex {
        CommentIndex::scan(text, marker, &LineIndex::new(text))
    }

    fn ranges(index: &CommentIndex) -> Vec<std::ops::Range<usize>> {
        index.tokens().iter().map(|token| token.range().into()).collect()
    }

    #[test]
    fn finds_block_and_line_comments() {
        let text = "int a; /* block */ int b; // line\nint c;\n";
        let index = scan(text, None);

        assert_eq!(ranges(&index), vec![7..18, 26..34]);
        assert_eq!(
            index.tokens().iter().map(|token| token.index()).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert!(index.doc_comments().is_empty());
    }

    #[test]
    fn block_comments_permit_internal_stars() {
        let text = "/* a * b ** c */ x";
        let index = scan(text, None);

        assert_eq!(ranges(&index), vec![0..16]);
    }

    #[test]
    fn doc_comments_keep_their_text() {
        let text = "/** doc */\nclass Foo {}\n// plain\n";
        let index = scan(text, None);

        assert_eq!(index.tokens().len(), 2);
        let [doc] = index.doc_comments() else {
            panic!("expected exactly one doc comment");
        };
        assert_eq!(doc.text(), "/** doc */");
        assert_eq!(doc.range(), TextRange::new(0.into(), 10.into()));
    }

    #[test]
    fn line_comment_at_end_of_file_is_recognized() {
        let text = "int x;\n// trailing";
        let index = scan(text, None);

        assert_eq!(ranges(&index), vec![7..18]);
    }

    #[test]
    fn unterminated_block_comment_produces_no_token() {
        let text = "int x; /* never closed\nint y;";
        let index = scan(text, None);

        assert!(index.tokens().is_empty());
    }

    #[test]
    fn suppression_directives_are_keyed_by_line() {
        let text = "int a;\nint x = 1; // NOLINT unused\nint b; // unrelated\n";
        let index = scan(text, Some("NOLINT"));

        assert_eq!(index.suppressions().len(), 1);
        assert_eq!(index.suppressions().message(2), Some("unused"));
    }

    #[test]
    fn suppression_without_message_records_empty_text() {
        let text = "int x = 1; // NOLINT\n";
        let index = scan(text, Some("NOLINT"));

        assert_eq!(index.suppressions().message(1), Some(""));
    }

    #[test]
    fn directives_on_separate_lines_are_kept_apart() {
        let text = "/* spacer */ // NOLINT first\nint y; // NOLINT second\n";
        let index = scan(text, Some("NOLINT"));

        assert_eq!(index.suppressions().message(1), Some("first"));
        assert_eq!(index.suppressions().message(2), Some("second"));
    }

    #[test]
    fn disabled_marker_skips_suppression_scanning() {
        let text = "int x = 1; // NOLINT unused\n";

        assert!(scan(text, None).suppressions().is_empty());
        assert!(scan(text, Some("")).suppressions().is_empty());
    }

    #[test]
    fn scanning_is_deterministic() {
        let text = "/** a */ int x; // NOLINT y\n/* b */\n";

        let first = scan(text, Some("NOLINT"));
        let second = scan(text, Some("NOLINT"));
        assert_eq!(first.tokens(), second.tokens());
        assert_eq!(first.doc_comments(), second.doc_comments());
        assert_eq!(first.suppressions(), second.suppressions());
    }
}
