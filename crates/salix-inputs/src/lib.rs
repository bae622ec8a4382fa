use std::borrow::Cow;

pub use line_index::{LineCol, LineIndex};

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

/// Rewrites `\r\n` and lone `\r` line endings to `\n`.
///
/// The comment scanner and all line lookups assume normalized text, so file
/// contents are normalized once when loaded.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut normalized = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('\r') {
        normalized.push_str(&rest[..pos]);
        normalized.push('\n');
        rest = &rest[pos + 1..];
        if let Some(stripped) = rest.strip_prefix('\n') {
            rest = stripped;
        }
    }
    normalized.push_str(rest);
    Cow::Owned(normalized)
}

#[cfg(test)]
mod tests {
    use super::normalize_line_endings;

    #[test]
    fn normalization_is_a_noop_without_carriage_returns() {
        let text = "class Foo {}\n// done\n";
        assert!(matches!(normalize_line_endings(text), std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn crlf_and_lone_cr_become_newlines() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_line_endings("\r\r\n"), "\n\n");
    }
}
