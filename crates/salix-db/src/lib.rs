//! Database facade over the adaptation pipeline.

pub use salix_adapt::{AdaptedFile, adapt_file};
pub use salix_comments::{CommentIndex, Suppressions};
pub use salix_inputs::File;
use text_size::TextSize;

/// Concrete salsa database used by the CLI and tests.
pub type RootDatabase = salsa::DatabaseImpl;

/// Returns the suppression message covering `offset`, if the line it falls
/// on carries a directive.
///
/// This is the lookup a violation reporter performs before emitting a
/// finding at that position.
pub fn suppression_at<'s>(
    db: &dyn salsa::Database,
    file: File,
    suppressions: &'s Suppressions,
    offset: TextSize,
) -> Option<&'s str> {
    let line = file.line_index(db).line_col(offset).line + 1;
    suppressions.message(line)
}
