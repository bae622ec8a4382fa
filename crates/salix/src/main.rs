use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use salix_db::{CommentIndex, File, RootDatabase};
use salix_inputs::normalize_line_endings;

#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
enum Options {
    /// Scans a source file and reports its comments and suppression
    /// directives.
    Comments {
        path: Utf8PathBuf,
        /// Marker that turns a line comment into a suppression directive,
        /// e.g. `NOLINT`.
        #[arg(long)]
        suppress_marker: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Comments { path, suppress_marker } => {
            let db = RootDatabase::default();
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{path}`"))?;
            let text = normalize_line_endings(&text).into_owned();

            let file = File::new(&db, path, text);
            let index = CommentIndex::scan(
                file.text(&db),
                suppress_marker.as_deref(),
                file.line_index(&db),
            );

            let line_index = file.line_index(&db);
            for token in index.tokens() {
                let line = line_index.line_col(token.range().start()).line + 1;
                println!("comment {} at line {line}: {:?}", token.index(), token.range());
            }
            for doc in index.doc_comments() {
                println!("doc comment at {:?}: {}", doc.range(), doc.text());
            }

            let mut directives: Vec<_> = index.suppressions().iter().collect();
            directives.sort_by_key(|&(line, _)| line);
            for (line, message) in directives {
                println!("line {line} suppressed: {message}");
            }

            Ok(())
        }
    }
}
