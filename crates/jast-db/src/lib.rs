//! Incremental front door: source files as salsa inputs, parses as tracked
//! queries, syntax errors as accumulated diagnostics.

use camino::Utf8PathBuf;
pub use jast_errors::Diagnostic;
pub use jast_parse::Parse;
pub use line_index::LineIndex;
use salsa::{Accumulator as _, Database};

#[salsa::db]
#[derive(Clone, Default)]
pub struct RootDatabase {
    storage: salsa::Storage<Self>,
}

#[salsa::db]
impl Database for RootDatabase {}

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

pub trait FileParse {
    fn parse(self, db: &dyn Database) -> &Parse;
}

#[salsa::tracked]
impl FileParse for File {
    #[salsa::tracked(returns(ref), no_eq)]
    fn parse(self, db: &dyn Database) -> Parse {
        tracing::debug!(path = %self.path(db), "parsing file");
        jast_parse::parse(self.text(db))
    }
}

/// Reports the syntax errors of `file` as [`Diagnostic`] accumulations.
#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    for error in file.parse(db).errors() {
        error.clone().accumulate(db);
    }
}
