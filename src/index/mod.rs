//! Inverted index from normalized tokens to the documents containing them.
//!
//! The index is built once from a corpus and only read afterwards. Lookups
//! for tokens that no document contains never add entries, so
//! [`InvertedIndex::term_count`] always reports the distinct tokens that were
//! actually indexed.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::document::parser::{Document, DocumentReader};
use crate::preprocessing::tokenizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `doc.id` under every distinct token of `doc.text`.
    pub fn add_document(&mut self, doc: &Document) {
        for token in tokenizer::extract_tokens(&doc.text) {
            self.postings
                .entry(token)
                .or_default()
                .insert(doc.id.clone());
        }
    }

    /// Read-only lookup. Never creates an entry for a missing token.
    pub fn get(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.postings.get(token)
    }

    /// Owned copy of the documents matching `token`, empty when the token is
    /// absent or unknown.
    pub fn matches(&self, token: Option<&str>) -> BTreeSet<String> {
        token
            .and_then(|t| self.get(t))
            .cloned()
            .unwrap_or_default()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.postings.iter()
    }
}

/// Whether the document source could be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SourceStatus {
    Loaded,
    Unavailable { reason: String },
}

/// Summary counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub terms: usize,
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub index: InvertedIndex,
    pub documents_processed: usize,
    pub status: SourceStatus,
}

impl BuildOutcome {
    fn unavailable(reason: String) -> Self {
        BuildOutcome {
            index: InvertedIndex::new(),
            documents_processed: 0,
            status: SourceStatus::Unavailable { reason },
        }
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents_processed,
            terms: self.index.term_count(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SourceStatus::Loaded
    }
}

// Indexes records until the source ends or a read fails, handing back the
// failure so callers can tell an unreadable source from an empty one.
fn index_documents<R: BufRead>(reader: R) -> (InvertedIndex, usize, Option<io::Error>) {
    let mut index = InvertedIndex::new();
    let mut processed = 0;

    for record in DocumentReader::new(reader) {
        match record {
            Ok(doc) => {
                debug!(id = %doc.id, "indexing document");
                index.add_document(&doc);
                processed += 1;
            }
            Err(e) => return (index, processed, Some(e)),
        }
    }

    (index, processed, None)
}

/// Builds an index from a line-paired document source.
///
/// Returns the index and the number of complete records consumed. A read
/// error part way through stops the build; documents read before it stay
/// indexed.
pub fn build_index<R: BufRead>(reader: R) -> (InvertedIndex, usize) {
    let (index, processed, error) = index_documents(reader);
    if let Some(e) = error {
        warn!("stopped reading documents after {} records: {}", processed, e);
    }
    (index, processed)
}

/// Opens `path` and builds an index from it.
///
/// A source that cannot be opened, or fails before a single record is read
/// (a directory, undecodable first lines), degrades to an empty index with
/// zero documents and [`SourceStatus::Unavailable`].
pub fn build_index_from_path(path: &Path) -> BuildOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("document source {} unavailable: {}", path.display(), e);
            return BuildOutcome::unavailable(e.to_string());
        }
    };

    let (index, documents_processed, error) = index_documents(BufReader::new(file));
    match error {
        Some(e) if documents_processed == 0 => {
            warn!("document source {} unreadable: {}", path.display(), e);
            return BuildOutcome::unavailable(e.to_string());
        }
        Some(e) => {
            warn!(
                "stopped reading {} after {} records: {}",
                path.display(),
                documents_processed,
                e
            );
        }
        None => {}
    }

    info!(
        documents = documents_processed,
        terms = index.term_count(),
        "built index from {}",
        path.display()
    );

    BuildOutcome {
        index,
        documents_processed,
        status: SourceStatus::Loaded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_postings_for_each_token() {
        let source = Cursor::new("www.a.com\nred fish\nwww.b.com\nred hat\n");
        let (index, processed) = build_index(source);

        assert_eq!(processed, 2);
        assert_eq!(index.term_count(), 3);
        assert_eq!(index.get("red"), Some(&ids(&["www.a.com", "www.b.com"])));
        assert_eq!(index.get("fish"), Some(&ids(&["www.a.com"])));
        assert_eq!(index.get("hat"), Some(&ids(&["www.b.com"])));
    }

    #[test]
    fn dangling_line_is_not_counted() {
        let (index, processed) = build_index(Cursor::new("www.a.com\nred fish\nwww.b.com"));
        assert_eq!(processed, 1);
        assert_eq!(index.term_count(), 2);
    }

    #[test]
    fn repeated_identifier_merges_into_same_sets() {
        let (index, processed) = build_index(Cursor::new("x.org\nalpha\nx.org\nbeta alpha\n"));
        assert_eq!(processed, 2);
        assert_eq!(index.get("alpha"), Some(&ids(&["x.org"])));
        assert_eq!(index.get("beta"), Some(&ids(&["x.org"])));
    }

    #[test]
    fn document_without_tokens_still_counts() {
        let (index, processed) = build_index(Cursor::new("x.org\n123 ... !!!\n"));
        assert_eq!(processed, 1);
        assert!(index.is_empty());
    }

    #[test]
    fn read_error_keeps_earlier_documents() {
        let bytes: &[u8] = b"a.com\nhello\nb.com\n\xff\n";
        let (index, processed) = build_index(Cursor::new(bytes));
        assert_eq!(processed, 1);
        assert_eq!(index.get("hello"), Some(&ids(&["a.com"])));
    }

    #[test]
    fn lookup_of_missing_token_does_not_grow_index() {
        let (index, _) = build_index(Cursor::new("a.com\nhello\n"));
        let before = index.term_count();

        assert!(index.get("missing").is_none());
        assert!(index.matches(Some("missing")).is_empty());
        assert!(index.matches(None).is_empty());
        assert_eq!(index.term_count(), before);
    }

    #[test]
    fn undecodable_first_line_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, b"\xff\xfe\nred fish\n").unwrap();

        let outcome = build_index_from_path(&path);
        assert!(!outcome.is_available());
        assert_eq!(outcome.stats(), IndexStats { documents: 0, terms: 0 });
    }

    #[test]
    fn directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = build_index_from_path(dir.path());
        assert!(matches!(outcome.status, SourceStatus::Unavailable { .. }));
        assert!(outcome.index.is_empty());
        assert_eq!(outcome.documents_processed, 0);
    }

    #[test]
    fn late_read_error_still_counts_as_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, b"a.com\nhello\nb.com\n\xff\n").unwrap();

        let outcome = build_index_from_path(&path);
        assert!(outcome.is_available());
        assert_eq!(outcome.stats(), IndexStats { documents: 1, terms: 1 });
    }

    #[test]
    fn missing_file_is_reported_as_unavailable() {
        let outcome = build_index_from_path(Path::new("definitely/not/here.txt"));

        assert!(!outcome.is_available());
        assert!(matches!(outcome.status, SourceStatus::Unavailable { .. }));
        assert_eq!(outcome.stats(), IndexStats { documents: 0, terms: 0 });
    }
}
