pub mod config;
pub mod document;
pub mod engine;
pub mod index;
pub mod preprocessing;
pub mod repl;

pub use document::parser::Document;
pub use engine::search::{evaluate, parse_query, Modifier, QueryTerm, SearchResult};
pub use index::{
    build_index, build_index_from_path, BuildOutcome, IndexStats, InvertedIndex, SourceStatus,
};
pub use preprocessing::tokenizer::{extract_tokens, normalize};
