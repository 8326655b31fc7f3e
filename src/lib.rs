//! Extractive summarization for Khmer text.
//!
//! The pipeline turns tokenized sentences into a weighted undirected
//! similarity graph, ranks the sentences with PageRank over that graph,
//! and joins the top-ranked sentences back into display text.
//!
//! # Example
//!
//! ```
//! use khmer_textrank::{summarize, Sentence};
//!
//! let sentences = vec![
//!     Sentence::from_words(&["ខ្ញុំ", "ចូលចិត្ត", "អានសៀវភៅ", "។"], 0),
//!     Sentence::from_words(&["គាត់", "ចូលចិត្ត", "អានសៀវភៅ", "ដែរ", "។"], 1),
//! ];
//! let summary = summarize(&sentences, 1).unwrap();
//! assert!(!summary.is_empty());
//! ```

pub mod error;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

pub use error::SummarizeError;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::tokenize;
pub use summarizer::{summarize, ScoredSentence, Summarizer, Summary};
pub use types::{Sentence, SummarizerConfig};
