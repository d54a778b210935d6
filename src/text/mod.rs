//! Text utilities: tokenization, titles, sentence splitting and similarity

pub mod similarity;
pub mod tokenizer;

pub use similarity::jaccard;
pub use tokenizer::{filter_stopwords, split_sentences, title_from_text, token_set, tokenize};
