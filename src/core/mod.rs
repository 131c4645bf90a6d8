pub mod engine;
pub mod frequency;
pub mod reader;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod types;
