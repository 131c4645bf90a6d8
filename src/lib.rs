// src/lib.rs

pub mod commands;
pub mod core;
pub mod errors;
pub mod persistence;

pub use crate::core::engine::WordCounter;
pub use crate::core::types::{CountOptions, Decoding, TopWords, WordCounts};
pub use crate::errors::WordFreqError;
pub use crate::persistence::{HistoryRecord, HistoryStore};
