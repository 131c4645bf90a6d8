// File: src/core/reader.rs
use crate::core::types::Decoding;
use crate::errors::{Result, WordFreqError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads the whole file into a string.
/// The handle is dropped before returning, on success and on every error path.
pub fn read_text(path: &Path, decoding: Decoding) -> Result<String> {
    let read_err = |source: io::Error| WordFreqError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes).map_err(read_err)?;

    match decoding {
        Decoding::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Decoding::Strict => String::from_utf8(bytes)
            .map_err(|e| read_err(io::Error::new(io::ErrorKind::InvalidData, e))),
    }
}
