use crate::Word;
use std::fmt;
use std::mem;
use tracing::trace;

/// A persisted field that cannot be decoded
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WireError {
    /// Byte length is not a whole number of words
    Truncated { len: usize, word_size: usize },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WireError::Truncated { len, word_size } => write!(
                f,
                "{len} bytes is not a whole number of {word_size}-byte words"
            ),
        }
    }
}

impl std::error::Error for WireError {}

/// Encode a field as consecutive little-endian words
///
/// This layout is the compatibility boundary with whatever persists the
/// field: reader and writer must agree on both word width and byte order,
/// and this module fixes them as `W` and little-endian.
pub fn encode<W: Word>(words: &[W]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * mem::size_of::<W>());
    for &word in words {
        word.write_le(&mut out);
    }
    out
}

/// Decode consecutive little-endian words back into a field
pub fn decode<W: Word>(bytes: &[u8]) -> Result<Vec<W>, WireError> {
    let word_size = mem::size_of::<W>();
    if bytes.len() % word_size != 0 {
        return Err(WireError::Truncated { len: bytes.len(), word_size });
    }

    let words: Vec<W> = bytes.chunks_exact(word_size).map(W::read_le).collect();
    trace!("decoded field of {} words", words.len());
    Ok(words)
}
