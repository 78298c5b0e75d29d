use evflag_codec::{decode, encode, FlagField, OutOfRange, WireError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// The field format this tool reads and writes: consecutive 16-bit words,
/// little-endian. Both numbers are conventions of the file format, not of
/// the codec.
pub type Field = FlagField<u16>;

/// The traditional field size, kept as the `init` default
pub const DEFAULT_WORDS: usize = 30;

pub fn load(path: &Path) -> Result<Field, Error> {
    let bytes = fs::read(path).map_err(|err| Error::Io(path.to_owned(), err))?;
    let words = decode(&bytes)?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(Field::from_words(words))
}

pub fn save(path: &Path, field: &Field) -> Result<(), Error> {
    fs::write(path, encode(field.words())).map_err(|err| Error::Io(path.to_owned(), err))?;
    info!("wrote {} words to {}", field.words().len(), path.display());
    Ok(())
}

#[derive(Debug)]
pub enum Error {
    Io(PathBuf, io::Error),
    Wire(WireError),
    OutOfRange(OutOfRange),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(path, err) => write!(f, "{}: {err}", path.display()),
            Error::Wire(err) => err.fmt(f),
            Error::OutOfRange(err) => err.fmt(f),
        }
    }
}

impl From<WireError> for Error {
    fn from(err: WireError) -> Error {
        Error::Wire(err)
    }
}

impl From<OutOfRange> for Error {
    fn from(err: OutOfRange) -> Error {
        Error::OutOfRange(err)
    }
}
