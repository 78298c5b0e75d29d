use crate::{locate, mask, Flag, Location, Word};
use itertools::Itertools;
use std::fmt;

/// An identifier pointing past the end of a field
///
/// The reference layout this codec descends from indexed storage without
/// any check, so a stray identifier corrupted whatever happened to sit
/// after the field. Here every access goes through [`located`] instead and
/// a stray identifier comes back as this error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutOfRange {
    pub flag: Flag,
    pub word: usize,
    pub words: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "flag {} needs word {} but the field holds {} words",
            self.flag, self.word, self.words
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Locate `flag` and check the word index against the field length
pub fn located<W: Word>(words: &[W], flag: Flag) -> Result<Location, OutOfRange> {
    let loc = locate::<W>(flag);
    if loc.word >= words.len() {
        return Err(OutOfRange { flag, word: loc.word, words: words.len() });
    }
    Ok(loc)
}

/// Whether `flag`'s bit is set in `words`
pub fn test<W: Word>(words: &[W], flag: Flag) -> Result<bool, OutOfRange> {
    let loc = located(words, flag)?;
    Ok(words[loc.word] & mask::<W>(flag) != W::ZERO)
}

/// Raise `flag`'s bit. Raising an already-set flag changes nothing
pub fn set<W: Word>(words: &mut [W], flag: Flag) -> Result<(), OutOfRange> {
    let loc = located(words, flag)?;
    words[loc.word] |= mask::<W>(flag);
    Ok(())
}

/// Lower `flag`'s bit. Lowering an already-clear flag changes nothing
pub fn clear<W: Word>(words: &mut [W], flag: Flag) -> Result<(), OutOfRange> {
    let loc = located(words, flag)?;
    words[loc.word] &= !mask::<W>(flag);
    Ok(())
}

/// An owned flag field
///
/// The length is chosen once at construction and never changes, so the set
/// of addressable identifiers is fixed for the lifetime of the field.
#[derive(Clone, PartialEq, Eq)]
pub struct FlagField<W> {
    words: Box<[W]>,
}

impl<W: Word> FlagField<W> {
    /// A zeroed field of `words` words; every flag starts out clear
    pub fn new(words: usize) -> Self {
        FlagField { words: vec![W::ZERO; words].into_boxed_slice() }
    }

    /// Adopt words loaded from elsewhere, e.g. a persisted field
    pub fn from_words(words: Vec<W>) -> Self {
        FlagField { words: words.into_boxed_slice() }
    }

    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// How many identifiers this field can address
    pub fn flag_capacity(&self) -> usize {
        self.words.len() * W::BITS as usize
    }

    pub fn test(&self, flag: Flag) -> Result<bool, OutOfRange> {
        test(&self.words, flag)
    }

    pub fn set(&mut self, flag: Flag) -> Result<(), OutOfRange> {
        set(&mut self.words, flag)
    }

    pub fn clear(&mut self, flag: Flag) -> Result<(), OutOfRange> {
        clear(&mut self.words, flag)
    }
}

impl<W: Word> fmt::Display for FlagField<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = (W::BITS / 4) as usize;
        write!(
            f,
            "{}",
            self.words
                .iter()
                .format_with(" ", |word, f| f(&format_args!("{word:0width$x}")))
        )
    }
}

impl<W: Word> fmt::Debug for FlagField<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FlagField {{ {self} }}")
    }
}
