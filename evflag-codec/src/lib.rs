
mod word;
pub use word::Word;

mod flag;
pub use flag::{locate, mask, Flag, Location};

mod field;
pub use field::{clear, located, set, test, FlagField, OutOfRange};

mod alloc;
pub use alloc::FlagAlloc;

mod wire;
pub use wire::{decode, encode, WireError};

/// Declares a block of symbolic flag constants
///
/// Identifier values are chosen by the caller, typically in word-aligned
/// ranges so each logical group occupies its own word:
///
/// ```
/// evflag_codec::flags! {
///     pub ELDER_GREETED = 0x00;
///     pub ELDER_QUEST_ACCEPTED = 0x01;
///
///     pub MILL_DOOR_UNLOCKED = 0x10;
/// }
/// ```
#[macro_export]
macro_rules! flags {
    ($($vs:vis $name:ident = $id:expr;)*) => {
        $(
            #[allow(dead_code)]
            $vs const $name: $crate::Flag = $crate::Flag($id);
        )*
    };
}
