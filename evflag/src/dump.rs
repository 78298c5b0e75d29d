use crate::store::Field;
use itertools::Itertools;
use owo_colors::OwoColorize;

pub fn render(field: &Field, plain: bool) -> String {
    if plain {
        self::plain(field)
    } else {
        colored(field)
    }
}

/// One line per word: index, hex value, bit pattern with bit 15 leftmost
pub fn plain(field: &Field) -> String {
    field
        .words()
        .iter()
        .enumerate()
        .map(|(index, word)| format!("word {index}: {word:#06x} {word:016b}"))
        .join("\n")
}

/// Like [`plain`], with raised bits highlighted
pub fn colored(field: &Field) -> String {
    field
        .words()
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let bits = (0..u16::BITS)
                .rev()
                .map(|offset| {
                    let bit = (word >> offset) & 1;
                    if bit == 1 {
                        bit.green().to_string()
                    } else {
                        bit.dimmed().to_string()
                    }
                })
                .join("");

            format!("word {index}: {word:#06x} {bits}")
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use evflag_codec::Flag;

    #[test]
    fn renders_the_reference_field() {
        let mut field = Field::new(2);
        field.set(Flag(0x04)).unwrap();
        field.set(Flag(0x1A)).unwrap();

        insta::assert_snapshot!(plain(&field), @r"
word 0: 0x0010 0000000000010000
word 1: 0x0400 0000010000000000
");
    }
}
