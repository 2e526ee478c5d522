//! Character class tables for Javanese script (Aksara Jawa).
//!
//! Every grapheme the tokenizer recognizes lives in exactly one of these tables.
//! The maps are built once on first use and are read-only afterwards, so any
//! number of translations may consult them concurrently.

use std::collections::HashMap;

use lazy_static::lazy_static;

// ============================================================================
// SINGLE-GRAPHEME CONSTANTS
// ============================================================================

/// Pangkon: kills the inherent vowel, or fuses with a following consonant.
pub const VIRAMA: char = '\u{A9C0}';

/// Cecak telu: turns six base consonants into digraphs for borrowed sounds.
pub const FOREIGN_SOUND_MARKER: char = '\u{A9B3}';

/// The vowel every bare consonant carries.
pub const INHERENT_VOWEL: &str = "a";

// ============================================================================
// TABLES
// ============================================================================

const CONSONANT_ENTRIES: [(char, &str); 20] = [
    ('\u{A9B2}', "h"),
    ('\u{A9A4}', "n"),
    ('\u{A995}', "c"),
    ('\u{A9AB}', "r"),
    ('\u{A98F}', "k"),
    ('\u{A9A2}', "d"),
    ('\u{A9A0}', "t"),
    ('\u{A9B1}', "s"),
    ('\u{A9AE}', "w"),
    ('\u{A9AD}', "l"),
    ('\u{A9A5}', "p"),
    ('\u{A99D}', "dh"),
    ('\u{A997}', "j"),
    ('\u{A9AA}', "y"),
    ('\u{A99A}', "ny"),
    ('\u{A9A9}', "m"),
    ('\u{A992}', "g"),
    ('\u{A9A7}', "b"),
    ('\u{A99B}', "th"),
    ('\u{A994}', "ng"),
];

const VOWEL_ENTRIES: [(char, &str); 5] = [
    ('\u{A984}', "a"),
    ('\u{A986}', "i"),
    ('\u{A988}', "u"),
    ('\u{A98C}', "e"),
    ('\u{A98E}', "o"),
];

const VOWEL_SIGN_ENTRIES: [(char, &str); 6] = [
    ('\u{A9B6}', "i"),  // wulu
    ('\u{A9B8}', "u"),  // suku
    ('\u{A9BA}', "e"),  // taling
    ('\u{A9BC}', "e"),  // pepet
    ('\u{A9B4}', "o"),  // tarung
    ('\u{A9BB}', "ai"), // taling-tarung
];

const FINAL_SIGN_ENTRIES: [(char, &str); 3] = [
    ('\u{A981}', "ng"), // cecak
    ('\u{A982}', "r"),  // layar
    ('\u{A983}', "h"),  // wignyan
];

const PUNCTUATION_ENTRIES: [(char, &str); 4] = [
    ('\u{A9CA}', ","), // pada lingsa
    ('\u{A9CB}', "."), // pada lungsi
    ('\u{A9C8}', ","), // pada pangkat
    ('\u{A9C9}', "."), // pada guru
];

/// Base consonants that take the foreign-sound marker, with their digraphs.
const DIGRAPH_ENTRIES: [(char, &str); 6] = [
    ('\u{A98F}', "kh"),
    ('\u{A9A2}', "dz"),
    ('\u{A9A5}', "f"),
    ('\u{A997}', "z"),
    ('\u{A992}', "gh"),
    ('\u{A9AE}', "v"),
];

lazy_static! {
    static ref CONSONANTS: HashMap<char, &'static str> = CONSONANT_ENTRIES.into_iter().collect();
    static ref VOWELS: HashMap<char, &'static str> = VOWEL_ENTRIES.into_iter().collect();
    static ref VOWEL_SIGNS: HashMap<char, &'static str> = VOWEL_SIGN_ENTRIES.into_iter().collect();
    static ref FINAL_SIGNS: HashMap<char, &'static str> = FINAL_SIGN_ENTRIES.into_iter().collect();
    static ref PUNCTUATION: HashMap<char, &'static str> =
        PUNCTUATION_ENTRIES.into_iter().collect();
    static ref DIGRAPHS: HashMap<char, &'static str> = DIGRAPH_ENTRIES.into_iter().collect();
}

// ============================================================================
// LOOKUPS
// ============================================================================

/// Latin value of a base consonant, without its inherent vowel.
pub fn consonant(c: char) -> Option<&'static str> {
    CONSONANTS.get(&c).copied()
}

/// Latin value of a base consonant combined with the foreign-sound marker.
pub fn digraph(c: char) -> Option<&'static str> {
    DIGRAPHS.get(&c).copied()
}

pub fn vowel(c: char) -> Option<&'static str> {
    VOWELS.get(&c).copied()
}

pub fn vowel_sign(c: char) -> Option<&'static str> {
    VOWEL_SIGNS.get(&c).copied()
}

pub fn final_sign(c: char) -> Option<&'static str> {
    FINAL_SIGNS.get(&c).copied()
}

pub fn punctuation(c: char) -> Option<&'static str> {
    PUNCTUATION.get(&c).copied()
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains_key(&c)
}

/// True when `c` forms a digraph with the foreign-sound marker.
pub fn takes_marker(c: char) -> bool {
    DIGRAPHS.contains_key(&c)
}

/// Latin for a consonant, honoring the marker when present and eligible.
pub fn consonant_latin(base: char, marked: bool) -> &'static str {
    let plain = consonant(base).unwrap_or("");
    if marked {
        digraph(base).unwrap_or(plain)
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_disjoint() {
        let mut seen = HashSet::new();
        let all = CONSONANT_ENTRIES
            .iter()
            .chain(VOWEL_ENTRIES.iter())
            .chain(VOWEL_SIGN_ENTRIES.iter())
            .chain(FINAL_SIGN_ENTRIES.iter())
            .chain(PUNCTUATION_ENTRIES.iter());
        for (c, _) in all {
            assert!(seen.insert(*c), "grapheme U+{:04X} appears twice", *c as u32);
        }
        assert!(!seen.contains(&VIRAMA));
        assert!(!seen.contains(&FOREIGN_SOUND_MARKER));
    }

    #[test]
    fn test_digraph_bases_are_consonants() {
        for (c, _) in DIGRAPH_ENTRIES {
            assert!(is_consonant(c));
            assert!(takes_marker(c));
        }
    }

    #[test]
    fn test_consonant_latin_prefers_digraph_only_when_marked() {
        assert_eq!(consonant_latin('\u{A98F}', false), "k");
        assert_eq!(consonant_latin('\u{A98F}', true), "kh");
        // ta has no digraph, so the marker does not change it
        assert_eq!(consonant_latin('\u{A9A0}', true), "t");
    }
}
