//! Shared graphemes and helpers for the integration tests.
#![allow(dead_code)]

use aksara::{ErrorCode, Translation};

// Base consonants
pub const HA: &str = "\u{A9B2}";
pub const NA: &str = "\u{A9A4}";
pub const RA: &str = "\u{A9AB}";
pub const KA: &str = "\u{A98F}";
pub const DA: &str = "\u{A9A2}";
pub const TA: &str = "\u{A9A0}";
pub const SA: &str = "\u{A9B1}";
pub const PA: &str = "\u{A9A5}";
pub const JA: &str = "\u{A997}";
pub const MA: &str = "\u{A9A9}";
pub const GA: &str = "\u{A992}";
pub const NGA: &str = "\u{A994}";

// Independent vowels
pub const A: &str = "\u{A984}";
pub const I: &str = "\u{A986}";

// Vowel signs
pub const WULU: &str = "\u{A9B6}";
pub const SUKU: &str = "\u{A9B8}";
pub const TALING: &str = "\u{A9BA}";
pub const PEPET: &str = "\u{A9BC}";
pub const TARUNG: &str = "\u{A9B4}";

// Final signs
pub const CECAK: &str = "\u{A981}";
pub const LAYAR: &str = "\u{A982}";
pub const WIGNYAN: &str = "\u{A983}";

pub const PANGKON: &str = "\u{A9C0}";
pub const CECAK_TELU: &str = "\u{A9B3}";

// Pada
pub const LINGSA: &str = "\u{A9CA}";
pub const LUNGSI: &str = "\u{A9CB}";

/// "haku mangan sega"
pub fn sample_sentence() -> String {
    [HA, KA, SUKU, " ", MA, NGA, NA, PANGKON, " ", SA, PEPET, GA].concat()
}

pub fn codes(translation: &Translation<'_>) -> Vec<ErrorCode> {
    translation.errors.iter().map(|e| e.code).collect()
}
