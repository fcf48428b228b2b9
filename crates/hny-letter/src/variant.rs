//! Link format variants
//!
//! Three link formats have shipped. All of them base64-encode the UTF-8
//! JSON of a letter; they differ in how the two reserved base64 symbols
//! (`+`, `/`) are written, whether `=` padding is kept, and which optional
//! fields they carry.
//!
//! | Variant | Padding  | `+` | `/` | Optional fields |
//! |---------|----------|-----|-----|-----------------|
//! | V1      | kept     | `+` | `/` | senderPhone     |
//! | V2      | stripped | `-` | `_` | none            |
//! | V3      | stripped | `.` | `_` | date            |
//!
//! Encoders only ever emit [`Variant::CURRENT`]. Decoders accept all rows,
//! so the reverse mapping is derived from the whole table.

use std::fmt::{self, Display, Formatter};

/// One shipped link format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    V1,
    V2,
    V3,
}

/// Symbol and field rules of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRules {
    /// Written in place of base64 `+`
    pub plus: char,
    /// Written in place of base64 `/`
    pub slash: char,
    /// Trailing `=` stays in the link
    pub keeps_padding: bool,
    /// Carries `senderPhone`
    pub carries_phone: bool,
    /// Carries an encode-time `date`
    pub carries_date: bool,
}

// One row per variant, indexed by discriminant.
const RULES: [VariantRules; 3] = [
    VariantRules {
        plus: '+',
        slash: '/',
        keeps_padding: true,
        carries_phone: true,
        carries_date: false,
    },
    VariantRules {
        plus: '-',
        slash: '_',
        keeps_padding: false,
        carries_phone: false,
        carries_date: false,
    },
    VariantRules {
        plus: '.',
        slash: '_',
        keeps_padding: false,
        carries_phone: false,
        carries_date: true,
    },
];

/// Symbols that reach the decoder without belonging to any row.
///
/// A V1 `+` read back through form-style query decoding becomes a space.
const TRANSPORT_ALIASES: [(char, char); 1] = [(' ', '+')];

impl Variant {
    /// The variant new links are written in
    pub const CURRENT: Variant = Variant::V3;

    /// Every variant a decoder must understand, oldest first
    pub const ALL: [Variant; 3] = [Variant::V1, Variant::V2, Variant::V3];

    /// Rules of this variant
    #[inline]
    #[must_use]
    pub const fn rules(self) -> VariantRules {
        RULES[self as usize]
    }

    /// Rewrite standard base64 into this variant's link alphabet
    #[must_use]
    pub fn apply(self, symbols: &str) -> String {
        let rules = self.rules();
        let body = if rules.keeps_padding {
            symbols
        } else {
            symbols.trim_end_matches('=')
        };
        body.chars()
            .map(|c| match c {
                '+' => rules.plus,
                '/' => rules.slash,
                other => other,
            })
            .collect()
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Variant::V1 => f.write_str("v1"),
            Variant::V2 => f.write_str("v2"),
            Variant::V3 => f.write_str("v3"),
        }
    }
}

/// Map a link symbol back to standard base64
///
/// Substitutes of every variant map back unconditionally. This is safe
/// because no variant writes `-`, `.` or `_` as anything but a substitute.
#[must_use]
pub fn reverse_symbol(c: char) -> char {
    for variant in Variant::ALL {
        let rules = variant.rules();
        if c == rules.plus {
            return '+';
        }
        if c == rules.slash {
            return '/';
        }
    }
    TRANSPORT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == c)
        .map_or(c, |(_, standard)| *standard)
}
