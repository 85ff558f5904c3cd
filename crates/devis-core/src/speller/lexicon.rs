//! Word tables for the amount speller.
//!
//! A [`Lexicon`] is pure data. Everything language-specific lives here; the
//! decomposition in the parent module only indexes into these arrays.

/// A tens range whose words are built from a lower multiple of ten plus a
/// teen word instead of its own tens word.
///
/// French has two: 70–79 is *soixante* + 10..19 and 90–99 is
/// *quatre-vingt* + 10..19.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeenZone {
    /// First value of the zone (inclusive).
    pub first: u32,
    /// Last value of the zone (inclusive).
    pub last: u32,
    /// Multiple of ten whose tens word starts every value in the zone.
    pub base: u32,
}

impl TeenZone {
    /// Whether `n` falls in this zone.
    #[inline]
    pub const fn contains(&self, n: u32) -> bool {
        n >= self.first && n <= self.last
    }
}

/// The words and joining rules of one numbering language.
///
/// All words are stored uppercase, ready to be printed.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    /// Word for 0, used only when the whole amount is zero.
    pub zero: &'static str,
    /// Words for 0..=9, indexed by digit. Index 0 is empty.
    pub units: [&'static str; 10],
    /// Words for 10..=19, indexed by `n - 10`.
    pub teens: [&'static str; 10],
    /// Words for 20, 30 … 90, indexed by tens digit. Indexes 0 and 1 are empty.
    pub tens: [&'static str; 10],
    /// Replacement word for an exact multiple of ten, indexed by tens digit.
    pub exact_tens: [Option<&'static str>; 10],
    /// Irregular zones, checked before the regular tens rule.
    pub teen_zones: &'static [TeenZone],
    /// Joins a tens word to the following unit or teen word.
    pub hyphen: &'static str,
    /// Word for 100.
    pub hundred: &'static str,
    /// Word for 1000.
    pub thousand: &'static str,
    /// Write 100..=199 without a leading "one".
    pub bare_single_hundred: bool,
    /// Write 1000..=1999 without a leading "one".
    pub bare_single_thousand: bool,
}

/// 70–79: SOIXANTE-DIX … SOIXANTE-DIX-NEUF.
pub const SOIXANTE_DIX_ZONE: TeenZone = TeenZone {
    first: 70,
    last: 79,
    base: 60,
};

/// 90–99: QUATRE-VINGT-DIX … QUATRE-VINGT-DIX-NEUF.
pub const QUATRE_VINGT_DIX_ZONE: TeenZone = TeenZone {
    first: 90,
    last: 99,
    base: 80,
};

const FRENCH_TEEN_ZONES: [TeenZone; 2] = [SOIXANTE_DIX_ZONE, QUATRE_VINGT_DIX_ZONE];

/// French numerals, uppercase, hyphen-joined.
pub const FRENCH: Lexicon = Lexicon {
    zero: "ZÉRO",
    units: [
        "", "UN", "DEUX", "TROIS", "QUATRE", "CINQ", "SIX", "SEPT", "HUIT", "NEUF",
    ],
    teens: [
        "DIX", "ONZE", "DOUZE", "TREIZE", "QUATORZE", "QUINZE", "SEIZE", "DIX-SEPT",
        "DIX-HUIT", "DIX-NEUF",
    ],
    tens: [
        "",
        "",
        "VINGT",
        "TRENTE",
        "QUARANTE",
        "CINQUANTE",
        "SOIXANTE",
        "SOIXANTE",
        "QUATRE-VINGT",
        "QUATRE-VINGT",
    ],
    exact_tens: [
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        Some("QUATRE-VINGTS"),
        None,
    ],
    teen_zones: &FRENCH_TEEN_ZONES,
    hyphen: "-",
    hundred: "CENT",
    thousand: "MILLE",
    bare_single_hundred: true,
    bare_single_thousand: true,
};
