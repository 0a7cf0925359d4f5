//! core/satb-theory/src/numeral.rs
//! Roman-numeral vocabulary and chord-tone expansion.
//!
//! [`Numeral`] is a closed sum type over a fixed vocabulary (`I, i, ii, ii°,
//! III, iii, IV, iv, V, v, V7, vi, VI, vii°` plus inversion figures `6, 6/4, 6/5`) rather than a
//! free-form string, so `satb-harmony`'s tables (`bassmap`, the scorer's strong/weak pair sets)
//! construct numerals through typed constructors and can never produce an invalid tag. Parsing a
//! user-supplied string (as `realize_satb`'s `chord_progression` input requires) goes through
//! [`Numeral::parse`], which is the only fallible entry point.

use core::fmt;

use crate::key::Key;
use crate::pitch::PitchClass;

/// Scale degree (1-indexed) a numeral is rooted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
    V = 5,
    VI = 6,
    VII = 7,
}

impl Degree {
    const fn index(self) -> usize {
        (self as u8 - 1) as usize
    }
}

/// Intrinsic triad quality, independent of scale context — determines the third/fifth offsets
/// from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl TriadQuality {
    const fn offsets(self) -> (i32, i32) {
        match self {
            Self::Major => (4, 7),
            Self::Minor => (3, 7),
            Self::Diminished => (3, 6),
            Self::Augmented => (4, 8),
        }
    }

    const fn case_marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Major | Self::Augmented => ("", ""),
            Self::Minor => ("lower", ""),
            Self::Diminished => ("lower", "°"),
        }
    }
}

/// Which chord tone sits in the bass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inversion {
    Root,
    First,
    Second,
    Third,
}

impl Inversion {
    const fn figure(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::First => "6",
            Self::Second => "6/4",
            Self::Third => "6/5",
        }
    }
}

/// A Roman numeral: scale degree + intrinsic quality + optional seventh + inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeral {
    degree: Degree,
    quality: TriadQuality,
    has_seventh: bool,
    inversion: Inversion,
}

/// Chord tones produced by expanding a [`Numeral`] against a [`Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedChord {
    pub root: PitchClass,
    pub third: PitchClass,
    pub fifth: PitchClass,
    pub seventh: Option<PitchClass>,
    pub inversion: Inversion,
    pub contains_seventh: bool,
}

impl Numeral {
    /// Build a plain triad.
    #[must_use]
    pub const fn triad(degree: Degree, quality: TriadQuality, inversion: Inversion) -> Self {
        Self { degree, quality, has_seventh: false, inversion }
    }

    /// Build a dominant-seventh-type numeral (major triad + minor seventh above the root). This
    /// is the only seventh chord in the vocabulary (`V7`).
    #[must_use]
    pub const fn dominant_seventh(degree: Degree, inversion: Inversion) -> Self {
        Self { degree, quality: TriadQuality::Major, has_seventh: true, inversion }
    }

    /// Scale degree this numeral is rooted on.
    #[must_use]
    pub const fn degree(self) -> Degree {
        self.degree
    }

    /// Inversion figure.
    #[must_use]
    pub const fn inversion(self) -> Inversion {
        self.inversion
    }

    /// Triad quality this numeral is built on.
    #[must_use]
    pub const fn quality(self) -> TriadQuality {
        self.quality
    }

    /// Whether this numeral carries a seventh.
    #[must_use]
    pub const fn has_seventh(self) -> bool {
        self.has_seventh
    }

    /// Expand this numeral against a key into concrete chord-tone pitch-classes.
    #[must_use]
    pub fn expand(self, key: Key) -> ExpandedChord {
        let root = key.scale_pitch_classes()[self.degree.index()];
        let (third_offset, fifth_offset) = self.quality.offsets();
        let third = root.transpose(third_offset);
        let fifth = root.transpose(fifth_offset);
        let seventh = self.has_seventh.then(|| root.transpose(10));
        ExpandedChord {
            root,
            third,
            fifth,
            seventh,
            inversion: self.inversion,
            contains_seventh: self.has_seventh,
        }
    }

    /// Canonical vocabulary string, e.g. `vii°6`, `V7`, `I6/4`.
    #[must_use]
    pub fn canonical(self) -> String {
        let roman = match self.degree {
            Degree::I => "I",
            Degree::II => "II",
            Degree::III => "III",
            Degree::IV => "IV",
            Degree::V => "V",
            Degree::VI => "VI",
            Degree::VII => "VII",
        };
        let (case, diminished_mark) = self.quality.case_marker();
        let cased = if case == "lower" { roman.to_ascii_lowercase() } else { roman.to_string() };
        let seventh_mark = if self.has_seventh { "7" } else { "" };
        format!("{cased}{diminished_mark}{seventh_mark}{}", self.inversion.figure())
    }

    /// Parse a canonical vocabulary string (the boundary's only fallible entry point — used by
    /// `realize_satb`'s user-supplied `chord_progression`).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (body, inversion) = if let Some(stripped) = text.strip_suffix("6/4") {
            (stripped, Inversion::Second)
        } else if let Some(stripped) = text.strip_suffix("6/5") {
            (stripped, Inversion::Third)
        } else if let Some(stripped) = text.strip_suffix('6') {
            (stripped, Inversion::First)
        } else {
            (text, Inversion::Root)
        };
        let (body, has_seventh) =
            if let Some(stripped) = body.strip_suffix('7') { (stripped, true) } else { (body, false) };
        let (body, diminished) =
            if let Some(stripped) = body.strip_suffix('°') { (stripped, true) } else { (body, false) };

        let is_lower = body.chars().next().is_some_and(char::is_lowercase);
        let upper = body.to_ascii_uppercase();
        let degree = match upper.as_str() {
            "I" => Degree::I,
            "II" => Degree::II,
            "III" => Degree::III,
            "IV" => Degree::IV,
            "V" => Degree::V,
            "VI" => Degree::VI,
            "VII" => Degree::VII,
            _ => return None,
        };
        let quality = match (is_lower, diminished) {
            (_, true) => TriadQuality::Diminished,
            (true, false) => TriadQuality::Minor,
            (false, false) => TriadQuality::Major,
        };
        if has_seventh && quality != TriadQuality::Major {
            // The only seventh chord in the vocabulary is V7 (major triad + minor seventh).
            return None;
        }
        Some(Self { degree, quality, has_seventh, inversion })
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass;

    fn pc(semitone: i32) -> PitchClass {
        PitchClass::from_semitones(semitone)
    }

    #[test]
    fn tonic_triad_expands_in_c_major() {
        let key = Key::major(pc(0));
        let tonic = Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Root);
        let chord = tonic.expand(key);
        assert_eq!(chord.root, pc(0));
        assert_eq!(chord.third, pc(4));
        assert_eq!(chord.fifth, pc(7));
        assert!(chord.seventh.is_none());
    }

    #[test]
    fn dominant_seventh_in_a_minor_uses_raised_leading_tone() {
        let key = Key::minor(pc(9)); // A minor
        let v7 = Numeral::dominant_seventh(Degree::V, Inversion::Root);
        let chord = v7.expand(key);
        assert_eq!(chord.root, pc(4)); // E
        assert_eq!(chord.third, pc(8)); // G# (raised leading tone)
        assert_eq!(chord.fifth, pc(11)); // B
        assert_eq!(chord.seventh, Some(pc(2))); // D
    }

    #[test]
    fn canonical_round_trips_through_parse() {
        let cases = [
            Numeral::triad(Degree::II, TriadQuality::Diminished, Inversion::First),
            Numeral::dominant_seventh(Degree::V, Inversion::Third),
            Numeral::triad(Degree::I, TriadQuality::Major, Inversion::Second),
            Numeral::triad(Degree::VI, TriadQuality::Minor, Inversion::Root),
        ];
        for numeral in cases {
            let text = numeral.canonical();
            let parsed = Numeral::parse(&text).unwrap_or_else(|| panic!("failed to parse {text}"));
            assert_eq!(parsed, numeral, "round trip mismatch for {text}");
        }
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert!(Numeral::parse("IX").is_none());
        assert!(Numeral::parse("ii7").is_none());
    }
}
