// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled pitch classes.
//!
//! Unlike a plain 12-value pitch class, a [`Note`] keeps its enharmonic
//! spelling: `Cs` (C♯) and `Db` (D♭) are different values that share the
//! same semitone position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of semitones in an octave
pub const SEMITONES: u8 = 12;

/// Note letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Semitone position of the natural note with this letter
    pub fn semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

/// Single accidentals. Double sharps and double flats are not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Unicode symbol, empty for naturals
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::Flat => "♭",
        }
    }

    /// ASCII symbol, empty for naturals
    pub fn ascii_symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "b" | "♭" => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// A pitch class with an explicit spelling: naturals, single sharps and single flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C♯
    Db, // D♭
    D,
    Ds, // D♯
    Eb, // E♭
    E,
    Es, // E♯
    Fb, // F♭
    F,
    Fs, // F♯
    Gb, // G♭
    G,
    Gs, // G♯
    Ab, // A♭
    A,
    As, // A♯
    Bb, // B♭
    B,
    Bs, // B♯
    Cb, // C♭
}

impl Note {
    /// All 21 spellings
    pub const ALL: [Note; 21] = [
        Note::C,
        Note::Cs,
        Note::Db,
        Note::D,
        Note::Ds,
        Note::Eb,
        Note::E,
        Note::Es,
        Note::Fb,
        Note::F,
        Note::Fs,
        Note::Gb,
        Note::G,
        Note::Gs,
        Note::Ab,
        Note::A,
        Note::As,
        Note::Bb,
        Note::B,
        Note::Bs,
        Note::Cb,
    ];

    /// Natural notes in letter order
    pub const NATURALS: [Note; 7] = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
    ];

    /// Chromatic scale from C spelled with sharps
    pub const CHROMATIC_SHARPS: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Chromatic scale from C spelled with flats
    pub const CHROMATIC_FLATS: [Note; 12] = [
        Note::C,
        Note::Db,
        Note::D,
        Note::Eb,
        Note::E,
        Note::F,
        Note::Gb,
        Note::G,
        Note::Ab,
        Note::A,
        Note::Bb,
        Note::B,
    ];

    /// Build a note from its parts
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        use Accidental::*;
        match (letter, accidental) {
            (Letter::C, Natural) => Note::C,
            (Letter::C, Sharp) => Note::Cs,
            (Letter::C, Flat) => Note::Cb,
            (Letter::D, Natural) => Note::D,
            (Letter::D, Sharp) => Note::Ds,
            (Letter::D, Flat) => Note::Db,
            (Letter::E, Natural) => Note::E,
            (Letter::E, Sharp) => Note::Es,
            (Letter::E, Flat) => Note::Eb,
            (Letter::F, Natural) => Note::F,
            (Letter::F, Sharp) => Note::Fs,
            (Letter::F, Flat) => Note::Fb,
            (Letter::G, Natural) => Note::G,
            (Letter::G, Sharp) => Note::Gs,
            (Letter::G, Flat) => Note::Gb,
            (Letter::A, Natural) => Note::A,
            (Letter::A, Sharp) => Note::As,
            (Letter::A, Flat) => Note::Ab,
            (Letter::B, Natural) => Note::B,
            (Letter::B, Sharp) => Note::Bs,
            (Letter::B, Flat) => Note::Bb,
        }
    }

    /// Letter name of this note
    pub fn letter(self) -> Letter {
        match self {
            Note::C | Note::Cs | Note::Cb => Letter::C,
            Note::D | Note::Ds | Note::Db => Letter::D,
            Note::E | Note::Es | Note::Eb => Letter::E,
            Note::F | Note::Fs | Note::Fb => Letter::F,
            Note::G | Note::Gs | Note::Gb => Letter::G,
            Note::A | Note::As | Note::Ab => Letter::A,
            Note::B | Note::Bs | Note::Bb => Letter::B,
        }
    }

    /// Accidental of this note
    pub fn accidental(self) -> Accidental {
        match self {
            Note::C | Note::D | Note::E | Note::F | Note::G | Note::A | Note::B => {
                Accidental::Natural
            }
            Note::Cs | Note::Ds | Note::Es | Note::Fs | Note::Gs | Note::As | Note::Bs => {
                Accidental::Sharp
            }
            Note::Cb | Note::Db | Note::Eb | Note::Fb | Note::Gb | Note::Ab | Note::Bb => {
                Accidental::Flat
            }
        }
    }

    /// Semitone position (0-11) above C
    pub fn semitone(self) -> u8 {
        let natural = self.letter().semitone();
        match self.accidental() {
            Accidental::Natural => natural,
            Accidental::Sharp => (natural + 1) % SEMITONES,
            Accidental::Flat => (natural + SEMITONES - 1) % SEMITONES,
        }
    }

    /// True if both notes sound the same pitch class
    pub fn is_enharmonic(self, other: Note) -> bool {
        self.semitone() == other.semitone()
    }

    /// Display name with Unicode accidentals, e.g. "C♯"
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C♯",
            Note::Db => "D♭",
            Note::D => "D",
            Note::Ds => "D♯",
            Note::Eb => "E♭",
            Note::E => "E",
            Note::Es => "E♯",
            Note::Fb => "F♭",
            Note::F => "F",
            Note::Fs => "F♯",
            Note::Gb => "G♭",
            Note::G => "G",
            Note::Gs => "G♯",
            Note::Ab => "A♭",
            Note::A => "A",
            Note::As => "A♯",
            Note::Bb => "B♭",
            Note::B => "B",
            Note::Bs => "B♯",
            Note::Cb => "C♭",
        }
    }

    /// Name with ASCII accidentals, e.g. "C#" or "Db"
    pub fn ascii_name(self) -> String {
        format!("{:?}{}", self.letter(), self.accidental().ascii_symbol())
    }

    /// Parse a note name (e.g., "C", "C#", "c♯", "Db", "B♭")
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = Letter::from_char(chars.next()?)?;
        let accidental = Accidental::from_suffix(chars.as_str())?;
        Some(Note::new(letter, accidental))
    }

    /// Like [`Note::from_name`], reporting the rejected input as an error
    pub fn parse(s: &str) -> Result<Self> {
        Note::from_name(s).ok_or_else(|| Error::UnknownNote(s.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitones() {
        assert_eq!(Note::C.semitone(), 0);
        assert_eq!(Note::Cs.semitone(), 1);
        assert_eq!(Note::Db.semitone(), 1);
        assert_eq!(Note::Es.semitone(), 5);
        assert_eq!(Note::Fb.semitone(), 4);
        assert_eq!(Note::Bs.semitone(), 0);
        assert_eq!(Note::Cb.semitone(), 11);
    }

    #[test]
    fn test_enharmonic() {
        assert!(Note::Fs.is_enharmonic(Note::Gb));
        assert!(Note::Es.is_enharmonic(Note::F));
        assert!(!Note::E.is_enharmonic(Note::F));
        assert_ne!(Note::Fs, Note::Gb);
    }

    #[test]
    fn test_letter_and_accidental_round_trip() {
        for note in Note::ALL {
            assert_eq!(Note::new(note.letter(), note.accidental()), note);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Note::Cs.name(), "C♯");
        assert_eq!(Note::Bb.to_string(), "B♭");
        assert_eq!(Note::Cs.ascii_name(), "C#");
        assert_eq!(Note::Eb.ascii_name(), "Eb");
        assert_eq!(Note::G.ascii_name(), "G");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Note::from_name("C"), Some(Note::C));
        assert_eq!(Note::from_name("c#"), Some(Note::Cs));
        assert_eq!(Note::from_name("C♯"), Some(Note::Cs));
        assert_eq!(Note::from_name("Db"), Some(Note::Db));
        assert_eq!(Note::from_name("bb"), Some(Note::Bb));
        assert_eq!(Note::from_name(" Cb "), Some(Note::Cb));
        assert_eq!(Note::from_name("H"), None);
        assert_eq!(Note::from_name("C##"), None);
        assert_eq!(Note::from_name(""), None);
    }

    #[test]
    fn test_parse_error() {
        assert_eq!(Note::parse("X"), Err(Error::UnknownNote("X".to_string())));
    }

    #[test]
    fn test_chromatic_tables_cover_octave() {
        for (i, note) in Note::CHROMATIC_SHARPS.iter().enumerate() {
            assert_eq!(note.semitone() as usize, i);
        }
        for (i, note) in Note::CHROMATIC_FLATS.iter().enumerate() {
            assert_eq!(note.semitone() as usize, i);
        }
    }
}
