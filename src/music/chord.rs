// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Triads and seventh chords.
//!
//! Chord tones are read from the root's chromatic scale at cumulative
//! offsets from the root, so they share the key's spelling. The single
//! exception is the augmented triad on C (see [`ChordQuality::spelling_override`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chromatic::ChromaticScale;
use super::interval::Interval;
use super::key::Spelling;
use super::note::Note;
use crate::error::{Error, Result};

/// Three-note chord qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triad {
    Major,
    Minor,
    Diminished,
    Augmented,
}

/// Four-note chord qualities (no extensions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seventh {
    Major,
    Dominant,
    Minor,
    MinorMajor,
    HalfDiminished,
    Diminished,
}

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Triad(Triad),
    Seventh(Seventh),
}

impl ChordQuality {
    /// All chord qualities
    pub const ALL: [ChordQuality; 10] = [
        ChordQuality::Triad(Triad::Major),
        ChordQuality::Triad(Triad::Minor),
        ChordQuality::Triad(Triad::Diminished),
        ChordQuality::Triad(Triad::Augmented),
        ChordQuality::Seventh(Seventh::Major),
        ChordQuality::Seventh(Seventh::Dominant),
        ChordQuality::Seventh(Seventh::Minor),
        ChordQuality::Seventh(Seventh::MinorMajor),
        ChordQuality::Seventh(Seventh::HalfDiminished),
        ChordQuality::Seventh(Seventh::Diminished),
    ];

    /// Intervals of the chord tones above the root, measured from the root
    pub fn intervals(self) -> &'static [Interval] {
        use Interval::*;
        match self {
            ChordQuality::Triad(Triad::Major) => &[MajorThird, PerfectFifth],
            ChordQuality::Triad(Triad::Minor) => &[MinorThird, PerfectFifth],
            ChordQuality::Triad(Triad::Diminished) => &[MinorThird, DiminishedFifth],
            // Augmented fifth, enharmonic to a minor sixth
            ChordQuality::Triad(Triad::Augmented) => &[MajorThird, MinorSixth],
            ChordQuality::Seventh(Seventh::Major) => &[MajorThird, PerfectFifth, MajorSeventh],
            ChordQuality::Seventh(Seventh::Dominant) => {
                &[MajorThird, PerfectFifth, MinorSeventh]
            }
            ChordQuality::Seventh(Seventh::Minor) => &[MinorThird, PerfectFifth, MinorSeventh],
            ChordQuality::Seventh(Seventh::MinorMajor) => {
                &[MinorThird, PerfectFifth, MajorSeventh]
            }
            ChordQuality::Seventh(Seventh::HalfDiminished) => {
                &[MinorThird, DiminishedFifth, MinorSeventh]
            }
            // Diminished seventh, enharmonic to a major sixth
            ChordQuality::Seventh(Seventh::Diminished) => {
                &[MinorThird, DiminishedFifth, MajorSixth]
            }
        }
    }

    /// Semitone offsets of the chord tones above the root
    pub fn offsets(self) -> Vec<u8> {
        self.intervals().iter().map(|i| i.semitones()).collect()
    }

    /// Number of notes including the root
    pub fn note_count(self) -> usize {
        self.intervals().len() + 1
    }

    /// Spelling forced for this quality on `root`, if any.
    ///
    /// The augmented triad on C takes sharps so that its fifth is G♯ rather
    /// than A♭. Every other combination uses the root's default spelling.
    pub fn spelling_override(self, root: Note) -> Option<Spelling> {
        match (self, root) {
            (ChordQuality::Triad(Triad::Augmented), Note::C) => Some(Spelling::Sharps),
            _ => None,
        }
    }

    /// Human-readable name, e.g. "Half Diminished Seventh"
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Triad(Triad::Major) => "Major Triad",
            ChordQuality::Triad(Triad::Minor) => "Minor Triad",
            ChordQuality::Triad(Triad::Diminished) => "Diminished Triad",
            ChordQuality::Triad(Triad::Augmented) => "Augmented Triad",
            ChordQuality::Seventh(Seventh::Major) => "Major Seventh",
            ChordQuality::Seventh(Seventh::Dominant) => "Dominant Seventh",
            ChordQuality::Seventh(Seventh::Minor) => "Minor Seventh",
            ChordQuality::Seventh(Seventh::MinorMajor) => "Minor Major Seventh",
            ChordQuality::Seventh(Seventh::HalfDiminished) => "Half Diminished Seventh",
            ChordQuality::Seventh(Seventh::Diminished) => "Diminished Seventh",
        }
    }

    /// Parse a quality name (e.g., "major", "dom7", "half-diminished-7", "Minor Major Seventh")
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        let quality = match s.as_str() {
            "major" | "maj" | "majortriad" => ChordQuality::Triad(Triad::Major),
            "minor" | "min" | "minortriad" => ChordQuality::Triad(Triad::Minor),
            "diminished" | "dim" | "diminishedtriad" => ChordQuality::Triad(Triad::Diminished),
            "augmented" | "aug" | "augmentedtriad" => ChordQuality::Triad(Triad::Augmented),
            "major7" | "maj7" | "majorseventh" => ChordQuality::Seventh(Seventh::Major),
            "dominant7" | "dom7" | "7" | "dominantseventh" => {
                ChordQuality::Seventh(Seventh::Dominant)
            }
            "minor7" | "min7" | "minorseventh" => ChordQuality::Seventh(Seventh::Minor),
            "minormajor7" | "minmaj7" | "minormajorseventh" => {
                ChordQuality::Seventh(Seventh::MinorMajor)
            }
            "halfdiminished7" | "m7b5" | "halfdiminishedseventh" => {
                ChordQuality::Seventh(Seventh::HalfDiminished)
            }
            "diminished7" | "dim7" | "diminishedseventh" => {
                ChordQuality::Seventh(Seventh::Diminished)
            }
            _ => return None,
        };
        Some(quality)
    }

    /// Like [`ChordQuality::from_name`], reporting the rejected input as an error
    pub fn parse(s: &str) -> Result<Self> {
        ChordQuality::from_name(s).ok_or_else(|| Error::UnknownChordQuality(s.to_string()))
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A spelled chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: Note,
    quality: ChordQuality,
    notes: Vec<Note>,
}

impl Chord {
    /// Build a chord on a conventional root
    pub fn new(root: Note, quality: ChordQuality) -> Result<Self> {
        let spelling = quality.spelling_override(root);
        if let Some(spelling) = spelling {
            tracing::debug!(%root, %quality, %spelling, "chord spelling override");
        }
        let chromatic = ChromaticScale::with_override(root, spelling)?;

        let mut notes = Vec::with_capacity(quality.note_count());
        notes.push(root);
        notes.extend(
            quality
                .intervals()
                .iter()
                .map(|i| chromatic.notes()[i.semitones() as usize]),
        );

        Ok(Self {
            root,
            quality,
            notes,
        })
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Chord tones, root first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Full name, e.g. "C Dominant Seventh"
    pub fn name(&self) -> String {
        format!("{} {}", self.root, self.quality)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(root: Note, quality: ChordQuality) -> Vec<Note> {
        Chord::new(root, quality).unwrap().notes().to_vec()
    }

    #[test]
    fn test_offsets() {
        assert_eq!(ChordQuality::Triad(Triad::Major).offsets(), vec![4, 7]);
        assert_eq!(ChordQuality::Triad(Triad::Augmented).offsets(), vec![4, 8]);
        assert_eq!(ChordQuality::Seventh(Seventh::Dominant).offsets(), vec![4, 7, 10]);
        assert_eq!(ChordQuality::Seventh(Seventh::Diminished).offsets(), vec![3, 6, 9]);
        for quality in ChordQuality::ALL {
            assert!(quality.offsets().iter().all(|&o| o < 12));
        }
    }

    #[test]
    fn test_c_triads() {
        use ChordQuality::Triad as T;
        assert_eq!(chord(Note::C, T(Triad::Major)), vec![Note::C, Note::E, Note::G]);
        assert_eq!(chord(Note::C, T(Triad::Minor)), vec![Note::C, Note::Eb, Note::G]);
        assert_eq!(
            chord(Note::C, T(Triad::Diminished)),
            vec![Note::C, Note::Eb, Note::Gb]
        );
        assert_eq!(
            chord(Note::C, T(Triad::Augmented)),
            vec![Note::C, Note::E, Note::Gs]
        );
    }

    #[test]
    fn test_c_sevenths() {
        use ChordQuality::Seventh as S;
        assert_eq!(
            chord(Note::C, S(Seventh::Major)),
            vec![Note::C, Note::E, Note::G, Note::B]
        );
        assert_eq!(
            chord(Note::C, S(Seventh::Dominant)),
            vec![Note::C, Note::E, Note::G, Note::Bb]
        );
        assert_eq!(
            chord(Note::C, S(Seventh::Minor)),
            vec![Note::C, Note::Eb, Note::G, Note::Bb]
        );
        assert_eq!(
            chord(Note::C, S(Seventh::MinorMajor)),
            vec![Note::C, Note::Eb, Note::G, Note::B]
        );
        assert_eq!(
            chord(Note::C, S(Seventh::HalfDiminished)),
            vec![Note::C, Note::Eb, Note::Gb, Note::Bb]
        );
        assert_eq!(
            chord(Note::C, S(Seventh::Diminished)),
            vec![Note::C, Note::Eb, Note::Gb, Note::A]
        );
    }

    #[test]
    fn test_augmented_override_only_on_c() {
        let aug = ChordQuality::Triad(Triad::Augmented);
        assert_eq!(aug.spelling_override(Note::C), Some(Spelling::Sharps));
        assert_eq!(aug.spelling_override(Note::F), None);
        assert_eq!(
            ChordQuality::Triad(Triad::Major).spelling_override(Note::C),
            None
        );
        // F keeps flats: the augmented fifth is spelled D♭
        assert_eq!(chord(Note::F, aug), vec![Note::F, Note::A, Note::Db]);
    }

    #[test]
    fn test_sharp_key_chords() {
        assert_eq!(
            chord(Note::E, ChordQuality::Seventh(Seventh::Dominant)),
            vec![Note::E, Note::Gs, Note::B, Note::D]
        );
        assert_eq!(
            chord(Note::Fs, ChordQuality::Triad(Triad::Diminished)),
            vec![Note::Fs, Note::A, Note::C]
        );
    }

    #[test]
    fn test_lengths() {
        for quality in ChordQuality::ALL {
            let c = Chord::new(Note::D, quality).unwrap();
            assert_eq!(c.notes().len(), quality.note_count());
            assert_eq!(c.notes()[0], Note::D);
        }
    }

    #[test]
    fn test_invalid_root() {
        assert!(Chord::new(Note::Bs, ChordQuality::Triad(Triad::Major)).is_err());
    }

    #[test]
    fn test_parse_quality() {
        assert_eq!(
            ChordQuality::from_name("Dominant Seventh"),
            Some(ChordQuality::Seventh(Seventh::Dominant))
        );
        assert_eq!(
            ChordQuality::from_name("half-diminished-7"),
            Some(ChordQuality::Seventh(Seventh::HalfDiminished))
        );
        assert_eq!(
            ChordQuality::from_name("aug"),
            Some(ChordQuality::Triad(Triad::Augmented))
        );
        assert_eq!(ChordQuality::from_name("sus4"), None);
        for quality in ChordQuality::ALL {
            assert_eq!(ChordQuality::from_name(quality.name()), Some(quality));
        }
    }

    #[test]
    fn test_chord_name() {
        let c = Chord::new(Note::Bb, ChordQuality::Seventh(Seventh::Minor)).unwrap();
        assert_eq!(c.name(), "B♭ Minor Seventh");
    }
}
