// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Major scale derivation.
//!
//! Walks the root's chromatic scale with the whole/half step pattern of the
//! major scale, so every degree inherits the key's spelling.

use std::fmt;

use super::chromatic::ChromaticScale;
use super::interval::MAJOR_SCALE_STEPS;
use super::note::Note;
use crate::error::Result;

/// Number of degrees in a major scale (the octave is not repeated)
pub const MAJOR_SCALE_LEN: usize = 7;

/// A major scale with root and spelled degrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorScale {
    root: Note,
    notes: [Note; MAJOR_SCALE_LEN],
}

impl MajorScale {
    /// Create the major scale for a conventional root
    pub fn new(root: Note) -> Result<Self> {
        let chromatic = ChromaticScale::new(root)?;
        Ok(Self::from_chromatic(&chromatic))
    }

    /// Derive the scale from an already spelled chromatic scale
    pub fn from_chromatic(chromatic: &ChromaticScale) -> Self {
        let mut notes = [chromatic.root(); MAJOR_SCALE_LEN];
        let mut offset = 0usize;
        for (slot, step) in notes.iter_mut().skip(1).zip(MAJOR_SCALE_STEPS.iter()) {
            offset += step.semitones() as usize;
            *slot = chromatic.note_at(offset);
        }

        Self {
            root: chromatic.root(),
            notes,
        }
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the notes in this scale, root first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a note is in this scale (exact spelling)
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn degree(&self, degree: usize) -> Option<Note> {
        if degree == 0 {
            return None;
        }
        self.notes.get(degree - 1).copied()
    }

    /// Get the scale degree (1-based) of a note, if it's in the scale
    pub fn degree_of(&self, note: Note) -> Option<usize> {
        self.notes.iter().position(|&n| n == note).map(|i| i + 1)
    }
}

impl fmt::Display for MajorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} major", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_major() {
        let scale = MajorScale::new(Note::C).unwrap();
        assert_eq!(scale.notes(), &Note::NATURALS);
    }

    #[test]
    fn test_a_major() {
        let scale = MajorScale::new(Note::A).unwrap();
        assert_eq!(
            scale.notes(),
            &[Note::A, Note::B, Note::Cs, Note::D, Note::E, Note::Fs, Note::Gs]
        );
    }

    #[test]
    fn test_gb_major() {
        let scale = MajorScale::new(Note::Gb).unwrap();
        assert_eq!(
            scale.notes(),
            &[Note::Gb, Note::Ab, Note::Bb, Note::Cb, Note::Db, Note::Eb, Note::F]
        );
    }

    #[test]
    fn test_cs_major() {
        let scale = MajorScale::new(Note::Cs).unwrap();
        assert_eq!(
            scale.notes(),
            &[Note::Cs, Note::Ds, Note::Es, Note::Fs, Note::Gs, Note::As, Note::Bs]
        );
    }

    #[test]
    fn test_from_sharp_spelled_c() {
        let chromatic = ChromaticScale::new(Note::C).unwrap().with_sharps();
        let scale = MajorScale::from_chromatic(&chromatic);
        assert_eq!(scale.notes(), &Note::NATURALS);
    }

    #[test]
    fn test_degrees() {
        let scale = MajorScale::new(Note::D).unwrap();
        assert_eq!(scale.degree(1), Some(Note::D));
        assert_eq!(scale.degree(7), Some(Note::Cs));
        assert_eq!(scale.degree(0), None);
        assert_eq!(scale.degree(8), None);
        assert_eq!(scale.degree_of(Note::Fs), Some(3));
        assert_eq!(scale.degree_of(Note::Gb), None);
        assert!(scale.contains(Note::G));
    }

    #[test]
    fn test_display() {
        assert_eq!(MajorScale::new(Note::Eb).unwrap().to_string(), "E♭ major");
    }
}
