// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note spelling and interval arithmetic for Western major keys.
//!
//! Given a root note, `keyspell` decides whether its key is spelled with
//! sharps or flats, lays out the chromatic scale in that spelling, and
//! derives the major scale, triads and seventh chords from it.
//!
//! ```
//! use keyspell::{major_scale, Note};
//!
//! let notes = major_scale(Note::Fs).unwrap();
//! assert_eq!(notes.last(), Some(&Note::Es));
//! ```

pub mod config;
pub mod error;
pub mod music;
pub mod selection;

pub use error::{Error, Result};
pub use music::{
    Chord, ChordQuality, ChromaticScale, Interval, KeySignature, MajorScale, Note, Seventh,
    Spelling, Triad,
};

/// Classify a root note into its key signature
pub fn classify(root: Note) -> Result<KeySignature> {
    KeySignature::of(root)
}

/// The 12-note chromatic scale on `root`. The override only applies to C.
pub fn chromatic_scale(root: Note, spelling: Option<Spelling>) -> Result<Vec<Note>> {
    Ok(ChromaticScale::with_override(root, spelling)?.notes().to_vec())
}

/// The 7 notes of the major scale on `root`
pub fn major_scale(root: Note) -> Result<Vec<Note>> {
    Ok(MajorScale::new(root)?.notes().to_vec())
}

/// The notes of a triad or seventh chord on `root`
pub fn build_chord(root: Note, quality: ChordQuality) -> Result<Vec<Note>> {
    Ok(Chord::new(root, quality)?.notes().to_vec())
}
