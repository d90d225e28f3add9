// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chromatic scale spelling.
//!
//! A chromatic scale is the canonical sharp or flat sequence from C, rotated
//! so that the root comes first. Keys with more than five accidentals swap
//! in E♯/B♯ (sharps) or C♭/F♭ (flats) so that the root's own letter is not
//! used twice by the scale degrees built on top of it.

use super::key::{KeySignature, Spelling};
use super::note::Note;
use crate::error::{Error, Result};

/// Spell the 12-note chromatic scale starting at `root`.
///
/// This is the low-level form: asking for sharps on a flat key (or flats on
/// a sharp key) is an [`Error::SpellingConflict`]. Use
/// [`ChromaticScale::with_override`] to get the silent fallback instead.
pub fn spell_chromatic(root: Note, spelling: Spelling) -> Result<[Note; 12]> {
    let signature = KeySignature::of(root)?;
    if !Spelling::is_togglable(root) && signature.spelling() != spelling {
        return Err(Error::SpellingConflict { root, spelling });
    }

    let count = signature.accidental_count();
    let mut notes = match spelling {
        Spelling::Sharps => {
            let mut notes = Note::CHROMATIC_SHARPS;
            if count > 5 {
                substitute(&mut notes, Note::F, Note::Es);
            }
            if count == 7 {
                substitute(&mut notes, Note::C, Note::Bs);
            }
            notes
        }
        Spelling::Flats => {
            let mut notes = Note::CHROMATIC_FLATS;
            if count > 5 {
                substitute(&mut notes, Note::B, Note::Cb);
            }
            if count == 7 {
                substitute(&mut notes, Note::E, Note::Fb);
            }
            notes
        }
    };

    let root_index = notes
        .iter()
        .position(|&n| n == root)
        .ok_or(Error::SpellingConflict { root, spelling })?;
    notes.rotate_left(root_index);

    tracing::trace!(%root, %spelling, "spelled chromatic scale");
    Ok(notes)
}

fn substitute(notes: &mut [Note; 12], from: Note, to: Note) {
    if let Some(slot) = notes.iter_mut().find(|n| **n == from) {
        *slot = to;
    }
}

/// An ascending chromatic scale with a fixed root and spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaticScale {
    root: Note,
    spelling: Spelling,
    notes: [Note; 12],
}

impl ChromaticScale {
    /// Chromatic scale with the root's default spelling
    pub fn new(root: Note) -> Result<Self> {
        Self::with_override(root, None)
    }

    /// Chromatic scale with a requested spelling.
    ///
    /// The request only takes effect when the root is C; for every other
    /// root it is ignored.
    pub fn with_override(root: Note, requested: Option<Spelling>) -> Result<Self> {
        let spelling = Spelling::resolve(root, requested)?;
        let notes = spell_chromatic(root, spelling)?;
        Ok(Self {
            root,
            spelling,
            notes,
        })
    }

    /// Respell with sharps. No-op unless the root is C.
    pub fn with_sharps(self) -> Self {
        self.respelled(Spelling::Sharps)
    }

    /// Respell with flats. No-op unless the root is C.
    pub fn with_flats(self) -> Self {
        self.respelled(Spelling::Flats)
    }

    fn respelled(self, spelling: Spelling) -> Self {
        if spelling == self.spelling {
            return self;
        }
        // Root was validated on construction.
        Self::with_override(self.root, Some(spelling)).unwrap_or(self)
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    pub fn sharps(&self) -> bool {
        self.spelling.is_sharps()
    }

    /// The 12 notes, root first
    pub fn notes(&self) -> &[Note; 12] {
        &self.notes
    }

    /// Note `semitones` above the root, wrapping at the octave
    pub fn note_at(&self, semitones: usize) -> Note {
        self.notes[semitones % self.notes.len()]
    }
}
