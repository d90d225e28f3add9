// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key classification.
//!
//! Partitions the conventional root notes into sharp keys, flat keys and C,
//! and decides which accidental a key's chromatic scale is spelled with.
//!
//! Only C may be spelled either way. Every other root is locked to the
//! accidental of its key signature, and a request for the other spelling
//! is ignored (see [`Spelling::resolve`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::Note;
use crate::error::{Error, Result};

/// Sharp keys ordered by number of sharps (1-7)
pub const SHARP_KEYS: [Note; 7] = [
    Note::G,
    Note::D,
    Note::A,
    Note::E,
    Note::B,
    Note::Fs,
    Note::Cs,
];

/// Flat keys ordered by number of flats (1-7)
pub const FLAT_KEYS: [Note; 7] = [
    Note::F,
    Note::Bb,
    Note::Eb,
    Note::Ab,
    Note::Db,
    Note::Gb,
    Note::Cb,
];

/// C, then the sharp keys, then the flat keys
pub const CONVENTIONAL_ROOTS: [Note; 15] = [
    Note::C,
    Note::G,
    Note::D,
    Note::A,
    Note::E,
    Note::B,
    Note::Fs,
    Note::Cs,
    Note::F,
    Note::Bb,
    Note::Eb,
    Note::Ab,
    Note::Db,
    Note::Gb,
    Note::Cb,
];

/// Order in which sharps are added to a key signature
pub static SHARPS_ORDER: [Note; 7] = [
    Note::Fs,
    Note::Cs,
    Note::Gs,
    Note::Ds,
    Note::As,
    Note::Es,
    Note::Bs,
];

/// Order in which flats are added to a key signature
pub static FLATS_ORDER: [Note; 7] = [
    Note::Bb,
    Note::Eb,
    Note::Ab,
    Note::Db,
    Note::Gb,
    Note::Cb,
    Note::Fb,
];

/// True for the 15 notes that can be the root of a key
pub fn is_conventional_root(note: Note) -> bool {
    CONVENTIONAL_ROOTS.contains(&note)
}

/// Which accidental a chromatic scale is spelled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    Sharps,
    Flats,
}

impl Spelling {
    /// Default spelling for a root. C defaults to flats.
    pub fn of(root: Note) -> Result<Self> {
        KeySignature::of(root).map(|sig| sig.spelling())
    }

    /// Whether a root may be spelled with either accidental. Only C qualifies.
    pub fn is_togglable(root: Note) -> bool {
        root == Note::C
    }

    /// Apply a requested spelling to a root.
    ///
    /// The request is honored for C. For any other root it is ignored and
    /// the key's own spelling is returned, so the result never contradicts
    /// the key signature.
    pub fn resolve(root: Note, requested: Option<Spelling>) -> Result<Self> {
        let default = Spelling::of(root)?;
        match requested {
            Some(spelling) if Spelling::is_togglable(root) => Ok(spelling),
            Some(spelling) => {
                if spelling != default {
                    tracing::debug!(%root, %spelling, "ignoring spelling override");
                }
                Ok(default)
            }
            None => Ok(default),
        }
    }

    pub fn is_sharps(self) -> bool {
        self == Spelling::Sharps
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spelling::Sharps => write!(f, "sharps"),
            Spelling::Flats => write!(f, "flats"),
        }
    }
}

/// Accidentals carried by a key signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidentals {
    None,
    Sharps(u8),
    Flats(u8),
}

/// Key signature of a major key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySignature {
    root: Note,
    accidentals: Accidentals,
}

impl KeySignature {
    /// Classify a root note.
    ///
    /// Fails with [`Error::InvalidRoot`] for the six spellings that are
    /// never key roots (D♯, E♯, G♯, A♯, B♯, F♭).
    pub fn of(root: Note) -> Result<Self> {
        let accidentals = if root == Note::C {
            Accidentals::None
        } else if let Some(i) = SHARP_KEYS.iter().position(|&n| n == root) {
            Accidentals::Sharps(i as u8 + 1)
        } else if let Some(i) = FLAT_KEYS.iter().position(|&n| n == root) {
            Accidentals::Flats(i as u8 + 1)
        } else {
            return Err(Error::InvalidRoot { root });
        };

        Ok(Self { root, accidentals })
    }

    /// Key signatures of all conventional roots, in [`CONVENTIONAL_ROOTS`] order
    pub fn all() -> Vec<KeySignature> {
        CONVENTIONAL_ROOTS
            .iter()
            .filter_map(|&root| KeySignature::of(root).ok())
            .collect()
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn accidentals(&self) -> Accidentals {
        self.accidentals
    }

    /// Number of sharps or flats (0-7)
    pub fn accidental_count(&self) -> u8 {
        match self.accidentals {
            Accidentals::None => 0,
            Accidentals::Sharps(n) | Accidentals::Flats(n) => n,
        }
    }

    /// True for sharp keys only
    pub fn sharps(&self) -> bool {
        matches!(self.accidentals, Accidentals::Sharps(_))
    }

    /// Default chromatic spelling for this key
    pub fn spelling(&self) -> Spelling {
        if self.sharps() {
            Spelling::Sharps
        } else {
            Spelling::Flats
        }
    }

    /// The altered notes of the signature, in the order they are written
    pub fn altered_notes(&self) -> &'static [Note] {
        match self.accidentals {
            Accidentals::None => &[],
            Accidentals::Sharps(n) => &SHARPS_ORDER[..n as usize],
            Accidentals::Flats(n) => &FLATS_ORDER[..n as usize],
        }
    }

    /// Label such as "4 Sharps", "1 Flat" or "0 Flats/Sharps"
    pub fn label(&self) -> String {
        let word = match self.accidentals {
            Accidentals::None => "Flats/Sharps",
            Accidentals::Sharps(_) => "Sharp",
            Accidentals::Flats(_) => "Flat",
        };
        let count = self.accidental_count();
        let plural = if count > 1 { "s" } else { "" };
        format!("{} {}{}", count, word, plural)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} major ({})", self.root, self.label())
    }
}
