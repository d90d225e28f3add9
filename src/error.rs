// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the spelling engine and selection model.

use thiserror::Error;

use crate::music::{Note, Spelling};

/// Errors produced by the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The note is one of the enharmonic spellings that never serves as a key root.
    #[error("{root} is not a conventional root note")]
    InvalidRoot { root: Note },

    /// A chromatic spelling was requested that contradicts the root's key signature.
    #[error("a chromatic scale rooted at {root} cannot be spelled with {spelling}")]
    SpellingConflict { root: Note, spelling: Spelling },

    /// A selection row index outside the list.
    #[error("row {row} out of range (len {len})")]
    RowOutOfRange { row: usize, len: usize },

    #[error("unknown note name '{0}'")]
    UnknownNote(String),

    #[error("unknown chord quality '{0}'")]
    UnknownChordQuality(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
