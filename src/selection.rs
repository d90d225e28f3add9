// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Selection model for a scale picker.
//!
//! Exposes the engine as the row lists a front end binds against: a root
//! list sorted by name, a key-signature list, and the note names of the
//! selected major scale. Selecting a row in one list reports the matching
//! row in the other so both pickers stay in sync.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::music::{KeySignature, MajorScale, Note, CONVENTIONAL_ROOTS};

/// How accidentals are written in note names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// ♯ and ♭
    #[default]
    Unicode,
    /// # and b
    Ascii,
}

impl Notation {
    pub fn render(self, note: Note) -> String {
        match self {
            Notation::Unicode => note.name().to_string(),
            Notation::Ascii => note.ascii_name(),
        }
    }
}

/// The 15 conventional roots sorted by display name
pub fn conventional_roots() -> Vec<Note> {
    let mut roots = CONVENTIONAL_ROOTS.to_vec();
    roots.sort_by_key(|note| note.name());
    roots
}

/// Key signatures: C, then the sharp keys, then the flat keys
pub fn key_signatures() -> Vec<KeySignature> {
    KeySignature::all()
}

/// Display names of the major scale on `root`
pub fn major_scale_note_names(root: Note, notation: Notation) -> Result<Vec<String>> {
    let scale = MajorScale::new(root)?;
    Ok(scale.notes().iter().map(|&n| notation.render(n)).collect())
}

/// Linked root and key-signature pickers with the resulting scale
#[derive(Debug, Clone)]
pub struct ScaleSelector {
    notation: Notation,
    roots: Vec<Note>,
    signatures: Vec<KeySignature>,
    root: Option<Note>,
    scale_names: Vec<String>,
}

impl Default for ScaleSelector {
    fn default() -> Self {
        Self::new(Notation::default())
    }
}

impl ScaleSelector {
    /// Create a selector with no root selected
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            roots: conventional_roots(),
            signatures: key_signatures(),
            root: None,
            scale_names: Vec::new(),
        }
    }

    /// Rows of the root picker
    pub fn roots(&self) -> &[Note] {
        &self.roots
    }

    /// Rows of the key-signature picker
    pub fn signatures(&self) -> &[KeySignature] {
        &self.signatures
    }

    /// Currently selected root, if any
    pub fn root(&self) -> Option<Note> {
        self.root
    }

    /// Note names of the selected scale. Empty when no root is selected.
    pub fn scale_note_names(&self) -> &[String] {
        &self.scale_names
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Change the notation and re-render the current scale
    pub fn set_notation(&mut self, notation: Notation) -> Result<()> {
        self.notation = notation;
        match self.root {
            Some(root) => self.select_root(root),
            None => Ok(()),
        }
    }

    /// Select a root directly
    pub fn select_root(&mut self, root: Note) -> Result<()> {
        let names = major_scale_note_names(root, self.notation)?;
        tracing::debug!(%root, "selected root");
        self.root = Some(root);
        self.scale_names = names;
        Ok(())
    }

    /// Return to the unset state
    pub fn clear(&mut self) {
        self.root = None;
        self.scale_names.clear();
    }

    /// Row of `root` in the root picker
    pub fn root_row(&self, root: Note) -> Option<usize> {
        self.roots.iter().position(|&n| n == root)
    }

    /// Row of `root` in the key-signature picker
    pub fn signature_row(&self, root: Note) -> Option<usize> {
        self.signatures.iter().position(|sig| sig.root() == root)
    }

    /// Select a row in the root picker; returns the key-signature row to show
    pub fn select_root_row(&mut self, row: usize) -> Result<usize> {
        let root = *self.roots.get(row).ok_or(Error::RowOutOfRange {
            row,
            len: self.roots.len(),
        })?;
        self.select_root(root)?;
        self.signature_row(root).ok_or(Error::InvalidRoot { root })
    }

    /// Select a row in the key-signature picker; returns the root row to show
    pub fn select_signature_row(&mut self, row: usize) -> Result<usize> {
        let root = self
            .signatures
            .get(row)
            .map(|sig| sig.root())
            .ok_or(Error::RowOutOfRange {
                row,
                len: self.signatures.len(),
            })?;
        self.select_root(root)?;
        self.root_row(root).ok_or(Error::InvalidRoot { root })
    }
}
