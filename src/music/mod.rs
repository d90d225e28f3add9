// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! This module provides spelled notes, intervals, key classification,
//! chromatic scale spelling, and major scale and chord derivation.

pub mod chord;
pub mod chromatic;
pub mod interval;
pub mod key;
pub mod note;
pub mod scale;

pub use chord::{Chord, ChordQuality, Seventh, Triad};
pub use chromatic::{spell_chromatic, ChromaticScale};
pub use interval::{Interval, MAJOR_SCALE_STEPS};
pub use key::{
    is_conventional_root, Accidentals, KeySignature, Spelling, CONVENTIONAL_ROOTS, FLAT_KEYS,
    SHARP_KEYS,
};
pub use note::{Accidental, Letter, Note};
pub use scale::MajorScale;
