// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named intervals within one octave.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interval between two notes, measured in semitones (0-11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    DiminishedFifth,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    /// All intervals in ascending order
    pub const ALL: [Interval; 12] = [
        Interval::Unison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::DiminishedFifth,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
    ];

    /// Size in semitones
    pub fn semitones(self) -> u8 {
        self as u8
    }

    /// Interval with the given size, if it fits within an octave
    pub fn from_semitones(semitones: u8) -> Option<Self> {
        Interval::ALL.get(semitones as usize).copied()
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Interval::Unison => "Unison",
            Interval::MinorSecond => "Minor Second",
            Interval::MajorSecond => "Major Second",
            Interval::MinorThird => "Minor Third",
            Interval::MajorThird => "Major Third",
            Interval::PerfectFourth => "Perfect Fourth",
            Interval::DiminishedFifth => "Diminished Fifth",
            Interval::PerfectFifth => "Perfect Fifth",
            Interval::MinorSixth => "Minor Sixth",
            Interval::MajorSixth => "Major Sixth",
            Interval::MinorSeventh => "Minor Seventh",
            Interval::MajorSeventh => "Major Seventh",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whole/whole/half/whole/whole/whole/half
pub const MAJOR_SCALE_STEPS: [Interval; 7] = [
    Interval::MajorSecond,
    Interval::MajorSecond,
    Interval::MinorSecond,
    Interval::MajorSecond,
    Interval::MajorSecond,
    Interval::MajorSecond,
    Interval::MinorSecond,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitones() {
        assert_eq!(Interval::Unison.semitones(), 0);
        assert_eq!(Interval::MinorThird.semitones(), 3);
        assert_eq!(Interval::PerfectFifth.semitones(), 7);
        assert_eq!(Interval::MajorSeventh.semitones(), 11);
    }

    #[test]
    fn test_from_semitones() {
        assert_eq!(Interval::from_semitones(4), Some(Interval::MajorThird));
        assert_eq!(Interval::from_semitones(12), None);
        for interval in Interval::ALL {
            assert_eq!(Interval::from_semitones(interval.semitones()), Some(interval));
        }
    }

    #[test]
    fn test_major_steps_span_octave() {
        let total: u8 = MAJOR_SCALE_STEPS.iter().map(|i| i.semitones()).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_names() {
        assert_eq!(Interval::DiminishedFifth.to_string(), "Diminished Fifth");
    }
}
