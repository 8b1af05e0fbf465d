use core::fmt;

use crate::note::Note;

/// What the tracker currently reports.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reading {
    /// A voice is present, or was until less than the hold duration ago.
    Pitch {
        /// The smoothed frequency in Hz.
        frequency: f32,
        /// The note nearest to `frequency`, if `frequency` is in the detectable range.
        note: Option<Note>,
    },
    /// No voice for longer than the hold duration.
    Listening,
}

impl Reading {
    pub fn is_listening(&self) -> bool {
        matches!(self, Reading::Listening)
    }

    pub fn frequency(&self) -> Option<f32> {
        match self {
            Reading::Pitch { frequency, .. } => Some(*frequency),
            Reading::Listening => None,
        }
    }

    pub fn note(&self) -> Option<Note> {
        match self {
            Reading::Pitch { note, .. } => *note,
            Reading::Listening => None,
        }
    }
}

impl Default for Reading {
    fn default() -> Self {
        Reading::Listening
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Pitch {
                frequency,
                note: Some(note),
            } => write!(f, "{:.2} Hz {}", frequency, note),
            Reading::Pitch {
                frequency,
                note: None,
            } => write!(f, "{:.2} Hz", frequency),
            Reading::Listening => f.write_str("Listening..."),
        }
    }
}
