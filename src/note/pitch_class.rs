use core::fmt;

/// One of the twelve chromatic note names, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

const PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// The pitch class of a MIDI note number. Works for negative numbers too.
    pub fn from_note_number(note_number: i32) -> Self {
        PITCH_CLASSES[note_number.rem_euclid(12) as usize]
    }

    /// Semitones above C.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromatic_order() {
        let names: Vec<&str> = (60..72).map(|n| PitchClass::from_note_number(n).name()).collect();
        assert_eq!(
            names,
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
        for (index, class) in PITCH_CLASSES.iter().enumerate() {
            assert_eq!(class.index(), index);
        }
    }

    #[test]
    fn test_negative_note_numbers() {
        assert_eq!(PitchClass::from_note_number(-1), PitchClass::B);
        assert_eq!(PitchClass::from_note_number(-12), PitchClass::C);
        assert_eq!(PitchClass::from_note_number(-3), PitchClass::A);
    }
}
