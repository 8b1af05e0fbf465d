use alloc::string::{String, ToString};
use core::fmt;

use micromath::F32Ext;

use super::pitch_class::PitchClass;
use crate::common::{freq_to_midi_note, midi_note_to_freq};

/// A note of the equal tempered scale, identified by its
/// [MIDI note number](https://newt.phys.unsw.edu.au/jw/notes.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    midi_number: i32,
}

impl Note {
    pub fn from_midi_number(midi_number: i32) -> Self {
        Note { midi_number }
    }

    pub fn midi_number(&self) -> i32 {
        self.midi_number
    }

    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::from_note_number(self.midi_number)
    }

    /// The octave number, with middle C starting octave 4.
    pub fn octave(&self) -> i32 {
        self.midi_number.div_euclid(12) - 1
    }

    /// The nominal frequency of this note in Hz.
    pub fn frequency(&self) -> f32 {
        midi_note_to_freq(self.midi_number as f32)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

/// Maps frequencies to the nearest note.
#[derive(Debug, Clone, Copy)]
pub struct NoteMapper {
    /// Frequencies below this map to no note.
    min_frequency: f32,
}

impl NoteMapper {
    pub fn new(min_frequency: f32) -> Self {
        NoteMapper { min_frequency }
    }

    /// Returns the note nearest to `frequency`, or `None` if `frequency` is
    /// below the minimum frequency.
    pub fn to_note(&self, frequency: f32) -> Option<Note> {
        if !self.is_mappable(frequency) {
            return None;
        }
        let note_number = F32Ext::round(freq_to_midi_note(frequency)) as i32;
        Some(Note::from_midi_number(note_number))
    }

    /// Returns the name of the note nearest to `frequency`, like `"A4"`,
    /// or an empty string if there is no such note.
    pub fn note_name(&self, frequency: f32) -> String {
        match self.to_note(frequency) {
            Some(note) => note.to_string(),
            None => String::new(),
        }
    }

    /// Returns how far `frequency` is from the nearest note, in cents.
    pub fn cents_offset(&self, frequency: f32) -> Option<f32> {
        if !self.is_mappable(frequency) {
            return None;
        }
        let note_number = freq_to_midi_note(frequency);
        Some(100.0 * (note_number - F32Ext::round(note_number)))
    }

    pub fn min_frequency(&self) -> f32 {
        self.min_frequency
    }

    fn is_mappable(&self, frequency: f32) -> bool {
        frequency.is_finite() && frequency > 0.0 && frequency >= self.min_frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_notes() {
        let mapper = NoteMapper::new(50.0);
        assert_eq!(mapper.note_name(440.0), "A4");
        assert_eq!(mapper.note_name(220.0), "A3");
        assert_eq!(mapper.note_name(261.63), "C4");
        assert_eq!(mapper.note_name(277.18), "C#4");
        assert_eq!(mapper.note_name(493.88), "B4");
        assert_eq!(mapper.note_name(523.25), "C5");
        assert_eq!(mapper.note_name(55.0), "A1");
        // One C per octave.
        assert_eq!(mapper.note_name(65.41), "C2");
        assert_eq!(mapper.note_name(130.81), "C3");
        assert_eq!(mapper.note_name(1046.5), "C6");
    }

    #[test]
    fn test_every_note_below_a4() {
        let mapper = NoteMapper::new(50.0);
        for midi_number in 32..69 {
            let frequency = 440.0 * 2.0_f32.powf((midi_number - 69) as f32 / 12.0);
            let note = mapper.to_note(frequency).unwrap();
            assert_eq!(note.midi_number(), midi_number, "{} Hz", frequency);
        }
    }

    #[test]
    fn test_below_min_frequency() {
        let mapper = NoteMapper::new(50.0);
        assert_eq!(mapper.note_name(30.0), "");
        assert!(mapper.to_note(0.0).is_none());
        assert!(mapper.to_note(-440.0).is_none());
        assert!(mapper.to_note(f32::NAN).is_none());
        assert!(mapper.to_note(50.0).is_some());
    }

    #[test]
    fn test_rounds_to_nearest_note() {
        let mapper = NoteMapper::new(50.0);
        // A quarter tone below and above A4.
        assert_eq!(mapper.note_name(434.0), "A4");
        assert_eq!(mapper.note_name(446.0), "A4");
        assert_eq!(mapper.note_name(460.0), "A#4");
    }

    #[test]
    fn test_low_octaves() {
        let note = Note::from_midi_number(0);
        assert_eq!(note.to_string(), "C-1");
        let note = Note::from_midi_number(-1);
        assert_eq!(note.octave(), -2);
        assert_eq!(note.pitch_class(), PitchClass::B);
    }

    #[test]
    fn test_cents_offset() {
        let mapper = NoteMapper::new(50.0);
        assert!(mapper.cents_offset(440.0).unwrap().abs() < 0.5);
        let sharp = mapper.cents_offset(440.0 * 1.01).unwrap();
        assert!((sharp - 17.2).abs() < 0.5);
        let sharp = mapper.cents_offset(220.0 * 1.01).unwrap();
        assert!((sharp - 17.2).abs() < 0.5);
        let flat = mapper.cents_offset(110.0 / 1.01).unwrap();
        assert!((flat + 17.2).abs() < 0.5);
        assert!(mapper.cents_offset(130.81).unwrap().abs() < 0.5);
        assert!(mapper.cents_offset(20.0).is_none());
    }

    #[test]
    fn test_note_frequency() {
        let note = NoteMapper::new(50.0).to_note(445.0).unwrap();
        assert_eq!(note.midi_number(), 69);
        assert!((note.frequency() - 440.0).abs() < 2.0);
    }
}
