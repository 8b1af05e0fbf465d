use micromath::F32Ext;

/// The [MIDI](https://en.wikipedia.org/wiki/MIDI) note number of A4.
pub const A4_NOTE_NUMBER: i32 = 69;
/// The frequency of A4 in Hz.
pub const A4_FREQUENCY: f32 = 440.0;

/// `12 * log2(A4_FREQUENCY) - A4_NOTE_NUMBER`.
const NOTE_NUMBER_OFFSET: f32 = 36.376316562295926;

/// Converts a frequency in Hz to a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number (with a fractional part).
pub fn freq_to_midi_note(freq: f32) -> f32 {
    // The approximate log2 is only accurate for arguments of at least 1.
    12.0 * F32Ext::log2(freq) - NOTE_NUMBER_OFFSET
}

/// Converts a (possibly fractional) MIDI note number to a frequency in Hz.
pub fn midi_note_to_freq(note_number: f32) -> f32 {
    A4_FREQUENCY * F32Ext::powf(2.0, (note_number - (A4_NOTE_NUMBER as f32)) / 12.0)
}
