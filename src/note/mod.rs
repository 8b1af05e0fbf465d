//! Mapping of frequencies to the nearest
//! [equal tempered](https://en.wikipedia.org/wiki/Equal_temperament) note, with A4 at 440 Hz.
//!
//! # Example
//! ```
//! use microhum::note::NoteMapper;
//!
//! let mapper = NoteMapper::new(50.0);
//! assert_eq!(mapper.to_note(440.0).unwrap().to_string(), "A4");
//! assert_eq!(mapper.to_note(261.63).unwrap().to_string(), "C4");
//! assert!(mapper.to_note(30.0).is_none());
//! assert_eq!(mapper.note_name(30.0), "");
//! ```

mod mapper;
mod pitch_class;

pub use mapper::{Note, NoteMapper};
pub use pitch_class::PitchClass;
