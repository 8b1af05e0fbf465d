//! Runs the pitch tracker over a WAV file and prints a reading per block.
//!
//! ```text
//! cargo run --example wav_tracker --features serde -- [path.wav] [--json]
//! ```
//!
//! Without a path, a short synthetic hummed melody with background noise is
//! generated, written to a temporary file and tracked.

use dev_helpers::{cents_to_string, harmonic_tone, read_wav, silence, white_noise, write_wav};
use microhum::tracker::{PitchTracker, Reading, TrackerConfig};

const BLOCK_SIZE: usize = 2048;

fn synthesize_melody(sample_rate: u32) -> Vec<f32> {
    let note_samples = sample_rate as usize / 2;
    let mut melody = Vec::new();
    // C4 E4 G4, a rest, then A3.
    for frequency in [261.63, 329.63, 392.0, 0.0, 220.0].iter() {
        if *frequency > 0.0 {
            melody.extend(harmonic_tone(sample_rate as f32, *frequency, &[0.4, 0.2, 0.1], note_samples));
        } else {
            melody.extend(silence(4 * note_samples));
        }
    }
    let noise = white_noise(0.01, melody.len(), 7);
    melody.iter().zip(noise.iter()).map(|(m, n)| m + n).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let print_json = args.iter().any(|arg| arg == "--json");
    let path = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(path) => std::path::PathBuf::from(path),
        None => {
            let path = std::env::temp_dir().join("microhum_melody.wav");
            write_wav(&path, 44100, &synthesize_melody(44100))?;
            println!("No input given, tracking synthetic melody {}", path.display());
            path
        }
    };

    let (sample_rate, samples) = read_wav(&path)?;
    let mut tracker = PitchTracker::new(TrackerConfig::default(), sample_rate as f32, BLOCK_SIZE)?;
    let note_mapper = *tracker.note_mapper();

    let mut block_index = 0;
    let mut previous: Option<Reading> = None;
    tracker.process_samples(&samples, |reading| {
        let time_s = (block_index * BLOCK_SIZE) as f32 / sample_rate as f32;
        block_index += 1;
        if print_json {
            println!("{}", serde_json::to_string(reading).unwrap_or_default());
            return;
        }
        // Only print changes.
        if previous.as_ref() == Some(reading) {
            return;
        }
        previous = Some(*reading);
        match reading {
            Reading::Pitch { frequency, note: Some(note) } => {
                let cents = note_mapper.cents_offset(*frequency).unwrap_or(0.0);
                println!("t = {:.2} s | {} | {:.2} Hz | {}", time_s, note, frequency, cents_to_string(cents));
            }
            other => println!("t = {:.2} s | {}", time_s, other),
        }
    });

    Ok(())
}
