use std::path::Path;

/// Reads a 16 bit WAV file. Returns the sample rate and the samples of the
/// first channel, scaled to `-1..1`.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(u32, Vec<f32>), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channel_count = spec.channels as usize;
    let scale = 1. / (i16::MAX as f32);
    let mut samples = Vec::new();
    for (index, sample) in reader.samples::<i16>().enumerate() {
        let sample = sample?;
        if index % channel_count == 0 {
            samples.push((sample as f32) * scale);
        }
    }
    Ok((spec.sample_rate, samples))
}

/// Writes mono samples to a 16 bit WAV file, clamping them to `-1..=1`.
pub fn write_wav<P: AsRef<Path>>(path: P, sample_rate: u32, buffer: &[f32]) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    let amplitude = i16::MAX as f32;
    for sample in buffer.iter() {
        let clamped_sample = sample.max(-1.0).min(1.0);
        writer.write_sample((clamped_sample * amplitude) as i16)?;
    }
    writer.finalize()
}
