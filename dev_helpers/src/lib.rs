mod signal;
mod wav;

pub use signal::{harmonic_tone, silence, sine, sum_of_sines, white_noise};
pub use wav::{read_wav, write_wav};

/// Formats a cent offset like `+07 cents`.
pub fn cents_to_string(cents: f32) -> String {
    let cent_offset = cents.round() as i32;
    let cent_sign = if cent_offset >= 0 { "+" } else { "-" };
    format!("{}{:02} cents", cent_sign, cent_offset.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_to_string() {
        assert_eq!(cents_to_string(7.4), "+07 cents");
        assert_eq!(cents_to_string(-12.6), "-13 cents");
        assert_eq!(cents_to_string(0.0), "+00 cents");
    }
}
