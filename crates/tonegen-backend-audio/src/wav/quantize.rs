//! Quantization of normalized samples to signed PCM integers.
//!
//! A sample `s` in [-1.0, 1.0] is shifted to [0.0, 1.0], scaled by the
//! integer range `max - min`, rounded half up, offset by `min` and clamped.
//! For 16-bit output -1.0, 0.0 and 1.0 map to -32768, 0 and 32767.

use super::format::WavFormat;

/// Relative tolerance used when deciding whether a fraction is one half.
const HALF_TOLERANCE: f64 = 1e-9;

/// Rounds to the nearest integer, sending exact halves up.
///
/// The value is split into integer and fractional parts; the integer part
/// is incremented when the fraction is 0.5 (within a relative tolerance of
/// 1e-9) or greater. Unlike `f64::round_ties_even` this never rounds a half
/// down. Negative inputs round toward zero; `quantize_sample` only passes
/// them for samples below -1.0, and clamps the result.
///
/// # Example
/// ```
/// use tonegen_backend_audio::wav::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(3.5), 4.0);
/// assert_eq!(round_half_up(2.4999), 2.0);
/// ```
pub fn round_half_up(x: f64) -> f64 {
    let whole = x.trunc();
    let fraction = x - whole;
    if is_close(fraction, 0.5) || fraction > 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= HALF_TOLERANCE * a.abs().max(b.abs())
}

/// Maps one normalized sample to a signed integer in the format's range.
pub fn quantize_sample(sample: f64, format: &WavFormat) -> i32 {
    let min = f64::from(format.min_sample());
    let max = f64::from(format.max_sample());
    let range = max - min;

    let normalized = (sample + 1.0) / 2.0;
    let scaled = round_half_up(normalized * range);
    (scaled + min).clamp(min, max) as i32
}

/// Maps a quantized integer back to a normalized sample.
pub fn dequantize_sample(value: i32, format: &WavFormat) -> f64 {
    let min = f64::from(format.min_sample());
    let range = f64::from(format.max_sample()) - min;
    (f64::from(value) - min) / range * 2.0 - 1.0
}

/// Quantizes samples to little-endian signed PCM bytes.
///
/// Each sample occupies `format.bytes_per_sample` bytes.
pub fn samples_to_pcm(samples: &[f64], format: &WavFormat) -> Vec<u8> {
    let width = usize::from(format.bytes_per_sample);
    let mut pcm = Vec::with_capacity(samples.len() * width);

    for &sample in samples {
        let value = quantize_sample(sample, format);
        match format.bytes_per_sample {
            1 => pcm.extend_from_slice(&(value as i8).to_le_bytes()),
            _ => pcm.extend_from_slice(&(value as i16).to_le_bytes()),
        }
    }

    pcm
}
